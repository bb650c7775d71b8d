//! # HTTP Routes
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Method  Path                      Success               Failure        │
//! │  ──────  ────────────────────────  ────────────────────  ────────────   │
//! │  POST    /receipts/process         200 {"id": "..."}     400            │
//! │  GET     /receipts/{id}/points     200 {"points": N}     404            │
//! │  GET     /health                   200 OK                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Any JSON extraction failure (bad syntax, missing field, wrong type, wrong
//! content type, oversized body) is reported as 400 "The receipt is invalid."

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, DefaultBodyLimit, Path, State},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use receipt_core::{Receipt, ReceiptService};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::ApiError;

// =============================================================================
// Wire Types
// =============================================================================

/// Body of a successful `POST /receipts/process`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub id: String,
}

/// Body of a successful `GET /receipts/{id}/points`.
#[derive(Debug, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: u64,
}

// =============================================================================
// Router
// =============================================================================

/// Builds the application router over a shared receipt service.
pub fn router(service: Arc<ReceiptService>, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/receipts/process", post(process_receipt))
        .route("/receipts/{id}/points", get(get_points))
        .route("/health", get(health_handler))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(service)
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint.
async fn health_handler() -> impl IntoResponse {
    "OK"
}

/// POST /receipts/process - Store a receipt and return its id
async fn process_receipt(
    State(service): State<Arc<ReceiptService>>,
    payload: Result<Json<Receipt>, JsonRejection>,
) -> Result<Json<ProcessResponse>, ApiError> {
    let Json(receipt) = payload.map_err(|rejection| {
        warn!(reason = %rejection.body_text(), "Rejected receipt payload");
        ApiError::InvalidReceipt(rejection.body_text())
    })?;

    let id = service.submit(receipt).map_err(|e| {
        warn!(error = %e, "Receipt failed validation");
        ApiError::from(e)
    })?;

    info!(id = %id, "Receipt processed");
    Ok(Json(ProcessResponse { id: id.into() }))
}

/// GET /receipts/{id}/points - Score a previously processed receipt
async fn get_points(
    State(service): State<Arc<ReceiptService>>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, ApiError> {
    let points = service.redeem(&id)?;
    info!(id = %id, points, "Points awarded");
    Ok(Json(PointsResponse { points }))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use axum::response::Response;
    use receipt_core::ParsePolicy;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::DEFAULT_MAX_BODY_BYTES;

    fn app(policy: ParsePolicy) -> Router {
        router(Arc::new(ReceiptService::new(policy)), DEFAULT_MAX_BODY_BYTES)
    }

    fn target_json() -> Value {
        json!({
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "items": [
                {"shortDescription": "Mountain Dew 12PK", "price": "6.49"},
                {"shortDescription": "Emils Cheese Pizza", "price": "12.25"},
                {"shortDescription": "Knorr Creamy Chicken", "price": "1.26"},
                {"shortDescription": "Doritos Nacho Cheese", "price": "3.35"},
                {"shortDescription": "   Klarbrunn 12-PK 12 FL OZ  ", "price": "12.00"}
            ],
            "total": "35.35"
        })
    }

    fn corner_market_json() -> Value {
        json!({
            "retailer": "M&M Corner Market",
            "purchaseDate": "2022-03-20",
            "purchaseTime": "14:33",
            "items": [
                {"shortDescription": "Gatorade", "price": "2.25"},
                {"shortDescription": "Gatorade", "price": "2.25"},
                {"shortDescription": "Gatorade", "price": "2.25"},
                {"shortDescription": "Gatorade", "price": "2.25"}
            ],
            "total": "9.00"
        })
    }

    fn post_raw(body: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/receipts/process")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn submit(app: &Router, receipt: &Value) -> String {
        let response = app
            .clone()
            .oneshot(post_raw(&receipt.to_string()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        json_body(response).await["id"].as_str().unwrap().to_string()
    }

    async fn points(app: &Router, id: &str) -> Response {
        app.clone()
            .oneshot(get(&format!("/receipts/{}/points", id)))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_process_then_points() {
        let app = app(ParsePolicy::Lenient);

        let target = submit(&app, &target_json()).await;
        let corner = submit(&app, &corner_market_json()).await;
        assert_ne!(target, corner);

        let response = points(&app, &target).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!({"points": 28}));

        let response = points(&app, &corner).await;
        assert_eq!(json_body(response).await, json!({"points": 109}));
    }

    #[tokio::test]
    async fn test_points_are_stable_across_redemptions() {
        let app = app(ParsePolicy::Lenient);
        let id = submit(&app, &corner_market_json()).await;

        let first = json_body(points(&app, &id).await).await;
        let second = json_body(points(&app, &id).await).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_unknown_id_is_404() {
        let app = app(ParsePolicy::Lenient);
        submit(&app, &target_json()).await;

        let response = points(&app, "7fb1377b-b223-49d9-a31a-5a02701dd310").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            json_body(response).await,
            json!({"error": "No receipt found for that ID."})
        );
    }

    #[tokio::test]
    async fn test_malformed_json_is_400() {
        let app = app(ParsePolicy::Lenient);

        let response = app.clone().oneshot(post_raw("{not json")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await["error"],
            "The receipt is invalid."
        );
    }

    #[tokio::test]
    async fn test_missing_field_is_400() {
        let app = app(ParsePolicy::Lenient);
        let mut receipt = target_json();
        receipt.as_object_mut().unwrap().remove("total");

        let response = app
            .clone()
            .oneshot(post_raw(&receipt.to_string()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_content_type_is_400() {
        let app = app(ParsePolicy::Lenient);
        let request = Request::builder()
            .method(Method::POST)
            .uri("/receipts/process")
            .body(Body::from(target_json().to_string()))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_wrong_method_is_405() {
        let app = app(ParsePolicy::Lenient);

        let response = app.clone().oneshot(get("/receipts/process")).await.unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_lenient_policy_accepts_malformed_total() {
        let app = app(ParsePolicy::Lenient);
        let mut receipt = corner_market_json();
        receipt["total"] = json!("nine");

        let id = submit(&app, &receipt).await;
        // 109 with the total reading as 0: round-dollar and quarter still apply
        assert_eq!(json_body(points(&app, &id).await).await["points"], 109);
    }

    #[tokio::test]
    async fn test_strict_policy_rejects_malformed_total() {
        let app = app(ParsePolicy::Strict);
        let mut receipt = corner_market_json();
        receipt["total"] = json!("nine");

        let response = app
            .clone()
            .oneshot(post_raw(&receipt.to_string()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"], "The receipt is invalid.");
        assert!(body["detail"].as_str().unwrap().starts_with("total"));
    }

    #[tokio::test]
    async fn test_body_limit_is_400() {
        let app = router(Arc::new(ReceiptService::default()), 16);

        let response = app
            .oneshot(post_raw(&target_json().to_string()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_health() {
        let app = app(ParsePolicy::Lenient);
        let response = app.oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"OK");
    }
}
