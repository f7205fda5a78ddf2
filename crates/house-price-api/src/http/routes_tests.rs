use super::*;
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use house_price_inference::LinearPriceModel;
use house_price_protocols::{
    PredictionError, PredictionRequest, PredictionResponse, PriceModel,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use tower::ServiceExt;

/// Counts calls and always fails.
struct FailingModel {
    calls: AtomicUsize,
}

#[async_trait]
impl PriceModel for FailingModel {
    fn id(&self) -> &str {
        "failing"
    }

    async fn predict(
        &self,
        _request: &PredictionRequest,
    ) -> Result<PredictionResponse, PredictionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(PredictionError::InferenceFailed("model exploded".to_string()))
    }
}

fn create_test_router() -> Router {
    let state = Arc::new(AppState::new(Arc::new(LinearPriceModel::default())));
    create_router(state)
}

fn valid_payload() -> serde_json::Value {
    serde_json::json!({
        "sqft": 1500.0,
        "bedrooms": 3,
        "bathrooms": 2.0,
        "location": "Suburban",
        "year_built": 2000,
        "condition": "good"
    })
}

fn post_json(uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_router();
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({"status": "healthy", "model_loaded": true})
    );
}

#[tokio::test]
async fn test_health_unchanged_after_predictions() {
    let app = create_test_router();
    let _ = app
        .clone()
        .oneshot(post_json("/predict", &valid_payload()))
        .await
        .unwrap();
    let _ = app
        .clone()
        .oneshot(post_json("/predict", &serde_json::json!({"sqft": -1})))
        .await
        .unwrap();

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["model_loaded"], true);
}

#[tokio::test]
async fn test_service_info_endpoint() {
    let app = create_test_router();
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["title"], "House Price Prediction API");
    assert_eq!(json["model_id"], "linear-v1");
}

#[tokio::test]
async fn test_predict_endpoint() {
    let app = create_test_router();
    let response = app
        .oneshot(post_json("/predict", &valid_payload()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["predicted_price"].as_f64().unwrap() > 0.0);
    assert_eq!(json["confidence_interval"].as_array().unwrap().len(), 2);
    assert!(json["features_importance"].is_object());
    assert!(json["prediction_time"].is_string());
}

#[tokio::test]
async fn test_predict_every_location_and_condition() {
    let locations = ["Suburban", "Rural", "Urban", "Waterfront", "Mountain"];
    let conditions = ["poor", "fair", "good", "excellent"];
    for location in locations {
        for condition in conditions {
            let mut payload = valid_payload();
            payload["location"] = location.into();
            payload["condition"] = condition.into();
            let response = create_test_router()
                .oneshot(post_json("/predict", &payload))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{} / {}", location, condition);
        }
    }
}

#[tokio::test]
async fn test_predict_negative_sqft() {
    let model = Arc::new(FailingModel {
        calls: AtomicUsize::new(0),
    });
    let app = create_router(Arc::new(AppState::new(model.clone())));
    let mut payload = valid_payload();
    payload["sqft"] = (-500.0).into();

    let response = app.oneshot(post_json("/predict", &payload)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["kind"], "validation");
    assert_eq!(json["field"], "sqft");
    assert_eq!(model.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_predict_huge_sqft_is_validation_error() {
    let app = create_test_router();
    let mut payload = valid_payload();
    payload["sqft"] = 1e306.into();
    payload["location"] = "Waterfront".into();

    let response = app.oneshot(post_json("/predict", &payload)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["kind"], "validation");
    assert_eq!(json["field"], "sqft");
}

#[tokio::test]
async fn test_predict_largest_valid_house() {
    let app = create_test_router();
    let payload = serde_json::json!({
        "sqft": 1_000_000.0,
        "bedrooms": u32::MAX,
        "bathrooms": 100.0,
        "location": "Waterfront",
        "year_built": 2100,
        "condition": "excellent"
    });

    let response = app.oneshot(post_json("/predict", &payload)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["predicted_price"].as_f64().unwrap().is_finite());
}

#[tokio::test]
async fn test_predict_year_out_of_range() {
    let app = create_test_router();
    let mut payload = valid_payload();
    payload["year_built"] = 1066.into();

    let response = app.oneshot(post_json("/predict", &payload)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(response).await["field"], "year_built");
}

#[tokio::test]
async fn test_predict_unknown_location() {
    let app = create_test_router();
    let mut payload = valid_payload();
    payload["location"] = "Moon".into();

    let response = app.oneshot(post_json("/predict", &payload)).await.unwrap();
    assert!(response.status().is_client_error());
    assert_eq!(body_json(response).await["kind"], "invalid_body");
}

#[tokio::test]
async fn test_predict_negative_bedrooms() {
    let app = create_test_router();
    let mut payload = valid_payload();
    payload["bedrooms"] = (-2).into();

    let response = app.oneshot(post_json("/predict", &payload)).await.unwrap();
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_predict_missing_field() {
    let app = create_test_router();
    let mut payload = valid_payload();
    payload.as_object_mut().unwrap().remove("condition");

    let response = app.oneshot(post_json("/predict", &payload)).await.unwrap();
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_predict_malformed_json() {
    let app = create_test_router();
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/predict")
                .header("content-type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_predict_missing_content_type() {
    let app = create_test_router();
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/predict")
                .body(Body::from(valid_payload().to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn test_predict_model_failure() {
    let model = Arc::new(FailingModel {
        calls: AtomicUsize::new(0),
    });
    let app = create_router(Arc::new(AppState::new(model.clone())));

    let response = app
        .oneshot(post_json("/predict", &valid_payload()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["kind"], "inference");
    assert!(json["error"].as_str().unwrap().contains("model exploded"));
    assert_eq!(model.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_batch_predict_preserves_order() {
    let app = create_test_router();
    let sizes = [2500.0, 900.0, 1800.0, 4000.0];
    let batch: Vec<serde_json::Value> = sizes
        .iter()
        .map(|sqft| {
            let mut payload = valid_payload();
            payload["sqft"] = (*sqft).into();
            payload
        })
        .collect();

    let response = app
        .oneshot(post_json("/batch-predict", &serde_json::json!(batch)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let results = json.as_array().unwrap();
    assert_eq!(results.len(), sizes.len());

    let model = LinearPriceModel::default();
    for (sqft, result) in sizes.iter().zip(results) {
        let mut request: PredictionRequest = serde_json::from_value(valid_payload()).unwrap();
        request.sqft = *sqft;
        let expected = model.predict(&request).await.unwrap();
        assert_eq!(result["predicted_price"].as_f64().unwrap(), expected.predicted_price);
    }
}

#[tokio::test]
async fn test_batch_predict_empty() {
    let app = create_test_router();
    let response = app
        .oneshot(post_json("/batch-predict", &serde_json::json!([])))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!([]));
}

#[tokio::test]
async fn test_batch_predict_invalid_element() {
    let model = Arc::new(FailingModel {
        calls: AtomicUsize::new(0),
    });
    let app = create_router(Arc::new(AppState::new(model.clone())));
    let mut bad = valid_payload();
    bad["bathrooms"] = (-1.0).into();
    let batch = serde_json::json!([valid_payload(), bad, valid_payload()]);

    let response = app.oneshot(post_json("/batch-predict", &batch)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("item 1"));
    assert_eq!(json["field"], "bathrooms");
    assert_eq!(model.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_batch_predict_rejects_object() {
    let app = create_test_router();
    let response = app
        .oneshot(post_json("/batch-predict", &valid_payload()))
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_unknown_route() {
    let app = create_test_router();
    let response = app
        .oneshot(Request::builder().uri("/docs").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["kind"], "not_found");
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let app = create_test_router();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("origin", "http://dashboard.local:8501")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .contains_key("access-control-allow-origin"));
}
