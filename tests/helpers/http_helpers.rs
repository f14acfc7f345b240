use adminpanel::api::AppState;
use adminpanel::infrastructure::http::router::build_router;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

pub fn test_app() -> Router {
    let state = adminpanel::bootstrap::build_app_state(&adminpanel::Config::default())
        .expect("Failed to build app state");
    build_router(state)
}

pub fn test_app_with_state(state: AppState) -> Router {
    build_router(state)
}

/// Send a request with an optional JSON body and return status plus parsed body
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, value)
}
