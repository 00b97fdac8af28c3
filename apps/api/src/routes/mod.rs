pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assessment::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/assess", post(handlers::handle_assess))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;
    use uuid::Uuid;

    use super::*;
    use crate::assessment::analyst::ImpactAnalyst;
    use crate::errors::AppError;
    use crate::master_list::MasterList;
    use crate::state::AppState;

    const MASTER_LIST: &str = "PMTS - Packaging Material Technical Specifications AB section\n\
                               QASOP - Quality Assurance SOPs\n\
                               SC - Supplier Control\n\
                               ASL - Approved Supplier List\n";

    /// Records every prompt it sees and returns a canned report.
    #[derive(Default)]
    struct StubAnalyst {
        prompts: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl ImpactAnalyst for StubAnalyst {
        async fn analyze(&self, prompt: &str) -> Result<String, AppError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok("Department: Design\n| ... |".to_string())
        }
    }

    struct FailingAnalyst;

    #[async_trait]
    impl ImpactAnalyst for FailingAnalyst {
        async fn analyze(&self, _prompt: &str) -> Result<String, AppError> {
            Err(AppError::Llm("upstream call failed".to_string()))
        }
    }

    fn test_state(analyst: Arc<dyn ImpactAnalyst>) -> AppState {
        AppState {
            analyst,
            master_list: Arc::new(MasterList::new(MASTER_LIST.to_string())),
        }
    }

    async fn send_json(app: Router, method: &str, uri: &str, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap();
        (status, json)
    }

    #[tokio::test]
    async fn test_health_returns_fixed_payload() {
        let app = build_router(test_state(Arc::new(StubAnalyst::default())));

        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "impact-api");
    }

    #[tokio::test]
    async fn test_assess_returns_report_and_filename() {
        let app = build_router(test_state(Arc::new(StubAnalyst::default())));

        let (status, body) = send_json(
            app,
            "POST",
            "/assess",
            r#"{"department": "QA", "change_description": "New supplier for Tyvek pouches", "product": "Tyvek Pouch"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["report"], "Department: Design\n| ... |");

        let filename = body["report_filename"].as_str().unwrap();
        let inner = filename
            .strip_prefix("impact_report_")
            .and_then(|rest| rest.strip_suffix(".txt"))
            .expect("filename must be impact_report_<uuid>.txt");
        Uuid::parse_str(inner).unwrap();
    }

    #[tokio::test]
    async fn test_assess_accepts_empty_body_object() {
        // Missing keys become empty strings and the call still succeeds.
        let app = build_router(test_state(Arc::new(StubAnalyst::default())));

        let (status, body) = send_json(app, "POST", "/assess", "{}").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["report"].is_string());
        assert!(body["report_filename"].is_string());
    }

    #[tokio::test]
    async fn test_assess_interpolates_master_list_and_inputs_into_prompt() {
        let stub = Arc::new(StubAnalyst::default());
        let app = build_router(test_state(stub.clone()));

        let (status, _) = send_json(
            app,
            "POST",
            "/assess",
            r#"{"department": "QC", "change_description": "New sealing machine", "product": "Stapler"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let prompts = stub.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        let prompt = &prompts[0];
        assert!(prompt.contains(MASTER_LIST));
        assert!(prompt.contains("- **Product**: Stapler"));
        assert!(prompt.contains("- **Department Mentioned**: QC"));
        assert!(prompt.contains("New sealing machine"));
        assert!(prompt.contains("- **Product Section**: Section C"));
    }

    #[tokio::test]
    async fn test_assess_filenames_differ_across_calls() {
        let app = build_router(test_state(Arc::new(StubAnalyst::default())));

        let (_, first) = send_json(app.clone(), "POST", "/assess", "{}").await;
        let (_, second) = send_json(app, "POST", "/assess", "{}").await;

        assert_ne!(first["report_filename"], second["report_filename"]);
    }

    #[tokio::test]
    async fn test_assess_upstream_failure_maps_to_llm_error_envelope() {
        let app = build_router(test_state(Arc::new(FailingAnalyst)));

        let (status, body) = send_json(app, "POST", "/assess", "{}").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "LLM_ERROR");
        // Upstream detail is logged, never leaked to the caller.
        assert_eq!(body["error"]["message"], "An AI processing error occurred");
    }
}
