pub mod health;

use axum::{extract::DefaultBodyLimit, routing::get, routing::post, Router};

use crate::cv::handlers as cv;
use crate::interview::handlers as interview;
use crate::jd::handlers as jd;
use crate::quiz::handlers as quiz;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    let api = Router::new()
        .route("/jd/generate", post(jd::handle_generate_jd))
        .route("/cv/screen", post(cv::handle_screen_cv))
        .route("/quiz/generate", post(quiz::handle_generate_quiz))
        .route("/quiz/evaluate", post(quiz::handle_evaluate_quiz))
        .route(
            "/interview/analyze-audio",
            post(interview::handle_analyze_audio),
        );

    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .nest("/api", api)
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::extraction::docx::tests::build_docx;
    use crate::llm_client::testing::ScriptedClient;

    const BOUNDARY: &str = "hrhelperboundary";

    fn app(llm: Arc<ScriptedClient>) -> Router {
        build_router(AppState {
            llm,
            config: Config {
                gemini_api_key: "test-key".to_string(),
                port: 0,
                rust_log: "info".to_string(),
                cors_allowed_origins: vec![],
                max_upload_bytes: 1024 * 1024,
            },
        })
    }

    fn json_request(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    /// `(field name, optional file name, content)`
    fn multipart_request(uri: &str, parts: &[(&str, Option<&str>, &[u8])]) -> Request<Body> {
        let mut body = Vec::new();
        for (name, file_name, content) in parts {
            body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
            match file_name {
                Some(file_name) => body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\n\
                         Content-Type: application/octet-stream\r\n\r\n"
                    )
                    .as_bytes(),
                ),
                None => body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
                ),
            }
            body.extend_from_slice(content);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_root_endpoint() {
        let response = app(Arc::new(ScriptedClient::replying("")))
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"message": "HR Helper API", "version": "1.0.0", "docs": "/docs"})
        );
    }

    #[tokio::test]
    async fn test_health_check() {
        let response = app(Arc::new(ScriptedClient::replying("")))
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"status": "healthy"}));
    }

    #[tokio::test]
    async fn test_missing_json_fields_rejected() {
        for uri in ["/api/jd/generate", "/api/quiz/generate", "/api/quiz/evaluate"] {
            let response = app(Arc::new(ScriptedClient::replying("")))
                .oneshot(json_request(uri, json!({})))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY, "{uri}");
        }
    }

    #[tokio::test]
    async fn test_generate_jd() {
        let llm = Arc::new(ScriptedClient::replying("**Staff Engineer**\n\nSummary"));
        let response = app(llm.clone())
            .oneshot(json_request(
                "/api/jd/generate",
                json!({"role": "Staff Engineer", "skills": ["Rust"], "experience_level": "senior"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"title": "Staff Engineer", "job_description": "**Staff Engineer**\n\nSummary"})
        );
        assert_eq!(llm.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_generate_quiz_default_count() {
        let llm = Arc::new(ScriptedClient::replying(
            r#"[{"question": "Q", "answer": "A", "difficulty": "easy", "topic": "T"}]"#,
        ));
        let response = app(llm.clone())
            .oneshot(json_request(
                "/api/quiz/generate",
                json!({"role": "SRE", "skill_level": "beginner"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["questions"].as_array().unwrap().len(), 1);
        assert!(llm.calls()[0].prompt.starts_with("Generate 5 technical"));
    }

    #[tokio::test]
    async fn test_evaluate_quiz() {
        let llm = Arc::new(ScriptedClient::replying(
            "```json\n{\"score\": 55, \"confidence_level\": \"low\", \"feedback\": \"Review ownership\"}\n```",
        ));
        let response = app(llm)
            .oneshot(json_request(
                "/api/quiz/evaluate",
                json!({"answers": [{"question": "What is Drop?", "answer": "A trait"}]}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"score": 55, "confidence_level": "Low", "feedback": "Review ownership"})
        );
    }

    #[tokio::test]
    async fn test_completion_failure_is_bad_gateway() {
        let response = app(Arc::new(ScriptedClient::failing("quota exceeded")))
            .oneshot(json_request(
                "/api/quiz/evaluate",
                json!({"answers": [{"question": "Q", "answer": "A"}]}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = body_json(response).await;
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("quota exceeded"));
    }

    #[tokio::test]
    async fn test_screen_cv_unsupported_extension() {
        let llm = Arc::new(ScriptedClient::replying("{}"));
        let response = app(llm.clone())
            .oneshot(multipart_request(
                "/api/cv/screen",
                &[
                    ("cv_file", Some("resume.txt"), b"Jane Doe".as_slice()),
                    ("jd_text", None, b"Rust engineer".as_slice()),
                ],
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(llm.calls().is_empty());
    }

    #[tokio::test]
    async fn test_screen_cv_without_file() {
        let llm = Arc::new(ScriptedClient::replying("{}"));
        let response = app(llm.clone())
            .oneshot(multipart_request(
                "/api/cv/screen",
                &[("jd_text", None, b"Rust engineer".as_slice())],
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(llm.calls().is_empty());
    }

    #[tokio::test]
    async fn test_analyze_audio() {
        let llm = Arc::new(ScriptedClient::replying(
            r#"{"confidence_score": 64, "confidence_level": "Medium", "tone": "Nervous", "summary": "s", "transcription": "t"}"#,
        ));
        let response = app(llm.clone())
            .oneshot(multipart_request(
                "/api/interview/analyze-audio",
                &[("file", Some("answer.webm"), b"\x1a\x45\xdf\xa3".as_slice())],
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({
                "confidence_score": 64,
                "confidence_level": "Medium",
                "tone": "Nervous",
                "summary": "s",
                "transcription": "t"
            })
        );
        assert_eq!(llm.calls()[0].media, Some((4, crate::llm_client::MediaKind::Webm)));
    }

    #[tokio::test]
    async fn test_screen_cv_docx_upload() {
        let llm = Arc::new(ScriptedClient::replying(
            r#"{"match_score": 78, "strengths": ["Rust"], "gaps": ["Kafka"], "confidence_level": "High", "confidence_analysis": "Detailed CV", "recommendation": "Interview"}"#,
        ));
        let docx = build_docx(
            "<w:body><w:p><w:r><w:t>Jane Doe, 6 years of Rust</w:t></w:r></w:p></w:body>",
        );
        let response = app(llm.clone())
            .oneshot(multipart_request(
                "/api/cv/screen",
                &[
                    ("cv_file", Some("resume.docx"), docx.as_slice()),
                    ("jd_text", None, b"Backend engineer, Rust and Kafka".as_slice()),
                ],
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({
                "match_score": 78,
                "strengths": ["Rust"],
                "gaps": ["Kafka"],
                "confidence_level": "High",
                "confidence_analysis": "Detailed CV",
                "recommendation": "Interview"
            })
        );
        let calls = llm.calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].prompt.contains("Jane Doe, 6 years of Rust"));
        assert!(calls[0].prompt.contains("Backend engineer, Rust and Kafka"));
    }

    #[tokio::test]
    async fn test_oversized_upload_is_payload_too_large() {
        let llm = Arc::new(ScriptedClient::replying(""));
        let audio = vec![0u8; 2 * 1024 * 1024];
        let response = app(llm.clone())
            .oneshot(multipart_request(
                "/api/interview/analyze-audio",
                &[("file", Some("answer.wav"), audio.as_slice())],
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert!(llm.calls().is_empty());
    }

    #[tokio::test]
    async fn test_analyze_audio_without_file() {
        let response = app(Arc::new(ScriptedClient::replying("")))
            .oneshot(multipart_request(
                "/api/interview/analyze-audio",
                &[("note", None, b"hello".as_slice())],
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_analyze_audio_unsupported_format() {
        let llm = Arc::new(ScriptedClient::replying(""));
        let response = app(llm.clone())
            .oneshot(multipart_request(
                "/api/interview/analyze-audio",
                &[("file", Some("answer.txt"), b"hello".as_slice())],
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(llm.calls().is_empty());
    }
}
