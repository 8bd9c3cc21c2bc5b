pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::screening::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/screen", post(handlers::handle_screen))
        // Trailing-slash path used by existing form clients.
        .route("/screen/", post(handlers::handle_screen))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::embedding::{EmbeddingBackend, HashingEmbedder};
    use crate::extraction::docx::tests::docx_with_paragraphs;
    use crate::extraction::pdf::tests::pdf_with_pages;
    use crate::screening::pipeline::{Screener, MISSING_INPUT_MESSAGE};

    const BOUNDARY: &str = "screener-test-boundary";

    fn test_state() -> AppState {
        AppState {
            config: Config {
                port: 0,
                rust_log: "debug".to_string(),
                embedding_backend: EmbeddingBackend::Hashing { dimension: 384 },
                max_upload_bytes: 1024 * 1024,
                extraction_timeout: Duration::from_secs(30),
                request_timeout: Duration::from_secs(60),
            },
            screener: Arc::new(Screener::new(
                Arc::new(HashingEmbedder::new(384)),
                Duration::from_secs(30),
            )),
        }
    }

    enum Part<'a> {
        Text(&'a str, &'a str),
        File(&'a str, &'a str, Vec<u8>),
    }

    fn multipart_body(parts: Vec<Part<'_>>) -> Vec<u8> {
        let mut body = Vec::new();
        for part in parts {
            body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
            match part {
                Part::Text(name, value) => {
                    body.extend_from_slice(
                        format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n")
                            .as_bytes(),
                    );
                    body.extend_from_slice(value.as_bytes());
                }
                Part::File(name, file_name, bytes) => {
                    body.extend_from_slice(
                        format!(
                            "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
                        )
                        .as_bytes(),
                    );
                    body.extend_from_slice(&bytes);
                }
            }
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    async fn post_screen(uri: &str, parts: Vec<Part<'_>>) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(multipart_body(parts)))
            .unwrap();

        let response = build_router(test_state()).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let response = build_router(test_state())
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["embedder"], "hashing");
        assert_eq!(body["embedding_dim"], 384);
    }

    #[tokio::test]
    async fn test_screen_ranks_resumes() {
        let (status, body) = post_screen(
            "/api/v1/screen",
            vec![
                Part::Text(
                    "job_description",
                    "Looking for a Python developer with experience in machine learning",
                ),
                Part::File(
                    "resumes",
                    "resumeB.docx",
                    docx_with_paragraphs(&["Java developer, no ML background"]),
                ),
                Part::File(
                    "resumes",
                    "resumeA.pdf",
                    pdf_with_pages(&["Experienced Python developer, 5 years ML experience"]),
                ),
            ],
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let records = body.as_array().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["name"], "resumeA.pdf");
        assert_eq!(records[0]["matched_skills"], json!(["experience", "python developer"]));
        assert_eq!(records[1]["name"], "resumeB.docx");
        assert_eq!(records[1]["skill_match_ratio"], 0.0);
        assert!(records[0].get("error").is_none());
        for field in ["semantic_similarity", "skill_match_ratio", "final_score"] {
            assert!(records[0][field].is_number(), "{field} missing");
        }
    }

    #[tokio::test]
    async fn test_missing_job_description_is_400() {
        let (status, body) = post_screen(
            "/api/v1/screen",
            vec![Part::File(
                "resumes",
                "a.docx",
                docx_with_paragraphs(&["Rust developer"]),
            )],
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": MISSING_INPUT_MESSAGE }));
    }

    #[tokio::test]
    async fn test_empty_job_description_is_400() {
        let (status, body) = post_screen(
            "/screen/",
            vec![
                Part::Text("job_description", ""),
                Part::File("resumes", "a.docx", docx_with_paragraphs(&["Rust"])),
            ],
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": MISSING_INPUT_MESSAGE }));
    }

    #[tokio::test]
    async fn test_missing_resumes_is_400() {
        let (status, body) = post_screen(
            "/api/v1/screen",
            vec![
                Part::Text("job_description", "Rust engineer"),
                Part::File("resumes", "", Vec::new()),
            ],
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], MISSING_INPUT_MESSAGE);
    }

    #[tokio::test]
    async fn test_unsupported_extension_still_scored() {
        let (status, body) = post_screen(
            "/api/v1/screen",
            vec![
                Part::Text("job_description", "Rust engineer with Kubernetes"),
                Part::File("resumes", "resume.txt", b"Rust engineer".to_vec()),
            ],
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let record = &body[0];
        assert_eq!(record["name"], "resume.txt");
        assert_eq!(record["matched_skills"], json!([]));
        assert_eq!(record["skill_match_ratio"], 0.0);
        assert!(record["semantic_similarity"].as_f64().unwrap().is_finite());
    }

    #[tokio::test]
    async fn test_corrupt_file_does_not_fail_request() {
        let (status, body) = post_screen(
            "/api/v1/screen",
            vec![
                Part::Text("job_description", "Rust engineer"),
                Part::File("resumes", "corrupt.docx", b"not a zip".to_vec()),
                Part::File("resumes", "ok.docx", docx_with_paragraphs(&["Rust engineer"])),
            ],
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let records = body.as_array().unwrap();
        assert_eq!(records[0]["name"], "ok.docx");
        assert_eq!(records[1]["name"], "corrupt.docx");
        assert!(records[1]["error"].is_string());
        assert_eq!(records[1]["final_score"], 0.0);
    }
}
