//! Document upload endpoint handler

use axum::extract::{Multipart, State};
use bytes::Bytes;
use tracing::{error, info};

use crate::api::state::AppState;
use crate::api::types::ApiError;

/// POST /upload
///
/// Accepts a multipart form with a `file` field holding the PDF binary.
/// Replies with a plain-text confirmation; any processing failure collapses
/// into an opaque 500.
pub async fn upload_document(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<String, ApiError> {
    let mut payload: Option<Bytes> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Failed to read multipart field: {}", e)))?
    {
        if field.name() == Some("file") {
            let data = field.bytes().await.map_err(|e| {
                ApiError::bad_request(format!("Failed to read uploaded file: {}", e))
            })?;

            if !data.is_empty() {
                payload = Some(data);
            }
        }
    }

    let payload = payload.ok_or_else(|| ApiError::bad_request("No file uploaded."))?;

    info!(bytes = payload.len(), "processing uploaded document");

    let report = state.ingestion.ingest(&payload).await.map_err(|e| {
        error!(error = %e, "failed to process uploaded file");
        ApiError::internal("Error processing file.")
    })?;

    info!(chunks = report.chunks_ingested, "upload complete");

    Ok("PDF uploaded, embedded, and stored!".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use axum::routing::post;
    use tower::ServiceExt;

    use crate::api::test_support::{create_test_state, multipart_body};

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/upload", post(upload_document))
            .with_state(state)
    }

    #[tokio::test]
    async fn test_upload_success() {
        let (state, store) = create_test_state("The deductible is $500.");
        let (content_type, body) = multipart_body("file", b"%PDF-1.4 payload");

        let response = app(state)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/upload")
                    .header(header::CONTENT_TYPE, content_type)
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(store.point_count("docs").await > 0);
    }

    #[tokio::test]
    async fn test_upload_without_file_field_is_bad_request() {
        let (state, store) = create_test_state("text");
        let (content_type, body) = multipart_body("other", b"payload");

        let response = app(state)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/upload")
                    .header(header::CONTENT_TYPE, content_type)
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(store.point_count("docs").await, 0);
    }

    #[tokio::test]
    async fn test_upload_failure_is_opaque_500() {
        let (state, store) = create_test_state("text");
        store.set_should_fail(true).await;

        let (content_type, body) = multipart_body("file", b"%PDF-1.4 payload");

        let response = app(state)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/upload")
                    .header(header::CONTENT_TYPE, content_type)
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"Error processing file.");
    }
}
