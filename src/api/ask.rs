//! Question answering endpoint handler

use axum::Json;
use axum::extract::State;
use tracing::{error, info};

use crate::api::state::AppState;
use crate::api::types::{ApiError, AskRequest, AskResponse};
use crate::domain::DomainError;

/// POST /ask
///
/// Accepts `{"query": string}` and replies with `{"message": ...}` where the
/// message is either the fixed handoff string or the generator's structured
/// answer.
pub async fn ask_question(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>, ApiError> {
    let query = request
        .query
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| ApiError::bad_request("Query is required."))?;

    info!(query_length = query.len(), "answering question");

    let answer = state.answering.answer(query).await.map_err(|e| match e {
        DomainError::Validation { message } => ApiError::bad_request(message),
        other => {
            error!(error = %other, "failed to answer question");
            ApiError::internal("Failed to retrieve and answer.")
        }
    })?;

    Ok(Json(AskResponse {
        message: answer.into_message(),
    }))
}
