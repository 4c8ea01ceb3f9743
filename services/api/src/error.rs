//! Service Error Taxonomy
//!
//! Lifecycle violations, backend failures and storage failures each map
//! to a distinct HTTP status. Parsing-level absences are not errors and
//! never reach this type; they resolve to fallback literals inside an
//! otherwise-successful response.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use tracing::error;
use uuid::Uuid;

use intervue_core::llm_client::GenerationError;

use crate::models::ErrorResponse;

#[derive(Debug, thiserror::Error)]
pub enum InterviewError {
    #[error("session '{0}' not found")]
    NotFound(Uuid),
    #[error("session '{0}' is already completed")]
    InvalidState(Uuid),
    #[error("generation failed: {0}")]
    Generation(#[from] GenerationError),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl IntoResponse for InterviewError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            InterviewError::NotFound(id) => (
                StatusCode::NOT_FOUND,
                format!("Session with id '{}' not found", id),
            ),
            InterviewError::InvalidState(id) => (
                StatusCode::CONFLICT,
                format!("Session '{}' is already completed", id),
            ),
            InterviewError::Generation(err) => {
                error!("Generation backend failure: {:?}", err);
                (
                    StatusCode::BAD_GATEWAY,
                    "The generation backend failed to produce a reply.".to_string(),
                )
            }
            InterviewError::Storage(err) => {
                error!("Internal Server Error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred.".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { message })).into_response()
    }
}
