//! Axum Handlers for the REST API
//!
//! This module contains the logic for handling HTTP requests for the
//! interview lifecycle. It uses `utoipa` doc comments to generate
//! OpenAPI documentation.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json},
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    error::InterviewError,
    models::{ChatMessage, ErrorResponse, ReportResponse, Session},
    state::AppState,
};

/// Open a new interview session.
#[utoipa::path(
    post,
    path = "/interviews",
    responses(
        (status = 201, description = "Session created with its opening question persisted", body = Session),
        (status = 502, description = "Generation backend failure", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    params(
        ("x-user-id" = Option<String>, Header, description = "Optional ID of the interviewed user")
    )
)]
pub async fn start_interview(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, InterviewError> {
    let user_id = headers.get("x-user-id").and_then(|v| v.to_str().ok());

    let session = state.interview.start_interview(user_id).await?;

    Ok((StatusCode::CREATED, Json(session)))
}

/// Submit one user answer and receive the next AI turn.
#[utoipa::path(
    post,
    path = "/interviews/{id}/chat",
    request_body(content = String, content_type = "text/plain"),
    responses(
        (status = 200, description = "AI reply persisted and returned", body = ChatMessage),
        (status = 404, description = "Session not found", body = ErrorResponse),
        (status = 409, description = "Session already completed", body = ErrorResponse),
        (status = 502, description = "Generation backend failure", body = ErrorResponse)
    ),
    params(
        ("id" = Uuid, Path, description = "Session ID")
    )
)]
pub async fn post_message(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    body: String,
) -> Result<Json<ChatMessage>, InterviewError> {
    let message = state.interview.send_user_message(id, &body).await?;

    Ok(Json(message))
}

/// Finalize the session and return its performance report.
#[utoipa::path(
    get,
    path = "/interviews/{id}/report",
    responses(
        (status = 200, description = "Report generated and session completed", body = ReportResponse),
        (status = 404, description = "Session not found", body = ErrorResponse),
        (status = 409, description = "Session already completed", body = ErrorResponse),
        (status = 502, description = "Generation backend failure", body = ErrorResponse)
    ),
    params(
        ("id" = Uuid, Path, description = "Session ID")
    )
)]
pub async fn get_report(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ReportResponse>, InterviewError> {
    let report = state.interview.generate_report(id).await?;

    Ok(Json(report.into()))
}
