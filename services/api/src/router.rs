//! Axum Router Configuration
//!
//! This module defines the complete HTTP routing for the application,
//! including the REST API and OpenAPI documentation.

use crate::{
    handlers,
    models::{ChatMessage, ErrorResponse, MessageSender, ReportResponse, Session, SessionStatus},
    state::AppState,
};

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::start_interview,
        handlers::post_message,
        handlers::get_report,
    ),
    components(
        schemas(Session, ChatMessage, ReportResponse, ErrorResponse, SessionStatus, MessageSender)
    ),
    tags(
        (name = "Intervue API", description = "AI-conducted skills interviews with scored turns and a final report")
    )
)]
pub struct ApiDoc;

/// Creates the main Axum router for the application.
pub fn create_router(app_state: Arc<AppState>) -> Router {
    // Group all routes that require AppState into their own router.
    let api_router = Router::new()
        .route("/interviews", post(handlers::start_interview))
        .route("/interviews/{id}/chat", post(handlers::post_message))
        .route("/interviews/{id}/report", get(handlers::get_report))
        .with_state(app_state);

    // Merge the stateful routes with the stateless Swagger UI routes.
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(api_router)
}
