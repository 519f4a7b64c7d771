//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::availability::BoardOutcome;

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/widget", get(widget_fragment))
        .route("/api/availability", get(availability))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Full page: title plus board.
async fn index_page(
    State(state): State<AppState>,
    Query(query): Query<BoardQuery>,
) -> Result<Html<String>, AppError> {
    let locale = state.locale_for(query.lang.as_deref());
    let outcome = state.board.render().await;

    let page = IndexTemplate {
        title: state.widget.title.clone(),
        lang: locale.code(),
        widget: WidgetTemplate::from_outcome(&outcome, locale, &state.widget.zone),
    };

    Ok(Html(page.render()?))
}

/// Embeddable board fragment, for including in another page.
async fn widget_fragment(
    State(state): State<AppState>,
    Query(query): Query<BoardQuery>,
) -> Result<Html<String>, AppError> {
    let locale = state.locale_for(query.lang.as_deref());
    let outcome = state.board.render().await;

    let widget = WidgetTemplate::from_outcome(&outcome, locale, &state.widget.zone);
    Ok(Html(widget.render()?))
}

/// Board as JSON.
///
/// A feed failure is a 502; stations missing from the feeds is still a 200.
async fn availability(
    State(state): State<AppState>,
    Query(query): Query<BoardQuery>,
) -> Response {
    let locale = state.locale_for(query.lang.as_deref());
    let outcome = state.board.render().await;

    let status = match outcome {
        BoardOutcome::Unavailable => StatusCode::BAD_GATEWAY,
        _ => StatusCode::OK,
    };

    let body = AvailabilityResponse::from_outcome(&outcome, locale.messages());
    (status, Json(body)).into_response()
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    Internal { message: String },
}

impl From<askama::Error> for AppError {
    fn from(e: askama::Error) -> Self {
        AppError::Internal {
            message: format!("Template error: {}", e),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        error!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
