use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_cookies::Cookies;

use crate::{
    model::{
        api::ErrorDto,
        visit::{ArchivedPeriodDto, VisitCountDto},
    },
    server::{
        error::AppError, middleware::marker::MarkerCookie, model::visit::VisitOutcome,
        service::visit_counter::VisitCounterService, state::AppState,
    },
};

/// Tag for grouping visit counter endpoints in OpenAPI documentation
pub static VISIT_TAG: &str = "visit";

/// Get the visit count for the current month.
///
/// Returns the stored counter verbatim. When no visit has been counted yet, returns the
/// current month with zero views without creating a record.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - Month name and view count
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/views",
    tag = VISIT_TAG,
    responses(
        (status = 200, description = "Current month visit count", body = VisitCountDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_views(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let counter = VisitCounterService::new(&state.db).current_count().await?;

    Ok((StatusCode::OK, Json(counter.into_dto())))
}

/// Record a visit.
///
/// A request without the `visitor` cookie is counted and receives a marker cookie
/// expiring at the end of the month. A request presenting the cookie is not counted.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `cookies` - Request and response cookies
///
/// # Returns
/// - `200 OK` - Body `New` with `Set-Cookie`, or `Existing` when a marker was presented
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/views",
    tag = VISIT_TAG,
    responses(
        (status = 200, description = "`New` when the visit was counted, `Existing` otherwise", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn record_visit(
    State(state): State<AppState>,
    cookies: Cookies,
) -> Result<impl IntoResponse, AppError> {
    let marker_cookie = MarkerCookie::new(&cookies);

    let outcome = VisitCounterService::new(&state.db)
        .record_visit(marker_cookie.has_marker())
        .await?;

    if let VisitOutcome::New(marker) = &outcome {
        marker_cookie.issue(marker)?;
    }

    Ok((StatusCode::OK, outcome.as_str()))
}

/// Get archived monthly totals.
///
/// # Returns
/// - `200 OK` - Completed months oldest first
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/views/history",
    tag = VISIT_TAG,
    responses(
        (status = 200, description = "Archived monthly totals", body = Vec<ArchivedPeriodDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_history(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let history = VisitCounterService::new(&state.db).history().await?;

    let dtos: Vec<ArchivedPeriodDto> = history.into_iter().map(|a| a.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
