use axum::{routing::get, Router};
use tower_cookies::CookieManagerLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{index::welcome, visit},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Visitor Counter API",
        description = "Monthly unique visit counting with archived monthly totals"
    ),
    tags((name = "visit", description = "Visit counting and history"))
)]
pub struct ApiDoc;

/// Builds the application router.
///
/// Documented endpoints are collected into the OpenAPI document served by Swagger UI at
/// `/api/docs`. The cookie layer wraps every route so handlers can read and set the
/// visit marker.
pub fn router() -> Router<AppState> {
    let (api_router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(visit::get_views, visit::record_visit))
        .routes(routes!(visit::get_history))
        .split_for_parts();

    api_router
        .route("/", get(welcome))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(CookieManagerLayer::new())
}
