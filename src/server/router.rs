use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Json, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;

use crate::{
    model::{
        api::{ErrorDto, HealthDto},
        inspection::{InspectionCreatedDto, InspectionDto, InspectionFormDoc, SurfaceDto},
    },
    server::{
        controller::inspection::{self, create_inspection, health, list_surfaces},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Inspection Intake API"),
    paths(
        inspection::create_inspection,
        inspection::list_surfaces,
        inspection::health
    ),
    components(schemas(
        ErrorDto,
        HealthDto,
        InspectionDto,
        InspectionCreatedDto,
        InspectionFormDoc,
        SurfaceDto
    )),
    tags((name = "inspection", description = "School inspection submissions"))
)]
pub struct ApiDoc;

/// Builds the API router.
///
/// # Arguments
/// - `max_body_bytes` - Largest request body accepted; larger multipart bodies fail
///   with 413 while being read
pub fn router(max_body_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/api/school/inspection", post(create_inspection))
        .route("/api/school/inspection/surfaces", get(list_surfaces))
        .route("/api/health", get(health))
        .route("/api-docs/openapi.json", get(openapi))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
