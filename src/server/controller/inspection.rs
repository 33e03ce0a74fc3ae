use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, HealthDto},
        inspection::{InspectionCreatedDto, InspectionFormDoc, SurfaceDto},
    },
    server::{
        error::{submission::SubmissionError, AppError},
        model::{form::InspectionForm, room::Surface},
        service::inspection::InspectionService,
        state::AppState,
        util::deadline,
    },
};

/// Tag for grouping inspection endpoints in OpenAPI documentation
pub static INSPECTION_TAG: &str = "inspection";

/// Submit a school inspection.
///
/// Accepts the inspection form as multipart data, uploads the board document and every
/// room image to blob storage, then stores the inspection record. Room images are sent
/// as `rooms[<index>][<surface>]` file fields; indices are scanned from 0 and the scan
/// stops at the first index without files.
///
/// The whole submission, reading the request body included, runs under the configured
/// request time budget.
///
/// # Arguments
/// - `state` - Application state containing the database handle and blob uploader
/// - `multipart` - Multipart body, or the reason it could not be read as one
///
/// # Returns
/// - `201 Created` - Inspection stored
/// - `400 Bad Request` - Invalid UDISE code, missing required fields or malformed form
/// - `404 Not Found` - No user registered for the UDISE code
/// - `408 Request Timeout` - Submission exceeded the time budget
/// - `413 Payload Too Large` - A file or the whole body exceeded its size limit
/// - `500 Internal Server Error` - Upload or database failure
#[utoipa::path(
    post,
    path = "/api/school/inspection",
    tag = INSPECTION_TAG,
    request_body(content = InspectionFormDoc, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Inspection stored", body = InspectionCreatedDto),
        (status = 400, description = "Invalid UDISE code, validation failure or malformed form", body = ErrorDto),
        (status = 404, description = "No user registered for the UDISE code", body = ErrorDto),
        (status = 408, description = "Submission exceeded the time budget", body = ErrorDto),
        (status = 413, description = "File or request body too large", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_inspection(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, AppError> {
    let inspection = deadline::guard(state.request_timeout, async {
        let multipart = multipart.map_err(|e| SubmissionError::InvalidForm(e.body_text()))?;
        let form = InspectionForm::from_multipart(multipart).await?;

        InspectionService::new(&state.db, state.uploader.as_ref())
            .submit(&form)
            .await
    })
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(InspectionCreatedDto::new(inspection.into_dto())),
    ))
}

/// List the photographable surfaces of a room.
///
/// Returns every surface in the order rooms are scanned, with the bilingual label the
/// form shows and whether the form requires an image for it.
///
/// # Returns
/// - `200 OK` - All fifteen surfaces
#[utoipa::path(
    get,
    path = "/api/school/inspection/surfaces",
    tag = INSPECTION_TAG,
    responses(
        (status = 200, description = "Surfaces in scan order", body = Vec<SurfaceDto>)
    ),
)]
pub async fn list_surfaces() -> impl IntoResponse {
    let surfaces: Vec<SurfaceDto> = Surface::ALL.into_iter().map(Surface::into_dto).collect();

    Json(surfaces)
}

/// Liveness probe.
///
/// Does not touch the database or blob storage.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = INSPECTION_TAG,
    responses(
        (status = 200, description = "Service is up", body = HealthDto)
    ),
)]
pub async fn health() -> impl IntoResponse {
    Json(HealthDto { success: true })
}
