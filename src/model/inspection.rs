use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Persisted inspection as returned to clients.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InspectionDto {
    pub id: i32,
    pub school_name: String,
    /// URL of the uploaded board document, if one was submitted.
    pub board_file: Option<String>,
    pub state: String,
    pub district: String,
    pub block: String,
    pub udise_code: String,
    /// Rooms in submission order; each maps every surface name to its image URLs.
    pub rooms: Vec<BTreeMap<String, Vec<String>>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Success body: `{ "success": true, "data": { ... } }`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct InspectionCreatedDto {
    pub success: bool,
    pub data: InspectionDto,
}

impl InspectionCreatedDto {
    pub fn new(data: InspectionDto) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Documents the multipart form accepted by the submission endpoint.
///
/// Room images are submitted as repeated file fields named
/// `rooms[<index>][<surface>]`, e.g. `rooms[0][interiorFrontWall]`, with indices
/// starting at 0 and without gaps.
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct InspectionFormDoc {
    pub school_name: String,
    #[schema(value_type = String, format = Binary)]
    pub board_file: Vec<u8>,
    pub state: String,
    pub district: String,
    pub block: String,
    /// At least six digits.
    pub udise_code: String,
}

/// One photographable surface as shown on the inspection form.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SurfaceDto {
    /// Field name used in `rooms[<index>][<key>]`.
    pub key: String,
    /// Bilingual display label.
    pub label: String,
    /// Whether the form requires at least one image for this surface.
    pub required: bool,
}
