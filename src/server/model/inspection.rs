//! Inspection domain models.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::inspection::InspectionDto,
    server::model::{room::Room, udise::UdiseCode},
};

/// A persisted school inspection.
#[derive(Debug, Clone, PartialEq)]
pub struct Inspection {
    pub id: i32,
    pub school_name: String,
    /// URL of the uploaded board document, `None` when none was submitted.
    pub board_file: Option<String>,
    pub state: String,
    pub district: String,
    pub block: String,
    pub udise_code: String,
    pub rooms: Vec<Room>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Inspection {
    /// Converts an entity model to an inspection domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Inspection)` - Converted inspection
    /// - `Err(DbErr::Json)` - Stored rooms column is not a list of room documents
    pub fn from_entity(entity: entity::school_inspection::Model) -> Result<Self, DbErr> {
        let rooms: Vec<Room> =
            serde_json::from_value(entity.rooms).map_err(|e| DbErr::Json(e.to_string()))?;

        Ok(Self {
            id: entity.id,
            school_name: entity.school_name,
            board_file: entity.board_file,
            state: entity.state,
            district: entity.district,
            block: entity.block,
            udise_code: entity.udise_code,
            rooms,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    /// Converts the inspection domain model to a DTO for API responses.
    pub fn into_dto(self) -> InspectionDto {
        InspectionDto {
            id: self.id,
            school_name: self.school_name,
            board_file: self.board_file,
            state: self.state,
            district: self.district,
            block: self.block,
            udise_code: self.udise_code,
            rooms: self.rooms.into_iter().map(Room::into_dto).collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for creating an inspection record.
///
/// Scalar fields are carried exactly as extracted from the form; missing or blank
/// values are only rejected by [`CreateInspectionParams::validate`].
#[derive(Debug, Clone)]
pub struct CreateInspectionParams {
    pub school_name: Option<String>,
    pub board_file: Option<String>,
    pub state: Option<String>,
    pub district: Option<String>,
    pub block: Option<String>,
    pub udise_code: UdiseCode,
    pub rooms: Vec<Room>,
}

/// Inspection document that passed shape validation and is ready to insert.
#[derive(Debug, Clone)]
pub struct ValidInspection {
    pub school_name: String,
    pub board_file: Option<String>,
    pub state: String,
    pub district: String,
    pub block: String,
    pub udise_code: String,
    pub rooms: Vec<Room>,
}

impl CreateInspectionParams {
    /// Checks the document against the stored record's shape.
    ///
    /// School name, state, district and block must be present and not blank. The board
    /// file may be null and the room list may be empty.
    ///
    /// # Returns
    /// - `Ok(ValidInspection)` - Document can be inserted
    /// - `Err(String)` - Comma separated list of violations, e.g.
    ///   `"schoolName is required, block is required"`
    pub fn validate(self) -> Result<ValidInspection, String> {
        let mut violations = Vec::new();

        let school_name = required(self.school_name, "schoolName", &mut violations);
        let state = required(self.state, "state", &mut violations);
        let district = required(self.district, "district", &mut violations);
        let block = required(self.block, "block", &mut violations);

        if !violations.is_empty() {
            return Err(violations.join(", "));
        }

        Ok(ValidInspection {
            school_name,
            board_file: self.board_file,
            state,
            district,
            block,
            udise_code: self.udise_code.into_inner(),
            rooms: self.rooms,
        })
    }
}

fn required(value: Option<String>, field: &str, violations: &mut Vec<String>) -> String {
    match value {
        Some(value) if !value.trim().is_empty() => value,
        _ => {
            violations.push(format!("{} is required", field));
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::model::room::Surface;

    fn params() -> CreateInspectionParams {
        CreateInspectionParams {
            school_name: Some("Government Primary School".to_string()),
            board_file: None,
            state: Some("Bihar".to_string()),
            district: Some("Patna".to_string()),
            block: Some("Phulwari".to_string()),
            udise_code: UdiseCode::parse(Some("1234567")).unwrap(),
            rooms: Vec::new(),
        }
    }

    #[test]
    fn accepts_complete_document_without_board_file_or_rooms() {
        let valid = params().validate().unwrap();

        assert_eq!(valid.school_name, "Government Primary School");
        assert_eq!(valid.udise_code, "1234567");
        assert!(valid.board_file.is_none());
        assert!(valid.rooms.is_empty());
    }

    #[test]
    fn lists_every_missing_field() {
        let mut params = params();
        params.school_name = None;
        params.block = Some("   ".to_string());

        let err = params.validate().unwrap_err();

        assert_eq!(err, "schoolName is required, block is required");
    }

    #[test]
    fn converts_rooms_to_dto_with_every_surface() {
        let mut room = Room::new();
        room.push(Surface::Roof, "https://blobs.test/roof.jpg".to_string());
        let now = Utc::now();
        let inspection = Inspection {
            id: 1,
            school_name: "School".to_string(),
            board_file: Some("https://blobs.test/board.pdf".to_string()),
            state: "Bihar".to_string(),
            district: "Patna".to_string(),
            block: "Phulwari".to_string(),
            udise_code: "1234567".to_string(),
            rooms: vec![room],
            created_at: now,
            updated_at: now,
        };

        let dto = inspection.into_dto();

        assert_eq!(dto.rooms.len(), 1);
        assert_eq!(dto.rooms[0].len(), Surface::ALL.len());
        assert_eq!(dto.rooms[0]["roof"], ["https://blobs.test/roof.jpg"]);
        assert!(dto.rooms[0]["interiorFloor"].is_empty());
    }
}
