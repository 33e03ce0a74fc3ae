//! Inspection record repository.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::server::model::inspection::{Inspection, ValidInspection};

/// Repository persisting inspection records.
pub struct InspectionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InspectionRepository<'a> {
    /// Creates a new InspectionRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a validated inspection document.
    ///
    /// Rooms are stored as a single JSON array. The id and both timestamps are assigned
    /// here and returned with the record.
    ///
    /// # Arguments
    /// - `inspection` - Document that passed shape validation
    ///
    /// # Returns
    /// - `Ok(Inspection)` - The stored record as read back from the insert
    /// - `Err(DbErr)` - Serialization or database error during insert
    pub async fn create(&self, inspection: ValidInspection) -> Result<Inspection, DbErr> {
        let rooms =
            serde_json::to_value(&inspection.rooms).map_err(|e| DbErr::Json(e.to_string()))?;
        let now = Utc::now();

        let entity = entity::school_inspection::ActiveModel {
            school_name: ActiveValue::Set(inspection.school_name),
            board_file: ActiveValue::Set(inspection.board_file),
            state: ActiveValue::Set(inspection.state),
            district: ActiveValue::Set(inspection.district),
            block: ActiveValue::Set(inspection.block),
            udise_code: ActiveValue::Set(inspection.udise_code),
            rooms: ActiveValue::Set(rooms),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Inspection::from_entity(entity)
    }
}
