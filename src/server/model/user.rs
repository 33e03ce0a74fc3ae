//! Registered user domain model.

use chrono::{DateTime, Utc};

/// School account registered in the user registry.
///
/// A submission is only accepted when its UDISE code matches a registered user.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub udise_code: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            udise_code: entity.udise_code,
            created_at: entity.created_at,
        }
    }
}
