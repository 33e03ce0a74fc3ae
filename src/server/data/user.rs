//! User registry repository.
//!
//! Provides read access to registered school accounts. Accounts are created outside
//! this service; the submission pipeline only checks that a UDISE code is registered.

use crate::server::model::user::User;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

/// Repository providing lookups against the user registry.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a registered user by UDISE code.
    ///
    /// # Arguments
    /// - `udise_code` - UDISE code to look up, compared exactly
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User registered under that code
    /// - `Ok(None)` - No user registered under that code
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_udise_code(&self, udise_code: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::UdiseCode.eq(udise_code))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }
}
