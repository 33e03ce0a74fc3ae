//! User factory for creating registered school accounts.
//!
//! Registered users make up the authorization registry consulted by the submission
//! pipeline. The factory supports customization through a builder pattern.

use crate::factory::helpers::next_udise_code;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db).udise_code("1234567").build().await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    udise_code: String,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with a unique generated UDISE code.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `UserFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            udise_code: next_udise_code(),
        }
    }

    /// Sets the UDISE code for the user.
    ///
    /// # Arguments
    /// - `udise_code` - UDISE code as string
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn udise_code(mut self, udise_code: impl Into<String>) -> Self {
        self.udise_code = udise_code.into();
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            udise_code: ActiveValue::Set(self.udise_code),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a user registered under a specific UDISE code.
///
/// Shorthand for `UserFactory::new(db).udise_code(udise_code).build().await`.
///
/// # Example
///
/// ```rust,ignore
/// let user = create_user_with_code(&db, "1234567").await?;
/// ```
pub async fn create_user_with_code(
    db: &DatabaseConnection,
    udise_code: impl Into<String>,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).udise_code(udise_code).build().await
}
