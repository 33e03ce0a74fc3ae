//! Factory methods for creating test data.
//!
//! Factories create entities with sensible defaults so tests only spell out the values
//! they actually assert on.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Registered user with a generated UDISE code
//!     let user = factory::create_user(&db).await?;
//!
//!     // Registered user with a specific UDISE code
//!     let user = factory::create_user_with_code(&db, "1234567").await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create registered user entities
//! - `helpers` - Unique value generation shared across factories

pub mod helpers;
pub mod user;

pub use user::{create_user, create_user_with_code};
