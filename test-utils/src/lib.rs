//! Inspection Intake Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the
//! inspection intake service. This crate offers a builder pattern for creating test
//! contexts with in-memory SQLite databases and factories for seeding registered users.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Seed data for registered users
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_submission() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_inspection_tables().build().await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     test_utils::factory::create_user_with_code(db, "1234567").await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
