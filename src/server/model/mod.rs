//! Domain models and operation-specific parameter types.
//!
//! Models in this module sit between the HTTP DTOs in `crate::model` and the SeaORM
//! entities in the `entity` crate. Conversions happen at the boundaries: `from_entity`
//! at the repository, `into_dto` at the controller.

pub mod form;
pub mod inspection;
pub mod room;
pub mod udise;
pub mod user;
