//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They work with domain
//! models, coordinate repository calls with the blob store, and report failures as
//! typed errors for the controllers to map onto HTTP responses.

pub mod inspection;
pub mod upload;
