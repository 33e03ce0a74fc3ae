//! Database repository layer.
//!
//! Repositories handle database operations for each domain. They use SeaORM entity
//! models internally and return domain models, keeping the entity types out of the
//! service layer.

pub mod inspection;
pub mod user;

#[cfg(test)]
mod test;
