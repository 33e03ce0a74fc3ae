pub mod prelude;

pub mod school_inspection;
pub mod user;
