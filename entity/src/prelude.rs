pub use super::school_inspection::Entity as SchoolInspection;
pub use super::user::Entity as User;
