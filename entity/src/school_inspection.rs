use sea_orm::entity::prelude::*;

/// A submitted inspection record.
///
/// `rooms` holds the ordered room documents as a JSON array, each element mapping
/// every surface name to its list of uploaded image URLs.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "school_inspection")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub school_name: String,
    pub board_file: Option<String>,
    pub state: String,
    pub district: String,
    pub block: String,
    pub udise_code: String,
    pub rooms: Json,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
