use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SchoolInspection::Table)
                    .if_not_exists()
                    .col(pk_auto(SchoolInspection::Id))
                    .col(string(SchoolInspection::SchoolName))
                    .col(string_null(SchoolInspection::BoardFile))
                    .col(string(SchoolInspection::State))
                    .col(string(SchoolInspection::District))
                    .col(string(SchoolInspection::Block))
                    .col(string(SchoolInspection::UdiseCode))
                    .col(json(SchoolInspection::Rooms))
                    .col(
                        timestamp_with_time_zone(SchoolInspection::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(SchoolInspection::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Not unique: a school may be inspected more than once.
        manager
            .create_index(
                Index::create()
                    .name("idx_school_inspection_udise_code")
                    .table(SchoolInspection::Table)
                    .col(SchoolInspection::UdiseCode)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SchoolInspection::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SchoolInspection {
    Table,
    Id,
    SchoolName,
    BoardFile,
    State,
    District,
    Block,
    UdiseCode,
    Rooms,
    CreatedAt,
    UpdatedAt,
}
