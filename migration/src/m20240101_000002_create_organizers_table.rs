use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Organizers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Organizers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Organizers::Name)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Organizers::Email)
                            .string_len(255),
                    )
                    .col(
                        ColumnDef::new(Organizers::Website)
                            .text(),
                    )
                    .col(
                        ColumnDef::new(Organizers::LogoUrl)
                            .text(),
                    )
                    .col(
                        ColumnDef::new(Organizers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Organizers::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Organizers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Organizers {
    Table,
    Id,
    Name,
    Email,
    Website,
    LogoUrl,
    CreatedAt,
    UpdatedAt,
}
