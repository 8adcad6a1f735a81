use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tracks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tracks::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Tracks::Name)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Tracks::Country)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Tracks::City)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Tracks::Latitude)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Tracks::Longitude)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Tracks::Website)
                            .text(),
                    )
                    .col(
                        ColumnDef::new(Tracks::NoiseLimit)
                            .integer(),
                    )
                    .col(
                        ColumnDef::new(Tracks::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Tracks::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Listing orders by name
        manager
            .create_index(
                Index::create()
                    .name("idx_tracks_name")
                    .table(Tracks::Table)
                    .col(Tracks::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tracks::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Tracks {
    Table,
    Id,
    Name,
    Country,
    City,
    Latitude,
    Longitude,
    Website,
    NoiseLimit,
    CreatedAt,
    UpdatedAt,
}
