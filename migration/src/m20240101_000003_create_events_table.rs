use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_tracks_table::Tracks;
use super::m20240101_000002_create_organizers_table::Organizers;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Events::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Events::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Events::TrackId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Events::OrganizerId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Events::Title)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Events::Description)
                            .string_len(1000),
                    )
                    .col(
                        ColumnDef::new(Events::StartDate)
                            .date()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Events::EndDate)
                            .date()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Events::Website)
                            .text(),
                    )
                    .col(
                        ColumnDef::new(Events::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Events::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_events_track_id")
                            .from(Events::Table, Events::TrackId)
                            .to(Tracks::Table, Tracks::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_events_organizer_id")
                            .from(Events::Table, Events::OrganizerId)
                            .to(Organizers::Table, Organizers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_events_track_id")
                    .table(Events::Table)
                    .col(Events::TrackId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_events_organizer_id")
                    .table(Events::Table)
                    .col(Events::OrganizerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Events::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Events {
    Table,
    Id,
    TrackId,
    OrganizerId,
    Title,
    Description,
    StartDate,
    EndDate,
    Website,
    CreatedAt,
    UpdatedAt,
}
