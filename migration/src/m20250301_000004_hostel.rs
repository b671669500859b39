use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250301_000001_institution::Institution;

static FK_HOSTEL_INSTITUTION_ID: &str = "fk_hostel_institution_id";
static IDX_HOSTEL_INSTITUTION_ID: &str = "idx_hostel_institution_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Hostel::Table)
                    .if_not_exists()
                    .col(pk_auto(Hostel::Id))
                    .col(integer(Hostel::InstitutionId))
                    .col(string(Hostel::Name))
                    .col(string(Hostel::Address))
                    .col(integer(Hostel::TotalBlocks))
                    .col(integer(Hostel::TotalRooms))
                    .col(timestamp(Hostel::CreatedAt))
                    .col(timestamp(Hostel::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_HOSTEL_INSTITUTION_ID)
                    .table(Hostel::Table)
                    .col(Hostel::InstitutionId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_HOSTEL_INSTITUTION_ID)
                    .from_tbl(Hostel::Table)
                    .from_col(Hostel::InstitutionId)
                    .to_tbl(Institution::Table)
                    .to_col(Institution::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Hostel::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Hostel {
    Table,
    Id,
    InstitutionId,
    Name,
    Address,
    TotalBlocks,
    TotalRooms,
    CreatedAt,
    UpdatedAt,
}
