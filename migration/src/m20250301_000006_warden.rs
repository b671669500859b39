use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20250301_000001_institution::Institution, m20250301_000002_app_user::AppUser,
    m20250301_000004_hostel::Hostel,
};

static FK_WARDEN_USER_ID: &str = "fk_warden_user_id";
static FK_WARDEN_INSTITUTION_ID: &str = "fk_warden_institution_id";
static FK_WARDEN_HOSTEL_ID: &str = "fk_warden_hostel_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Warden::Table)
                    .if_not_exists()
                    .col(pk_auto(Warden::Id))
                    .col(integer_uniq(Warden::UserId))
                    .col(integer(Warden::InstitutionId))
                    .col(string(Warden::EmployeeId))
                    .col(integer_null(Warden::HostelId))
                    .col(string(Warden::AssignedBlocks))
                    .col(timestamp(Warden::CreatedAt))
                    .col(timestamp(Warden::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_WARDEN_USER_ID)
                    .from_tbl(Warden::Table)
                    .from_col(Warden::UserId)
                    .to_tbl(AppUser::Table)
                    .to_col(AppUser::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_WARDEN_INSTITUTION_ID)
                    .from_tbl(Warden::Table)
                    .from_col(Warden::InstitutionId)
                    .to_tbl(Institution::Table)
                    .to_col(Institution::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_WARDEN_HOSTEL_ID)
                    .from_tbl(Warden::Table)
                    .from_col(Warden::HostelId)
                    .to_tbl(Hostel::Table)
                    .to_col(Hostel::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Warden::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Warden {
    Table,
    Id,
    UserId,
    InstitutionId,
    EmployeeId,
    HostelId,
    AssignedBlocks,
    CreatedAt,
    UpdatedAt,
}
