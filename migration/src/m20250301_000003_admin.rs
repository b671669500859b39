use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20250301_000001_institution::Institution, m20250301_000002_app_user::AppUser};

static FK_ADMIN_USER_ID: &str = "fk_admin_user_id";
static FK_ADMIN_INSTITUTION_ID: &str = "fk_admin_institution_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Admin::Table)
                    .if_not_exists()
                    .col(pk_auto(Admin::Id))
                    .col(integer_uniq(Admin::UserId))
                    .col(integer(Admin::InstitutionId))
                    .col(string_uniq(Admin::EmployeeId))
                    .col(timestamp(Admin::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ADMIN_USER_ID)
                    .from_tbl(Admin::Table)
                    .from_col(Admin::UserId)
                    .to_tbl(AppUser::Table)
                    .to_col(AppUser::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ADMIN_INSTITUTION_ID)
                    .from_tbl(Admin::Table)
                    .from_col(Admin::InstitutionId)
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
            .drop_table(Table::drop().table(Admin::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Admin {
    Table,
    Id,
    UserId,
    InstitutionId,
    EmployeeId,
    CreatedAt,
}
