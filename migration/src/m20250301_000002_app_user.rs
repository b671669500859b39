use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250301_000001_institution::Institution;

static FK_APP_USER_INSTITUTION_ID: &str = "fk_app_user_institution_id";
static IDX_APP_USER_INSTITUTION_ID: &str = "idx_app_user_institution_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AppUser::Table)
                    .if_not_exists()
                    .col(pk_auto(AppUser::Id))
                    .col(string(AppUser::Name))
                    .col(string_uniq(AppUser::Email))
                    .col(string(AppUser::PasswordHash))
                    .col(string_null(AppUser::Phone))
                    .col(string_null(AppUser::Gender))
                    .col(string(AppUser::Role))
                    .col(integer_null(AppUser::InstitutionId))
                    .col(timestamp(AppUser::CreatedAt))
                    .col(timestamp(AppUser::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_APP_USER_INSTITUTION_ID)
                    .table(AppUser::Table)
                    .col(AppUser::InstitutionId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_APP_USER_INSTITUTION_ID)
                    .from_tbl(AppUser::Table)
                    .from_col(AppUser::InstitutionId)
                    .to_tbl(Institution::Table)
                    .to_col(Institution::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_APP_USER_INSTITUTION_ID)
                    .table(AppUser::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AppUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum AppUser {
    Table,
    Id,
    Name,
    Email,
    PasswordHash,
    Phone,
    Gender,
    Role,
    InstitutionId,
    CreatedAt,
    UpdatedAt,
}
