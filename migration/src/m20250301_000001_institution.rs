use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Institution::Table)
                    .if_not_exists()
                    .col(pk_auto(Institution::Id))
                    .col(string_uniq(Institution::Code))
                    .col(string(Institution::Name))
                    .col(string(Institution::Address))
                    .col(string_null(Institution::ContactEmail))
                    .col(string_null(Institution::ContactPhone))
                    .col(string_null(Institution::Website))
                    .col(string_null(Institution::LogoUrl))
                    .col(timestamp(Institution::CreatedAt))
                    .col(timestamp(Institution::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Institution::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Institution {
    Table,
    Id,
    Code,
    Name,
    Address,
    ContactEmail,
    ContactPhone,
    Website,
    LogoUrl,
    CreatedAt,
    UpdatedAt,
}
