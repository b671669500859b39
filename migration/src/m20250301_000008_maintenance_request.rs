use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20250301_000001_institution::Institution, m20250301_000005_room::Room,
    m20250301_000007_student::Student,
};

static FK_MAINTENANCE_REQUEST_INSTITUTION_ID: &str = "fk_maintenance_request_institution_id";
static FK_MAINTENANCE_REQUEST_ROOM_ID: &str = "fk_maintenance_request_room_id";
static FK_MAINTENANCE_REQUEST_STUDENT_ID: &str = "fk_maintenance_request_student_id";
static IDX_MAINTENANCE_REQUEST_INSTITUTION_ID: &str = "idx_maintenance_request_institution_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MaintenanceRequest::Table)
                    .if_not_exists()
                    .col(pk_auto(MaintenanceRequest::Id))
                    .col(integer(MaintenanceRequest::InstitutionId))
                    .col(integer(MaintenanceRequest::RoomId))
                    .col(integer(MaintenanceRequest::StudentId))
                    .col(string(MaintenanceRequest::IssueType))
                    .col(string(MaintenanceRequest::Priority))
                    .col(string(MaintenanceRequest::Status))
                    .col(text(MaintenanceRequest::Description))
                    .col(timestamp(MaintenanceRequest::CreatedAt))
                    .col(timestamp(MaintenanceRequest::UpdatedAt))
                    .col(timestamp_null(MaintenanceRequest::ResolvedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MAINTENANCE_REQUEST_INSTITUTION_ID)
                    .table(MaintenanceRequest::Table)
                    .col(MaintenanceRequest::InstitutionId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MAINTENANCE_REQUEST_INSTITUTION_ID)
                    .from_tbl(MaintenanceRequest::Table)
                    .from_col(MaintenanceRequest::InstitutionId)
                    .to_tbl(Institution::Table)
                    .to_col(Institution::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MAINTENANCE_REQUEST_ROOM_ID)
                    .from_tbl(MaintenanceRequest::Table)
                    .from_col(MaintenanceRequest::RoomId)
                    .to_tbl(Room::Table)
                    .to_col(Room::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MAINTENANCE_REQUEST_STUDENT_ID)
                    .from_tbl(MaintenanceRequest::Table)
                    .from_col(MaintenanceRequest::StudentId)
                    .to_tbl(Student::Table)
                    .to_col(Student::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MaintenanceRequest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum MaintenanceRequest {
    Table,
    Id,
    InstitutionId,
    RoomId,
    StudentId,
    IssueType,
    Priority,
    Status,
    Description,
    CreatedAt,
    UpdatedAt,
    ResolvedAt,
}
