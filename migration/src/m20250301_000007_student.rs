use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20250301_000001_institution::Institution, m20250301_000002_app_user::AppUser,
    m20250301_000004_hostel::Hostel, m20250301_000005_room::Room,
};

static FK_STUDENT_USER_ID: &str = "fk_student_user_id";
static FK_STUDENT_INSTITUTION_ID: &str = "fk_student_institution_id";
static FK_STUDENT_HOSTEL_ID: &str = "fk_student_hostel_id";
static FK_STUDENT_ROOM_ID: &str = "fk_student_room_id";
static IDX_STUDENT_INSTITUTION_ID: &str = "idx_student_institution_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(pk_auto(Student::Id))
                    .col(integer_uniq(Student::UserId))
                    .col(integer(Student::InstitutionId))
                    .col(string(Student::StudentId))
                    .col(string(Student::Department))
                    .col(integer(Student::YearOfStudy))
                    .col(integer_null(Student::HostelId))
                    .col(integer_null(Student::RoomId))
                    .col(timestamp(Student::CreatedAt))
                    .col(timestamp(Student::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_STUDENT_INSTITUTION_ID)
                    .table(Student::Table)
                    .col(Student::InstitutionId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_STUDENT_USER_ID)
                    .from_tbl(Student::Table)
                    .from_col(Student::UserId)
                    .to_tbl(AppUser::Table)
                    .to_col(AppUser::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_STUDENT_INSTITUTION_ID)
                    .from_tbl(Student::Table)
                    .from_col(Student::InstitutionId)
                    .to_tbl(Institution::Table)
                    .to_col(Institution::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_STUDENT_HOSTEL_ID)
                    .from_tbl(Student::Table)
                    .from_col(Student::HostelId)
                    .to_tbl(Hostel::Table)
                    .to_col(Hostel::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_STUDENT_ROOM_ID)
                    .from_tbl(Student::Table)
                    .from_col(Student::RoomId)
                    .to_tbl(Room::Table)
                    .to_col(Room::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Student::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Student {
    Table,
    Id,
    UserId,
    InstitutionId,
    StudentId,
    Department,
    YearOfStudy,
    HostelId,
    RoomId,
    CreatedAt,
    UpdatedAt,
}
