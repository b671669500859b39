use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250301_000004_hostel::Hostel;

static FK_ROOM_HOSTEL_ID: &str = "fk_room_hostel_id";
static IDX_ROOM_HOSTEL_ID_ROOM_NUMBER: &str = "idx_room_hostel_id_room_number";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Room::Table)
                    .if_not_exists()
                    .col(pk_auto(Room::Id))
                    .col(integer(Room::HostelId))
                    .col(string(Room::RoomNumber))
                    .col(string(Room::Block))
                    .col(integer(Room::Floor))
                    .col(integer(Room::Capacity))
                    .col(integer(Room::Occupancy).default(0))
                    .col(string(Room::RoomType))
                    .col(string(Room::Status))
                    .col(timestamp(Room::CreatedAt))
                    .col(timestamp(Room::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ROOM_HOSTEL_ID_ROOM_NUMBER)
                    .table(Room::Table)
                    .col(Room::HostelId)
                    .col(Room::RoomNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ROOM_HOSTEL_ID)
                    .from_tbl(Room::Table)
                    .from_col(Room::HostelId)
                    .to_tbl(Hostel::Table)
                    .to_col(Hostel::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Room::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Room {
    Table,
    Id,
    HostelId,
    RoomNumber,
    Block,
    Floor,
    Capacity,
    Occupancy,
    RoomType,
    Status,
    CreatedAt,
    UpdatedAt,
}
