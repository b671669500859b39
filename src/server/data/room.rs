use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::room::{CreateRoomDto, RoomStatus, UpdateRoomDto};

pub struct RoomRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoomRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an empty, available room
    pub async fn create(&self, room: CreateRoomDto) -> Result<entity::room::Model, DbErr> {
        let now = Utc::now().naive_utc();

        entity::room::ActiveModel {
            hostel_id: ActiveValue::Set(room.hostel_id),
            room_number: ActiveValue::Set(room.room_number),
            block: ActiveValue::Set(room.block),
            floor: ActiveValue::Set(room.floor),
            capacity: ActiveValue::Set(room.capacity),
            occupancy: ActiveValue::Set(0),
            room_type: ActiveValue::Set(room.room_type),
            status: ActiveValue::Set(RoomStatus::Available.as_str().to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a room whose hostel belongs to the institution
    pub async fn get(
        &self,
        institution_id: i32,
        room_id: i32,
    ) -> Result<Option<entity::room::Model>, DbErr> {
        entity::prelude::Room::find_by_id(room_id)
            .inner_join(entity::prelude::Hostel)
            .filter(entity::hostel::Column::InstitutionId.eq(institution_id))
            .one(self.db)
            .await
    }

    pub async fn get_by_number(
        &self,
        hostel_id: i32,
        room_number: &str,
    ) -> Result<Option<entity::room::Model>, DbErr> {
        entity::prelude::Room::find()
            .filter(entity::room::Column::HostelId.eq(hostel_id))
            .filter(entity::room::Column::RoomNumber.eq(room_number))
            .one(self.db)
            .await
    }

    /// Rooms of the institution, optionally limited to one hostel, ordered by hostel then number
    pub async fn list(
        &self,
        institution_id: i32,
        hostel_id: Option<i32>,
    ) -> Result<Vec<entity::room::Model>, DbErr> {
        let mut query = entity::prelude::Room::find()
            .inner_join(entity::prelude::Hostel)
            .filter(entity::hostel::Column::InstitutionId.eq(institution_id));

        if let Some(hostel_id) = hostel_id {
            query = query.filter(entity::room::Column::HostelId.eq(hostel_id));
        }

        query
            .order_by_asc(entity::room::Column::HostelId)
            .order_by_asc(entity::room::Column::RoomNumber)
            .all(self.db)
            .await
    }

    /// Applies the fields that are `Some` and stores the given status
    pub async fn update(
        &self,
        room: entity::room::Model,
        changes: UpdateRoomDto,
        status: RoomStatus,
    ) -> Result<entity::room::Model, DbErr> {
        let mut room_am = room.into_active_model();
        if let Some(room_number) = changes.room_number {
            room_am.room_number = ActiveValue::Set(room_number);
        }
        if let Some(block) = changes.block {
            room_am.block = ActiveValue::Set(block);
        }
        if let Some(floor) = changes.floor {
            room_am.floor = ActiveValue::Set(floor);
        }
        if let Some(capacity) = changes.capacity {
            room_am.capacity = ActiveValue::Set(capacity);
        }
        if let Some(room_type) = changes.room_type {
            room_am.room_type = ActiveValue::Set(room_type);
        }
        room_am.status = ActiveValue::Set(status.as_str().to_string());
        room_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        room_am.update(self.db).await
    }

    pub async fn set_occupancy(
        &self,
        room: entity::room::Model,
        occupancy: i32,
        status: RoomStatus,
    ) -> Result<entity::room::Model, DbErr> {
        let mut room_am = room.into_active_model();
        room_am.occupancy = ActiveValue::Set(occupancy);
        room_am.status = ActiveValue::Set(status.as_str().to_string());
        room_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        room_am.update(self.db).await
    }

    pub async fn delete(&self, room_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Room::delete_by_id(room_id)
            .exec(self.db)
            .await
    }
}
