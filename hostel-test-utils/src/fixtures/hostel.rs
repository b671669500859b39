use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, IntoActiveModel};

pub struct HostelFixtures<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HostelFixtures<'a> {
    pub(crate) fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn insert_hostel(
        &self,
        institution_id: i32,
        name: &str,
    ) -> Result<entity::hostel::Model, DbErr> {
        let now = Utc::now().naive_utc();

        entity::hostel::ActiveModel {
            institution_id: ActiveValue::Set(institution_id),
            name: ActiveValue::Set(name.to_string()),
            address: ActiveValue::Set("Campus North".to_string()),
            total_blocks: ActiveValue::Set(2),
            total_rooms: ActiveValue::Set(20),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Insert an empty, available room in block "A" on the first floor.
    pub async fn insert_room(
        &self,
        hostel_id: i32,
        room_number: &str,
        capacity: i32,
    ) -> Result<entity::room::Model, DbErr> {
        let now = Utc::now().naive_utc();

        entity::room::ActiveModel {
            hostel_id: ActiveValue::Set(hostel_id),
            room_number: ActiveValue::Set(room_number.to_string()),
            block: ActiveValue::Set("A".to_string()),
            floor: ActiveValue::Set(1),
            capacity: ActiveValue::Set(capacity),
            occupancy: ActiveValue::Set(0),
            room_type: ActiveValue::Set("double".to_string()),
            status: ActiveValue::Set("available".to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Overwrite the room's status, e.g. to put it under `maintenance`.
    pub async fn set_room_status(
        &self,
        room: entity::room::Model,
        status: &str,
    ) -> Result<entity::room::Model, DbErr> {
        let mut room_am = room.into_active_model();
        room_am.status = ActiveValue::Set(status.to_string());

        room_am.update(self.db).await
    }
}
