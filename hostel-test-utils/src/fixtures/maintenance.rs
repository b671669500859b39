use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct MaintenanceFixtures<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MaintenanceFixtures<'a> {
    pub(crate) fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert a medium priority plumbing request with the given status.
    pub async fn insert_request(
        &self,
        institution_id: i32,
        room_id: i32,
        student_id: i32,
        status: &str,
    ) -> Result<entity::maintenance_request::Model, DbErr> {
        let now = Utc::now().naive_utc();

        entity::maintenance_request::ActiveModel {
            institution_id: ActiveValue::Set(institution_id),
            room_id: ActiveValue::Set(room_id),
            student_id: ActiveValue::Set(student_id),
            issue_type: ActiveValue::Set("plumbing".to_string()),
            priority: ActiveValue::Set("medium".to_string()),
            status: ActiveValue::Set(status.to_string()),
            description: ActiveValue::Set("Leaking tap in the washroom".to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            resolved_at: ActiveValue::Set((status == "resolved").then_some(now)),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
