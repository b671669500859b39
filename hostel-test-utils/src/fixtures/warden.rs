use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::fixtures::user::UserFixtures;

pub struct WardenFixtures<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WardenFixtures<'a> {
    pub(crate) fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert a user with role `warden` and their warden record for blocks "A" and "B".
    pub async fn insert_warden(
        &self,
        n: i32,
        institution_id: i32,
        hostel_id: Option<i32>,
    ) -> Result<(entity::app_user::Model, entity::warden::Model), DbErr> {
        let user = UserFixtures::new(self.db)
            .insert_user(n, "warden", Some(institution_id))
            .await?;
        let now = Utc::now().naive_utc();

        let warden = entity::warden::ActiveModel {
            user_id: ActiveValue::Set(user.id),
            institution_id: ActiveValue::Set(institution_id),
            employee_id: ActiveValue::Set(format!("WRD-{:04}", n)),
            hostel_id: ActiveValue::Set(hostel_id),
            assigned_blocks: ActiveValue::Set("A,B".to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok((user, warden))
    }
}
