use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Placeholder stored for fixture users; it is not a valid argon2 hash.
pub const FIXTURE_PASSWORD_HASH: &str = "fixture-password-hash";

pub struct UserFixtures<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserFixtures<'a> {
    pub(crate) fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert a user with email `user{n}@example.com` and the given role.
    pub async fn insert_user(
        &self,
        n: i32,
        role: &str,
        institution_id: Option<i32>,
    ) -> Result<entity::app_user::Model, DbErr> {
        let now = Utc::now().naive_utc();

        entity::app_user::ActiveModel {
            name: ActiveValue::Set(format!("Test User {}", n)),
            email: ActiveValue::Set(format!("user{}@example.com", n)),
            password_hash: ActiveValue::Set(FIXTURE_PASSWORD_HASH.to_string()),
            phone: ActiveValue::Set(Some(format!("555-{:04}", n))),
            gender: ActiveValue::Set(Some("female".to_string())),
            role: ActiveValue::Set(role.to_string()),
            institution_id: ActiveValue::Set(institution_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Insert a user with role `admin` for the institution along with their admin record.
    pub async fn insert_admin(
        &self,
        n: i32,
        institution_id: i32,
    ) -> Result<(entity::app_user::Model, entity::admin::Model), DbErr> {
        let user = self.insert_user(n, "admin", Some(institution_id)).await?;

        let admin = entity::admin::ActiveModel {
            user_id: ActiveValue::Set(user.id),
            institution_id: ActiveValue::Set(institution_id),
            employee_id: ActiveValue::Set(format!("ADM-FIXTURE-{:04}", n)),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok((user, admin))
    }
}
