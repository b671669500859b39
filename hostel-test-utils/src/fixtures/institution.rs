use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct InstitutionFixtures<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InstitutionFixtures<'a> {
    pub(crate) fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert an institution with the given code.
    pub async fn insert_institution(&self, code: &str) -> Result<entity::institution::Model, DbErr> {
        let now = Utc::now().naive_utc();

        entity::institution::ActiveModel {
            code: ActiveValue::Set(code.to_string()),
            name: ActiveValue::Set(format!("Institution {}", code)),
            address: ActiveValue::Set("1 College Road".to_string()),
            contact_email: ActiveValue::Set(Some(format!("office@{}.example.com", code.to_lowercase()))),
            contact_phone: ActiveValue::Set(None),
            website: ActiveValue::Set(None),
            logo_url: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
