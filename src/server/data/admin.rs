use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

pub struct AdminRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AdminRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: i32,
        institution_id: i32,
        employee_id: String,
    ) -> Result<entity::admin::Model, DbErr> {
        entity::admin::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            institution_id: ActiveValue::Set(institution_id),
            employee_id: ActiveValue::Set(employee_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::admin::Model>, DbErr> {
        entity::prelude::Admin::find()
            .filter(entity::admin::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    pub async fn get_by_employee_id(
        &self,
        employee_id: &str,
    ) -> Result<Option<entity::admin::Model>, DbErr> {
        entity::prelude::Admin::find()
            .filter(entity::admin::Column::EmployeeId.eq(employee_id))
            .one(self.db)
            .await
    }

    /// Moves an existing admin record to another institution, keeping its employee ID
    pub async fn set_institution(
        &self,
        admin: entity::admin::Model,
        institution_id: i32,
    ) -> Result<entity::admin::Model, DbErr> {
        let mut admin_am = admin.into_active_model();
        admin_am.institution_id = ActiveValue::Set(institution_id);

        admin_am.update(self.db).await
    }
}
