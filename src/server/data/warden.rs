use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::db::join_blocks;

pub struct WardenRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> WardenRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: i32,
        institution_id: i32,
        employee_id: String,
        hostel_id: Option<i32>,
        assigned_blocks: &[String],
    ) -> Result<entity::warden::Model, DbErr> {
        let now = Utc::now().naive_utc();

        entity::warden::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            institution_id: ActiveValue::Set(institution_id),
            employee_id: ActiveValue::Set(employee_id),
            hostel_id: ActiveValue::Set(hostel_id),
            assigned_blocks: ActiveValue::Set(join_blocks(assigned_blocks)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a warden of the institution with their user account
    pub async fn get(
        &self,
        institution_id: i32,
        warden_id: i32,
    ) -> Result<Option<(entity::warden::Model, Option<entity::app_user::Model>)>, DbErr> {
        entity::prelude::Warden::find_by_id(warden_id)
            .filter(entity::warden::Column::InstitutionId.eq(institution_id))
            .find_also_related(entity::prelude::AppUser)
            .one(self.db)
            .await
    }

    pub async fn get_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::warden::Model>, DbErr> {
        entity::prelude::Warden::find()
            .filter(entity::warden::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Wardens of the institution with their user accounts, newest first
    pub async fn list(
        &self,
        institution_id: i32,
    ) -> Result<Vec<(entity::warden::Model, Option<entity::app_user::Model>)>, DbErr> {
        entity::prelude::Warden::find()
            .filter(entity::warden::Column::InstitutionId.eq(institution_id))
            .order_by_desc(entity::warden::Column::CreatedAt)
            .order_by_desc(entity::warden::Column::Id)
            .find_also_related(entity::prelude::AppUser)
            .all(self.db)
            .await
    }

    pub async fn count(&self, institution_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Warden::find()
            .filter(entity::warden::Column::InstitutionId.eq(institution_id))
            .count(self.db)
            .await
    }

    /// Applies the fields that are `Some`; `hostel_id: Some(None)` unassigns the hostel
    pub async fn update(
        &self,
        warden: entity::warden::Model,
        employee_id: Option<String>,
        hostel_id: Option<Option<i32>>,
        assigned_blocks: Option<Vec<String>>,
    ) -> Result<entity::warden::Model, DbErr> {
        let mut warden_am = warden.into_active_model();
        if let Some(employee_id) = employee_id {
            warden_am.employee_id = ActiveValue::Set(employee_id);
        }
        if let Some(hostel_id) = hostel_id {
            warden_am.hostel_id = ActiveValue::Set(hostel_id);
        }
        if let Some(assigned_blocks) = assigned_blocks {
            warden_am.assigned_blocks = ActiveValue::Set(join_blocks(&assigned_blocks));
        }
        warden_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        warden_am.update(self.db).await
    }

    pub async fn delete(&self, warden_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Warden::delete_by_id(warden_id)
            .exec(self.db)
            .await
    }
}
