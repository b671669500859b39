use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::institution::{CreateInstitutionDto, UpdateInstitutionDto};

pub struct InstitutionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> InstitutionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        institution: CreateInstitutionDto,
    ) -> Result<entity::institution::Model, DbErr> {
        let now = Utc::now().naive_utc();

        entity::institution::ActiveModel {
            code: ActiveValue::Set(institution.code),
            name: ActiveValue::Set(institution.name),
            address: ActiveValue::Set(institution.address),
            contact_email: ActiveValue::Set(institution.contact_email),
            contact_phone: ActiveValue::Set(institution.contact_phone),
            website: ActiveValue::Set(institution.website),
            logo_url: ActiveValue::Set(institution.logo_url),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get(
        &self,
        institution_id: i32,
    ) -> Result<Option<entity::institution::Model>, DbErr> {
        entity::prelude::Institution::find_by_id(institution_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_code(
        &self,
        code: &str,
    ) -> Result<Option<entity::institution::Model>, DbErr> {
        entity::prelude::Institution::find()
            .filter(entity::institution::Column::Code.eq(code))
            .one(self.db)
            .await
    }

    /// All institutions ordered by name
    pub async fn list(&self) -> Result<Vec<entity::institution::Model>, DbErr> {
        entity::prelude::Institution::find()
            .order_by_asc(entity::institution::Column::Name)
            .all(self.db)
            .await
    }

    /// Updates the fields that are `Some`
    ///
    /// Returns `None` if the institution does not exist.
    pub async fn update(
        &self,
        institution_id: i32,
        changes: UpdateInstitutionDto,
    ) -> Result<Option<entity::institution::Model>, DbErr> {
        let Some(institution) = self.get(institution_id).await? else {
            return Ok(None);
        };

        let mut institution_am = institution.into_active_model();
        if let Some(name) = changes.name {
            institution_am.name = ActiveValue::Set(name);
        }
        if let Some(address) = changes.address {
            institution_am.address = ActiveValue::Set(address);
        }
        if let Some(contact_email) = changes.contact_email {
            institution_am.contact_email = ActiveValue::Set(Some(contact_email));
        }
        if let Some(contact_phone) = changes.contact_phone {
            institution_am.contact_phone = ActiveValue::Set(Some(contact_phone));
        }
        if let Some(website) = changes.website {
            institution_am.website = ActiveValue::Set(Some(website));
        }
        if let Some(logo_url) = changes.logo_url {
            institution_am.logo_url = ActiveValue::Set(Some(logo_url));
        }
        institution_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let institution = institution_am.update(self.db).await?;

        Ok(Some(institution))
    }
}
