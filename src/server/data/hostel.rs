use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::hostel::{CreateHostelDto, UpdateHostelDto};

pub struct HostelRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> HostelRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        institution_id: i32,
        hostel: CreateHostelDto,
    ) -> Result<entity::hostel::Model, DbErr> {
        let now = Utc::now().naive_utc();

        entity::hostel::ActiveModel {
            institution_id: ActiveValue::Set(institution_id),
            name: ActiveValue::Set(hostel.name),
            address: ActiveValue::Set(hostel.address),
            total_blocks: ActiveValue::Set(hostel.total_blocks),
            total_rooms: ActiveValue::Set(hostel.total_rooms),
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
        hostel_id: i32,
    ) -> Result<Option<entity::hostel::Model>, DbErr> {
        entity::prelude::Hostel::find_by_id(hostel_id)
            .filter(entity::hostel::Column::InstitutionId.eq(institution_id))
            .one(self.db)
            .await
    }

    /// Hostels of the institution ordered by name
    pub async fn list(&self, institution_id: i32) -> Result<Vec<entity::hostel::Model>, DbErr> {
        entity::prelude::Hostel::find()
            .filter(entity::hostel::Column::InstitutionId.eq(institution_id))
            .order_by_asc(entity::hostel::Column::Name)
            .order_by_asc(entity::hostel::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn count(&self, institution_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Hostel::find()
            .filter(entity::hostel::Column::InstitutionId.eq(institution_id))
            .count(self.db)
            .await
    }

    /// Updates the fields that are `Some`
    ///
    /// Returns `None` if the hostel does not exist in the institution.
    pub async fn update(
        &self,
        institution_id: i32,
        hostel_id: i32,
        changes: UpdateHostelDto,
    ) -> Result<Option<entity::hostel::Model>, DbErr> {
        let Some(hostel) = self.get(institution_id, hostel_id).await? else {
            return Ok(None);
        };

        let mut hostel_am = hostel.into_active_model();
        if let Some(name) = changes.name {
            hostel_am.name = ActiveValue::Set(name);
        }
        if let Some(address) = changes.address {
            hostel_am.address = ActiveValue::Set(address);
        }
        if let Some(total_blocks) = changes.total_blocks {
            hostel_am.total_blocks = ActiveValue::Set(total_blocks);
        }
        if let Some(total_rooms) = changes.total_rooms {
            hostel_am.total_rooms = ActiveValue::Set(total_rooms);
        }
        hostel_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let hostel = hostel_am.update(self.db).await?;

        Ok(Some(hostel))
    }

    /// Deletes a hostel of the institution along with its rooms
    ///
    /// Check [`DeleteResult::rows_affected`] to tell whether the hostel existed.
    pub async fn delete(&self, institution_id: i32, hostel_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Hostel::delete_many()
            .filter(entity::hostel::Column::Id.eq(hostel_id))
            .filter(entity::hostel::Column::InstitutionId.eq(institution_id))
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    mod get {
        use hostel_test_utils::prelude::*;

        use crate::server::data::hostel::HostelRepository;

        /// Expect None for a hostel of another institution
        #[tokio::test]
        async fn scopes_to_institution() -> Result<(), TestError> {
            let test = TestBuilder::new().with_hostel_tables().build().await?;
            let ours = test.institution().insert_institution("NIT").await?;
            let theirs = test.institution().insert_institution("IIT").await?;
            let hostel = test.hostel().insert_hostel(theirs.id, "Ganga").await?;
            let hostel_repo = HostelRepository::new(&test.db);

            let as_ours = hostel_repo.get(ours.id, hostel.id).await?;
            let as_theirs = hostel_repo.get(theirs.id, hostel.id).await?;

            assert!(as_ours.is_none());
            assert!(as_theirs.is_some());

            Ok(())
        }
    }

    mod list {
        use hostel_test_utils::prelude::*;

        use crate::server::data::hostel::HostelRepository;

        /// Expect only the institution's hostels, ordered by name
        #[tokio::test]
        async fn lists_institution_hostels_by_name() -> Result<(), TestError> {
            let test = TestBuilder::new().with_hostel_tables().build().await?;
            let ours = test.institution().insert_institution("NIT").await?;
            let theirs = test.institution().insert_institution("IIT").await?;
            test.hostel().insert_hostel(ours.id, "Yamuna").await?;
            test.hostel().insert_hostel(ours.id, "Ganga").await?;
            test.hostel().insert_hostel(theirs.id, "Kaveri").await?;

            let hostels = HostelRepository::new(&test.db).list(ours.id).await?;

            let names: Vec<&str> = hostels.iter().map(|h| h.name.as_str()).collect();
            assert_eq!(names, vec!["Ganga", "Yamuna"]);

            Ok(())
        }
    }

    mod delete {
        use hostel_test_utils::prelude::*;
        use sea_orm::EntityTrait;

        use crate::server::data::hostel::HostelRepository;

        /// Expect the hostel and its rooms to be removed
        #[tokio::test]
        async fn deletes_hostel_with_rooms() -> Result<(), TestError> {
            let test = TestBuilder::new().with_hostel_tables().build().await?;
            let institution = test.institution().insert_institution("NIT").await?;
            let hostel = test.hostel().insert_hostel(institution.id, "Ganga").await?;
            let room = test.hostel().insert_room(hostel.id, "101", 2).await?;

            let result = HostelRepository::new(&test.db)
                .delete(institution.id, hostel.id)
                .await?;

            assert_eq!(result.rows_affected, 1);
            let room_exists = entity::prelude::Room::find_by_id(room.id)
                .one(&test.db)
                .await?;
            assert!(room_exists.is_none());

            Ok(())
        }

        /// Expect no rows to be affected for a hostel of another institution
        #[tokio::test]
        async fn ignores_other_institution() -> Result<(), TestError> {
            let test = TestBuilder::new().with_hostel_tables().build().await?;
            let ours = test.institution().insert_institution("NIT").await?;
            let theirs = test.institution().insert_institution("IIT").await?;
            let hostel = test.hostel().insert_hostel(theirs.id, "Ganga").await?;

            let result = HostelRepository::new(&test.db)
                .delete(ours.id, hostel.id)
                .await?;

            assert_eq!(result.rows_affected, 0);

            Ok(())
        }
    }
}
