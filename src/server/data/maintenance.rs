use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::maintenance::{
    CreateMaintenanceRequestDto, MaintenancePriority, MaintenanceStatus,
};

pub struct MaintenanceRequestRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MaintenanceRequestRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a pending request
    pub async fn create(
        &self,
        institution_id: i32,
        room_id: i32,
        student_id: i32,
        request: CreateMaintenanceRequestDto,
    ) -> Result<entity::maintenance_request::Model, DbErr> {
        let now = Utc::now().naive_utc();

        entity::maintenance_request::ActiveModel {
            institution_id: ActiveValue::Set(institution_id),
            room_id: ActiveValue::Set(room_id),
            student_id: ActiveValue::Set(student_id),
            issue_type: ActiveValue::Set(request.issue_type),
            priority: ActiveValue::Set(request.priority.as_str().to_string()),
            status: ActiveValue::Set(MaintenanceStatus::Pending.as_str().to_string()),
            description: ActiveValue::Set(request.description),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            resolved_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get(
        &self,
        institution_id: i32,
        request_id: i32,
    ) -> Result<Option<entity::maintenance_request::Model>, DbErr> {
        entity::prelude::MaintenanceRequest::find_by_id(request_id)
            .filter(entity::maintenance_request::Column::InstitutionId.eq(institution_id))
            .one(self.db)
            .await
    }

    /// Requests of the institution with their rooms, newest first
    pub async fn list(
        &self,
        institution_id: i32,
        status: Option<MaintenanceStatus>,
    ) -> Result<Vec<(entity::maintenance_request::Model, Option<entity::room::Model>)>, DbErr>
    {
        let mut query = entity::prelude::MaintenanceRequest::find()
            .filter(entity::maintenance_request::Column::InstitutionId.eq(institution_id));

        if let Some(status) = status {
            query = query.filter(entity::maintenance_request::Column::Status.eq(status.as_str()));
        }

        query
            .order_by_desc(entity::maintenance_request::Column::CreatedAt)
            .order_by_desc(entity::maintenance_request::Column::Id)
            .find_also_related(entity::prelude::Room)
            .all(self.db)
            .await
    }

    /// Requests submitted by a student with their rooms, newest first
    pub async fn list_by_student(
        &self,
        student_id: i32,
    ) -> Result<Vec<(entity::maintenance_request::Model, Option<entity::room::Model>)>, DbErr>
    {
        entity::prelude::MaintenanceRequest::find()
            .filter(entity::maintenance_request::Column::StudentId.eq(student_id))
            .order_by_desc(entity::maintenance_request::Column::CreatedAt)
            .order_by_desc(entity::maintenance_request::Column::Id)
            .find_also_related(entity::prelude::Room)
            .all(self.db)
            .await
    }

    pub async fn count_by_status(
        &self,
        institution_id: i32,
        status: MaintenanceStatus,
    ) -> Result<u64, DbErr> {
        entity::prelude::MaintenanceRequest::find()
            .filter(entity::maintenance_request::Column::InstitutionId.eq(institution_id))
            .filter(entity::maintenance_request::Column::Status.eq(status.as_str()))
            .count(self.db)
            .await
    }

    /// Applies the fields that are `Some`
    ///
    /// Moving to `resolved` stamps `resolved_at`, moving to any other status clears it.
    pub async fn update(
        &self,
        request: entity::maintenance_request::Model,
        status: Option<MaintenanceStatus>,
        priority: Option<MaintenancePriority>,
    ) -> Result<entity::maintenance_request::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let was_resolved = request.status == MaintenanceStatus::Resolved.as_str();

        let mut request_am = request.into_active_model();
        if let Some(status) = status {
            request_am.status = ActiveValue::Set(status.as_str().to_string());

            match status {
                MaintenanceStatus::Resolved if !was_resolved => {
                    request_am.resolved_at = ActiveValue::Set(Some(now))
                }
                MaintenanceStatus::Resolved => {}
                _ => request_am.resolved_at = ActiveValue::Set(None),
            }
        }
        if let Some(priority) = priority {
            request_am.priority = ActiveValue::Set(priority.as_str().to_string());
        }
        request_am.updated_at = ActiveValue::Set(now);

        request_am.update(self.db).await
    }

    pub async fn delete(&self, request_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::MaintenanceRequest::delete_by_id(request_id)
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    mod create {
        use hostel_test_utils::prelude::*;

        use crate::{
            model::maintenance::{CreateMaintenanceRequestDto, MaintenancePriority},
            server::data::maintenance::MaintenanceRequestRepository,
        };

        /// Expect a new request to be pending and unresolved
        #[tokio::test]
        async fn creates_pending_request() -> Result<(), TestError> {
            let test = TestBuilder::new().with_hostel_tables().build().await?;
            let institution = test.institution().insert_institution("NIT").await?;
            let hostel = test.hostel().insert_hostel(institution.id, "Ganga").await?;
            let room = test.hostel().insert_room(hostel.id, "101", 2).await?;
            let (_, student) = test
                .student()
                .insert_student(1, institution.id, Some(&room))
                .await?;

            let request = MaintenanceRequestRepository::new(&test.db)
                .create(
                    institution.id,
                    room.id,
                    student.id,
                    CreateMaintenanceRequestDto {
                        issue_type: "electrical".to_string(),
                        priority: MaintenancePriority::High,
                        description: "Ceiling fan does not turn on".to_string(),
                    },
                )
                .await?;

            assert_eq!(request.status, "pending");
            assert_eq!(request.priority, "high");
            assert!(request.resolved_at.is_none());

            Ok(())
        }
    }

    mod list {
        use hostel_test_utils::prelude::*;

        use crate::{
            model::maintenance::MaintenanceStatus,
            server::data::maintenance::MaintenanceRequestRepository,
        };

        /// Expect the status filter to apply within the institution
        #[tokio::test]
        async fn filters_by_status() -> Result<(), TestError> {
            let test = TestBuilder::new().with_hostel_tables().build().await?;
            let institution = test.institution().insert_institution("NIT").await?;
            let hostel = test.hostel().insert_hostel(institution.id, "Ganga").await?;
            let room = test.hostel().insert_room(hostel.id, "101", 2).await?;
            let (_, student) = test
                .student()
                .insert_student(1, institution.id, Some(&room))
                .await?;
            let maintenance = test.maintenance();
            maintenance
                .insert_request(institution.id, room.id, student.id, "pending")
                .await?;
            maintenance
                .insert_request(institution.id, room.id, student.id, "resolved")
                .await?;
            let request_repo = MaintenanceRequestRepository::new(&test.db);

            let all = request_repo.list(institution.id, None).await?;
            let pending = request_repo
                .list(institution.id, Some(MaintenanceStatus::Pending))
                .await?;

            assert_eq!(all.len(), 2);
            assert_eq!(pending.len(), 1);
            assert_eq!(pending[0].0.status, "pending");
            assert_eq!(pending[0].1.as_ref().map(|r| r.id), Some(room.id));
            assert_eq!(
                request_repo
                    .count_by_status(institution.id, MaintenanceStatus::Resolved)
                    .await?,
                1
            );

            Ok(())
        }
    }

    mod update {
        use hostel_test_utils::prelude::*;

        use crate::{
            model::maintenance::{MaintenancePriority, MaintenanceStatus},
            server::data::maintenance::MaintenanceRequestRepository,
        };

        /// Expect resolving to stamp resolved_at and reopening to clear it
        #[tokio::test]
        async fn tracks_resolved_at() -> Result<(), TestError> {
            let test = TestBuilder::new().with_hostel_tables().build().await?;
            let institution = test.institution().insert_institution("NIT").await?;
            let hostel = test.hostel().insert_hostel(institution.id, "Ganga").await?;
            let room = test.hostel().insert_room(hostel.id, "101", 2).await?;
            let (_, student) = test
                .student()
                .insert_student(1, institution.id, Some(&room))
                .await?;
            let request = test
                .maintenance()
                .insert_request(institution.id, room.id, student.id, "pending")
                .await?;
            let request_repo = MaintenanceRequestRepository::new(&test.db);

            let resolved = request_repo
                .update(request, Some(MaintenanceStatus::Resolved), None)
                .await?;
            assert!(resolved.resolved_at.is_some());

            let reprioritized = request_repo
                .update(resolved.clone(), None, Some(MaintenancePriority::Urgent))
                .await?;
            assert_eq!(reprioritized.resolved_at, resolved.resolved_at);
            assert_eq!(reprioritized.priority, "urgent");

            let reopened = request_repo
                .update(reprioritized, Some(MaintenanceStatus::InProgress), None)
                .await?;
            assert!(reopened.resolved_at.is_none());
            assert_eq!(reopened.status, "in_progress");

            Ok(())
        }
    }
}
