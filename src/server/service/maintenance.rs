use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::{
    model::maintenance::{
        CreateMaintenanceRequestDto, MaintenanceRequestDto, MaintenanceStatus,
        UpdateMaintenanceRequestDto,
    },
    server::{
        data::{
            maintenance::MaintenanceRequestRepository, student::StudentRepository,
            user::UserRepository,
        },
        error::{resource::ResourceError, Error},
        model::db::maintenance_request_dto,
        util::validate::require_non_empty,
    },
};

/// Service for maintenance requests.
///
/// Students submit requests for their assigned room; administrators review, update, and
/// delete the requests of their institution.
pub struct MaintenanceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MaintenanceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the institution's requests, newest first, with room numbers and student names.
    pub async fn list(
        &self,
        institution_id: i32,
        status: Option<MaintenanceStatus>,
    ) -> Result<Vec<MaintenanceRequestDto>, Error> {
        let requests = MaintenanceRequestRepository::new(self.db)
            .list(institution_id, status)
            .await?;
        let student_names: HashMap<i32, String> = StudentRepository::new(self.db)
            .list(institution_id)
            .await?
            .into_iter()
            .filter_map(|(student, user)| user.map(|user| (student.id, user.name)))
            .collect();

        requests
            .into_iter()
            .map(|(request, room)| {
                let student_name = student_names.get(&request.student_id).cloned();

                maintenance_request_dto(request, room.map(|r| r.room_number), student_name)
            })
            .collect()
    }

    /// Updates status and priority.
    ///
    /// Resolving a request stamps its resolved time; moving it back to another status
    /// clears the stamp.
    pub async fn update(
        &self,
        institution_id: i32,
        request_id: i32,
        changes: UpdateMaintenanceRequestDto,
    ) -> Result<MaintenanceRequestDto, Error> {
        let request_repo = MaintenanceRequestRepository::new(self.db);
        let request = request_repo
            .get(institution_id, request_id)
            .await?
            .ok_or(ResourceError::not_found("Maintenance request", request_id))?;

        let request = request_repo
            .update(request, changes.status, changes.priority)
            .await?;

        maintenance_request_dto(request, None, None)
    }

    pub async fn delete(&self, institution_id: i32, request_id: i32) -> Result<(), Error> {
        let request_repo = MaintenanceRequestRepository::new(self.db);
        let request = request_repo
            .get(institution_id, request_id)
            .await?
            .ok_or(ResourceError::not_found("Maintenance request", request_id))?;

        request_repo.delete(request.id).await?;

        Ok(())
    }

    /// Submits a pending request for the student's assigned room.
    ///
    /// # Returns
    /// - `Err(Error::ResourceError(NotFound))` - The user has no student record
    /// - `Err(Error::ResourceError(Validation))` - Blank fields, or no room assigned
    pub async fn submit(
        &self,
        user_id: i32,
        request: CreateMaintenanceRequestDto,
    ) -> Result<MaintenanceRequestDto, Error> {
        require_non_empty("issue_type", &request.issue_type)?;
        require_non_empty("description", &request.description)?;

        let student = StudentRepository::new(self.db)
            .get_by_user_id(user_id)
            .await?
            .ok_or(ResourceError::not_found("Student", user_id))?;

        let Some(room_id) = student.room_id else {
            return Err(ResourceError::Validation(
                "A room must be assigned before submitting a maintenance request".to_string(),
            )
            .into());
        };

        let request = MaintenanceRequestRepository::new(self.db)
            .create(student.institution_id, room_id, student.id, request)
            .await?;

        tracing::debug!(
            "Student ID {} submitted maintenance request ID {}",
            student.id,
            request.id
        );

        maintenance_request_dto(request, None, None)
    }

    /// Lists the requests the user submitted as a student, newest first.
    pub async fn list_for_student(&self, user_id: i32) -> Result<Vec<MaintenanceRequestDto>, Error> {
        let student = StudentRepository::new(self.db)
            .get_by_user_id(user_id)
            .await?
            .ok_or(ResourceError::not_found("Student", user_id))?;
        let student_name = UserRepository::new(self.db)
            .get(user_id)
            .await?
            .map(|user| user.name);

        let requests = MaintenanceRequestRepository::new(self.db)
            .list_by_student(student.id)
            .await?;

        requests
            .into_iter()
            .map(|(request, room)| {
                maintenance_request_dto(
                    request,
                    room.map(|r| r.room_number),
                    student_name.clone(),
                )
            })
            .collect()
    }
}
