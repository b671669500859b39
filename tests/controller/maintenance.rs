use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use ::hostel::{
    model::maintenance::{
        CreateMaintenanceRequestDto, MaintenancePriority, MaintenanceQuery, MaintenanceRequestDto,
        MaintenanceStatus, UpdateMaintenanceRequestDto,
    },
    server::controller::maintenance::{
        list_maintenance_requests, list_my_maintenance_requests, submit_maintenance_request,
        update_maintenance_request,
    },
};

use super::*;

fn leaking_tap() -> CreateMaintenanceRequestDto {
    CreateMaintenanceRequestDto {
        issue_type: "plumbing".to_string(),
        priority: MaintenancePriority::High,
        description: "Tap is leaking".to_string(),
    }
}

mod submit {
    use super::*;

    /// Expect 201 with a pending request for the student's room
    #[tokio::test]
    async fn files_request_for_own_room() -> Result<(), TestError> {
        let test = TestBuilder::new().with_hostel_tables().build().await?;
        let institution = test.institution().insert_institution("NIT").await?;
        let hostel = test.hostel().insert_hostel(institution.id, "North Hall").await?;
        let room = test.hostel().insert_room(hostel.id, "101", 2).await?;
        let (user, student) = test
            .student()
            .insert_student(1, institution.id, Some(&room))
            .await?;
        test.login_as(user.id).await;
        let state = test.into_app_state();

        let result = submit_maintenance_request(
            State(state.clone()),
            test.session.clone(),
            Json(leaking_tap()),
        )
        .await;
        let (status, request): (_, MaintenanceRequestDto) = json_body(result).await;

        let listed = list_my_maintenance_requests(State(state), test.session.clone()).await;
        let (_, mine): (_, Vec<MaintenanceRequestDto>) = json_body(listed).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(request.status, MaintenanceStatus::Pending);
        assert_eq!(request.room_id, room.id);
        assert_eq!(request.student_id, student.id);
        assert_eq!(mine.len(), 1);

        Ok(())
    }

    /// Expect 400 for a student without a room
    #[tokio::test]
    async fn rejects_student_without_room() -> Result<(), TestError> {
        let test = TestBuilder::new().with_hostel_tables().build().await?;
        let institution = test.institution().insert_institution("NIT").await?;
        let (user, _) = test.student().insert_student(1, institution.id, None).await?;
        test.login_as(user.id).await;

        let result = submit_maintenance_request(
            State(test.into_app_state()),
            test.session.clone(),
            Json(leaking_tap()),
        )
        .await;

        assert_eq!(status(result), StatusCode::BAD_REQUEST);

        Ok(())
    }

    /// Expect 403 for an admin
    #[tokio::test]
    async fn forbids_admin() -> Result<(), TestError> {
        let test = TestBuilder::new().with_hostel_tables().build().await?;
        let institution = test.institution().insert_institution("NIT").await?;
        let (user, _) = test.user().insert_admin(1, institution.id).await?;
        test.login_as(user.id).await;

        let result = submit_maintenance_request(
            State(test.into_app_state()),
            test.session.clone(),
            Json(leaking_tap()),
        )
        .await;

        assert_eq!(status(result), StatusCode::FORBIDDEN);

        Ok(())
    }
}

mod admin {
    use super::*;

    /// Expect the status filter and resolving to stamp the resolution time
    #[tokio::test]
    async fn filters_and_resolves() -> Result<(), TestError> {
        let test = TestBuilder::new().with_hostel_tables().build().await?;
        let institution = test.institution().insert_institution("NIT").await?;
        let hostel = test.hostel().insert_hostel(institution.id, "North Hall").await?;
        let room = test.hostel().insert_room(hostel.id, "101", 2).await?;
        let (_, student) = test
            .student()
            .insert_student(2, institution.id, Some(&room))
            .await?;
        let pending = test
            .maintenance()
            .insert_request(institution.id, room.id, student.id, "pending")
            .await?;
        test.maintenance()
            .insert_request(institution.id, room.id, student.id, "resolved")
            .await?;
        let (admin, _) = test.user().insert_admin(1, institution.id).await?;
        test.login_as(admin.id).await;
        let state = test.into_app_state();

        let listed = list_maintenance_requests(
            State(state.clone()),
            test.session.clone(),
            Query(MaintenanceQuery {
                status: Some(MaintenanceStatus::Pending),
            }),
        )
        .await;
        let (_, requests): (_, Vec<MaintenanceRequestDto>) = json_body(listed).await;

        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].id, pending.id);
        assert_eq!(requests[0].room_number.as_deref(), Some("101"));

        let updated = update_maintenance_request(
            State(state),
            test.session.clone(),
            Path(pending.id),
            Json(UpdateMaintenanceRequestDto {
                status: Some(MaintenanceStatus::Resolved),
                priority: None,
            }),
        )
        .await;
        let (status, request): (_, MaintenanceRequestDto) = json_body(updated).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(request.status, MaintenanceStatus::Resolved);
        assert!(request.resolved_at.is_some());

        Ok(())
    }
}
