use axum::{extract::State, http::StatusCode, Json};
use ::hostel::{
    model::{
        institution::{
            AdminAssignmentDto, AssignInstitutionDto, CreateInstitutionDto, InstitutionDto,
            UpdateInstitutionDto,
        },
        user::Role,
    },
    server::controller::institution::{
        assign_institution, create_institution, get_my_institution, list_institutions,
        update_my_institution,
    },
};
use sea_orm::{EntityTrait, PaginatorTrait};

use super::*;

mod assign {
    use super::*;

    /// Expect 401 when no user is logged in
    #[tokio::test]
    async fn requires_session() -> Result<(), TestError> {
        let test = TestBuilder::new().with_hostel_tables().build().await?;
        let institution = test.institution().insert_institution("NIT").await?;

        let result = assign_institution(
            State(test.into_app_state()),
            test.session.clone(),
            Json(AssignInstitutionDto {
                institution_id: institution.id,
            }),
        )
        .await;

        assert_eq!(status(result), StatusCode::UNAUTHORIZED);

        Ok(())
    }

    /// Expect 404 and an unchanged user for an unknown institution
    #[tokio::test]
    async fn rejects_unknown_institution() -> Result<(), TestError> {
        let test = TestBuilder::new().with_hostel_tables().build().await?;
        let user = test.user().insert_user(1, "student", None).await?;
        test.login_as(user.id).await;

        let result = assign_institution(
            State(test.into_app_state()),
            test.session.clone(),
            Json(AssignInstitutionDto { institution_id: 42 }),
        )
        .await;

        assert_eq!(status(result), StatusCode::NOT_FOUND);

        let stored = entity::prelude::AppUser::find_by_id(user.id)
            .one(&test.db)
            .await?
            .unwrap();
        assert_eq!(stored.role, "student");
        assert_eq!(stored.institution_id, None);

        Ok(())
    }

    /// Expect the caller to become admin of the institution with exactly one admin record
    #[tokio::test]
    async fn makes_caller_admin() -> Result<(), TestError> {
        let test = TestBuilder::new().with_hostel_tables().build().await?;
        let institution = test.institution().insert_institution("NIT").await?;
        let user = test.user().insert_user(1, "student", None).await?;
        test.login_as(user.id).await;

        let result = assign_institution(
            State(test.into_app_state()),
            test.session.clone(),
            Json(AssignInstitutionDto {
                institution_id: institution.id,
            }),
        )
        .await;

        let (status, assignment): (_, AdminAssignmentDto) = json_body(result).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(assignment.institution.id, institution.id);
        assert!(!assignment.employee_id.is_empty());

        let stored = entity::prelude::AppUser::find_by_id(user.id)
            .one(&test.db)
            .await?
            .unwrap();
        assert_eq!(stored.role, Role::Admin.as_str());
        assert_eq!(stored.institution_id, Some(institution.id));

        let admins = entity::prelude::Admin::find().all(&test.db).await?;
        assert_eq!(admins.len(), 1);
        assert_eq!(admins[0].user_id, user.id);
        assert_eq!(admins[0].institution_id, institution.id);
        assert_eq!(admins[0].employee_id, assignment.employee_id);

        Ok(())
    }

    /// Expect a second assignment to move the existing admin record
    #[tokio::test]
    async fn reassignment_keeps_single_admin_record() -> Result<(), TestError> {
        let test = TestBuilder::new().with_hostel_tables().build().await?;
        let first = test.institution().insert_institution("NIT").await?;
        let second = test.institution().insert_institution("IIT").await?;
        let (user, _) = test.user().insert_admin(1, first.id).await?;
        test.login_as(user.id).await;

        let result = assign_institution(
            State(test.into_app_state()),
            test.session.clone(),
            Json(AssignInstitutionDto {
                institution_id: second.id,
            }),
        )
        .await;

        assert_eq!(status(result), StatusCode::OK);
        assert_eq!(entity::prelude::Admin::find().count(&test.db).await?, 1);

        Ok(())
    }

    /// Expect 409 and the student record left in place for a placed student
    #[tokio::test]
    async fn rejects_placed_student() -> Result<(), TestError> {
        let test = TestBuilder::new().with_hostel_tables().build().await?;
        let first = test.institution().insert_institution("NIT").await?;
        let second = test.institution().insert_institution("IIT").await?;
        let hostel = test.hostel().insert_hostel(first.id, "Ganga").await?;
        let room = test.hostel().insert_room(hostel.id, "101", 2).await?;
        let (user, _) = test
            .student()
            .insert_student(1, first.id, Some(&room))
            .await?;
        test.login_as(user.id).await;

        let result = assign_institution(
            State(test.into_app_state()),
            test.session.clone(),
            Json(AssignInstitutionDto {
                institution_id: second.id,
            }),
        )
        .await;

        assert_eq!(status(result), StatusCode::CONFLICT);

        let stored = entity::prelude::AppUser::find_by_id(user.id)
            .one(&test.db)
            .await?
            .unwrap();
        assert_eq!(stored.role, Role::Student.as_str());
        assert_eq!(stored.institution_id, Some(first.id));
        assert_eq!(entity::prelude::Admin::find().count(&test.db).await?, 0);

        Ok(())
    }
}

mod create {
    use super::*;

    fn institution(code: &str) -> CreateInstitutionDto {
        CreateInstitutionDto {
            code: code.to_string(),
            name: "National Institute".to_string(),
            address: "1 Campus Road".to_string(),
            contact_email: None,
            contact_phone: None,
            website: None,
            logo_url: None,
        }
    }

    /// Expect 201 for a new code and 409 for a repeated one
    #[tokio::test]
    async fn rejects_duplicate_code() -> Result<(), TestError> {
        let test = TestBuilder::new().with_hostel_tables().build().await?;
        let user = test.user().insert_user(1, "student", None).await?;
        test.login_as(user.id).await;
        let state = test.into_app_state();

        let first = create_institution(
            State(state.clone()),
            test.session.clone(),
            Json(institution("NIT")),
        )
        .await;
        let second = create_institution(
            State(state),
            test.session.clone(),
            Json(institution("NIT")),
        )
        .await;

        assert_eq!(status(first), StatusCode::CREATED);
        assert_eq!(status(second), StatusCode::CONFLICT);

        Ok(())
    }
}

mod list {
    use super::*;

    /// Expect 401 without a session
    #[tokio::test]
    async fn requires_session() -> Result<(), TestError> {
        let test = TestBuilder::new().with_hostel_tables().build().await?;

        let result = list_institutions(State(test.into_app_state()), test.session.clone()).await;

        assert_eq!(status(result), StatusCode::UNAUTHORIZED);

        Ok(())
    }
}

mod my {
    use super::*;

    /// Expect the institution of a logged in student
    #[tokio::test]
    async fn returns_user_institution() -> Result<(), TestError> {
        let test = TestBuilder::new().with_hostel_tables().build().await?;
        let institution = test.institution().insert_institution("NIT").await?;
        let user = test
            .user()
            .insert_user(1, "student", Some(institution.id))
            .await?;
        test.login_as(user.id).await;

        let result = get_my_institution(State(test.into_app_state()), test.session.clone()).await;

        let (status, found): (_, InstitutionDto) = json_body(result).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(found.id, institution.id);

        Ok(())
    }

    /// Expect 404 for a user without an institution
    #[tokio::test]
    async fn user_without_institution_is_not_found() -> Result<(), TestError> {
        let test = TestBuilder::new().with_hostel_tables().build().await?;
        let user = test.user().insert_user(1, "admin", None).await?;
        test.login_as(user.id).await;

        let result = get_my_institution(State(test.into_app_state()), test.session.clone()).await;

        assert_eq!(status(result), StatusCode::NOT_FOUND);

        Ok(())
    }

    /// Expect 403 when a student updates the institution
    #[tokio::test]
    async fn update_forbids_non_admin() -> Result<(), TestError> {
        let test = TestBuilder::new().with_hostel_tables().build().await?;
        let institution = test.institution().insert_institution("NIT").await?;
        let user = test
            .user()
            .insert_user(1, "student", Some(institution.id))
            .await?;
        test.login_as(user.id).await;

        let result = update_my_institution(
            State(test.into_app_state()),
            test.session.clone(),
            Json(UpdateInstitutionDto {
                name: Some("Renamed".to_string()),
                ..Default::default()
            }),
        )
        .await;

        assert_eq!(status(result), StatusCode::FORBIDDEN);

        Ok(())
    }
}
