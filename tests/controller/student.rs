use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{Duration, Utc};
use ::hostel::{
    model::{
        api::ErrorDto,
        student::{CreateStudentDto, StudentDto, UpdateStudentDto},
    },
    server::controller::student::{create_student, delete_student, list_students, update_student},
};
use sea_orm::EntityTrait;

use super::*;

async fn room_occupancy(test: &TestContext, room_id: i32) -> Result<i32, TestError> {
    let room = entity::prelude::Room::find_by_id(room_id)
        .one(&test.db)
        .await?
        .unwrap();

    Ok(room.occupancy)
}

fn new_student(email: &str, room_id: Option<i32>) -> CreateStudentDto {
    CreateStudentDto {
        name: "Ravi Kumar".to_string(),
        email: email.to_string(),
        password: "secret".to_string(),
        phone: None,
        gender: None,
        student_id: "STU-100".to_string(),
        department: "Physics".to_string(),
        year_of_study: 1,
        room_id,
    }
}

mod list {
    use super::*;

    /// Expect only the admin's institution's students, newest first
    #[tokio::test]
    async fn scoped_to_institution_newest_first() -> Result<(), TestError> {
        let test = TestBuilder::new().with_hostel_tables().build().await?;
        let institution = test.institution().insert_institution("NIT").await?;
        let other = test.institution().insert_institution("IIT").await?;
        let (admin, _) = test.user().insert_admin(1, institution.id).await?;
        let now = Utc::now().naive_utc();

        let (_, older) = test
            .student()
            .insert_student_created_at(2, institution.id, None, now - Duration::days(2))
            .await?;
        let (_, newer) = test
            .student()
            .insert_student_created_at(3, institution.id, None, now - Duration::days(1))
            .await?;
        test.student()
            .insert_student_created_at(4, other.id, None, now)
            .await?;
        test.login_as(admin.id).await;

        let result = list_students(State(test.into_app_state()), test.session.clone()).await;

        let (status, students): (_, Vec<StudentDto>) = json_body(result).await;
        assert_eq!(status, StatusCode::OK);
        let ids: Vec<i32> = students.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![newer.id, older.id]);
        assert!(students.iter().all(|s| s.institution_id == institution.id));

        Ok(())
    }
}

mod create {
    use super::*;

    /// Expect 409 for a full room and its occupancy left unchanged
    #[tokio::test]
    async fn rejects_full_room() -> Result<(), TestError> {
        let test = TestBuilder::new().with_hostel_tables().build().await?;
        let institution = test.institution().insert_institution("NIT").await?;
        let hostel = test.hostel().insert_hostel(institution.id, "North Hall").await?;
        let room = test.hostel().insert_room(hostel.id, "101", 1).await?;
        test.student()
            .insert_student(2, institution.id, Some(&room))
            .await?;
        let (admin, _) = test.user().insert_admin(1, institution.id).await?;
        test.login_as(admin.id).await;

        let result = create_student(
            State(test.into_app_state()),
            test.session.clone(),
            Json(new_student("ravi@example.com", Some(room.id))),
        )
        .await;

        let (status, error): (_, ErrorDto) = json_body(result).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(error.error, "Room 101 is full");
        assert_eq!(room_occupancy(&test, room.id).await?, 1);

        Ok(())
    }

    /// Expect a placed student to take one bed
    #[tokio::test]
    async fn occupies_room() -> Result<(), TestError> {
        let test = TestBuilder::new().with_hostel_tables().build().await?;
        let institution = test.institution().insert_institution("NIT").await?;
        let hostel = test.hostel().insert_hostel(institution.id, "North Hall").await?;
        let room = test.hostel().insert_room(hostel.id, "101", 2).await?;
        let (admin, _) = test.user().insert_admin(1, institution.id).await?;
        test.login_as(admin.id).await;

        let result = create_student(
            State(test.into_app_state()),
            test.session.clone(),
            Json(new_student("ravi@example.com", Some(room.id))),
        )
        .await;

        let (status, student): (_, StudentDto) = json_body(result).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(student.room_id, Some(room.id));
        assert_eq!(student.hostel_id, Some(hostel.id));
        assert_eq!(room_occupancy(&test, room.id).await?, 1);

        Ok(())
    }
}

mod update {
    use super::*;

    /// Expect moving rooms to free one bed and take another
    #[tokio::test]
    async fn moves_between_rooms() -> Result<(), TestError> {
        let test = TestBuilder::new().with_hostel_tables().build().await?;
        let institution = test.institution().insert_institution("NIT").await?;
        let hostel = test.hostel().insert_hostel(institution.id, "North Hall").await?;
        let from = test.hostel().insert_room(hostel.id, "101", 2).await?;
        let to = test.hostel().insert_room(hostel.id, "102", 2).await?;
        let (_, student) = test
            .student()
            .insert_student(2, institution.id, Some(&from))
            .await?;
        let (admin, _) = test.user().insert_admin(1, institution.id).await?;
        test.login_as(admin.id).await;

        let result = update_student(
            State(test.into_app_state()),
            test.session.clone(),
            Path(student.id),
            Json(UpdateStudentDto {
                room_id: Some(Some(to.id)),
                ..Default::default()
            }),
        )
        .await;

        assert_eq!(status(result), StatusCode::OK);
        assert_eq!(room_occupancy(&test, from.id).await?, 0);
        assert_eq!(room_occupancy(&test, to.id).await?, 1);

        Ok(())
    }
}

mod delete {
    use super::*;

    /// Expect deleting a placed student to free their bed
    #[tokio::test]
    async fn releases_room() -> Result<(), TestError> {
        let test = TestBuilder::new().with_hostel_tables().build().await?;
        let institution = test.institution().insert_institution("NIT").await?;
        let hostel = test.hostel().insert_hostel(institution.id, "North Hall").await?;
        let room = test.hostel().insert_room(hostel.id, "101", 2).await?;
        let (_, student) = test
            .student()
            .insert_student(2, institution.id, Some(&room))
            .await?;
        let (admin, _) = test.user().insert_admin(1, institution.id).await?;
        test.login_as(admin.id).await;

        let result = delete_student(
            State(test.into_app_state()),
            test.session.clone(),
            Path(student.id),
        )
        .await;

        assert_eq!(status(result), StatusCode::NO_CONTENT);
        assert_eq!(room_occupancy(&test, room.id).await?, 0);

        Ok(())
    }
}
