use hostel_test_utils::prelude::*;

use crate::model::student::CreateStudentDto;


fn new_student(email: &str, room_id: Option<i32>) -> CreateStudentDto {
    CreateStudentDto {
        name: "Meera Iyer".to_string(),
        email: email.to_string(),
        password: "student-pass".to_string(),
        phone: None,
        gender: Some("female".to_string()),
        student_id: "CS-2025-001".to_string(),
        department: "Computer Science".to_string(),
        year_of_study: 1,
        room_id,
    }
}

async fn room_occupancy(test: &TestContext, room_id: i32) -> Result<(i32, String), TestError> {
    use sea_orm::EntityTrait;

    let room = entity::prelude::Room::find_by_id(room_id)
        .one(&test.db)
        .await?
        .ok_or(sea_orm::DbErr::RecordNotFound(format!("room {}", room_id)))?;

    Ok((room.occupancy, room.status))
}
