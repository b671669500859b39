use axum::{extract::State, http::StatusCode};
use ::hostel::{model::dashboard::DashboardDto, server::controller::dashboard::get_dashboard};

use super::*;

/// Expect totals and per-hostel occupancy for the admin's institution only
#[tokio::test]
async fn aggregates_institution_figures() -> Result<(), TestError> {
    let test = TestBuilder::new().with_hostel_tables().build().await?;
    let institution = test.institution().insert_institution("NIT").await?;
    let other = test.institution().insert_institution("IIT").await?;
    let hostel = test.hostel().insert_hostel(institution.id, "North Hall").await?;
    let room = test.hostel().insert_room(hostel.id, "101", 2).await?;
    test.hostel().insert_room(hostel.id, "102", 3).await?;
    let (_, student) = test
        .student()
        .insert_student(2, institution.id, Some(&room))
        .await?;
    test.maintenance()
        .insert_request(institution.id, room.id, student.id, "pending")
        .await?;
    test.hostel().insert_hostel(other.id, "Other Hall").await?;
    test.student().insert_student(3, other.id, None).await?;
    let (admin, _) = test.user().insert_admin(1, institution.id).await?;
    test.login_as(admin.id).await;

    let result = get_dashboard(State(test.into_app_state()), test.session.clone()).await;

    let (status, dashboard): (_, DashboardDto) = json_body(result).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(dashboard.hostels, 1);
    assert_eq!(dashboard.rooms, 2);
    assert_eq!(dashboard.students, 1);
    assert_eq!(dashboard.wardens, 0);
    assert_eq!(dashboard.total_capacity, 5);
    assert_eq!(dashboard.total_occupancy, 1);
    assert_eq!(dashboard.maintenance.pending, 1);
    assert_eq!(dashboard.hostel_occupancy.len(), 1);
    assert_eq!(dashboard.hostel_occupancy[0].occupancy, 1);

    Ok(())
}

/// Expect 401 without a session
#[tokio::test]
async fn requires_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_hostel_tables().build().await?;

    let result = get_dashboard(State(test.into_app_state()), test.session.clone()).await;

    assert_eq!(status(result), StatusCode::UNAUTHORIZED);

    Ok(())
}
