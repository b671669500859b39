use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use ::hostel::{
    model::hostel::{CreateHostelDto, HostelDto},
    server::controller::hostel::{create_hostel, delete_hostel, get_hostel, list_hostels},
};

use super::*;

/// Expect 403 on admin routes for a warden
#[tokio::test]
async fn forbids_warden() -> Result<(), TestError> {
    let test = TestBuilder::new().with_hostel_tables().build().await?;
    let institution = test.institution().insert_institution("NIT").await?;
    let (user, _) = test.warden().insert_warden(1, institution.id, None).await?;
    test.login_as(user.id).await;

    let result = list_hostels(State(test.into_app_state()), test.session.clone()).await;

    assert_eq!(status(result), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect a created hostel to be listed for its institution only
#[tokio::test]
async fn creates_and_lists_hostel() -> Result<(), TestError> {
    let test = TestBuilder::new().with_hostel_tables().build().await?;
    let institution = test.institution().insert_institution("NIT").await?;
    let other = test.institution().insert_institution("IIT").await?;
    test.hostel().insert_hostel(other.id, "Other Hall").await?;
    let (user, _) = test.user().insert_admin(1, institution.id).await?;
    test.login_as(user.id).await;
    let state = test.into_app_state();

    let created = create_hostel(
        State(state.clone()),
        test.session.clone(),
        Json(CreateHostelDto {
            name: "North Hall".to_string(),
            address: "1 Campus Road".to_string(),
            total_blocks: 2,
            total_rooms: 40,
        }),
    )
    .await;
    let (created_status, created): (_, HostelDto) = json_body(created).await;

    let listed = list_hostels(State(state), test.session.clone()).await;
    let (listed_status, hostels): (_, Vec<HostelDto>) = json_body(listed).await;

    assert_eq!(created_status, StatusCode::CREATED);
    assert_eq!(created.institution_id, institution.id);
    assert_eq!(listed_status, StatusCode::OK);
    assert_eq!(hostels.len(), 1);
    assert_eq!(hostels[0].id, created.id);
    assert_eq!(hostels[0].name, "North Hall");

    Ok(())
}

/// Expect another institution's hostel to be invisible
#[tokio::test]
async fn hides_other_institution_hostel() -> Result<(), TestError> {
    let test = TestBuilder::new().with_hostel_tables().build().await?;
    let institution = test.institution().insert_institution("NIT").await?;
    let other = test.institution().insert_institution("IIT").await?;
    let hostel = test.hostel().insert_hostel(other.id, "Other Hall").await?;
    let (user, _) = test.user().insert_admin(1, institution.id).await?;
    test.login_as(user.id).await;
    let state = test.into_app_state();

    let get = get_hostel(State(state.clone()), test.session.clone(), Path(hostel.id)).await;
    let delete = delete_hostel(State(state), test.session.clone(), Path(hostel.id)).await;

    assert_eq!(status(get), StatusCode::NOT_FOUND);
    assert_eq!(status(delete), StatusCode::NOT_FOUND);

    Ok(())
}
