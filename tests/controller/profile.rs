use axum::{extract::State, http::StatusCode, Json};
use ::hostel::{
    model::user::{UpdateProfileDto, UserDto},
    server::controller::profile::{get_profile, update_profile},
};

use super::*;

mod get {
    use super::*;

    /// Expect the logged in user's profile
    #[tokio::test]
    async fn returns_profile() -> Result<(), TestError> {
        let test = TestBuilder::new().with_hostel_tables().build().await?;
        let user = test.user().insert_user(1, "student", None).await?;
        test.login_as(user.id).await;

        let result = get_profile(State(test.into_app_state()), test.session.clone()).await;

        let (status, profile): (_, UserDto) = json_body(result).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(profile.email, user.email);

        Ok(())
    }
}

mod update {
    use super::*;

    /// Expect only the patched field to change
    #[tokio::test]
    async fn applies_only_patched_fields() -> Result<(), TestError> {
        let test = TestBuilder::new().with_hostel_tables().build().await?;
        let user = test.user().insert_user(1, "student", None).await?;
        test.login_as(user.id).await;

        let result = update_profile(
            State(test.into_app_state()),
            test.session.clone(),
            Json(UpdateProfileDto {
                phone: Some("555-9999".to_string()),
                ..Default::default()
            }),
        )
        .await;

        let (status, profile): (_, UserDto) = json_body(result).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(profile.phone.as_deref(), Some("555-9999"));
        assert_eq!(profile.name, user.name);
        assert_eq!(profile.gender, user.gender);
        assert_eq!(profile.email, user.email);

        Ok(())
    }

    /// Expect 401 without a session
    #[tokio::test]
    async fn requires_session() -> Result<(), TestError> {
        let test = TestBuilder::new().with_hostel_tables().build().await?;

        let result = update_profile(
            State(test.into_app_state()),
            test.session.clone(),
            Json(UpdateProfileDto::default()),
        )
        .await;

        assert_eq!(status(result), StatusCode::UNAUTHORIZED);

        Ok(())
    }
}
