use axum::{extract::State, http::StatusCode, Json};
use ::hostel::{
    model::user::{LoginDto, RegisterDto, Role, UserDto},
    server::{
        controller::auth::{get_user, login, logout, register},
        model::session::user::SessionUserId,
    },
};

use super::*;

fn registration(email: &str) -> RegisterDto {
    RegisterDto {
        name: "Asha Rao".to_string(),
        email: email.to_string(),
        password: "correct horse".to_string(),
        phone: None,
        gender: Some("female".to_string()),
    }
}

mod register {
    use super::*;

    /// Expect 201 with a student account stored in the session
    #[tokio::test]
    async fn creates_student_and_logs_in() -> Result<(), TestError> {
        let test = TestBuilder::new().with_hostel_tables().build().await?;

        let result = register(
            State(test.into_app_state()),
            test.session.clone(),
            Json(registration("Asha@Example.com ")),
        )
        .await;

        let (status, user): (_, UserDto) = json_body(result).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(user.role, Role::Student);
        assert_eq!(user.email, "asha@example.com");

        let session_user = SessionUserId::get(&test.session).await.unwrap();
        assert_eq!(session_user, Some(user.id));

        Ok(())
    }

    /// Expect registration to replace a session ID issued beforehand
    #[tokio::test]
    async fn replaces_existing_session_id() -> Result<(), TestError> {
        let test = TestBuilder::new().with_hostel_tables().build().await?;
        test.session.save().await.unwrap();
        let issued_id = test.session.id();
        assert!(issued_id.is_some());

        let result = register(
            State(test.into_app_state()),
            test.session.clone(),
            Json(registration("asha@example.com")),
        )
        .await;

        assert_eq!(status(result), StatusCode::CREATED);
        assert_ne!(test.session.id(), issued_id);

        Ok(())
    }

    /// Expect 409 when the email is already registered
    #[tokio::test]
    async fn rejects_duplicate_email() -> Result<(), TestError> {
        let test = TestBuilder::new().with_hostel_tables().build().await?;
        test.user().insert_user(1, "student", None).await?;

        let result = register(
            State(test.into_app_state()),
            test.session.clone(),
            Json(registration("user1@example.com")),
        )
        .await;

        assert_eq!(status(result), StatusCode::CONFLICT);

        Ok(())
    }

    /// Expect 400 for a blank password
    #[tokio::test]
    async fn rejects_empty_password() -> Result<(), TestError> {
        let test = TestBuilder::new().with_hostel_tables().build().await?;

        let mut registration = registration("asha@example.com");
        registration.password = String::new();

        let result = register(
            State(test.into_app_state()),
            test.session.clone(),
            Json(registration),
        )
        .await;

        assert_eq!(status(result), StatusCode::BAD_REQUEST);

        Ok(())
    }
}

mod login {
    use super::*;

    /// Expect 200 and a session for a registered account
    #[tokio::test]
    async fn logs_in_with_correct_password() -> Result<(), TestError> {
        let test = TestBuilder::new().with_hostel_tables().build().await?;
        let state = test.into_app_state();

        register(
            State(state.clone()),
            test.session.clone(),
            Json(registration("asha@example.com")),
        )
        .await
        .unwrap();
        test.session.clear().await;

        let result = login(
            State(state),
            test.session.clone(),
            Json(LoginDto {
                email: "asha@example.com".to_string(),
                password: "correct horse".to_string(),
            }),
        )
        .await;

        let (status, user): (_, UserDto) = json_body(result).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            SessionUserId::get(&test.session).await.unwrap(),
            Some(user.id)
        );

        Ok(())
    }

    /// Expect a session ID issued before login not to survive it
    #[tokio::test]
    async fn replaces_existing_session_id() -> Result<(), TestError> {
        let test = TestBuilder::new().with_hostel_tables().build().await?;
        let state = test.into_app_state();

        register(
            State(state.clone()),
            test.session.clone(),
            Json(registration("asha@example.com")),
        )
        .await
        .unwrap();
        test.session.clear().await;
        test.session.save().await.unwrap();
        let issued_id = test.session.id();
        assert!(issued_id.is_some());

        let result = login(
            State(state),
            test.session.clone(),
            Json(LoginDto {
                email: "asha@example.com".to_string(),
                password: "correct horse".to_string(),
            }),
        )
        .await;

        let (status, user): (_, UserDto) = json_body(result).await;
        assert_eq!(status, StatusCode::OK);
        assert_ne!(test.session.id(), issued_id);
        assert_eq!(
            SessionUserId::get(&test.session).await.unwrap(),
            Some(user.id)
        );

        Ok(())
    }

    /// Expect 401 and no session for a wrong password
    #[tokio::test]
    async fn rejects_wrong_password() -> Result<(), TestError> {
        let test = TestBuilder::new().with_hostel_tables().build().await?;
        let state = test.into_app_state();

        register(
            State(state.clone()),
            test.session.clone(),
            Json(registration("asha@example.com")),
        )
        .await
        .unwrap();
        test.session.clear().await;

        let result = login(
            State(state),
            test.session.clone(),
            Json(LoginDto {
                email: "asha@example.com".to_string(),
                password: "wrong horse".to_string(),
            }),
        )
        .await;

        assert_eq!(status(result), StatusCode::UNAUTHORIZED);
        assert_eq!(SessionUserId::get(&test.session).await.unwrap(), None);

        Ok(())
    }

    /// Expect 401 for an unknown email
    #[tokio::test]
    async fn rejects_unknown_email() -> Result<(), TestError> {
        let test = TestBuilder::new().with_hostel_tables().build().await?;

        let result = login(
            State(test.into_app_state()),
            test.session.clone(),
            Json(LoginDto {
                email: "nobody@example.com".to_string(),
                password: "whatever".to_string(),
            }),
        )
        .await;

        assert_eq!(status(result), StatusCode::UNAUTHORIZED);

        Ok(())
    }
}

mod logout {
    use super::*;

    /// Expect 204 and an empty session after logging out
    #[tokio::test]
    async fn clears_session() -> Result<(), TestError> {
        let test = TestBuilder::new().with_hostel_tables().build().await?;
        let user = test.user().insert_user(1, "student", None).await?;
        test.login_as(user.id).await;

        let result = logout(test.session.clone()).await;

        assert_eq!(status(result), StatusCode::NO_CONTENT);
        assert_eq!(SessionUserId::get(&test.session).await.unwrap(), None);

        Ok(())
    }

    /// Expect 204 when nobody is logged in
    #[tokio::test]
    async fn succeeds_without_session() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;

        let result = logout(test.session.clone()).await;

        assert_eq!(status(result), StatusCode::NO_CONTENT);

        Ok(())
    }
}

mod user {
    use super::*;

    /// Expect 401 without a session
    #[tokio::test]
    async fn requires_session() -> Result<(), TestError> {
        let test = TestBuilder::new().with_hostel_tables().build().await?;

        let result = get_user(State(test.into_app_state()), test.session.clone()).await;

        assert_eq!(status(result), StatusCode::UNAUTHORIZED);

        Ok(())
    }

    /// Expect 401 once the session user no longer exists
    #[tokio::test]
    async fn rejects_deleted_user() -> Result<(), TestError> {
        let test = TestBuilder::new().with_hostel_tables().build().await?;
        test.login_as(999).await;

        let result = get_user(State(test.into_app_state()), test.session.clone()).await;

        assert_eq!(status(result), StatusCode::UNAUTHORIZED);
        assert_eq!(SessionUserId::get(&test.session).await.unwrap(), None);

        Ok(())
    }
}
