//! Helpers shared by the controller and router integration tests.

use axum::{body::to_bytes, http::StatusCode, response::IntoResponse};
use hostel::server::{error::Error, model::app::AppState, model::session::user::SessionUserId};
use hostel_test_utils::TestContext;
use serde::de::DeserializeOwned;

pub trait TestContextExt {
    fn into_app_state(&self) -> AppState;

    /// Stores `user_id` in the test session as if the user had logged in
    async fn login_as(&self, user_id: i32);
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        self.to_app_state()
    }

    async fn login_as(&self, user_id: i32) {
        SessionUserId::insert(&self.session, user_id)
            .await
            .unwrap();
    }
}

/// Status code of a handler result, converting errors the same way axum does
pub fn status<R: IntoResponse>(result: Result<R, Error>) -> StatusCode {
    match result {
        Ok(response) => response.into_response().status(),
        Err(err) => err.into_response().status(),
    }
}

/// Status code and decoded JSON body of a handler result
pub async fn json_body<R, T>(result: Result<R, Error>) -> (StatusCode, T)
where
    R: IntoResponse,
    T: DeserializeOwned,
{
    let response = match result {
        Ok(response) => response.into_response(),
        Err(err) => err.into_response(),
    };
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, serde_json::from_slice(&bytes).unwrap())
}
