use crate::{
    client::{error::ClientError, http::ApiClient},
    model::user::{LoginDto, RegisterDto, UserDto},
};

pub struct AuthClient<'a> {
    api: &'a ApiClient,
}

impl ApiClient {
    pub fn auth(&self) -> AuthClient<'_> {
        AuthClient { api: self }
    }
}

impl<'a> AuthClient<'a> {
    /// Registers a student account; the client is logged in afterwards
    pub async fn register(&self, registration: &RegisterDto) -> Result<UserDto, ClientError> {
        self.api.post("/api/auth/register", registration).await
    }

    pub async fn login(&self, credentials: &LoginDto) -> Result<UserDto, ClientError> {
        self.api.post("/api/auth/login", credentials).await
    }

    pub async fn logout(&self) -> Result<(), ClientError> {
        self.api.get_empty("/api/auth/logout").await
    }

    pub async fn current_user(&self) -> Result<UserDto, ClientError> {
        self.api.get("/api/auth/user").await
    }
}
