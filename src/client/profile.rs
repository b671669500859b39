use crate::{
    client::{error::ClientError, http::ApiClient},
    model::user::{UpdateProfileDto, UserDto},
};

pub struct ProfileClient<'a> {
    api: &'a ApiClient,
}

impl ApiClient {
    pub fn profile(&self) -> ProfileClient<'_> {
        ProfileClient { api: self }
    }
}

impl<'a> ProfileClient<'a> {
    pub async fn get(&self) -> Result<UserDto, ClientError> {
        self.api.get("/api/profile").await
    }

    /// Only the fields set on `profile` are sent and changed
    pub async fn update(&self, profile: &UpdateProfileDto) -> Result<UserDto, ClientError> {
        self.api.patch("/api/profile", profile).await
    }
}
