use crate::{
    client::{error::ClientError, http::ApiClient},
    model::warden::{CreateWardenDto, UpdateWardenDto, WardenDto},
};

pub struct WardenClient<'a> {
    api: &'a ApiClient,
}

impl ApiClient {
    pub fn wardens(&self) -> WardenClient<'_> {
        WardenClient { api: self }
    }
}

impl<'a> WardenClient<'a> {
    pub async fn list(&self) -> Result<Vec<WardenDto>, ClientError> {
        self.api.get("/api/admin/wardens").await
    }

    pub async fn get(&self, warden_id: i32) -> Result<WardenDto, ClientError> {
        self.api
            .get(&format!("/api/admin/wardens/{}", warden_id))
            .await
    }

    pub async fn create(&self, warden: &CreateWardenDto) -> Result<WardenDto, ClientError> {
        self.api.post("/api/admin/wardens", warden).await
    }

    pub async fn update(
        &self,
        warden_id: i32,
        changes: &UpdateWardenDto,
    ) -> Result<WardenDto, ClientError> {
        self.api
            .patch(&format!("/api/admin/wardens/{}", warden_id), changes)
            .await
    }

    pub async fn delete(&self, warden_id: i32) -> Result<(), ClientError> {
        self.api
            .delete(&format!("/api/admin/wardens/{}", warden_id))
            .await
    }
}
