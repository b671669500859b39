use crate::{
    client::{error::ClientError, http::ApiClient},
    model::maintenance::{
        CreateMaintenanceRequestDto, MaintenanceQuery, MaintenanceRequestDto, MaintenanceStatus,
        UpdateMaintenanceRequestDto,
    },
};

pub struct MaintenanceClient<'a> {
    api: &'a ApiClient,
}

impl ApiClient {
    pub fn maintenance(&self) -> MaintenanceClient<'_> {
        MaintenanceClient { api: self }
    }
}

impl<'a> MaintenanceClient<'a> {
    /// Admin listing of the institution's requests, optionally by status
    pub async fn list(
        &self,
        status: Option<MaintenanceStatus>,
    ) -> Result<Vec<MaintenanceRequestDto>, ClientError> {
        self.api
            .get_with_query("/api/admin/maintenance", &MaintenanceQuery { status })
            .await
    }

    pub async fn update(
        &self,
        request_id: i32,
        changes: &UpdateMaintenanceRequestDto,
    ) -> Result<MaintenanceRequestDto, ClientError> {
        self.api
            .patch(&format!("/api/admin/maintenance/{}", request_id), changes)
            .await
    }

    pub async fn delete(&self, request_id: i32) -> Result<(), ClientError> {
        self.api
            .delete(&format!("/api/admin/maintenance/{}", request_id))
            .await
    }

    /// Student submission for their own room
    pub async fn submit(
        &self,
        request: &CreateMaintenanceRequestDto,
    ) -> Result<MaintenanceRequestDto, ClientError> {
        self.api.post("/api/maintenance", request).await
    }

    pub async fn list_mine(&self) -> Result<Vec<MaintenanceRequestDto>, ClientError> {
        self.api.get("/api/maintenance").await
    }
}
