use crate::{
    client::{error::ClientError, http::ApiClient},
    model::hostel::{CreateHostelDto, HostelDto, UpdateHostelDto},
};

pub struct HostelClient<'a> {
    api: &'a ApiClient,
}

impl ApiClient {
    pub fn hostels(&self) -> HostelClient<'_> {
        HostelClient { api: self }
    }
}

impl<'a> HostelClient<'a> {
    pub async fn list(&self) -> Result<Vec<HostelDto>, ClientError> {
        self.api.get("/api/admin/hostels").await
    }

    pub async fn get(&self, hostel_id: i32) -> Result<HostelDto, ClientError> {
        self.api
            .get(&format!("/api/admin/hostels/{}", hostel_id))
            .await
    }

    pub async fn create(&self, hostel: &CreateHostelDto) -> Result<HostelDto, ClientError> {
        self.api.post("/api/admin/hostels", hostel).await
    }

    pub async fn update(
        &self,
        hostel_id: i32,
        changes: &UpdateHostelDto,
    ) -> Result<HostelDto, ClientError> {
        self.api
            .patch(&format!("/api/admin/hostels/{}", hostel_id), changes)
            .await
    }

    pub async fn delete(&self, hostel_id: i32) -> Result<(), ClientError> {
        self.api
            .delete(&format!("/api/admin/hostels/{}", hostel_id))
            .await
    }
}
