use crate::{
    client::{error::ClientError, http::ApiClient},
    model::dashboard::DashboardDto,
};

pub struct DashboardClient<'a> {
    api: &'a ApiClient,
}

impl ApiClient {
    pub fn dashboard(&self) -> DashboardClient<'_> {
        DashboardClient { api: self }
    }
}

impl<'a> DashboardClient<'a> {
    pub async fn get(&self) -> Result<DashboardDto, ClientError> {
        self.api.get("/api/admin/dashboard").await
    }
}
