use crate::{
    client::{error::ClientError, http::ApiClient},
    model::institution::{
        AdminAssignmentDto, AssignInstitutionDto, CreateInstitutionDto, InstitutionDto,
        UpdateInstitutionDto,
    },
};

pub struct InstitutionClient<'a> {
    api: &'a ApiClient,
}

impl ApiClient {
    pub fn institutions(&self) -> InstitutionClient<'_> {
        InstitutionClient { api: self }
    }
}

impl<'a> InstitutionClient<'a> {
    pub async fn list(&self) -> Result<Vec<InstitutionDto>, ClientError> {
        self.api.get("/api/institutions").await
    }

    pub async fn create(
        &self,
        institution: &CreateInstitutionDto,
    ) -> Result<InstitutionDto, ClientError> {
        self.api.post("/api/admin/institutions", institution).await
    }

    /// Makes the logged in user the admin of `institution_id`
    pub async fn assign(&self, institution_id: i32) -> Result<AdminAssignmentDto, ClientError> {
        self.api
            .post(
                "/api/admin/institutions/assign",
                &AssignInstitutionDto { institution_id },
            )
            .await
    }

    pub async fn get_mine(&self) -> Result<InstitutionDto, ClientError> {
        self.api.get("/api/admin/institutions/my").await
    }

    pub async fn update_mine(
        &self,
        changes: &UpdateInstitutionDto,
    ) -> Result<InstitutionDto, ClientError> {
        self.api.patch("/api/admin/institutions/my", changes).await
    }
}
