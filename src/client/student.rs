use crate::{
    client::{error::ClientError, http::ApiClient},
    model::student::{CreateStudentDto, StudentDto, UpdateStudentDto},
};

pub struct StudentClient<'a> {
    api: &'a ApiClient,
}

impl ApiClient {
    pub fn students(&self) -> StudentClient<'_> {
        StudentClient { api: self }
    }
}

impl<'a> StudentClient<'a> {
    pub async fn list(&self) -> Result<Vec<StudentDto>, ClientError> {
        self.api.get("/api/admin/students").await
    }

    pub async fn get(&self, student_id: i32) -> Result<StudentDto, ClientError> {
        self.api
            .get(&format!("/api/admin/students/{}", student_id))
            .await
    }

    pub async fn create(&self, student: &CreateStudentDto) -> Result<StudentDto, ClientError> {
        self.api.post("/api/admin/students", student).await
    }

    /// `room_id: Some(None)` releases the student's room
    pub async fn update(
        &self,
        student_id: i32,
        changes: &UpdateStudentDto,
    ) -> Result<StudentDto, ClientError> {
        self.api
            .patch(&format!("/api/admin/students/{}", student_id), changes)
            .await
    }

    pub async fn delete(&self, student_id: i32) -> Result<(), ClientError> {
        self.api
            .delete(&format!("/api/admin/students/{}", student_id))
            .await
    }
}
