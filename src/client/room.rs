use crate::{
    client::{error::ClientError, http::ApiClient},
    model::room::{CreateRoomDto, RoomDto, RoomQuery, UpdateRoomDto},
};

pub struct RoomClient<'a> {
    api: &'a ApiClient,
}

impl ApiClient {
    pub fn rooms(&self) -> RoomClient<'_> {
        RoomClient { api: self }
    }
}

impl<'a> RoomClient<'a> {
    /// Lists the institution's rooms, only those of `hostel_id` when given
    pub async fn list(&self, hostel_id: Option<i32>) -> Result<Vec<RoomDto>, ClientError> {
        self.api
            .get_with_query("/api/admin/rooms", &RoomQuery { hostel_id })
            .await
    }

    pub async fn get(&self, room_id: i32) -> Result<RoomDto, ClientError> {
        self.api.get(&format!("/api/admin/rooms/{}", room_id)).await
    }

    pub async fn create(&self, room: &CreateRoomDto) -> Result<RoomDto, ClientError> {
        self.api.post("/api/admin/rooms", room).await
    }

    pub async fn update(
        &self,
        room_id: i32,
        changes: &UpdateRoomDto,
    ) -> Result<RoomDto, ClientError> {
        self.api
            .patch(&format!("/api/admin/rooms/{}", room_id), changes)
            .await
    }

    pub async fn delete(&self, room_id: i32) -> Result<(), ClientError> {
        self.api
            .delete(&format!("/api/admin/rooms/{}", room_id))
            .await
    }
}
