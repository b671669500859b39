use sea_orm::DatabaseConnection;

use crate::{
    model::room::{CreateRoomDto, RoomDto, RoomStatus, UpdateRoomDto},
    server::{
        data::{hostel::HostelRepository, room::RoomRepository},
        error::{resource::ResourceError, Error},
        model::db::parse_column,
        util::validate::require_non_empty,
    },
};

/// Service for rooms of an institution's hostels.
///
/// Occupancy is only changed by student placement; this service keeps capacity and status
/// consistent with it.
pub struct RoomService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoomService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(
        &self,
        institution_id: i32,
        hostel_id: Option<i32>,
    ) -> Result<Vec<RoomDto>, Error> {
        let rooms = RoomRepository::new(self.db)
            .list(institution_id, hostel_id)
            .await?;

        rooms.into_iter().map(RoomDto::try_from).collect()
    }

    pub async fn get(&self, institution_id: i32, room_id: i32) -> Result<RoomDto, Error> {
        let room = RoomRepository::new(self.db)
            .get(institution_id, room_id)
            .await?
            .ok_or(ResourceError::not_found("Room", room_id))?;

        RoomDto::try_from(room)
    }

    /// Creates an empty room in one of the institution's hostels.
    ///
    /// # Returns
    /// - `Err(Error::ResourceError(NotFound))` - Hostel is not in the institution
    /// - `Err(Error::ResourceError(Validation))` - Blank room number or capacity below 1
    /// - `Err(Error::ResourceError(Conflict))` - Room number already used in the hostel
    pub async fn create(&self, institution_id: i32, room: CreateRoomDto) -> Result<RoomDto, Error> {
        require_non_empty("room_number", &room.room_number)?;
        validate_capacity(room.capacity)?;

        HostelRepository::new(self.db)
            .get(institution_id, room.hostel_id)
            .await?
            .ok_or(ResourceError::not_found("Hostel", room.hostel_id))?;

        let room_repo = RoomRepository::new(self.db);
        if room_repo
            .get_by_number(room.hostel_id, &room.room_number)
            .await?
            .is_some()
        {
            return Err(room_number_conflict(&room.room_number).into());
        }

        let room = room_repo.create(room).await?;

        RoomDto::try_from(room)
    }

    /// Applies a partial update.
    ///
    /// The resulting status is the requested (or current) status adjusted to the room's
    /// occupancy: a full room is `occupied`, one with free beds is `available`, and
    /// `maintenance` is kept as is.
    ///
    /// # Returns
    /// - `Err(Error::ResourceError(Conflict))` - Capacity below current occupancy, or the new
    ///   room number is taken in the hostel
    pub async fn update(
        &self,
        institution_id: i32,
        room_id: i32,
        changes: UpdateRoomDto,
    ) -> Result<RoomDto, Error> {
        let room_repo = RoomRepository::new(self.db);
        let room = room_repo
            .get(institution_id, room_id)
            .await?
            .ok_or(ResourceError::not_found("Room", room_id))?;

        if let Some(capacity) = changes.capacity {
            validate_capacity(capacity)?;

            if capacity < room.occupancy {
                return Err(ResourceError::Conflict(format!(
                    "Capacity {} is below the current occupancy of {}",
                    capacity, room.occupancy
                ))
                .into());
            }
        }

        if let Some(room_number) = &changes.room_number {
            require_non_empty("room_number", room_number)?;

            if *room_number != room.room_number
                && room_repo
                    .get_by_number(room.hostel_id, room_number)
                    .await?
                    .is_some()
            {
                return Err(room_number_conflict(room_number).into());
            }
        }

        let current: RoomStatus = parse_column(&room.status)?;
        let capacity = changes.capacity.unwrap_or(room.capacity);
        let status = changes
            .status
            .unwrap_or(current)
            .for_occupancy(room.occupancy, capacity);

        let room = room_repo.update(room, changes, status).await?;

        RoomDto::try_from(room)
    }

    /// Deletes an empty room.
    ///
    /// # Returns
    /// - `Err(Error::ResourceError(Conflict))` - Students are still placed in the room
    pub async fn delete(&self, institution_id: i32, room_id: i32) -> Result<(), Error> {
        let room_repo = RoomRepository::new(self.db);
        let room = room_repo
            .get(institution_id, room_id)
            .await?
            .ok_or(ResourceError::not_found("Room", room_id))?;

        if room.occupancy > 0 {
            return Err(ResourceError::Conflict(
                "Room still has students assigned".to_string(),
            )
            .into());
        }

        room_repo.delete(room.id).await?;

        Ok(())
    }
}

fn validate_capacity(capacity: i32) -> Result<(), ResourceError> {
    if capacity < 1 {
        return Err(ResourceError::Validation(
            "capacity must be at least 1".to_string(),
        ));
    }

    Ok(())
}

fn room_number_conflict(room_number: &str) -> ResourceError {
    ResourceError::Conflict(format!(
        "Room number {} already exists in this hostel",
        room_number
    ))
}
