use sea_orm::DatabaseConnection;

use crate::{
    model::user::{UpdateProfileDto, UserDto},
    server::{data::user::UserRepository, error::Error, util::validate::require_non_empty},
};

/// Service for reading and updating the caller's own account.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of UserService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a user account.
    ///
    /// # Returns
    /// - `Ok(Some(UserDto))` - User found
    /// - `Ok(None)` - User not found in database
    /// - `Err(Error::DbErr)` - Database operation failed
    /// - `Err(Error::ParseError)` - Stored role is not a known role
    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        let user_repo = UserRepository::new(self.db);

        user_repo.get(user_id).await?.map(UserDto::try_from).transpose()
    }

    /// Applies a partial profile update.
    ///
    /// Only name, phone, and gender can change; absent fields are left as they are.
    ///
    /// # Returns
    /// - `Ok(Some(UserDto))` - Updated user
    /// - `Ok(None)` - User not found in database
    /// - `Err(Error::ResourceError)` - A name was supplied but is blank
    pub async fn update_profile(
        &self,
        user_id: i32,
        profile: UpdateProfileDto,
    ) -> Result<Option<UserDto>, Error> {
        if let Some(name) = &profile.name {
            require_non_empty("name", name)?;
        }

        let user_repo = UserRepository::new(self.db);

        user_repo
            .update_profile(user_id, profile.name, profile.phone, profile.gender)
            .await?
            .map(UserDto::try_from)
            .transpose()
    }
}
