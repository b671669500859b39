use sea_orm::DatabaseConnection;

use crate::{
    model::user::{LoginDto, RegisterDto, Role, UserDto},
    server::{
        data::user::{NewUser, UserRepository},
        error::{auth::AuthError, resource::ResourceError, Error},
        util::{
            password::{hash_password, verify_password},
            validate::{normalize_email, require_non_empty},
        },
    },
};

/// Service for account registration and password login.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a student account without an institution.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - Created user
    /// - `Err(Error::ResourceError(Validation))` - Blank name, email, or password
    /// - `Err(Error::ResourceError(Conflict))` - Email already registered
    pub async fn register(&self, registration: RegisterDto) -> Result<UserDto, Error> {
        require_non_empty("name", &registration.name)?;
        require_non_empty("email", &registration.email)?;
        require_non_empty("password", &registration.password)?;

        let user_repo = UserRepository::new(self.db);
        let email = normalize_email(&registration.email);

        if user_repo.get_by_email(&email).await?.is_some() {
            return Err(ResourceError::Conflict("Email is already registered".to_string()).into());
        }

        let user = user_repo
            .create(NewUser {
                name: registration.name.trim().to_string(),
                email,
                password_hash: hash_password(&registration.password)?,
                phone: registration.phone,
                gender: registration.gender,
                role: Role::Student,
                institution_id: None,
            })
            .await?;

        tracing::info!("Registered user ID {}", user.id);

        UserDto::try_from(user)
    }

    /// Verifies an email and password pair.
    ///
    /// Unknown emails and wrong passwords produce the same error.
    pub async fn login(&self, credentials: LoginDto) -> Result<UserDto, Error> {
        let user_repo = UserRepository::new(self.db);
        let email = normalize_email(&credentials.email);

        let Some(user) = user_repo.get_by_email(&email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(&credentials.password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        UserDto::try_from(user)
    }
}
