use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        institution::{
            AdminAssignmentDto, CreateInstitutionDto, InstitutionDto, UpdateInstitutionDto,
        },
        user::Role,
    },
    server::{
        data::{
            admin::AdminRepository, institution::InstitutionRepository,
            student::StudentRepository, user::UserRepository, warden::WardenRepository,
        },
        error::{auth::AuthError, resource::ResourceError, Error},
        util::{employee_id::generate_admin_employee_id, validate::require_non_empty},
    },
};

/// Generated employee IDs tried before giving up on finding an unused one.
const EMPLOYEE_ID_ATTEMPTS: usize = 5;

/// Service for institutions and administrator assignment.
pub struct InstitutionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InstitutionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<InstitutionDto>, Error> {
        let institutions = InstitutionRepository::new(self.db).list().await?;

        Ok(institutions.into_iter().map(InstitutionDto::from).collect())
    }

    /// Creates an institution.
    ///
    /// # Returns
    /// - `Ok(InstitutionDto)` - Created institution
    /// - `Err(Error::ResourceError(Validation))` - Blank code, name, or address
    /// - `Err(Error::ResourceError(Conflict))` - Code already in use
    pub async fn create(&self, institution: CreateInstitutionDto) -> Result<InstitutionDto, Error> {
        require_non_empty("code", &institution.code)?;
        require_non_empty("name", &institution.name)?;
        require_non_empty("address", &institution.address)?;

        let institution_repo = InstitutionRepository::new(self.db);

        if institution_repo.get_by_code(&institution.code).await?.is_some() {
            return Err(ResourceError::Conflict(format!(
                "Institution code {} is already in use",
                institution.code
            ))
            .into());
        }

        let institution = institution_repo.create(institution).await?;

        Ok(institution.into())
    }

    /// Retrieves the institution a user belongs to.
    ///
    /// # Returns
    /// - `Err(Error::AuthError(NoInstitution))` - The user has no institution
    /// - `Err(Error::ResourceError(NotFound))` - The referenced institution no longer exists
    pub async fn get_for_user(
        &self,
        user_id: i32,
        institution_id: Option<i32>,
    ) -> Result<InstitutionDto, Error> {
        let institution_id = institution_id.ok_or(AuthError::NoInstitution(user_id))?;

        let institution = InstitutionRepository::new(self.db)
            .get(institution_id)
            .await?
            .ok_or(ResourceError::not_found("Institution", institution_id))?;

        Ok(institution.into())
    }

    pub async fn update(
        &self,
        institution_id: i32,
        changes: UpdateInstitutionDto,
    ) -> Result<InstitutionDto, Error> {
        if let Some(name) = &changes.name {
            require_non_empty("name", name)?;
        }

        let institution = InstitutionRepository::new(self.db)
            .update(institution_id, changes)
            .await?
            .ok_or(ResourceError::not_found("Institution", institution_id))?;

        Ok(institution.into())
    }

    /// Makes the user the administrator of an institution.
    ///
    /// Sets the user's institution and `admin` role, then records the administrator with a
    /// generated employee ID. A user who already administers an institution has their
    /// existing record moved, keeping its employee ID. Both writes share one transaction.
    ///
    /// # Returns
    /// - `Ok(AdminAssignmentDto)` - Institution and employee ID of the administrator
    /// - `Err(Error::ResourceError(NotFound))` - Institution does not exist
    /// - `Err(Error::ResourceError(Conflict))` - User has a student or warden record
    /// - `Err(Error::AuthError(UserNotInDatabase))` - User does not exist
    /// - `Err(Error::DbErr)` - A write failed; nothing was changed
    pub async fn assign_admin(
        &self,
        user_id: i32,
        institution_id: i32,
    ) -> Result<AdminAssignmentDto, Error> {
        let txn = self.db.begin().await?;

        let institution = InstitutionRepository::new(&txn)
            .get(institution_id)
            .await?
            .ok_or(ResourceError::not_found("Institution", institution_id))?;

        if StudentRepository::new(&txn)
            .get_by_user_id(user_id)
            .await?
            .is_some()
        {
            return Err(ResourceError::Conflict(
                "Students cannot be assigned as administrators".to_string(),
            )
            .into());
        }
        if WardenRepository::new(&txn)
            .get_by_user_id(user_id)
            .await?
            .is_some()
        {
            return Err(ResourceError::Conflict(
                "Wardens cannot be assigned as administrators".to_string(),
            )
            .into());
        }

        UserRepository::new(&txn)
            .set_institution_role(user_id, institution.id, Role::Admin)
            .await?
            .ok_or(AuthError::UserNotInDatabase(user_id))?;

        let admin_repo = AdminRepository::new(&txn);
        let admin = match admin_repo.get_by_user_id(user_id).await? {
            Some(existing) => admin_repo.set_institution(existing, institution.id).await?,
            None => {
                let employee_id =
                    unused_employee_id(&admin_repo, generate_admin_employee_id).await?;

                admin_repo
                    .create(user_id, institution.id, employee_id)
                    .await?
            }
        };

        txn.commit().await?;

        tracing::info!(
            "User ID {} assigned as administrator of institution ID {}",
            user_id,
            institution.id
        );

        Ok(AdminAssignmentDto {
            institution: institution.into(),
            employee_id: admin.employee_id,
        })
    }
}

/// Draws employee IDs until one is not held by another administrator.
async fn unused_employee_id<C: ConnectionTrait>(
    admin_repo: &AdminRepository<'_, C>,
    mut generate: impl FnMut() -> String,
) -> Result<String, Error> {
    for _ in 0..EMPLOYEE_ID_ATTEMPTS {
        let employee_id = generate();

        if admin_repo.get_by_employee_id(&employee_id).await?.is_none() {
            return Ok(employee_id);
        }

        tracing::debug!("Employee ID {} is taken, generating another", employee_id);
    }

    Err(Error::InternalError(format!(
        "Failed to generate an unused employee ID in {} attempts",
        EMPLOYEE_ID_ATTEMPTS
    )))
}
