use std::collections::HashMap;

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        user::Role,
        warden::{CreateWardenDto, UpdateWardenDto, WardenDto},
    },
    server::{
        data::{
            hostel::HostelRepository,
            user::{NewUser, UserRepository},
            warden::WardenRepository,
        },
        error::{resource::ResourceError, Error},
        model::db::{warden_dto, UserModel, WardenModel},
        util::{
            password::hash_password,
            validate::{normalize_email, require_non_empty, validate_blocks},
        },
    },
};

/// Service for the wardens of an institution.
///
/// Each warden is a user account with role `warden` plus a warden record; both are created
/// and deleted together.
pub struct WardenService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WardenService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, institution_id: i32) -> Result<Vec<WardenDto>, Error> {
        let wardens = WardenRepository::new(self.db).list(institution_id).await?;
        let hostels: HashMap<i32, _> = HostelRepository::new(self.db)
            .list(institution_id)
            .await?
            .into_iter()
            .map(|hostel| (hostel.id, hostel))
            .collect();

        wardens
            .into_iter()
            .map(|(warden, user)| {
                let user = require_user(&warden, user)?;
                let hostel = warden.hostel_id.and_then(|id| hostels.get(&id).cloned());

                Ok(warden_dto(warden, user, hostel))
            })
            .collect()
    }

    pub async fn get(&self, institution_id: i32, warden_id: i32) -> Result<WardenDto, Error> {
        load_warden(self.db, institution_id, warden_id).await
    }

    /// Creates the warden's user account and warden record in one transaction.
    ///
    /// # Returns
    /// - `Err(Error::ResourceError(Validation))` - Blank name, email, password, or employee ID,
    ///   or a block label containing a comma
    /// - `Err(Error::ResourceError(Conflict))` - Email already registered
    /// - `Err(Error::ResourceError(NotFound))` - Hostel is not in the institution
    pub async fn create(
        &self,
        institution_id: i32,
        warden: CreateWardenDto,
    ) -> Result<WardenDto, Error> {
        require_non_empty("name", &warden.name)?;
        require_non_empty("email", &warden.email)?;
        require_non_empty("password", &warden.password)?;
        require_non_empty("employee_id", &warden.employee_id)?;
        validate_blocks(&warden.assigned_blocks)?;

        let email = normalize_email(&warden.email);
        let password_hash = hash_password(&warden.password)?;

        let txn = self.db.begin().await?;

        if let Some(hostel_id) = warden.hostel_id {
            require_hostel(&txn, institution_id, hostel_id).await?;
        }

        let user_repo = UserRepository::new(&txn);
        if user_repo.get_by_email(&email).await?.is_some() {
            return Err(ResourceError::Conflict("Email is already registered".to_string()).into());
        }

        let user = user_repo
            .create(NewUser {
                name: warden.name.trim().to_string(),
                email,
                password_hash,
                phone: warden.phone,
                gender: warden.gender,
                role: Role::Warden,
                institution_id: Some(institution_id),
            })
            .await?;

        let record = WardenRepository::new(&txn)
            .create(
                user.id,
                institution_id,
                warden.employee_id,
                warden.hostel_id,
                &warden.assigned_blocks,
            )
            .await?;

        let dto = load_warden(&txn, institution_id, record.id).await?;

        txn.commit().await?;

        Ok(dto)
    }

    pub async fn update(
        &self,
        institution_id: i32,
        warden_id: i32,
        changes: UpdateWardenDto,
    ) -> Result<WardenDto, Error> {
        if let Some(name) = &changes.name {
            require_non_empty("name", name)?;
        }
        if let Some(employee_id) = &changes.employee_id {
            require_non_empty("employee_id", employee_id)?;
        }
        if let Some(blocks) = &changes.assigned_blocks {
            validate_blocks(blocks)?;
        }

        let txn = self.db.begin().await?;

        let warden_repo = WardenRepository::new(&txn);
        let (warden, user) = warden_repo
            .get(institution_id, warden_id)
            .await?
            .ok_or(ResourceError::not_found("Warden", warden_id))?;
        let user = require_user(&warden, user)?;

        if let Some(Some(hostel_id)) = changes.hostel_id {
            require_hostel(&txn, institution_id, hostel_id).await?;
        }

        UserRepository::new(&txn)
            .update_profile(user.id, changes.name, changes.phone, changes.gender)
            .await?;
        warden_repo
            .update(
                warden,
                changes.employee_id,
                changes.hostel_id,
                changes.assigned_blocks,
            )
            .await?;

        let dto = load_warden(&txn, institution_id, warden_id).await?;

        txn.commit().await?;

        Ok(dto)
    }

    /// Deletes the warden record and the warden's user account.
    pub async fn delete(&self, institution_id: i32, warden_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        let warden_repo = WardenRepository::new(&txn);
        let (warden, _) = warden_repo
            .get(institution_id, warden_id)
            .await?
            .ok_or(ResourceError::not_found("Warden", warden_id))?;

        warden_repo.delete(warden.id).await?;
        UserRepository::new(&txn).delete(warden.user_id).await?;

        txn.commit().await?;

        Ok(())
    }
}

async fn load_warden<C: ConnectionTrait>(
    db: &C,
    institution_id: i32,
    warden_id: i32,
) -> Result<WardenDto, Error> {
    let (warden, user) = WardenRepository::new(db)
        .get(institution_id, warden_id)
        .await?
        .ok_or(ResourceError::not_found("Warden", warden_id))?;
    let user = require_user(&warden, user)?;

    let hostel = match warden.hostel_id {
        Some(hostel_id) => HostelRepository::new(db).get(institution_id, hostel_id).await?,
        None => None,
    };

    Ok(warden_dto(warden, user, hostel))
}

async fn require_hostel<C: ConnectionTrait>(
    db: &C,
    institution_id: i32,
    hostel_id: i32,
) -> Result<(), Error> {
    HostelRepository::new(db)
        .get(institution_id, hostel_id)
        .await?
        .ok_or(ResourceError::not_found("Hostel", hostel_id))?;

    Ok(())
}

fn require_user(warden: &WardenModel, user: Option<UserModel>) -> Result<UserModel, Error> {
    // Only reachable if the user foreign key is not enforced
    user.ok_or_else(|| {
        Error::InternalError(format!(
            "Failed to find user ID {} for warden ID {}",
            warden.user_id, warden.id
        ))
    })
}
