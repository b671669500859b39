use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter,
};

use crate::model::user::Role;

/// Values for a new user account.
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub phone: Option<String>,
    pub gender: Option<String>,
    pub role: Role,
    pub institution_id: Option<i32>,
}

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, user: NewUser) -> Result<entity::app_user::Model, DbErr> {
        let now = Utc::now().naive_utc();

        entity::app_user::ActiveModel {
            name: ActiveValue::Set(user.name),
            email: ActiveValue::Set(user.email),
            password_hash: ActiveValue::Set(user.password_hash),
            phone: ActiveValue::Set(user.phone),
            gender: ActiveValue::Set(user.gender),
            role: ActiveValue::Set(user.role.as_str().to_string()),
            institution_id: ActiveValue::Set(user.institution_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get(&self, user_id: i32) -> Result<Option<entity::app_user::Model>, DbErr> {
        entity::prelude::AppUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::app_user::Model>, DbErr> {
        entity::prelude::AppUser::find()
            .filter(entity::app_user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Updates the fields that are `Some`, leaving the rest unchanged
    ///
    /// Returns `None` if the user does not exist.
    pub async fn update_profile(
        &self,
        user_id: i32,
        name: Option<String>,
        phone: Option<String>,
        gender: Option<String>,
    ) -> Result<Option<entity::app_user::Model>, DbErr> {
        let Some(user) = self.get(user_id).await? else {
            return Ok(None);
        };

        let mut user_am = user.into_active_model();
        if let Some(name) = name {
            user_am.name = ActiveValue::Set(name);
        }
        if let Some(phone) = phone {
            user_am.phone = ActiveValue::Set(Some(phone));
        }
        if let Some(gender) = gender {
            user_am.gender = ActiveValue::Set(Some(gender));
        }
        user_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let user = user_am.update(self.db).await?;

        Ok(Some(user))
    }

    /// Sets the user's institution and role
    ///
    /// Returns `None` if the user does not exist.
    pub async fn set_institution_role(
        &self,
        user_id: i32,
        institution_id: i32,
        role: Role,
    ) -> Result<Option<entity::app_user::Model>, DbErr> {
        let Some(user) = self.get(user_id).await? else {
            return Ok(None);
        };

        let mut user_am = user.into_active_model();
        user_am.institution_id = ActiveValue::Set(Some(institution_id));
        user_am.role = ActiveValue::Set(role.as_str().to_string());
        user_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let user = user_am.update(self.db).await?;

        Ok(Some(user))
    }

    /// Deletes a user
    ///
    /// Returns OK regardless of user existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::AppUser::delete_by_id(user_id)
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::{model::user::Role, server::data::user::NewUser};

    fn new_user(email: &str) -> NewUser {
        NewUser {
            name: "Asha Rao".to_string(),
            email: email.to_string(),
            password_hash: "hash".to_string(),
            phone: None,
            gender: None,
            role: Role::Student,
            institution_id: None,
        }
    }

    mod create {
        use hostel_test_utils::prelude::*;

        use super::new_user;
        use crate::server::data::user::UserRepository;

        /// Expect success when creating a new user
        #[tokio::test]
        async fn creates_user() -> Result<(), TestError> {
            let test = TestBuilder::new().with_hostel_tables().build().await?;
            let user_repo = UserRepository::new(&test.db);

            let user = user_repo.create(new_user("asha@example.com")).await?;

            assert_eq!(user.email, "asha@example.com");
            assert_eq!(user.role, "student");
            assert_eq!(user.institution_id, None);

            Ok(())
        }

        /// Expect Error when the email is already taken
        #[tokio::test]
        async fn fails_for_duplicate_email() -> Result<(), TestError> {
            let test = TestBuilder::new().with_hostel_tables().build().await?;
            let user_repo = UserRepository::new(&test.db);
            user_repo.create(new_user("asha@example.com")).await?;

            let result = user_repo.create(new_user("asha@example.com")).await;

            assert!(result.is_err());

            Ok(())
        }

        /// Expect Error when required tables are not present
        #[tokio::test]
        async fn fails_when_tables_missing() -> Result<(), TestError> {
            let test = TestBuilder::new().build().await?;
            let user_repo = UserRepository::new(&test.db);

            let result = user_repo.create(new_user("asha@example.com")).await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod get_by_email {
        use hostel_test_utils::prelude::*;

        use crate::server::data::user::UserRepository;

        /// Expect the user with a matching email
        #[tokio::test]
        async fn finds_user() -> Result<(), TestError> {
            let test = TestBuilder::new().with_hostel_tables().build().await?;
            let user = test.user().insert_user(1, "student", None).await?;

            let result = UserRepository::new(&test.db)
                .get_by_email(&user.email)
                .await?;

            assert_eq!(result.map(|u| u.id), Some(user.id));

            Ok(())
        }

        /// Expect None for an unknown email
        #[tokio::test]
        async fn returns_none_for_unknown_email() -> Result<(), TestError> {
            let test = TestBuilder::new().with_hostel_tables().build().await?;
            test.user().insert_user(1, "student", None).await?;

            let result = UserRepository::new(&test.db)
                .get_by_email("nobody@example.com")
                .await?;

            assert!(result.is_none());

            Ok(())
        }
    }

    mod update_profile {
        use hostel_test_utils::prelude::*;

        use crate::server::data::user::UserRepository;

        /// Expect only the provided fields to change
        #[tokio::test]
        async fn updates_only_provided_fields() -> Result<(), TestError> {
            let test = TestBuilder::new().with_hostel_tables().build().await?;
            let user = test.user().insert_user(1, "student", None).await?;

            let updated = UserRepository::new(&test.db)
                .update_profile(user.id, None, Some("555-9999".to_string()), None)
                .await?
                .unwrap();

            assert_eq!(updated.name, user.name);
            assert_eq!(updated.phone.as_deref(), Some("555-9999"));
            assert_eq!(updated.gender, user.gender);

            Ok(())
        }

        /// Expect None for a user that does not exist
        #[tokio::test]
        async fn returns_none_for_missing_user() -> Result<(), TestError> {
            let test = TestBuilder::new().with_hostel_tables().build().await?;

            let result = UserRepository::new(&test.db)
                .update_profile(1, Some("Name".to_string()), None, None)
                .await?;

            assert!(result.is_none());

            Ok(())
        }
    }

    mod set_institution_role {
        use hostel_test_utils::prelude::*;

        use crate::{model::user::Role, server::data::user::UserRepository};

        /// Expect the institution and role to be set
        #[tokio::test]
        async fn sets_institution_and_role() -> Result<(), TestError> {
            let test = TestBuilder::new().with_hostel_tables().build().await?;
            let institution = test.institution().insert_institution("NIT").await?;
            let user = test.user().insert_user(1, "student", None).await?;

            let updated = UserRepository::new(&test.db)
                .set_institution_role(user.id, institution.id, Role::Admin)
                .await?
                .unwrap();

            assert_eq!(updated.role, "admin");
            assert_eq!(updated.institution_id, Some(institution.id));

            Ok(())
        }
    }

    mod delete {
        use hostel_test_utils::prelude::*;
        use sea_orm::EntityTrait;

        use crate::server::data::user::UserRepository;

        /// Expect the user and their warden record to be removed
        #[tokio::test]
        async fn deletes_user_and_dependent_records() -> Result<(), TestError> {
            let test = TestBuilder::new().with_hostel_tables().build().await?;
            let institution = test.institution().insert_institution("NIT").await?;
            let (user, warden) = test.warden().insert_warden(1, institution.id, None).await?;

            let result = UserRepository::new(&test.db).delete(user.id).await?;

            assert_eq!(result.rows_affected, 1);
            let warden_exists = entity::prelude::Warden::find_by_id(warden.id)
                .one(&test.db)
                .await?;
            assert!(warden_exists.is_none());

            Ok(())
        }

        /// Expect no rows to be affected when deleting a user that does not exist
        #[tokio::test]
        async fn affects_no_rows_for_missing_user() -> Result<(), TestError> {
            let test = TestBuilder::new().with_hostel_tables().build().await?;

            let result = UserRepository::new(&test.db).delete(1).await?;

            assert_eq!(result.rows_affected, 0);

            Ok(())
        }
    }
}
