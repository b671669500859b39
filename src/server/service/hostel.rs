use sea_orm::DatabaseConnection;

use crate::{
    model::hostel::{CreateHostelDto, HostelDto, UpdateHostelDto},
    server::{
        data::hostel::HostelRepository,
        error::{resource::ResourceError, Error},
        util::validate::require_non_empty,
    },
};

pub struct HostelService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HostelService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, institution_id: i32) -> Result<Vec<HostelDto>, Error> {
        let hostels = HostelRepository::new(self.db).list(institution_id).await?;

        Ok(hostels.into_iter().map(HostelDto::from).collect())
    }

    pub async fn get(&self, institution_id: i32, hostel_id: i32) -> Result<HostelDto, Error> {
        let hostel = HostelRepository::new(self.db)
            .get(institution_id, hostel_id)
            .await?
            .ok_or(ResourceError::not_found("Hostel", hostel_id))?;

        Ok(hostel.into())
    }

    pub async fn create(
        &self,
        institution_id: i32,
        hostel: CreateHostelDto,
    ) -> Result<HostelDto, Error> {
        require_non_empty("name", &hostel.name)?;
        validate_totals(Some(hostel.total_blocks), Some(hostel.total_rooms))?;

        let hostel = HostelRepository::new(self.db)
            .create(institution_id, hostel)
            .await?;

        Ok(hostel.into())
    }

    pub async fn update(
        &self,
        institution_id: i32,
        hostel_id: i32,
        changes: UpdateHostelDto,
    ) -> Result<HostelDto, Error> {
        if let Some(name) = &changes.name {
            require_non_empty("name", name)?;
        }
        validate_totals(changes.total_blocks, changes.total_rooms)?;

        let hostel = HostelRepository::new(self.db)
            .update(institution_id, hostel_id, changes)
            .await?
            .ok_or(ResourceError::not_found("Hostel", hostel_id))?;

        Ok(hostel.into())
    }

    /// Deletes a hostel; its rooms go with it and students placed there lose their placement.
    pub async fn delete(&self, institution_id: i32, hostel_id: i32) -> Result<(), Error> {
        let result = HostelRepository::new(self.db)
            .delete(institution_id, hostel_id)
            .await?;

        if result.rows_affected == 0 {
            return Err(ResourceError::not_found("Hostel", hostel_id).into());
        }

        Ok(())
    }
}

fn validate_totals(total_blocks: Option<i32>, total_rooms: Option<i32>) -> Result<(), ResourceError> {
    if total_blocks.is_some_and(|n| n < 0) || total_rooms.is_some_and(|n| n < 0) {
        return Err(ResourceError::Validation(
            "Block and room totals must not be negative".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    mod create {
        use hostel_test_utils::prelude::*;

        use crate::{
            model::hostel::CreateHostelDto,
            server::{
                error::{resource::ResourceError, Error},
                service::hostel::HostelService,
            },
        };

        /// Expect the hostel to belong to the given institution
        #[tokio::test]
        async fn creates_hostel_in_institution() -> Result<(), TestError> {
            let test = TestBuilder::new().with_hostel_tables().build().await?;
            let institution = test.institution().insert_institution("NIT").await?;

            let hostel = HostelService::new(&test.db)
                .create(
                    institution.id,
                    CreateHostelDto {
                        name: "Ganga".to_string(),
                        address: "North Campus".to_string(),
                        total_blocks: 2,
                        total_rooms: 40,
                    },
                )
                .await
                .unwrap();

            assert_eq!(hostel.institution_id, institution.id);
            assert_eq!(hostel.total_rooms, 40);

            Ok(())
        }

        /// Expect Validation for negative totals
        #[tokio::test]
        async fn rejects_negative_totals() -> Result<(), TestError> {
            let test = TestBuilder::new().with_hostel_tables().build().await?;
            let institution = test.institution().insert_institution("NIT").await?;

            let result = HostelService::new(&test.db)
                .create(
                    institution.id,
                    CreateHostelDto {
                        name: "Ganga".to_string(),
                        address: "North Campus".to_string(),
                        total_blocks: -1,
                        total_rooms: 40,
                    },
                )
                .await;

            assert!(matches!(
                result,
                Err(Error::ResourceError(ResourceError::Validation(_)))
            ));

            Ok(())
        }
    }

    mod delete {
        use hostel_test_utils::prelude::*;

        use crate::server::{
            error::{resource::ResourceError, Error},
            service::hostel::HostelService,
        };

        /// Expect NotFound for a hostel of another institution
        #[tokio::test]
        async fn fails_for_other_institution() -> Result<(), TestError> {
            let test = TestBuilder::new().with_hostel_tables().build().await?;
            let ours = test.institution().insert_institution("NIT").await?;
            let theirs = test.institution().insert_institution("IIT").await?;
            let hostel = test.hostel().insert_hostel(theirs.id, "Ganga").await?;

            let result = HostelService::new(&test.db).delete(ours.id, hostel.id).await;

            assert!(matches!(
                result,
                Err(Error::ResourceError(ResourceError::NotFound { .. }))
            ));

            Ok(())
        }
    }
}
