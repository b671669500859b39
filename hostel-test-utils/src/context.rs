//! Test context returned by [`TestBuilder`](crate::TestBuilder).

use std::sync::Arc;

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tower_sessions::{MemoryStore, Session};

use crate::{
    error::TestError,
    fixtures::{
        hostel::HostelFixtures, institution::InstitutionFixtures,
        maintenance::MaintenanceFixtures, student::StudentFixtures, user::UserFixtures,
        warden::WardenFixtures,
    },
};

/// Test environment with an in-memory SQLite database and a session store.
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
    /// Session for test authentication flows
    pub session: Session,
}

impl TestContext {
    /// Convert the database connection into any type that can be constructed from it.
    ///
    /// This allows conversion to `AppState` without a dependency on the server crate.
    ///
    /// ```ignore
    /// let state: AppState = test.to_app_state();
    /// ```
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.db.clone())
    }

    pub(crate) async fn new() -> Result<Self, TestError> {
        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(Self { db, session })
    }

    pub(crate) async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    pub fn institution(&self) -> InstitutionFixtures<'_> {
        InstitutionFixtures::new(&self.db)
    }

    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures::new(&self.db)
    }

    pub fn hostel(&self) -> HostelFixtures<'_> {
        HostelFixtures::new(&self.db)
    }

    pub fn warden(&self) -> WardenFixtures<'_> {
        WardenFixtures::new(&self.db)
    }

    pub fn student(&self) -> StudentFixtures<'_> {
        StudentFixtures::new(&self.db)
    }

    pub fn maintenance(&self) -> MaintenanceFixtures<'_> {
        MaintenanceFixtures::new(&self.db)
    }
}
