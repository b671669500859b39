//! Declarative test builder.
//!
//! Queues table creation statements and executes them during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, DbBackend, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// ```ignore
/// let test = TestBuilder::new().with_hostel_tables().build().await?;
/// ```
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Creates a builder with no tables; a context built from it fails every query.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds the table for a single entity.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds every application table, in foreign key order.
    pub fn with_hostel_tables(self) -> Self {
        self.with_table(entity::prelude::Institution)
            .with_table(entity::prelude::AppUser)
            .with_table(entity::prelude::Admin)
            .with_table(entity::prelude::Hostel)
            .with_table(entity::prelude::Room)
            .with_table(entity::prelude::Warden)
            .with_table(entity::prelude::Student)
            .with_table(entity::prelude::MaintenanceRequest)
    }

    /// Creates the test context and executes the queued table statements.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new().await?;
        context.with_tables(self.tables).await?;

        Ok(context)
    }
}
