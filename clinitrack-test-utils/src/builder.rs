//! Declarative test builder for database setup.
//!
//! Tables are either generated from entities or created by running the real migrations.
//! All queued operations are executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Methods can be chained together and finalized with `build()` to create a
/// [`TestContext`] backed by an in-memory SQLite database.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_hierarchy_tables: bool,
    include_insurer_tables: bool,
    run_migrations: bool,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_hierarchy_tables: false,
            include_insurer_tables: false,
            run_migrations: false,
        }
    }

    /// Add the process, subprocess, project and task tables.
    pub fn with_hierarchy_tables(mut self) -> Self {
        self.include_hierarchy_tables = true;
        self
    }

    /// Add the insurer and contract tables.
    pub fn with_insurer_tables(mut self) -> Self {
        self.include_insurer_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Parent tables must be added before the tables referencing them.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use clinitrack_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn setup() -> Result<(), clinitrack_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Insurer)
    ///     .with_table(Contract)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Create the full schema by running the application's migrations.
    ///
    /// Takes precedence over any table configured through the other builder methods.
    pub fn with_migrations(mut self) -> Self {
        self.run_migrations = true;
        self
    }

    /// Build the test context, creating the configured schema.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Database ready for the test
    /// - `Err(TestError::DbErr)` - Connection, migration or table creation failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new().await?;

        if self.run_migrations {
            context.with_migrations().await?;
            return Ok(context);
        }

        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        let mut all_tables = Vec::new();

        if self.include_hierarchy_tables {
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Process),
                schema.create_table_from_entity(entity::prelude::Subprocess),
                schema.create_table_from_entity(entity::prelude::Project),
                schema.create_table_from_entity(entity::prelude::Task),
            ]);
        }

        if self.include_insurer_tables {
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Insurer),
                schema.create_table_from_entity(entity::prelude::Contract),
            ]);
        }

        all_tables.extend(self.tables);
        context.with_tables(all_tables).await?;

        Ok(context)
    }
}
