use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Add entity tables with `with_table()` (referenced tables first), then call `build()`.
///
/// # Example
///
/// ```rust,ignore
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(RoomType)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement for the SQLite backend. Tables with foreign keys
    /// must be added after the tables they reference.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables needed for rooms: User, RoomType, Room.
    pub fn with_room_tables(self) -> Self {
        self.with_table(User).with_table(RoomType).with_table(Room)
    }

    /// Adds every table of the dormitory schema in dependency order.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_dormitory_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_dormitory_tables(self) -> Self {
        self.with_room_tables()
            .with_table(Queue)
            .with_table(Task)
            .with_table(Bill)
            .with_table(Parcel)
            .with_table(ChatMessage)
            .with_table(LandingPage)
    }

    /// Creates the in-memory database and executes the configured CREATE TABLE statements.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
