//! Database configuration module for `RawrBot`.
//!
//! This module handles `SQLite` database connection and table creation using
//! `SeaORM`. Table creation uses `Schema::create_table_from_entity` so the
//! database schema always matches the entity definitions without manual SQL.

use crate::entities::MessageEdit;
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Establishes a connection to the `SQLite` database at the given URL.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    Database::connect(database_url).await.map_err(Into::into)
}

/// Creates all necessary database tables from the entity definitions.
///
/// Currently the only persisted table is `message_edits`; everything else
/// the bot does is stateless.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut message_edit_table = schema.create_table_from_entity(MessageEdit);
    db.execute(builder.build(message_edit_table.if_not_exists()))
        .await?;

    Ok(())
}
