//! Shared test utilities for `RawrBot`.
//!
//! Helpers for setting up in-memory test databases and seeding edit
//! history fixtures.

use crate::core::edits::{self, EditCache, EditEntry};
use crate::errors::Result;
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Records a test edit with a fixed channel id.
pub async fn create_test_edit(
    db: &DatabaseConnection,
    cache: &EditCache,
    message_id: &str,
    content: &str,
) -> Result<EditEntry> {
    edits::record_edit(db, cache, message_id, "test_channel", content).await
}

/// Sets up a database plus a cache seeded with `count` edits of one message.
pub async fn setup_with_edits(
    message_id: &str,
    count: usize,
) -> Result<(DatabaseConnection, EditCache)> {
    let db = setup_test_db().await?;
    let cache = EditCache::default();
    for i in 0..count {
        create_test_edit(&db, &cache, message_id, &format!("revision {i}")).await?;
    }
    Ok((db, cache))
}
