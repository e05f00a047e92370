//! Message edit history - cache and persistence.
//!
//! Every observed edit stores the message's PREVIOUS content, keyed by the
//! message snowflake. Reads hit an in-memory cache first and fall back to
//! the database, repopulating the cache on the way out.

use crate::entities::{MessageEdit, MessageEditColumn, message_edit};
use crate::errors::Result;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};
use std::collections::{HashMap, VecDeque};
use tokio::sync::RwLock;
use tracing::{debug, trace};

/// Most messages held in memory at once. The database keeps the full
/// history; an evicted message reloads from it on the next lookup.
const MAX_TRACKED_MESSAGES: usize = 1024;

/// One recorded edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditEntry {
    /// Content of the message before the edit
    pub content: String,
    /// When the edit was observed
    pub edited_at: DateTime<Utc>,
}

impl From<message_edit::Model> for EditEntry {
    fn from(model: message_edit::Model) -> Self {
        Self {
            content: model.content,
            edited_at: model.edited_at,
        }
    }
}

/// In-memory edit history, message id → edits in observation order.
/// Shared across command invocations and the gateway event handler.
///
/// Bounded to [`MAX_TRACKED_MESSAGES`] messages; once full, the message
/// tracked longest is dropped from memory (never from the database).
#[derive(Debug, Default)]
pub struct EditCache {
    entries: RwLock<CacheInner>,
}

#[derive(Debug, Default)]
struct CacheInner {
    histories: HashMap<String, Vec<EditEntry>>,
    // Insertion order of the keys in `histories`, oldest first
    insertion_order: VecDeque<String>,
}

impl CacheInner {
    fn append(&mut self, message_id: &str, entry: EditEntry) {
        if !self.histories.contains_key(message_id) {
            self.insertion_order.push_back(message_id.to_string());
        }
        self.histories
            .entry(message_id.to_string())
            .or_default()
            .push(entry);
        self.evict_over_limit();
    }

    fn replace(&mut self, message_id: &str, entries: Vec<EditEntry>) {
        if !self.histories.contains_key(message_id) {
            self.insertion_order.push_back(message_id.to_string());
        }
        self.histories.insert(message_id.to_string(), entries);
        self.evict_over_limit();
    }

    fn evict_over_limit(&mut self) {
        while self.histories.len() > MAX_TRACKED_MESSAGES {
            let Some(oldest) = self.insertion_order.pop_front() else {
                break;
            };
            self.histories.remove(&oldest);
        }
    }
}

/// Records one edit: appends to the cache and persists a row.
pub async fn record_edit(
    db: &DatabaseConnection,
    cache: &EditCache,
    message_id: &str,
    channel_id: &str,
    previous_content: &str,
) -> Result<EditEntry> {
    let model = message_edit::ActiveModel {
        message_id: Set(message_id.to_string()),
        channel_id: Set(channel_id.to_string()),
        content: Set(previous_content.to_string()),
        edited_at: Set(Utc::now()),
        ..Default::default()
    };
    let inserted = model.insert(db).await?;
    debug!("Recorded edit for message {message_id}");

    let entry = EditEntry::from(inserted);
    let mut writer = cache.entries.write().await;
    writer.append(message_id, entry.clone());

    Ok(entry)
}

/// Returns the full edit history for a message, oldest first.
///
/// Cache hits return directly; misses load from the database and seed the
/// cache so repeated lookups stay cheap.
pub async fn get_edits(
    db: &DatabaseConnection,
    cache: &EditCache,
    message_id: &str,
) -> Result<Vec<EditEntry>> {
    {
        let reader = cache.entries.read().await;
        if let Some(entries) = reader.histories.get(message_id) {
            trace!("Edit cache hit for message {message_id}");
            return Ok(entries.clone());
        }
    }

    let entries: Vec<EditEntry> = MessageEdit::find()
        .filter(MessageEditColumn::MessageId.eq(message_id))
        .order_by_asc(MessageEditColumn::EditedAt)
        .order_by_asc(MessageEditColumn::Id)
        .all(db)
        .await?
        .into_iter()
        .map(EditEntry::from)
        .collect();

    if !entries.is_empty() {
        let mut writer = cache.entries.write().await;
        writer.replace(message_id, entries.clone());
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::setup_test_db;

    #[tokio::test]
    async fn test_record_and_read_back() -> Result<()> {
        let db = setup_test_db().await?;
        let cache = EditCache::default();

        record_edit(&db, &cache, "111", "222", "first version").await?;
        record_edit(&db, &cache, "111", "222", "second version").await?;

        let edits = get_edits(&db, &cache, "111").await?;
        assert_eq!(edits.len(), 2);
        assert_eq!(edits[0].content, "first version");
        assert_eq!(edits[1].content, "second version");
        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_message_has_no_edits() -> Result<()> {
        let db = setup_test_db().await?;
        let cache = EditCache::default();

        let edits = get_edits(&db, &cache, "999").await?;
        assert!(edits.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_cache_survives_without_db_rows() -> Result<()> {
        // A cold cache must repopulate from the database
        let db = setup_test_db().await?;
        let warm = EditCache::default();
        record_edit(&db, &warm, "42", "7", "old text").await?;

        let cold = EditCache::default();
        let edits = get_edits(&db, &cold, "42").await?;
        assert_eq!(edits.len(), 1);
        assert_eq!(edits[0].content, "old text");

        // Second read should be served from the now-seeded cache
        let again = get_edits(&db, &cold, "42").await?;
        assert_eq!(again, edits);
        Ok(())
    }

    #[tokio::test]
    async fn test_cache_evicts_oldest_messages_but_db_remembers() -> Result<()> {
        let db = setup_test_db().await?;
        let cache = EditCache::default();

        for i in 0..=MAX_TRACKED_MESSAGES {
            record_edit(&db, &cache, &format!("m{i}"), "c", "text").await?;
        }

        {
            let inner = cache.entries.read().await;
            assert_eq!(inner.histories.len(), MAX_TRACKED_MESSAGES);
            assert_eq!(inner.insertion_order.len(), MAX_TRACKED_MESSAGES);
            assert!(!inner.histories.contains_key("m0"), "oldest not evicted");
        }

        // The evicted history is still reachable through the database
        let edits = get_edits(&db, &cache, "m0").await?;
        assert_eq!(edits.len(), 1);
        assert_eq!(edits[0].content, "text");
        Ok(())
    }

    #[tokio::test]
    async fn test_histories_are_per_message() -> Result<()> {
        let db = setup_test_db().await?;
        let cache = EditCache::default();

        record_edit(&db, &cache, "1", "c", "a").await?;
        record_edit(&db, &cache, "2", "c", "b").await?;

        assert_eq!(get_edits(&db, &cache, "1").await?.len(), 1);
        assert_eq!(get_edits(&db, &cache, "2").await?.len(), 1);
        Ok(())
    }
}
