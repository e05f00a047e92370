//! Message edit entity - one row per recorded edit of a Discord message.
//!
//! Whenever the gateway reports a message edit, the PREVIOUS content of the
//! message is appended here, so `/messageinfo` can show the full history.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Recorded message edit
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "message_edits")]
pub struct Model {
    /// Unique identifier for the edit record
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Discord snowflake of the edited message, stored as text
    #[sea_orm(indexed)]
    pub message_id: String,
    /// Discord snowflake of the channel the message lives in
    pub channel_id: String,
    /// Message content as it was BEFORE this edit
    #[sea_orm(column_type = "Text")]
    pub content: String,
    /// When the edit was observed
    pub edited_at: DateTimeUtc,
}

/// Message edits stand alone; no relations to other tables
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
