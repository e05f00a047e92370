//! Entity module - Contains all SeaORM entity definitions for the database.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod message_edit;

// Re-export specific types to avoid conflicts
pub use message_edit::{
    Column as MessageEditColumn, Entity as MessageEdit, Model as MessageEditModel,
};
