//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation. Field names are camelCase on the wire.

pub mod create_link;
pub mod health;
pub mod link;
pub mod reorder;
pub mod stats;
pub mod update_link;
