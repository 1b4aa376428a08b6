//! Core domain entities representing the business data model.
//!
//! # Entity Types
//!
//! - [`Link`] - One outbound destination on the page, with its click counter
//! - [`LinkClicks`] / [`StatsSummary`] - Read-side click aggregates
//! - [`StatsWindow`] - Inclusive creation-date range for aggregation
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with separate structs for creation:
//! - `NewLink` - For creating new records
//! - `LinkPatch` - For partial updates

pub mod link;
pub mod stats;

pub use link::{Link, LinkPatch, NewLink};
pub use stats::{LinkClicks, StatsSummary, StatsWindow};
