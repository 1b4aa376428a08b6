//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! bound parameters and `FromRow` decoding.
//!
//! # Repositories
//!
//! - [`PgLinkRepository`] - Link storage, ordering and click counters
//! - [`PgStatsRepository`] - Click aggregation queries

pub mod pg_link_repository;
pub mod pg_stats_repository;

pub use pg_link_repository::PgLinkRepository;
pub use pg_stats_repository::PgStatsRepository;
