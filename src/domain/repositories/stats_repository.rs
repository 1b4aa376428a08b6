//! Repository trait for click statistics.

use crate::domain::entities::{LinkClicks, StatsWindow};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for click aggregation.
///
/// Read-only: implementations never mutate links.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgStatsRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_stats.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatsRepository: Send + Sync {
    /// Returns the click count of every link created inside `window`,
    /// or of every link when `window` is `None`, in display order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn link_clicks(&self, window: Option<StatsWindow>) -> Result<Vec<LinkClicks>, AppError>;
}
