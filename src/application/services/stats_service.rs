//! Click statistics service.

use std::sync::Arc;

use crate::domain::entities::{StatsSummary, StatsWindow};
use crate::domain::repositories::StatsRepository;
use crate::error::AppError;

/// Service computing the click summary shown on the dashboard.
///
/// Stateless: every call re-reads storage, so results always reflect the
/// current counters.
pub struct StatsService<R: StatsRepository> {
    repository: Arc<R>,
}

impl<R: StatsRepository> StatsService<R> {
    /// Creates a new statistics service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Sums clicks over all links, or over links created inside `window`.
    ///
    /// The total is computed from the same rows that are returned, so it
    /// always equals the sum of the per-link counts. An empty selection
    /// yields a zero summary.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors or if the total
    /// does not fit in an `i64`.
    pub async fn get_stats(&self, window: Option<StatsWindow>) -> Result<StatsSummary, AppError> {
        let links = self.repository.link_clicks(window).await?;
        StatsSummary::from_links(links)
    }
}
