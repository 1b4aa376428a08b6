//! Shared application state injected into every handler.

use std::sync::Arc;

use sqlx::PgPool;

use crate::application::services::{LinkService, StatsService};
use crate::infrastructure::persistence::{PgLinkRepository, PgStatsRepository};

/// Services backed by the PostgreSQL repositories.
///
/// Cheap to clone: every field is reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<PgLinkRepository>>,
    pub stats_service: Arc<StatsService<PgStatsRepository>>,
}

impl AppState {
    /// Wires repositories and services on top of one connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        let link_repository = Arc::new(PgLinkRepository::new(pool.clone()));
        let stats_repository = Arc::new(PgStatsRepository::new(pool));

        Self {
            link_service: Arc::new(LinkService::new(link_repository)),
            stats_service: Arc::new(StatsService::new(stats_repository)),
        }
    }
}
