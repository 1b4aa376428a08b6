//! PostgreSQL implementation of statistics repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{LinkClicks, StatsWindow};
use crate::domain::repositories::StatsRepository;
use crate::error::AppError;

/// PostgreSQL repository for click aggregation.
///
/// Reads the per-link counters directly; there is no materialized summary.
pub struct PgStatsRepository {
    pool: Arc<PgPool>,
}

impl PgStatsRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StatsRepository for PgStatsRepository {
    async fn link_clicks(&self, window: Option<StatsWindow>) -> Result<Vec<LinkClicks>, AppError> {
        let (from_date, to_date) = match window {
            Some(w) => (Some(w.start), Some(w.end)),
            None => (None, None),
        };

        let rows = sqlx::query_as::<_, LinkClicks>(
            r#"
            SELECT name, clicks, color, icon
            FROM links
            WHERE ($1::timestamptz IS NULL OR created_at >= $1)
              AND ($2::timestamptz IS NULL OR created_at <= $2)
            ORDER BY sort_order ASC, id ASC
            "#,
        )
        .bind(from_date)
        .bind(to_date)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }
}
