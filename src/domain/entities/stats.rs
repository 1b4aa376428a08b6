//! Read-side click aggregates.

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::error::AppError;

/// Click total of one link, with the display metadata the charts need.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct LinkClicks {
    pub name: String,
    pub clicks: i64,
    pub color: String,
    pub icon: String,
}

/// Inclusive range over link creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl StatsWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }
}

/// Total clicks plus the per-link breakdown they were summed from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsSummary {
    pub total_clicks: i64,
    pub links: Vec<LinkClicks>,
}

impl StatsSummary {
    /// Builds a summary whose total always matches the listed links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the total does not fit in an `i64`.
    pub fn from_links(links: Vec<LinkClicks>) -> Result<Self, AppError> {
        let total_clicks = links
            .iter()
            .try_fold(0i64, |total, l| total.checked_add(l.clicks))
            .ok_or_else(|| {
                AppError::internal("Click total out of range", json!({ "links": links.len() }))
            })?;

        Ok(Self {
            total_clicks,
            links,
        })
    }
}
