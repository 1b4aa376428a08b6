//! Link entity representing one entry on the page.

use chrono::{DateTime, Utc};

/// A named, styled outbound link with its click counter.
///
/// `order` controls display position and is not unique; the store breaks ties
/// by `id`.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Link {
    pub id: i64,
    pub name: String,
    pub url: String,
    pub icon: String,
    pub color: String,
    pub clicks: i64,
    #[sqlx(rename = "sort_order")]
    pub order: i32,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        name: String,
        url: String,
        icon: String,
        color: String,
        clicks: i64,
        order: i32,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            url,
            icon,
            color,
            clicks,
            order,
            created_at,
        }
    }
}

/// Input data for creating a new link.
///
/// `clicks` and `created_at` are always assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub name: String,
    pub url: String,
    pub icon: String,
    pub color: String,
    pub order: i32,
}

/// Partial update for an existing link.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkPatch {
    pub name: Option<String>,
    pub url: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub order: Option<i32>,
    /// Administrative overwrite of the click counter.
    pub clicks: Option<i64>,
}

impl LinkPatch {
    /// Returns true if the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
