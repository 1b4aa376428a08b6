//! Link representation returned by every link endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;
use validator::ValidationError;

use crate::domain::entities::Link;
use crate::error::AppError;

/// JSON representation of a stored link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkResponse {
    pub id: i64,
    pub name: String,
    pub url: String,
    pub icon: String,
    pub color: String,
    pub clicks: i64,
    pub order: i32,
    pub created_at: DateTime<Utc>,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            name: link.name,
            url: link.url,
            icon: link.icon,
            color: link.color,
            clicks: link.clicks,
            order: link.order,
            created_at: link.created_at,
        }
    }
}

/// Parses a link identifier taken from the request path.
///
/// Identifiers are opaque to clients, so a value that is not a valid id
/// cannot name any link and is reported as not found.
pub fn parse_link_id(raw: &str) -> Result<i64, AppError> {
    raw.parse::<i64>().map_err(|_| {
        AppError::not_found("Link not found", serde_json::json!({ "id": raw }))
    })
}

/// Rejects strings that are empty or whitespace only.
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }
    Ok(())
}
