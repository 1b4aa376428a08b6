//! DTO for the link creation endpoint.

use serde::Deserialize;
use validator::Validate;

use super::link::not_blank;
use crate::domain::entities::NewLink;

/// Request body for `POST /api/links`.
///
/// `clicks` and `createdAt` are assigned by the server and cannot be supplied.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateLinkRequest {
    /// Display label.
    #[validate(length(max = 100), custom(function = "not_blank"))]
    pub name: String,

    /// Destination address; any absolute URL, including `mailto:` and similar schemes.
    #[validate(length(max = 2048), url(message = "Invalid URL format"))]
    pub url: String,

    /// Icon class or glyph.
    #[validate(length(max = 100), custom(function = "not_blank"))]
    pub icon: String,

    /// Color token (hex or class name).
    #[validate(length(max = 100), custom(function = "not_blank"))]
    pub color: String,

    /// Initial display rank. Defaults to 0.
    pub order: Option<i32>,
}

impl From<CreateLinkRequest> for NewLink {
    fn from(req: CreateLinkRequest) -> Self {
        Self {
            name: req.name,
            url: req.url,
            icon: req.icon,
            color: req.color,
            order: req.order.unwrap_or(0),
        }
    }
}
