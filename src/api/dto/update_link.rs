//! DTO for the link update endpoint.

use serde::Deserialize;
use validator::Validate;

use super::link::not_blank;
use crate::domain::entities::LinkPatch;

/// Request body for `PUT /api/links/{id}`.
///
/// All fields are optional; only provided fields are changed. Fields that are
/// not part of a link (including `id` and `createdAt`) are rejected.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateLinkRequest {
    #[validate(length(max = 100), custom(function = "not_blank"))]
    pub name: Option<String>,

    #[validate(length(max = 2048), url(message = "Invalid URL format"))]
    pub url: Option<String>,

    #[validate(length(max = 100), custom(function = "not_blank"))]
    pub icon: Option<String>,

    #[validate(length(max = 100), custom(function = "not_blank"))]
    pub color: Option<String>,

    pub order: Option<i32>,

    /// Administrative overwrite of the click counter.
    #[validate(range(min = 0))]
    pub clicks: Option<i64>,
}

impl From<UpdateLinkRequest> for LinkPatch {
    fn from(req: UpdateLinkRequest) -> Self {
        Self {
            name: req.name,
            url: req.url,
            icon: req.icon,
            color: req.color,
            order: req.order,
            clicks: req.clicks,
        }
    }
}
