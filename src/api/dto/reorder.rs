//! DTOs for the reorder endpoints.

use serde::Deserialize;

/// Request body for `PUT /api/links/{id}/reorder`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReorderRequest {
    pub order: i32,
}

/// Request body for `PUT /api/links/order`.
///
/// The position of each id in `linkIds` becomes its new `order`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ReorderAllRequest {
    pub link_ids: Vec<i64>,
}
