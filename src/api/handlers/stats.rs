//! Handler for click statistics.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};

use crate::api::dto::stats::{StatsQuery, StatsResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns total clicks and the per-link breakdown.
///
/// # Endpoint
///
/// `GET /api/links/stats`
///
/// # Query Parameters
///
/// - `startDate` (optional): ISO-8601 timestamp or `YYYY-MM-DD`
/// - `endDate` (optional): ISO-8601 timestamp or `YYYY-MM-DD`
///
/// The window applies to link creation time and only when both bounds are
/// given; otherwise all links are included.
///
/// # Response
///
/// ```json
/// {
///   "totalClicks": 3,
///   "links": [{ "name": "GitHub", "clicks": 3, "color": "#333", "icon": "gh" }]
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the query string or a date cannot be parsed.
/// Returns 500 Internal Server Error if the total overflows.
pub async fn stats_handler(
    State(state): State<AppState>,
    params: Result<Query<StatsQuery>, QueryRejection>,
) -> Result<Json<StatsResponse>, AppError> {
    let Query(params) = params?;
    let window = params.window()?;

    let summary = state.stats_service.get_stats(window).await?;

    Ok(Json(summary.into()))
}
