//! Handler for click recording.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::link::{LinkResponse, parse_link_id};
use crate::error::AppError;
use crate::state::AppState;

/// Records one click on a link.
///
/// # Endpoint
///
/// `POST /api/links/{id}/click` (also served at `/api/links/{id}/clicks`)
///
/// # Behavior
///
/// The counter is incremented by exactly one in a single atomic statement,
/// so simultaneous clicks are all counted. The call is not idempotent:
/// retrying it records another click.
///
/// # Response
///
/// The link with its updated `clicks`.
///
/// # Errors
///
/// Returns 404 Not Found if the link doesn't exist.
pub async fn click_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LinkResponse>, AppError> {
    let id = parse_link_id(&id)?;
    let link = state.link_service.record_click(id).await?;

    Ok(Json(link.into()))
}
