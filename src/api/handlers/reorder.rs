//! Handlers for link ordering.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};

use crate::api::dto::link::{LinkResponse, parse_link_id};
use crate::api::dto::reorder::{ReorderAllRequest, ReorderRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Sets the display rank of a single link.
///
/// # Endpoint
///
/// `PUT /api/links/{id}/reorder`
///
/// # Request Body
///
/// ```json
/// { "order": 3 }
/// ```
///
/// Other links are not renumbered; prefer `PUT /api/links/order` when
/// rearranging the whole list.
///
/// # Errors
///
/// Returns 404 Not Found if the link doesn't exist.
/// Returns 400 Bad Request if `order` is missing or not an integer.
pub async fn reorder_link_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    payload: Result<Json<ReorderRequest>, JsonRejection>,
) -> Result<Json<LinkResponse>, AppError> {
    let id = parse_link_id(&id)?;
    let Json(payload) = payload?;

    let link = state.link_service.reorder_link(id, payload.order).await?;

    Ok(Json(link.into()))
}

/// Rearranges links in one transaction.
///
/// # Endpoint
///
/// `PUT /api/links/order`
///
/// # Request Body
///
/// ```json
/// { "linkIds": [4, 1, 7] }
/// ```
///
/// Each listed link gets `order` equal to its position in `linkIds`.
///
/// # Response
///
/// The full link list in its new display order.
///
/// # Errors
///
/// Returns 404 Not Found if any id doesn't exist; no link is changed.
/// Returns 400 Bad Request if an id is repeated.
pub async fn reorder_all_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReorderAllRequest>, JsonRejection>,
) -> Result<Json<Vec<LinkResponse>>, AppError> {
    let Json(payload) = payload?;

    let links = state.link_service.reorder_links(payload.link_ids).await?;

    Ok(Json(links.into_iter().map(LinkResponse::from).collect()))
}
