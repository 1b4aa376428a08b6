//! Link lifecycle service: CRUD, ordering and click recording.

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::entities::{Link, LinkPatch, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use serde_json::json;

/// Service for managing the links shown on the page.
///
/// Input shape (non-blank fields, URL syntax) is validated by the API DTOs
/// before it reaches this layer; the service turns "no such row" results from
/// the repository into [`AppError::NotFound`].
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self { link_repository }
    }

    /// Returns all links in display order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        self.link_repository.list().await
    }

    /// Retrieves a single link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this id.
    pub async fn get_link(&self, id: i64) -> Result<Link, AppError> {
        self.link_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::link_not_found(id))
    }

    /// Persists a new link with zero clicks.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_link(&self, new_link: NewLink) -> Result<Link, AppError> {
        let link = self.link_repository.create(new_link).await?;
        tracing::info!(link_id = link.id, name = %link.name, "Link created");
        Ok(link)
    }

    /// Overlays the present fields of `patch` onto an existing link.
    ///
    /// An empty patch is a read.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this id.
    pub async fn update_link(&self, id: i64, patch: LinkPatch) -> Result<Link, AppError> {
        if patch.is_empty() {
            return self.get_link(id).await;
        }

        let link = self
            .link_repository
            .update(id, patch)
            .await?
            .ok_or_else(|| AppError::link_not_found(id))?;

        tracing::info!(link_id = id, "Link updated");
        Ok(link)
    }

    /// Permanently deletes a link.
    ///
    /// Deletion is one-shot: deleting the same id again fails.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this id.
    pub async fn delete_link(&self, id: i64) -> Result<(), AppError> {
        if !self.link_repository.delete(id).await? {
            return Err(AppError::link_not_found(id));
        }

        tracing::info!(link_id = id, "Link deleted");
        Ok(())
    }

    /// Moves a single link to `order`. Other links keep their ranks.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this id.
    pub async fn reorder_link(&self, id: i64, order: i32) -> Result<Link, AppError> {
        self.link_repository
            .set_order(id, order)
            .await?
            .ok_or_else(|| AppError::link_not_found(id))
    }

    /// Ranks the given links `0..n` in the order supplied and returns the
    /// resulting full list.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if an id appears more than once.
    /// Returns [`AppError::NotFound`] if any id does not exist; no rank is
    /// changed in that case.
    pub async fn reorder_links(&self, ids: Vec<i64>) -> Result<Vec<Link>, AppError> {
        let mut seen = HashSet::with_capacity(ids.len());
        if let Some(dup) = ids.iter().find(|id| !seen.insert(**id)) {
            return Err(AppError::bad_request(
                "Duplicate link id in order list",
                json!({ "id": dup }),
            ));
        }

        let count = ids.len();
        self.link_repository.set_orders(ids).await?;
        tracing::info!(count, "Links reordered");

        self.link_repository.list().await
    }

    /// Records one click and returns the link with its new counter.
    ///
    /// Not idempotent: every call adds exactly one click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this id.
    pub async fn record_click(&self, id: i64) -> Result<Link, AppError> {
        let link = self
            .link_repository
            .increment_clicks(id)
            .await?
            .ok_or_else(|| AppError::link_not_found(id))?;

        metrics::counter!("link_clicks_total").increment(1);
        tracing::debug!(link_id = id, clicks = link.clicks, "Click recorded");

        Ok(link)
    }

    /// Counts stored links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count_links(&self) -> Result<i64, AppError> {
        self.link_repository.count().await
    }
}
