//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Link, LinkPatch, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Columns selected for every [`Link`] row.
const LINK_COLUMNS: &str = "id, name, url, icon, color, clicks, sort_order, created_at";

/// PostgreSQL repository for link storage and retrieval.
///
/// Uses bound parameters for SQL injection protection; rows are decoded
/// through [`sqlx::FromRow`].
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn list(&self) -> Result<Vec<Link>, AppError> {
        let links = sqlx::query_as::<_, Link>(&format!(
            "SELECT {LINK_COLUMNS} FROM links ORDER BY sort_order ASC, id ASC"
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(links)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Link>, AppError> {
        let link = sqlx::query_as::<_, Link>(&format!(
            "SELECT {LINK_COLUMNS} FROM links WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let link = sqlx::query_as::<_, Link>(&format!(
            r#"
            INSERT INTO links (name, url, icon, color, sort_order)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {LINK_COLUMNS}
            "#
        ))
        .bind(new_link.name)
        .bind(new_link.url)
        .bind(new_link.icon)
        .bind(new_link.color)
        .bind(new_link.order)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn update(&self, id: i64, patch: LinkPatch) -> Result<Option<Link>, AppError> {
        let link = sqlx::query_as::<_, Link>(&format!(
            r#"
            UPDATE links SET
                name       = COALESCE($2::TEXT, name),
                url        = COALESCE($3::TEXT, url),
                icon       = COALESCE($4::TEXT, icon),
                color      = COALESCE($5::TEXT, color),
                sort_order = COALESCE($6::INTEGER, sort_order),
                clicks     = COALESCE($7::BIGINT, clicks)
            WHERE id = $1
            RETURNING {LINK_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(patch.name)
        .bind(patch.url)
        .bind(patch.icon)
        .bind(patch.color)
        .bind(patch.order)
        .bind(patch.clicks)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM links WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn set_order(&self, id: i64, order: i32) -> Result<Option<Link>, AppError> {
        let link = sqlx::query_as::<_, Link>(&format!(
            "UPDATE links SET sort_order = $2 WHERE id = $1 RETURNING {LINK_COLUMNS}"
        ))
        .bind(id)
        .bind(order)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn set_orders(&self, ids: Vec<i64>) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        for (index, id) in ids.iter().enumerate() {
            let order = i32::try_from(index).map_err(|_| {
                AppError::bad_request("Too many links to reorder", serde_json::json!({}))
            })?;

            let result = sqlx::query("UPDATE links SET sort_order = $2 WHERE id = $1")
                .bind(*id)
                .bind(order)
                .execute(&mut *tx)
                .await?;

            if result.rows_affected() == 0 {
                tx.rollback().await?;
                return Err(AppError::link_not_found(*id));
            }
        }

        tx.commit().await?;
        Ok(())
    }

    async fn increment_clicks(&self, id: i64) -> Result<Option<Link>, AppError> {
        let link = sqlx::query_as::<_, Link>(&format!(
            "UPDATE links SET clicks = clicks + 1 WHERE id = $1 RETURNING {LINK_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
