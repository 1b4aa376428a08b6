mod common;

use sqlx::PgPool;
use std::sync::Arc;
use link_page::domain::entities::{LinkPatch, NewLink};
use link_page::domain::repositories::LinkRepository;
use link_page::error::AppError;
use link_page::infrastructure::persistence::PgLinkRepository;

fn new_link(name: &str, order: i32) -> NewLink {
    NewLink {
        name: name.to_string(),
        url: "https://example.com".to_string(),
        icon: "icon".to_string(),
        color: "#333".to_string(),
        order,
    }
}

#[sqlx::test]
async fn test_create_link(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    let result = repo.create(new_link("GitHub", 2)).await;

    assert!(result.is_ok());
    let link = result.unwrap();
    assert!(link.id > 0);
    assert_eq!(link.name, "GitHub");
    assert_eq!(link.clicks, 0);
    assert_eq!(link.order, 2);
}

#[sqlx::test]
async fn test_create_assigns_distinct_ids(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    let first = repo.create(new_link("A", 0)).await.unwrap();
    let second = repo.create(new_link("A", 0)).await.unwrap();

    assert_ne!(first.id, second.id);
}

#[sqlx::test]
async fn test_find_by_id(pool: PgPool) {
    let id = common::create_test_link(&pool, "GitHub", 0).await;
    let repo = PgLinkRepository::new(Arc::new(pool));

    let link = repo.find_by_id(id).await.unwrap();

    assert!(link.is_some());
    assert_eq!(link.unwrap().name, "GitHub");
}

#[sqlx::test]
async fn test_find_by_id_not_found(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    let result = repo.find_by_id(999_999).await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());
}

#[sqlx::test]
async fn test_list_orders_by_order_then_id(pool: PgPool) {
    let c = common::create_test_link(&pool, "C", 2).await;
    let b1 = common::create_test_link(&pool, "B1", 1).await;
    let b2 = common::create_test_link(&pool, "B2", 1).await;
    let a = common::create_test_link(&pool, "A", 0).await;
    let repo = PgLinkRepository::new(Arc::new(pool));

    let ids: Vec<i64> = repo.list().await.unwrap().iter().map(|l| l.id).collect();

    assert_eq!(ids, vec![a, b1, b2, c]);
}

#[sqlx::test]
async fn test_update_overlays_only_given_fields(pool: PgPool) {
    let id = common::create_test_link(&pool, "GitHub", 4).await;
    let repo = PgLinkRepository::new(Arc::new(pool));

    let patch = LinkPatch {
        url: Some("https://github.com/alice".to_string()),
        ..Default::default()
    };
    let updated = repo.update(id, patch).await.unwrap().unwrap();

    assert_eq!(updated.url, "https://github.com/alice");
    assert_eq!(updated.name, "GitHub");
    assert_eq!(updated.order, 4);

    let stored = repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(stored, updated);
}

#[sqlx::test]
async fn test_update_not_found(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    let patch = LinkPatch {
        name: Some("Nope".to_string()),
        ..Default::default()
    };

    assert!(repo.update(999_999, patch).await.unwrap().is_none());
}

#[sqlx::test]
async fn test_update_rejects_empty_name(pool: PgPool) {
    let id = common::create_test_link(&pool, "GitHub", 0).await;
    let repo = PgLinkRepository::new(Arc::new(pool));

    let patch = LinkPatch {
        name: Some(String::new()),
        ..Default::default()
    };
    let result = repo.update(id, patch).await;

    assert!(matches!(result, Err(AppError::Validation { .. })));
}

#[sqlx::test]
async fn test_delete(pool: PgPool) {
    let id = common::create_test_link(&pool, "GitHub", 0).await;
    let repo = PgLinkRepository::new(Arc::new(pool));

    assert!(repo.delete(id).await.unwrap());
    assert!(repo.find_by_id(id).await.unwrap().is_none());
    assert!(!repo.delete(id).await.unwrap());
}

#[sqlx::test]
async fn test_set_order(pool: PgPool) {
    let id = common::create_test_link(&pool, "GitHub", 0).await;
    let repo = PgLinkRepository::new(Arc::new(pool));

    let link = repo.set_order(id, 7).await.unwrap().unwrap();

    assert_eq!(link.order, 7);
    assert!(repo.set_order(999_999, 1).await.unwrap().is_none());
}

#[sqlx::test]
async fn test_set_orders_assigns_positions(pool: PgPool) {
    let a = common::create_test_link(&pool, "A", 0).await;
    let b = common::create_test_link(&pool, "B", 1).await;
    let c = common::create_test_link(&pool, "C", 2).await;
    let repo = PgLinkRepository::new(Arc::new(pool));

    repo.set_orders(vec![c, a, b]).await.unwrap();

    let links = repo.list().await.unwrap();
    let ids: Vec<i64> = links.iter().map(|l| l.id).collect();
    let orders: Vec<i32> = links.iter().map(|l| l.order).collect();
    assert_eq!(ids, vec![c, a, b]);
    assert_eq!(orders, vec![0, 1, 2]);
}

#[sqlx::test]
async fn test_set_orders_rolls_back_on_missing_id(pool: PgPool) {
    let a = common::create_test_link(&pool, "A", 0).await;
    let b = common::create_test_link(&pool, "B", 1).await;
    let repo = PgLinkRepository::new(Arc::new(pool));

    let result = repo.set_orders(vec![b, 999_999, a]).await;

    assert!(matches!(result, Err(AppError::NotFound { .. })));

    // Nothing moved.
    let links = repo.list().await.unwrap();
    let orders: Vec<(i64, i32)> = links.iter().map(|l| (l.id, l.order)).collect();
    assert_eq!(orders, vec![(a, 0), (b, 1)]);
}

#[sqlx::test]
async fn test_increment_clicks(pool: PgPool) {
    let id = common::create_test_link(&pool, "GitHub", 0).await;
    common::set_clicks(&pool, id, 41).await;
    let repo = PgLinkRepository::new(Arc::new(pool));

    let link = repo.increment_clicks(id).await.unwrap().unwrap();

    assert_eq!(link.clicks, 42);
    assert!(repo.increment_clicks(999_999).await.unwrap().is_none());
}

#[sqlx::test]
async fn test_concurrent_increments_are_not_lost(pool: PgPool) {
    let id = common::create_test_link(&pool, "GitHub", 0).await;
    let repo = Arc::new(PgLinkRepository::new(Arc::new(pool.clone())));

    let handles: Vec<_> = (0..25)
        .map(|_| {
            let repo = repo.clone();
            tokio::spawn(async move { repo.increment_clicks(id).await })
        })
        .collect();

    for handle in handles {
        assert!(handle.await.unwrap().unwrap().is_some());
    }

    assert_eq!(common::get_clicks(&pool, id).await, 25);
}

#[sqlx::test]
async fn test_count(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool.clone()));
    assert_eq!(repo.count().await.unwrap(), 0);

    common::create_test_link(&pool, "A", 0).await;
    common::create_test_link(&pool, "B", 0).await;

    assert_eq!(repo.count().await.unwrap(), 2);
}
