mod common;

use serde_json::json;
use sqlx::PgPool;

fn ids_of(body: &[serde_json::Value]) -> Vec<i64> {
    body.iter().map(|l| l["id"].as_i64().unwrap()).collect()
}

#[sqlx::test]
async fn test_reorder_single_link(pool: PgPool) {
    let a = common::create_test_link(&pool, "A", 0).await;
    let b = common::create_test_link(&pool, "B", 1).await;

    let server = common::make_server(pool);
    let response = server
        .put(&format!("/api/links/{a}/reorder"))
        .json(&json!({ "order": 2 }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["order"], 2);

    let list = server.get("/api/links").await.json::<Vec<serde_json::Value>>();
    assert_eq!(ids_of(&list), vec![b, a]);
}

#[sqlx::test]
async fn test_reorder_single_link_not_found(pool: PgPool) {
    let server = common::make_server(pool);

    server
        .put("/api/links/999999/reorder")
        .json(&json!({ "order": 1 }))
        .await
        .assert_status_not_found();
}

#[sqlx::test]
async fn test_reorder_single_link_missing_order(pool: PgPool) {
    let id = common::create_test_link(&pool, "A", 0).await;

    let server = common::make_server(pool);

    server
        .put(&format!("/api/links/{id}/reorder"))
        .json(&json!({}))
        .await
        .assert_status_bad_request();
}

#[sqlx::test]
async fn test_reorder_all(pool: PgPool) {
    let a = common::create_test_link(&pool, "A", 0).await;
    let b = common::create_test_link(&pool, "B", 1).await;
    let c = common::create_test_link(&pool, "C", 2).await;

    let server = common::make_server(pool);
    let response = server
        .put("/api/links/order")
        .json(&json!({ "linkIds": [c, a, b] }))
        .await;

    response.assert_status_ok();

    let body = response.json::<Vec<serde_json::Value>>();
    assert_eq!(ids_of(&body), vec![c, a, b]);
    let orders: Vec<i64> = body.iter().map(|l| l["order"].as_i64().unwrap()).collect();
    assert_eq!(orders, vec![0, 1, 2]);
}

#[sqlx::test]
async fn test_reorder_all_unknown_id_changes_nothing(pool: PgPool) {
    let a = common::create_test_link(&pool, "A", 0).await;
    let b = common::create_test_link(&pool, "B", 1).await;

    let server = common::make_server(pool);
    let response = server
        .put("/api/links/order")
        .json(&json!({ "linkIds": [b, 999999, a] }))
        .await;

    response.assert_status_not_found();

    let list = server.get("/api/links").await.json::<Vec<serde_json::Value>>();
    assert_eq!(ids_of(&list), vec![a, b]);
}

#[sqlx::test]
async fn test_reorder_all_duplicate_ids(pool: PgPool) {
    let a = common::create_test_link(&pool, "A", 0).await;

    let server = common::make_server(pool);

    server
        .put("/api/links/order")
        .json(&json!({ "linkIds": [a, a] }))
        .await
        .assert_status_bad_request();
}
