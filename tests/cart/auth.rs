//! Requests without a resolved identity must be refused before any
//! store write happens.

use axum::http::StatusCode;
use serial_test::serial;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use uuid::Uuid;

use crate::test_utils::start_test_server;

#[sqlx::test]
#[serial]
async fn every_mutating_endpoint_rejects_anonymous_requests(
    _pool_options: PgPoolOptions,
    connect_options: PgConnectOptions,
) {
    let (_, app_state) = start_test_server(connect_options.clone()).await;

    let url = format!("http://{}", app_state.settings.application.address());
    let client = httpc_test::new_client(url).expect("Expected client to be created.");

    let add = client
        .do_post(
            "/cart/items",
            serde_json::json!({ "product_id": Uuid::new_v4(), "quantity": 1 }),
        )
        .await
        .expect("Request should complete.");
    let update = client
        .do_put(
            &format!("/cart/items/{}", Uuid::new_v4()),
            serde_json::json!({ "quantity": 2 }),
        )
        .await
        .expect("Request should complete.");
    let remove = client
        .do_delete(&format!("/cart/items/{}", Uuid::new_v4()))
        .await
        .expect("Request should complete.");
    let clear = client
        .do_delete("/cart")
        .await
        .expect("Request should complete.");
    let read = client.do_get("/cart").await.expect("Request should complete.");

    for res in [&add, &update, &remove, &clear, &read] {
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    // Nothing may have been written on the way to the refusal.
    let carts: i64 = sqlx::query_scalar("SELECT count(*) FROM carts")
        .fetch_one(&app_state.pool)
        .await
        .expect("Count should be read.");
    let items: i64 = sqlx::query_scalar("SELECT count(*) FROM cart_items")
        .fetch_one(&app_state.pool)
        .await
        .expect("Count should be read.");

    app_state.pool.close().await;

    assert_eq!(carts, 0);
    assert_eq!(items, 0);
}
