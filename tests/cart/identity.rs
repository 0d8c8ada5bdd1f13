//! End-to-end run through the identity seam: a request carrying the
//! identity provider's user header mutates the cart and reads it back;
//! a garbage header value is refused like a missing one.

use axum::http::StatusCode;
use rust_decimal::Decimal;
use serial_test::serial;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use uuid::Uuid;

use cart_service::infra::USER_ID_HEADER;

use crate::test_utils::start_test_server;

#[sqlx::test]
#[serial]
async fn a_signed_in_shopper_can_add_and_read_back_an_item(
    _pool_options: PgPoolOptions,
    connect_options: PgConnectOptions,
) {
    let (_, app_state) = start_test_server(connect_options.clone()).await;
    let base = format!("http://{}", app_state.settings.application.address());

    let product_id = Uuid::new_v4();
    sqlx::query("INSERT INTO products (id, name, slug, price) VALUES ($1, $2, $3, $4)")
        .bind(product_id)
        .bind("Village Bread")
        .bind(format!("village-bread-{product_id}"))
        .bind(Decimal::new(5000, 2))
        .execute(&app_state.pool)
        .await
        .expect("Test product should be inserted.");

    let user_id = Uuid::new_v4();
    let client = reqwest::Client::new();

    let add = client
        .post(format!("{base}/cart/items"))
        .header(USER_ID_HEADER, user_id.to_string())
        .json(&serde_json::json!({ "product_id": product_id, "quantity": 2 }))
        .send()
        .await
        .expect("Add request should complete.");
    assert_eq!(add.status(), StatusCode::OK);
    let add_body: serde_json::Value = add.json().await.expect("Add body should be JSON.");
    assert_eq!(add_body["success"], serde_json::json!(true));

    let view: serde_json::Value = client
        .get(format!("{base}/cart"))
        .header(USER_ID_HEADER, user_id.to_string())
        .send()
        .await
        .expect("Read request should complete.")
        .json()
        .await
        .expect("View body should be JSON.");

    app_state.pool.close().await;

    assert_eq!(view["item_count"], serde_json::json!(1));
    assert_eq!(view["items"][0]["quantity"], serde_json::json!(2));
    assert_eq!(
        view["items"][0]["product"]["id"],
        serde_json::json!(product_id)
    );
}

#[sqlx::test]
#[serial]
async fn a_garbage_user_header_is_refused_like_a_missing_one(
    _pool_options: PgPoolOptions,
    connect_options: PgConnectOptions,
) {
    let (_, app_state) = start_test_server(connect_options.clone()).await;
    let base = format!("http://{}", app_state.settings.application.address());

    let client = reqwest::Client::new();
    let res = client
        .post(format!("{base}/cart/items"))
        .header(USER_ID_HEADER, "not-a-uuid")
        .json(&serde_json::json!({ "product_id": Uuid::new_v4(), "quantity": 1 }))
        .send()
        .await
        .expect("Request should complete.");

    let carts: i64 = sqlx::query_scalar("SELECT count(*) FROM carts")
        .fetch_one(&app_state.pool)
        .await
        .expect("Count should be read.");

    app_state.pool.close().await;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(carts, 0);
}
