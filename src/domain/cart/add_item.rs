//! Add Item slice

use anyhow::Context;
use axum::{Json, extract::State};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::catalog;
use crate::infra::{ClientError, CurrentUser};

use super::{CartError, CartId, ItemId, ProductId, UserId};

//------------------------- Web API ----------------------------

#[derive(Debug, Clone, serde::Deserialize)]
pub struct AddItemPayload {
    pub product_id: Uuid,
    #[serde(default = "default_quantity")]
    pub quantity: i32,
}

fn default_quantity() -> i32 {
    1
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct AddItemResponse {
    pub success: bool,
    pub item_id: ItemId,
}

pub async fn add_item_endpoint(
    State(pool): State<PgPool>,
    CurrentUser(user_id): CurrentUser,
    Json(payload): Json<AddItemPayload>,
) -> Result<Json<AddItemResponse>, ClientError> {
    let product_id = ProductId::from(payload.product_id);
    let item_id = add_item(&pool, &user_id, &product_id, payload.quantity).await?;

    Ok(Json(AddItemResponse {
        success: true,
        item_id,
    }))
}

//----------------------- Implementation --------------------------

/// Adds `quantity` of a product to the user's cart, creating the cart
/// on first use.
///
/// At most one line item exists per (cart, product): a repeated add is
/// folded into the existing row by a single insert-on-conflict
/// increment, so two adds racing each other still sum their
/// quantities instead of duplicating the row or losing an update.
pub async fn add_item(
    pool: &PgPool,
    user_id: &UserId,
    product_id: &ProductId,
    quantity: i32,
) -> Result<ItemId, ClientError> {
    if quantity < 1 {
        return Err(CartError::InvalidQuantity(quantity).into());
    }

    let product = catalog::fetch_product(pool, product_id)
        .await?
        .ok_or(CartError::ProductNotFound(*product_id))?;

    let cart_id = ensure_cart(pool, user_id).await?;

    // On the merge path only quantity changes; unit_price stays the
    // snapshot taken when the product was first added.
    let item_id = sqlx::query_scalar::<_, ItemId>(
        r#"INSERT INTO cart_items (id, cart_id, product_id, quantity, unit_price)
           VALUES ($1, $2, $3, $4, $5)
           ON CONFLICT (cart_id, product_id)
           DO UPDATE SET quantity = cart_items.quantity + EXCLUDED.quantity
           RETURNING id"#,
    )
    .bind(ItemId::new())
    .bind(cart_id)
    .bind(product_id)
    .bind(quantity)
    .bind(product.price)
    .fetch_one(pool)
    .await
    .with_context(|| format!("Problem in add_item(cart_id: {cart_id}, product_id: {product_id})."))?;

    Ok(item_id)
}

/// Returns the user's cart id, creating the cart row if this is the
/// user's first mutation. The no-op update makes RETURNING yield the
/// existing row when the cart already exists.
async fn ensure_cart(pool: &PgPool, user_id: &UserId) -> Result<CartId, anyhow::Error> {
    sqlx::query_scalar::<_, CartId>(
        r#"INSERT INTO carts (id, user_id)
           VALUES ($1, $2)
           ON CONFLICT (user_id) DO UPDATE SET user_id = EXCLUDED.user_id
           RETURNING id"#,
    )
    .bind(CartId::new())
    .bind(user_id)
    .fetch_one(pool)
    .await
    .with_context(|| format!("Problem in ensure_cart({user_id})."))
}

//-------------------------- Tests -------------------------------
