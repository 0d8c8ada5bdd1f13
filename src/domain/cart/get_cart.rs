//! Get Cart slice

use anyhow::Context;
use axum::{
    Json,
    extract::{Query, State},
};
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::infra::{ClientError, CurrentUser};

use super::{CartId, ItemId, ProductId, Totals, UserId};

//------------------------- Web API ----------------------------

#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct GetCartParams {
    pub coupon: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct CartView {
    pub cart_id: Option<CartId>,
    pub items: Vec<CartItemView>,
    pub item_count: usize,
    pub totals: Totals,
    pub amount_to_free_delivery: Decimal,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct CartItemView {
    pub item_id: ItemId,
    pub product: ProductSummary,
    pub quantity: i32,
    /// Catalog price captured when the item was first added. Kept as a
    /// record only; totals always use the catalog's current price.
    pub unit_price: Decimal,
    pub line_total: Decimal,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ProductSummary {
    pub id: ProductId,
    pub name: String,
    pub slug: String,
    pub price: Decimal,
    pub image_url: Option<String>,
}

pub async fn get_cart_endpoint(
    State(pool): State<PgPool>,
    CurrentUser(user_id): CurrentUser,
    Query(params): Query<GetCartParams>,
) -> Result<Json<CartView>, ClientError> {
    let view = cart_view(&pool, &user_id, params.coupon.as_deref()).await?;
    Ok(Json(view))
}

//----------------------- Implementation --------------------------

#[derive(sqlx::FromRow)]
struct ItemRecord {
    id: ItemId,
    product_id: ProductId,
    quantity: i32,
    unit_price: Decimal,
    name: String,
    slug: String,
    price: Decimal,
    image_url: Option<String>,
}

/// Reads the user's cart with its items and each item's product.
///
/// A user without a cart row and a user with an empty cart produce the
/// same empty item list; the presentation layer renders both as "cart
/// is empty".
pub async fn cart_view(
    pool: &PgPool,
    user_id: &UserId,
    coupon_code: Option<&str>,
) -> Result<CartView, anyhow::Error> {
    let cart_id = sqlx::query_scalar::<_, CartId>("SELECT id FROM carts WHERE user_id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await
        .with_context(|| format!("Problem in cart_view({user_id}) reading the carts table."))?;

    let Some(cart_id) = cart_id else {
        return Ok(assemble(None, Vec::new(), coupon_code));
    };

    let records = sqlx::query_as::<_, ItemRecord>(
        r#"SELECT ci.id, ci.product_id, ci.quantity, ci.unit_price,
                  p.name, p.slug, p.price, p.image_url
           FROM cart_items ci
           JOIN products p ON p.id = ci.product_id
           WHERE ci.cart_id = $1
           ORDER BY ci.created_at"#,
    )
    .bind(cart_id)
    .fetch_all(pool)
    .await
    .with_context(|| format!("Problem in cart_view({user_id}) reading the cart_items join."))?;

    let items = records
        .into_iter()
        .map(|record| CartItemView {
            item_id: record.id,
            line_total: record.price * Decimal::from(record.quantity),
            product: ProductSummary {
                id: record.product_id,
                name: record.name,
                slug: record.slug,
                price: record.price,
                image_url: record.image_url,
            },
            quantity: record.quantity,
            unit_price: record.unit_price,
        })
        .collect();

    Ok(assemble(Some(cart_id), items, coupon_code))
}

fn assemble(cart_id: Option<CartId>, items: Vec<CartItemView>, coupon_code: Option<&str>) -> CartView {
    let totals = if items.is_empty() {
        Totals::default()
    } else {
        Totals::compute(
            items.iter().map(|item| (item.product.price, item.quantity)),
            coupon_code,
        )
    };

    CartView {
        cart_id,
        item_count: items.len(),
        amount_to_free_delivery: totals.amount_to_free_delivery(),
        totals,
        items,
    }
}

//-------------------------- Tests -------------------------------
