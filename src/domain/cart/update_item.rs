//! Update Item Quantity slice

use anyhow::Context;
use axum::{
    Json,
    extract::{Path, State},
};
use sqlx::PgPool;
use uuid::Uuid;

use crate::infra::{ClientError, CurrentUser};

use super::{ItemId, SuccessResponse, UserId, remove_item};

//------------------------- Web API ----------------------------

#[derive(Debug, Clone, serde::Deserialize)]
pub struct UpdateItemPayload {
    pub quantity: i32,
}

pub async fn update_item_endpoint(
    State(pool): State<PgPool>,
    CurrentUser(user_id): CurrentUser,
    Path(item_uuid): Path<Uuid>,
    Json(payload): Json<UpdateItemPayload>,
) -> Result<Json<SuccessResponse>, ClientError> {
    let item_id = ItemId::from(item_uuid);
    update_item_quantity(&pool, &user_id, &item_id, payload.quantity).await?;
    Ok(Json(SuccessResponse::ok()))
}

//----------------------- Implementation --------------------------

/// Sets a line item's quantity to an absolute value.
///
/// A quantity of zero or less deletes the item, the same as removing
/// it outright. Unlike AddItem this is not an error: driving the
/// quantity down to nothing is how the cart page's stepper empties a
/// line.
///
/// The item must belong to the caller's cart; a foreign or unknown id
/// is a silent no-op, matching what a row-level access policy would
/// have done.
pub async fn update_item_quantity(
    pool: &PgPool,
    user_id: &UserId,
    item_id: &ItemId,
    quantity: i32,
) -> Result<(), anyhow::Error> {
    if quantity <= 0 {
        return remove_item(pool, user_id, item_id).await;
    }

    sqlx::query(
        r#"UPDATE cart_items ci
           SET quantity = $3
           FROM carts c
           WHERE ci.id = $1 AND ci.cart_id = c.id AND c.user_id = $2"#,
    )
    .bind(item_id)
    .bind(user_id)
    .bind(quantity)
    .execute(pool)
    .await
    .with_context(|| format!("Problem in update_item_quantity(item_id: {item_id})."))?;

    Ok(())
}

//-------------------------- Tests -------------------------------
