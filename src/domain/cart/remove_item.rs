//! Remove Item slice

use anyhow::Context;
use axum::{
    Json,
    extract::{Path, State},
};
use sqlx::PgPool;
use uuid::Uuid;

use crate::infra::{ClientError, CurrentUser};

use super::{ItemId, SuccessResponse, UserId};

//------------------------- Web API ----------------------------

pub async fn remove_item_endpoint(
    State(pool): State<PgPool>,
    CurrentUser(user_id): CurrentUser,
    Path(item_uuid): Path<Uuid>,
) -> Result<Json<SuccessResponse>, ClientError> {
    let item_id = ItemId::from(item_uuid);
    remove_item(&pool, &user_id, &item_id).await?;
    Ok(Json(SuccessResponse::ok()))
}

//----------------------- Implementation --------------------------

/// Deletes a line item from the caller's cart. Removing an item that
/// is already gone, or that belongs to someone else, succeeds without
/// doing anything.
pub async fn remove_item(
    pool: &PgPool,
    user_id: &UserId,
    item_id: &ItemId,
) -> Result<(), anyhow::Error> {
    sqlx::query(
        r#"DELETE FROM cart_items ci
           USING carts c
           WHERE ci.id = $1 AND ci.cart_id = c.id AND c.user_id = $2"#,
    )
    .bind(item_id)
    .bind(user_id)
    .execute(pool)
    .await
    .with_context(|| format!("Problem in remove_item(item_id: {item_id})."))?;

    Ok(())
}

//-------------------------- Tests -------------------------------
