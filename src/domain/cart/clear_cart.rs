//! Clear Cart slice

use anyhow::Context;
use axum::{Json, extract::State};
use sqlx::PgPool;

use crate::infra::{ClientError, CurrentUser};

use super::{SuccessResponse, UserId};

//------------------------- Web API ----------------------------

pub async fn clear_cart_endpoint(
    State(pool): State<PgPool>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<SuccessResponse>, ClientError> {
    clear_cart(&pool, &user_id).await?;
    Ok(Json(SuccessResponse::ok()))
}

//----------------------- Implementation --------------------------

/// Deletes every line item in the user's cart. The cart row itself is
/// kept so the next add does not need to recreate it. A user without a
/// cart is a no-op.
pub async fn clear_cart(pool: &PgPool, user_id: &UserId) -> Result<(), anyhow::Error> {
    sqlx::query(
        r#"DELETE FROM cart_items ci
           USING carts c
           WHERE ci.cart_id = c.id AND c.user_id = $1"#,
    )
    .bind(user_id)
    .execute(pool)
    .await
    .with_context(|| format!("Problem in clear_cart({user_id})."))?;

    Ok(())
}

//-------------------------- Tests -------------------------------
