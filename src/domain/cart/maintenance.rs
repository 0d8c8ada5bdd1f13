//! Startup maintenance.

use anyhow::Context;
use jiff::{SignedDuration, Timestamp};
use jiff_sqlx::ToSqlx;
use sqlx::PgPool;

/// Carts untouched for this long count as abandoned.
const ABANDONED_AFTER: SignedDuration = SignedDuration::from_hours(30 * 24);

/// Empties carts whose newest line item is older than the abandonment
/// window. Cart rows are never deleted, only their items. Returns the
/// number of line items removed.
///
/// "Untouched" is approximated by the newest item's add time: quantity
/// edits and removals do not refresh it, so a cart of month-old items
/// is swept even if its quantities changed yesterday.
pub async fn clear_abandoned_carts(pool: &PgPool) -> Result<u64, anyhow::Error> {
    let cutoff = Timestamp::now() - ABANDONED_AFTER;

    let result = sqlx::query(
        r#"DELETE FROM cart_items
           WHERE cart_id IN (
               SELECT cart_id FROM cart_items
               GROUP BY cart_id
               HAVING max(created_at) < $1
           )"#,
    )
    .bind(cutoff.to_sqlx())
    .execute(pool)
    .await
    .context("Problem in clear_abandoned_carts.")?;

    Ok(result.rows_affected())
}

//-------------------------- Tests -------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    use fake::Fake;
    use sqlx::PgPool;

    use crate::domain::{
        Price,
        cart::{CartId, ItemId, UserId, add_item, cart_view},
        catalog::seed_product,
    };

    async fn seed_stale_cart(pool: &PgPool, user_id: &UserId, age: SignedDuration) {
        let product = seed_product(pool, Price.fake()).await;
        let cart_id = CartId::new();
        sqlx::query("INSERT INTO carts (id, user_id) VALUES ($1, $2)")
            .bind(cart_id)
            .bind(user_id)
            .execute(pool)
            .await
            .expect("Test cart should be inserted.");
        sqlx::query(
            r#"INSERT INTO cart_items (id, cart_id, product_id, quantity, unit_price, created_at)
               VALUES ($1, $2, $3, $4, $5, $6)"#,
        )
        .bind(ItemId::new())
        .bind(cart_id)
        .bind(product.id)
        .bind(1)
        .bind(product.price)
        .bind((Timestamp::now() - age).to_sqlx())
        .execute(pool)
        .await
        .expect("Test item should be inserted.");
    }

    #[sqlx::test]
    async fn stale_carts_are_emptied_and_fresh_carts_kept(pool: PgPool) {
        let stale_user = UserId::new();
        let fresh_user = UserId::new();
        seed_stale_cart(&pool, &stale_user, SignedDuration::from_hours(40 * 24)).await;
        let product = seed_product(&pool, Price.fake()).await;
        add_item(&pool, &fresh_user, &product.id, 1)
            .await
            .expect("Add should succeed.");

        let removed = clear_abandoned_carts(&pool)
            .await
            .expect("Maintenance should succeed.");

        let stale_view = cart_view(&pool, &stale_user, None)
            .await
            .expect("View should be read.");
        let fresh_view = cart_view(&pool, &fresh_user, None)
            .await
            .expect("View should be read.");
        pool.close().await;

        assert_eq!(removed, 1);
        assert!(stale_view.items.is_empty());
        assert!(stale_view.cart_id.is_some());
        assert_eq!(fresh_view.item_count, 1);
    }
}
