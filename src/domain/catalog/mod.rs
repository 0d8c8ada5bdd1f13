//! Read-only view of the product catalog.
//!
//! The catalog is owned by the back-office; the cart only performs a
//! point lookup by id when a product is first added, and a join read
//! when listing a cart's contents.

use anyhow::Context;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::domain::cart::ProductId;

#[derive(Debug, Clone, PartialEq, serde::Serialize, sqlx::FromRow)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub slug: String,
    pub price: Decimal,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub stock_quantity: i32,
}

pub async fn fetch_product(
    pool: &PgPool,
    product_id: &ProductId,
) -> Result<Option<Product>, anyhow::Error> {
    sqlx::query_as::<_, Product>(
        r#"SELECT id, name, slug, price, image_url, is_active, stock_quantity
           FROM products
           WHERE id = $1"#,
    )
    .bind(product_id)
    .fetch_optional(pool)
    .await
    .with_context(|| format!("Problem in fetch_product({product_id})"))
}

#[cfg(test)]
pub async fn seed_product(pool: &PgPool, price: Decimal) -> Product {
    use fake::{Fake, Faker};

    use crate::domain::Slug;

    let product = Product {
        id: ProductId::new(),
        name: Faker.fake(),
        slug: Slug.fake(),
        price,
        image_url: None,
        is_active: true,
        stock_quantity: (1..100).fake(),
    };

    sqlx::query(
        r#"INSERT INTO products (id, name, slug, price, image_url, is_active, stock_quantity)
           VALUES ($1, $2, $3, $4, $5, $6, $7)"#,
    )
    .bind(product.id)
    .bind(&product.name)
    .bind(&product.slug)
    .bind(product.price)
    .bind(&product.image_url)
    .bind(product.is_active)
    .bind(product.stock_quantity)
    .execute(pool)
    .await
    .expect("Test product should be inserted.");

    product
}

#[cfg(test)]
pub async fn set_product_price(pool: &PgPool, product_id: &ProductId, price: Decimal) {
    sqlx::query("UPDATE products SET price = $2 WHERE id = $1")
        .bind(product_id)
        .bind(price)
        .execute(pool)
        .await
        .expect("Test product price should be updated.");
}
