//! Cart totals.
//!
//! Pure arithmetic over the line items of a cart; no I/O. Line totals
//! and the subtotal use the catalog's current price, not the price
//! captured when the item was added, so a catalog price change is
//! reflected in every cart that holds the product.

use rust_decimal::Decimal;

/// Orders at or above this subtotal ship for free.
pub const FREE_DELIVERY_THRESHOLD: Decimal = Decimal::from_parts(150, 0, 0, false, 0);
pub const DELIVERY_FEE: Decimal = Decimal::from_parts(15, 0, 0, false, 0);

/// The one accepted coupon code and its flat discount rate.
///
/// Placeholder until promotions become a real entity with a validity
/// window and per-user redemption tracking. The code is reusable
/// without limit.
pub const WELCOME_COUPON: &str = "hosgeldin10";
const WELCOME_DISCOUNT_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct Totals {
    pub subtotal: Decimal,
    pub delivery_fee: Decimal,
    pub discount: Decimal,
    pub total: Decimal,
}

impl Totals {
    /// Computes totals from (current unit price, quantity) pairs.
    pub fn compute<I>(items: I, coupon_code: Option<&str>) -> Self
    where
        I: IntoIterator<Item = (Decimal, i32)>,
    {
        let subtotal: Decimal = items
            .into_iter()
            .map(|(price, quantity)| price * Decimal::from(quantity))
            .sum();

        let delivery_fee = if subtotal >= FREE_DELIVERY_THRESHOLD {
            Decimal::ZERO
        } else {
            DELIVERY_FEE
        };

        let discount = if coupon_code.is_some_and(coupon_is_valid) {
            subtotal * WELCOME_DISCOUNT_RATE
        } else {
            Decimal::ZERO
        };

        Totals {
            subtotal,
            delivery_fee,
            discount,
            total: subtotal + delivery_fee - discount,
        }
    }

    /// How much more the shopper needs to add before delivery is free.
    pub fn amount_to_free_delivery(&self) -> Decimal {
        (FREE_DELIVERY_THRESHOLD - self.subtotal).max(Decimal::ZERO)
    }
}

pub fn coupon_is_valid(code: &str) -> bool {
    code.eq_ignore_ascii_case(WELCOME_COUPON)
}
