mod add_item;
mod clear_cart;
mod errors;
mod get_cart;
mod ids;
mod maintenance;
mod remove_item;
mod totals;
mod update_item;

pub use add_item::{AddItemPayload, AddItemResponse, add_item, add_item_endpoint};
pub use clear_cart::{clear_cart, clear_cart_endpoint};
pub use errors::CartError;
pub use get_cart::{
    CartItemView, CartView, GetCartParams, ProductSummary, cart_view, get_cart_endpoint,
};
pub use ids::*;
pub use maintenance::clear_abandoned_carts;
pub use remove_item::{remove_item, remove_item_endpoint};
pub use totals::{DELIVERY_FEE, FREE_DELIVERY_THRESHOLD, Totals, WELCOME_COUPON};
pub use update_item::{UpdateItemPayload, update_item_endpoint, update_item_quantity};

/// Body returned by every mutating endpoint; the storefront re-fetches
/// the cart afterwards to observe the new state.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
