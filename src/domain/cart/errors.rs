use super::ProductId;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum CartError {
    #[error("You must be signed in to use the cart.")]
    NotAuthenticated,
    #[error("Product {0} was not found.")]
    ProductNotFound(ProductId),
    #[error("Quantity must be a positive whole number, got {0}.")]
    InvalidQuantity(i32),
}
