pub mod cart;
pub mod catalog;
mod helpers;

pub use helpers::fake::*;
