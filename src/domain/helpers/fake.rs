use fake::{Dummy, Fake, rand::seq::IteratorRandom};
use rust_decimal::Decimal;

pub struct Price;

impl Dummy<Price> for Decimal {
    fn dummy_with_rng<R: fake::Rng + ?Sized>(_config: &Price, rng: &mut R) -> Self {
        let value = (10..1000).choose(rng).unwrap();
        Decimal::new(value, 2)
    }
}

pub struct Slug;

impl Dummy<Slug> for String {
    fn dummy_with_rng<R: fake::Rng + ?Sized>(_config: &Slug, rng: &mut R) -> Self {
        let uuid: uuid::Uuid = fake::uuid::UUIDv4.fake_with_rng(rng);
        format!("product-{uuid}")
    }
}
