use crate::uuid_id;

uuid_id!(CartId);
uuid_id!(ItemId);
uuid_id!(ProductId);
uuid_id!(UserId);

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::ProductId;

    #[test]
    fn product_id_round_trips_through_its_string_form() {
        let id = ProductId::new();
        let parsed = ProductId::from_str(&id.to_string()).expect("id string should parse");
        assert_eq!(id, parsed);
    }
}
