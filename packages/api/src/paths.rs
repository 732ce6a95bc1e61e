//! Backend path construction, kept as pure functions so the URL shapes are
//! testable without a network.

pub const TOKEN: &str = "/token";
pub const REGISTER: &str = "/users/register";
pub const ME: &str = "/users/me";
pub const BAGS: &str = "/bags";

/// A shop's bag collection: list (GET) and create (POST).
pub fn shop_bags(shop_id: i64) -> String {
    format!("/shops/{shop_id}/bags")
}

/// A customer's order list.
pub fn orders(customer_id: i64) -> String {
    format!("/customers/{customer_id}/orders")
}

/// Purchase endpoint, scoped by both customer and bag.
pub fn buy(customer_id: i64, bag_id: i64) -> String {
    format!("/customers/{customer_id}/buy/{bag_id}")
}

/// Pickup confirmation for a purchased bag.
pub fn pickup(bag_id: i64) -> String {
    format!("/bags/{bag_id}/pickup")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scoped_paths() {
        assert_eq!(shop_bags(5), "/shops/5/bags");
        assert_eq!(orders(42), "/customers/42/orders");
        assert_eq!(buy(42, 7), "/customers/42/buy/7");
        assert_eq!(pickup(7), "/bags/7/pickup");
    }
}
