//! # Wire types exchanged with the SurplusSaver backend
//!
//! Everything here is an opaque JSON record owned by the backend; the
//! client never mutates these locally — every state change is performed by
//! re-fetching the affected list after a mutating call.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`UserInfo`] | The authenticated user from `GET /users/me`: id, username, email, [`Role`]. |
//! | [`Bag`] | A discounted, quantity-limited package of surplus food listed by a shop. The public `/bags` listing omits `status`, the shop's own listing includes it, so it is optional. |
//! | [`NewBag`] | A bag about to be created. Built from raw form strings via [`NewBag::from_form`], which performs the numeric coercion of prices and quantity. |
//! | [`Order`] | A customer's claim on one unit of a bag. `status` starts as `"pending"` and becomes `"picked_up"` on pickup confirmation. |
//! | [`TokenResponse`] | The `POST /token` response carrying the bearer token. |
//! | [`RegisterRequest`] | JSON body for `POST /users/register`. |
//! | [`ProfileUpdate`] | Optional profile fields, sent as query parameters on `PATCH /users/me` (the backend reads them from the query string). |

use serde::{Deserialize, Serialize};

/// Role of an authenticated user. The client only ever branches on
/// shop-vs-not-shop, so any role it does not know (the backend also has
/// admin roles) is treated as a customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Shop,
    #[serde(other)]
    Customer,
}

impl Role {
    /// Map a form `<select>` value to a role.
    pub fn from_form_value(value: &str) -> Self {
        if value == "shop" {
            Role::Shop
        } else {
            Role::Customer
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Shop => "shop",
            Role::Customer => "customer",
        }
    }
}

/// The authenticated user's profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: Role,
}

/// Response from `POST /token`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

/// JSON body for `POST /users/register`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// A surplus bag as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bag {
    pub id: i64,
    pub description: String,
    pub original_price: f64,
    pub discounted_price: f64,
    pub quantity: u32,
    pub pickup_time: String,
    /// Present in the shop's own listing, absent from the public `/bags` feed.
    #[serde(default)]
    pub status: Option<String>,
}

/// Fields for creating a bag (`POST /shops/{id}/bags`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBag {
    pub description: String,
    pub original_price: f64,
    pub discounted_price: f64,
    pub quantity: u32,
    pub pickup_time: String,
}

impl NewBag {
    /// Build a bag from raw form input, coercing the price and quantity
    /// strings to numbers. Returns a user-facing message when a numeric
    /// field does not parse; no request is issued in that case.
    pub fn from_form(
        description: &str,
        original_price: &str,
        discounted_price: &str,
        quantity: &str,
        pickup_time: &str,
    ) -> Result<Self, String> {
        let original_price: f64 = original_price
            .trim()
            .parse()
            .map_err(|_| "Original price must be a number".to_string())?;
        let discounted_price: f64 = discounted_price
            .trim()
            .parse()
            .map_err(|_| "Discounted price must be a number".to_string())?;
        let quantity: u32 = quantity
            .trim()
            .parse()
            .map_err(|_| "Quantity must be a whole number".to_string())?;
        Ok(Self {
            description: description.to_string(),
            original_price,
            discounted_price,
            quantity,
            pickup_time: pickup_time.to_string(),
        })
    }
}

/// A customer's order as returned by `GET /customers/{id}/orders`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub bag_id: i64,
    pub order_time: String,
    pub status: String,
}

impl Order {
    /// Whether the order is still awaiting pickup confirmation.
    pub fn is_pending(&self) -> bool {
        self.status == "pending"
    }
}

/// Optional profile fields for `PATCH /users/me`.
///
/// Serialized into the query string; `None` fields are omitted entirely so
/// the backend leaves them untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl ProfileUpdate {
    /// True when no field is set; the backend rejects an empty update.
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.email.is_none() && self.password.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_deserializes_known_values() {
        let shop: Role = serde_json::from_str("\"shop\"").unwrap();
        let customer: Role = serde_json::from_str("\"customer\"").unwrap();
        assert_eq!(shop, Role::Shop);
        assert_eq!(customer, Role::Customer);
    }

    #[test]
    fn unknown_role_falls_back_to_customer() {
        // The backend also issues admin/superadmin roles; the client routes
        // everything that is not a shop to the customer page.
        let role: Role = serde_json::from_str("\"superadmin\"").unwrap();
        assert_eq!(role, Role::Customer);
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Shop).unwrap(), "\"shop\"");
        assert_eq!(
            serde_json::to_string(&Role::Customer).unwrap(),
            "\"customer\""
        );
    }

    #[test]
    fn new_bag_coerces_numeric_fields() {
        let bag = NewBag::from_form("Bread", "10", "4", "3", "18:00").unwrap();
        assert_eq!(bag.description, "Bread");
        assert_eq!(bag.original_price, 10.0);
        assert_eq!(bag.discounted_price, 4.0);
        assert_eq!(bag.quantity, 3);
        assert_eq!(bag.pickup_time, "18:00");
    }

    #[test]
    fn new_bag_accepts_decimal_prices() {
        let bag = NewBag::from_form("Pastries", "12.50", "4.99", "2", "19:30").unwrap();
        assert_eq!(bag.original_price, 12.5);
        assert_eq!(bag.discounted_price, 4.99);
    }

    #[test]
    fn new_bag_rejects_non_numeric_input() {
        assert!(NewBag::from_form("Bread", "ten", "4", "3", "18:00").is_err());
        assert!(NewBag::from_form("Bread", "10", "cheap", "3", "18:00").is_err());
        assert!(NewBag::from_form("Bread", "10", "4", "3.5", "18:00").is_err());
    }

    #[test]
    fn bag_deserializes_without_status() {
        // The public /bags feed omits the status column.
        let json = r#"{"id":1,"shop_id":2,"description":"Bread","original_price":10.0,
                       "discounted_price":4.0,"quantity":3,"pickup_time":"18:00"}"#;
        let bag: Bag = serde_json::from_str(json).unwrap();
        assert_eq!(bag.id, 1);
        assert!(bag.status.is_none());
    }

    #[test]
    fn bag_deserializes_with_status() {
        let json = r#"{"id":1,"description":"Bread","original_price":10.0,
                       "discounted_price":4.0,"quantity":0,"pickup_time":"18:00",
                       "status":"sold"}"#;
        let bag: Bag = serde_json::from_str(json).unwrap();
        assert_eq!(bag.status.as_deref(), Some("sold"));
    }

    #[test]
    fn order_pending_check() {
        let mut order = Order {
            id: 1,
            bag_id: 7,
            order_time: "2024-05-01T18:00:00".to_string(),
            status: "pending".to_string(),
        };
        assert!(order.is_pending());
        order.status = "picked_up".to_string();
        assert!(!order.is_pending());
    }

    #[test]
    fn profile_update_skips_unset_fields() {
        let update = ProfileUpdate {
            username: Some("new-name".to_string()),
            ..Default::default()
        };
        assert!(!update.is_empty());
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            serde_json::json!({"username": "new-name"})
        );
        assert!(ProfileUpdate::default().is_empty());
    }
}
