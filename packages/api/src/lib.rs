//! # API crate — typed HTTP client for the SurplusSaver backend
//!
//! Every frontend in this workspace talks to the backend through
//! [`Client`], one method per endpoint. The backend is an external
//! collaborator: all business logic (pricing, inventory, order-status
//! transitions) lives there, and this crate is strictly request/response
//! plumbing.
//!
//! ## Endpoints
//!
//! | Method | HTTP | Auth |
//! |--------|------|------|
//! | [`Client::login`] | `POST /token` (form-encoded) | none |
//! | [`Client::register`] | `POST /users/register` (JSON) | none |
//! | [`Client::current_user`] | `GET /users/me` | bearer |
//! | [`Client::update_profile`] | `PATCH /users/me` (query params) | bearer |
//! | [`Client::create_bag`] | `POST /shops/{id}/bags` (JSON) | bearer |
//! | [`Client::shop_bags`] | `GET /shops/{id}/bags` | bearer |
//! | [`Client::available_bags`] | `GET /bags` | none |
//! | [`Client::orders`] | `GET /customers/{id}/orders` | bearer |
//! | [`Client::buy_bag`] | `POST /customers/{cid}/buy/{bid}` | bearer |
//! | [`Client::confirm_pickup`] | `POST /bags/{id}/pickup` | bearer |
//!
//! The bearer token is an explicit field of the client rather than ambient
//! state: callers build a `Client` from their session and pass it around.
//! No retries, no timeouts, no de-duplication of in-flight requests — a
//! failed call is terminal for the action that issued it.

mod error;
pub mod models;
pub mod paths;

pub use error::ApiError;
pub use models::{
    Bag, NewBag, Order, ProfileUpdate, RegisterRequest, Role, TokenResponse, UserInfo,
};

use error::detail_or;

/// Backend origin. Fixed at compile time; `SURPLUS_SAVER_API_URL` in the
/// build environment overrides the localhost default.
pub const API_URL: &str = match option_env!("SURPLUS_SAVER_API_URL") {
    Some(url) => url,
    None => "http://localhost:8000",
};

/// HTTP client for the SurplusSaver backend.
#[derive(Clone, Debug)]
pub struct Client {
    base_url: String,
    token: Option<String>,
    http: reqwest::Client,
}

impl Client {
    /// Create an unauthenticated client against the given origin.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            http: reqwest::Client::new(),
        }
    }

    /// Attach a bearer token (or none) for authorized calls.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// Exchange credentials for a bearer token.
    ///
    /// The backend's token endpoint is OAuth2-password shaped: the email
    /// goes in the form field named `username`.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, ApiError> {
        let resp = self
            .http
            .post(self.url(paths::TOKEN))
            .form(&[("username", email), ("password", password)])
            .send()
            .await?;
        let resp = expect_ok(resp, "Login failed").await?;
        let token: TokenResponse = resp.json().await?;
        Ok(token.access_token)
    }

    /// Create a new account.
    pub async fn register(&self, request: &RegisterRequest) -> Result<UserInfo, ApiError> {
        let resp = self
            .http
            .post(self.url(paths::REGISTER))
            .json(request)
            .send()
            .await?;
        let resp = expect_ok(resp, "Registration failed").await?;
        Ok(resp.json().await?)
    }

    /// Fetch the authenticated user's profile.
    ///
    /// Any failure (expired token, unreachable backend) is an error here;
    /// callers decide whether that means "render as logged out".
    pub async fn current_user(&self) -> Result<UserInfo, ApiError> {
        let resp = self
            .authorize(self.http.get(self.url(paths::ME)))
            .send()
            .await?;
        let resp = expect_ok(resp, "Could not load your profile").await?;
        Ok(resp.json().await?)
    }

    /// Update profile fields; unset fields are left untouched.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserInfo, ApiError> {
        let resp = self
            .authorize(self.http.patch(self.url(paths::ME)))
            .query(update)
            .send()
            .await?;
        let resp = expect_ok(resp, "Failed to update profile").await?;
        Ok(resp.json().await?)
    }

    /// List a shop's own bags, including their status.
    pub async fn shop_bags(&self, shop_id: i64) -> Result<Vec<Bag>, ApiError> {
        let resp = self
            .authorize(self.http.get(self.url(&paths::shop_bags(shop_id))))
            .send()
            .await?;
        let resp = expect_ok(resp, "Failed to load bags").await?;
        Ok(resp.json().await?)
    }

    /// Create a bag in the shop's inventory.
    pub async fn create_bag(&self, shop_id: i64, bag: &NewBag) -> Result<(), ApiError> {
        let resp = self
            .authorize(self.http.post(self.url(&paths::shop_bags(shop_id))))
            .json(bag)
            .send()
            .await?;
        expect_ok(resp, "Failed to add bag").await?;
        Ok(())
    }

    /// List every bag still available for purchase. Public, no auth.
    pub async fn available_bags(&self) -> Result<Vec<Bag>, ApiError> {
        let resp = self.http.get(self.url(paths::BAGS)).send().await?;
        let resp = expect_ok(resp, "Failed to load bags").await?;
        Ok(resp.json().await?)
    }

    /// List the customer's orders.
    pub async fn orders(&self, customer_id: i64) -> Result<Vec<Order>, ApiError> {
        let resp = self
            .authorize(self.http.get(self.url(&paths::orders(customer_id))))
            .send()
            .await?;
        let resp = expect_ok(resp, "Failed to load orders").await?;
        Ok(resp.json().await?)
    }

    /// Purchase one unit of a bag.
    pub async fn buy_bag(&self, customer_id: i64, bag_id: i64) -> Result<(), ApiError> {
        let resp = self
            .authorize(self.http.post(self.url(&paths::buy(customer_id, bag_id))))
            .send()
            .await?;
        expect_ok(resp, "Failed to buy bag").await?;
        Ok(())
    }

    /// Confirm that a purchased bag was picked up.
    pub async fn confirm_pickup(&self, bag_id: i64) -> Result<(), ApiError> {
        let resp = self
            .authorize(self.http.post(self.url(&paths::pickup(bag_id))))
            .send()
            .await?;
        expect_ok(resp, "Failed to confirm pickup").await?;
        Ok(())
    }
}

/// Pass a successful response through; turn a non-2xx response into an
/// [`ApiError`] carrying the backend's `detail` message when present.
async fn expect_ok(
    resp: reqwest::Response,
    fallback: &str,
) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        Ok(resp)
    } else {
        let body = resp.text().await.unwrap_or_default();
        Err(ApiError::api(status.as_u16(), detail_or(&body, fallback)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_joins_base_and_path() {
        let client = Client::new("http://localhost:8000");
        assert_eq!(client.url(paths::TOKEN), "http://localhost:8000/token");

        // A trailing slash on the origin must not produce a double slash.
        let client = Client::new("http://localhost:8000/");
        assert_eq!(client.url(paths::BAGS), "http://localhost:8000/bags");
    }

    #[test]
    fn with_token_sets_bearer() {
        let client = Client::new(API_URL).with_token(Some("tok".to_string()));
        assert_eq!(client.token.as_deref(), Some("tok"));

        let client = client.with_token(None);
        assert!(client.token.is_none());
    }
}
