mod auth;
pub use auth::Auth;

mod shop;
pub use shop::Shop;

mod customer;
pub use customer::Customer;

mod settings;
pub use settings::Settings;
