//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod client;
pub use client::{make_client, make_session};

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState, LogoutButton};

mod navbar;
pub use navbar::Navbar;

mod cards;
pub use cards::{BagCard, OrderCard};

mod feedback;
pub use feedback::{Feedback, FeedbackKind};
