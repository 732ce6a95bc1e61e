//! Authentication context and hooks for the UI.

use api::UserInfo;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaRightFromBracket;
use dioxus_free_icons::Icon;

use crate::client::{make_client, make_session};

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
///
/// On mount, resolves the stored token into a user via `/users/me`. Any
/// failure — expired token, unreachable backend — renders as logged out;
/// the token itself is only ever removed by an explicit logout.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);

    // Resolve the current user on mount
    let _ = use_resource(move || async move {
        let session = make_session();
        if !session.is_authenticated() {
            auth_state.set(AuthState {
                user: None,
                loading: false,
            });
            return;
        }
        match make_client().current_user().await {
            Ok(user) => {
                auth_state.set(AuthState {
                    user: Some(user),
                    loading: false,
                });
            }
            Err(e) => {
                tracing::error!("failed to resolve current user: {e}");
                auth_state.set(AuthState {
                    user: None,
                    loading: false,
                });
            }
        }
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
///
/// Clears the stored token and returns to the entry page; every page's
/// navbar carries one of these.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth_state = use_auth();
    let nav = use_navigator();

    let onclick = move |_| {
        make_session().clear_token();
        auth_state.set(AuthState {
            user: None,
            loading: false,
        });
        nav.push("/");
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            Icon { icon: FaRightFromBracket, width: 14, height: 14 }
            span { "{label}" }
        }
    }
}
