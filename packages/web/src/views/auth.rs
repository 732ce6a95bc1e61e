//! Entry page: login/registration form with a mode toggle.

use api::{RegisterRequest, Role};
use dioxus::prelude::*;
use ui::{make_client, make_session, use_auth, AuthState, Feedback, FeedbackKind};

use crate::Route;

/// Route for a user's role after login.
fn home_route(role: Role) -> Route {
    match role {
        Role::Shop => Route::Shop {},
        Role::Customer => Route::Customer {},
    }
}

/// Auth page component. Starts in login mode; the toggle link switches to
/// registration, which adds the username and role fields.
#[component]
pub fn Auth() -> Element {
    let mut auth = use_auth();
    let nav = use_navigator();
    let mut is_login = use_signal(|| true);
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(|| "customer".to_string());
    let mut feedback = use_signal(|| Option::<(FeedbackKind, String)>::None);
    let mut loading = use_signal(|| false);

    // Already signed in: go straight to the role's page
    if !auth().loading {
        if let Some(user) = auth().user {
            nav.replace(home_route(user.role));
        }
    }

    let toggle_mode = move |evt: MouseEvent| {
        evt.prevent_default();
        is_login.set(!is_login());
        feedback.set(None);
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            feedback.set(None);
            loading.set(true);

            let client = make_client();
            if is_login() {
                match client.login(email().trim(), &password()).await {
                    Ok(token) => {
                        make_session().set_token(&token);
                        // The token is only useful if it resolves to a user;
                        // a failure here is surfaced instead of assumed away.
                        match make_client().current_user().await {
                            Ok(user) => {
                                let route = home_route(user.role);
                                auth.set(AuthState {
                                    user: Some(user),
                                    loading: false,
                                });
                                nav.push(route);
                            }
                            Err(e) => {
                                tracing::error!("failed to resolve user after login: {e}");
                                feedback.set(Some((FeedbackKind::Error, e.to_string())));
                            }
                        }
                    }
                    Err(e) => {
                        tracing::error!("login failed: {e}");
                        feedback.set(Some((FeedbackKind::Error, e.to_string())));
                    }
                }
            } else {
                let request = RegisterRequest {
                    username: username().trim().to_string(),
                    email: email().trim().to_string(),
                    password: password(),
                    role: Role::from_form_value(&role()),
                };
                match client.register(&request).await {
                    Ok(_) => {
                        feedback.set(Some((
                            FeedbackKind::Success,
                            "Registration successful! Please login.".to_string(),
                        )));
                        is_login.set(true);
                    }
                    Err(e) => {
                        tracing::error!("registration failed: {e}");
                        feedback.set(Some((FeedbackKind::Error, e.to_string())));
                    }
                }
            }
            loading.set(false);
        });
    };

    let title = if is_login() { "Login" } else { "Register" };
    let submit_label = if loading() {
        "Please wait..."
    } else if is_login() {
        "Login"
    } else {
        "Register"
    };
    let toggle_label = if is_login() {
        "Don't have an account? Register"
    } else {
        "Already have an account? Login"
    };

    rsx! {
        div {
            class: "auth-page",

            h1 { class: "auth-title", "{title}" }
            p {
                class: "auth-subtitle",
                "SurplusSaver: rescue surplus food for less"
            }

            form {
                class: "auth-form",
                onsubmit: handle_submit,

                if let Some((kind, message)) = feedback() {
                    Feedback { kind, message }
                }

                if !is_login() {
                    input {
                        r#type: "text",
                        placeholder: "Username",
                        value: username(),
                        oninput: move |evt: FormEvent| username.set(evt.value()),
                    }
                }

                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                input {
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                if !is_login() {
                    select {
                        value: role(),
                        onchange: move |evt: FormEvent| role.set(evt.value()),
                        option { value: "customer", "Customer" }
                        option { value: "shop", "Shop" }
                    }
                }

                button {
                    class: "primary",
                    r#type: "submit",
                    disabled: loading(),
                    "{submit_label}"
                }
            }

            button {
                class: "link-button auth-toggle",
                onclick: toggle_mode,
                "{toggle_label}"
            }
        }
    }
}
