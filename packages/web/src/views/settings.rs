//! Settings page: update the signed-in user's profile.

use api::ProfileUpdate;
use dioxus::prelude::*;
use ui::{make_client, use_auth, AuthState, Feedback, FeedbackKind, Navbar};

use crate::Route;

#[component]
pub fn Settings() -> Element {
    let mut auth = use_auth();
    let nav = use_navigator();
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut feedback = use_signal(|| Option::<(FeedbackKind, String)>::None);
    let mut saving = use_signal(|| false);

    if !auth().loading && auth().user.is_none() {
        nav.replace(Route::Auth {});
        return rsx! {};
    }

    // Prefill the form from the resolved profile
    use_effect(move || {
        if let Some(user) = auth().user {
            username.set(user.username);
            email.set(user.email);
        }
    });

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            feedback.set(None);
            let Some(current) = auth().user else { return };

            // Only send fields that actually changed; the backend rejects
            // an empty update.
            let update = ProfileUpdate {
                username: Some(username().trim().to_string())
                    .filter(|v| !v.is_empty() && *v != current.username),
                email: Some(email().trim().to_string())
                    .filter(|v| !v.is_empty() && *v != current.email),
                password: Some(password()).filter(|v| !v.is_empty()),
            };
            if update.is_empty() {
                feedback.set(Some((
                    FeedbackKind::Error,
                    "Nothing to update".to_string(),
                )));
                return;
            }

            saving.set(true);
            match make_client().update_profile(&update).await {
                Ok(user) => {
                    auth.set(AuthState {
                        user: Some(user),
                        loading: false,
                    });
                    password.set(String::new());
                    feedback.set(Some((
                        FeedbackKind::Success,
                        "Profile updated".to_string(),
                    )));
                }
                Err(e) => {
                    tracing::error!("failed to update profile: {e}");
                    feedback.set(Some((FeedbackKind::Error, e.to_string())));
                }
            }
            saving.set(false);
        });
    };

    rsx! {
        Navbar { user: auth().user }

        div {
            class: "page",

            section {
                class: "panel",
                h2 { "Profile" }

                form {
                    class: "bag-form",
                    onsubmit: handle_save,

                    if let Some((kind, message)) = feedback() {
                        Feedback { kind, message }
                    }

                    label { "Username" }
                    input {
                        r#type: "text",
                        value: username(),
                        oninput: move |evt: FormEvent| username.set(evt.value()),
                    }

                    label { "Email" }
                    input {
                        r#type: "email",
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }

                    label { "New password" }
                    input {
                        r#type: "password",
                        placeholder: "Leave empty to keep current",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }

                    button {
                        class: "primary",
                        r#type: "submit",
                        disabled: saving(),
                        if saving() { "Saving..." } else { "Save" }
                    }
                }
            }
        }
    }
}
