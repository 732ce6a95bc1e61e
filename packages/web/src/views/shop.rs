//! Shop page: create bags and review the shop's own listings.

use api::{Bag, NewBag, Role};
use dioxus::prelude::*;
use ui::{make_client, use_auth, BagCard, Feedback, FeedbackKind, Navbar};

use crate::Route;

#[component]
pub fn Shop() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut bags = use_signal(Vec::<Bag>::new);
    let mut description = use_signal(String::new);
    let mut original_price = use_signal(String::new);
    let mut discounted_price = use_signal(String::new);
    let mut quantity = use_signal(String::new);
    let mut pickup_time = use_signal(String::new);
    let mut feedback = use_signal(|| Option::<(FeedbackKind, String)>::None);
    let mut submitting = use_signal(|| false);

    // Only an authenticated shop belongs here
    if !auth().loading {
        match auth().user {
            Some(ref user) if user.role == Role::Shop => {}
            _ => {
                nav.replace(Route::Auth {});
                return rsx! {};
            }
        }
    }

    // Load the shop's bags once the user is resolved
    let _loader = use_resource(move || async move {
        let Some(user) = auth().user else { return };
        if user.role != Role::Shop {
            return;
        }
        match make_client().shop_bags(user.id).await {
            Ok(list) => bags.set(list),
            Err(e) => {
                tracing::error!("failed to load shop bags: {e}");
                feedback.set(Some((FeedbackKind::Error, e.to_string())));
            }
        }
    });

    let handle_create = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            feedback.set(None);
            let Some(user) = auth().user else { return };

            let bag = match NewBag::from_form(
                description().trim(),
                &original_price(),
                &discounted_price(),
                &quantity(),
                pickup_time().trim(),
            ) {
                Ok(bag) => bag,
                Err(message) => {
                    feedback.set(Some((FeedbackKind::Error, message)));
                    return;
                }
            };

            submitting.set(true);
            let client = make_client();
            match client.create_bag(user.id, &bag).await {
                Ok(()) => {
                    feedback.set(Some((
                        FeedbackKind::Success,
                        "Bag added successfully!".to_string(),
                    )));
                    match client.shop_bags(user.id).await {
                        Ok(list) => bags.set(list),
                        Err(e) => {
                            tracing::error!("failed to reload shop bags: {e}");
                            feedback.set(Some((FeedbackKind::Error, e.to_string())));
                        }
                    }
                }
                Err(e) => {
                    // The form stays populated so the shop can retry
                    tracing::error!("failed to create bag: {e}");
                    feedback.set(Some((FeedbackKind::Error, e.to_string())));
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        Navbar { user: auth().user }

        div {
            class: "page",

            section {
                class: "panel",
                h2 { "Add a Surprise Bag" }

                form {
                    class: "bag-form",
                    onsubmit: handle_create,

                    if let Some((kind, message)) = feedback() {
                        Feedback { kind, message }
                    }

                    input {
                        r#type: "text",
                        placeholder: "Description",
                        value: description(),
                        oninput: move |evt: FormEvent| description.set(evt.value()),
                    }
                    input {
                        r#type: "text",
                        placeholder: "Original price",
                        value: original_price(),
                        oninput: move |evt: FormEvent| original_price.set(evt.value()),
                    }
                    input {
                        r#type: "text",
                        placeholder: "Discounted price",
                        value: discounted_price(),
                        oninput: move |evt: FormEvent| discounted_price.set(evt.value()),
                    }
                    input {
                        r#type: "text",
                        placeholder: "Quantity",
                        value: quantity(),
                        oninput: move |evt: FormEvent| quantity.set(evt.value()),
                    }
                    input {
                        r#type: "text",
                        placeholder: "Pickup time (e.g. 18:00)",
                        value: pickup_time(),
                        oninput: move |evt: FormEvent| pickup_time.set(evt.value()),
                    }

                    button {
                        class: "primary",
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() { "Adding..." } else { "Add Bag" }
                    }
                }
            }

            section {
                class: "panel",
                h2 { "Your Bags" }

                if bags().is_empty() {
                    p { class: "empty-hint", "No bags listed yet." }
                }
                // Rendered in whatever order the backend returns
                for bag in bags() {
                    BagCard { key: "{bag.id}", bag: bag.clone() }
                }
            }
        }
    }
}
