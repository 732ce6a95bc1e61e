//! Customer page: browse available bags, buy, and confirm pickups.

use api::{Bag, Order, Role};
use dioxus::prelude::*;
use ui::{make_client, use_auth, BagCard, Feedback, FeedbackKind, Navbar, OrderCard};

use crate::Route;

#[component]
pub fn Customer() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut available = use_signal(Vec::<Bag>::new);
    let mut orders = use_signal(Vec::<Order>::new);
    let mut feedback = use_signal(|| Option::<(FeedbackKind, String)>::None);

    // Shops have their own page; anonymous visitors go back to the entry page
    if !auth().loading {
        match auth().user {
            Some(ref user) if user.role == Role::Customer => {}
            _ => {
                nav.replace(Route::Auth {});
                return rsx! {};
            }
        }
    }

    // Load both lists once the user is resolved. The available-bags feed is
    // public; the order list is scoped to the customer.
    let _loader = use_resource(move || async move {
        let Some(user) = auth().user else { return };
        if user.role != Role::Customer {
            return;
        }
        let client = make_client();
        match client.available_bags().await {
            Ok(list) => available.set(list),
            Err(e) => {
                tracing::error!("failed to load available bags: {e}");
                feedback.set(Some((FeedbackKind::Error, e.to_string())));
            }
        }
        match client.orders(user.id).await {
            Ok(list) => orders.set(list),
            Err(e) => {
                tracing::error!("failed to load orders: {e}");
                feedback.set(Some((FeedbackKind::Error, e.to_string())));
            }
        }
    });

    let handle_buy = move |bag_id: i64| {
        spawn(async move {
            feedback.set(None);
            let Some(user) = auth().user else { return };
            let client = make_client();
            match client.buy_bag(user.id, bag_id).await {
                Ok(()) => {
                    feedback.set(Some((
                        FeedbackKind::Success,
                        "Bag purchased successfully!".to_string(),
                    )));
                    // Two separate reloads; another buyer can change server
                    // state between them.
                    match client.available_bags().await {
                        Ok(list) => available.set(list),
                        Err(e) => {
                            tracing::error!("failed to reload available bags: {e}");
                            feedback.set(Some((FeedbackKind::Error, e.to_string())));
                        }
                    }
                    match client.orders(user.id).await {
                        Ok(list) => orders.set(list),
                        Err(e) => {
                            tracing::error!("failed to reload orders: {e}");
                            feedback.set(Some((FeedbackKind::Error, e.to_string())));
                        }
                    }
                }
                Err(e) => {
                    tracing::error!("failed to buy bag {bag_id}: {e}");
                    feedback.set(Some((FeedbackKind::Error, e.to_string())));
                }
            }
        });
    };

    let handle_pickup = move |bag_id: i64| {
        spawn(async move {
            feedback.set(None);
            let Some(user) = auth().user else { return };
            let client = make_client();
            match client.confirm_pickup(bag_id).await {
                Ok(()) => {
                    feedback.set(Some((
                        FeedbackKind::Success,
                        "Pickup confirmed!".to_string(),
                    )));
                    match client.orders(user.id).await {
                        Ok(list) => orders.set(list),
                        Err(e) => {
                            tracing::error!("failed to reload orders: {e}");
                            feedback.set(Some((FeedbackKind::Error, e.to_string())));
                        }
                    }
                }
                Err(e) => {
                    tracing::error!("failed to confirm pickup for bag {bag_id}: {e}");
                    feedback.set(Some((FeedbackKind::Error, e.to_string())));
                }
            }
        });
    };

    rsx! {
        Navbar { user: auth().user }

        div {
            class: "page",

            if let Some((kind, message)) = feedback() {
                Feedback { kind, message }
            }

            section {
                class: "panel",
                h2 { "Available Bags" }

                if available().is_empty() {
                    p { class: "empty-hint", "Nothing available right now. Check back later!" }
                }
                for bag in available() {
                    BagCard {
                        key: "{bag.id}",
                        bag: bag.clone(),
                        action_label: "Buy Now",
                        on_action: handle_buy,
                    }
                }
            }

            section {
                class: "panel",
                h2 { "Your Orders" }

                if orders().is_empty() {
                    p { class: "empty-hint", "No orders yet." }
                }
                for order in orders() {
                    OrderCard {
                        key: "{order.id}",
                        order: order.clone(),
                        on_pickup: handle_pickup,
                    }
                }
            }
        }
    }
}
