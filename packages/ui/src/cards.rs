//! List-item components for bags and orders.

use api::{Bag, Order};
use dioxus::prelude::*;

/// A bag in a listing. The price line mirrors the marketplace copy:
/// discounted price first, original price in parentheses.
///
/// `action_label`/`on_action` add a button (e.g. "Buy Now") that fires with
/// the bag id; shop listings omit them and show the status instead.
#[component]
pub fn BagCard(
    bag: Bag,
    action_label: Option<String>,
    on_action: Option<EventHandler<i64>>,
) -> Element {
    let bag_id = bag.id;

    rsx! {
        div {
            class: "bag-item",
            p {
                class: "bag-headline",
                "{bag.description} - ${bag.discounted_price} (Original: ${bag.original_price})"
            }
            p {
                class: "bag-meta",
                "Quantity: {bag.quantity} | Pickup: {bag.pickup_time}"
                if let Some(ref status) = bag.status {
                    " | Status: {status}"
                }
            }
            if let (Some(label), Some(handler)) = (action_label, on_action) {
                button {
                    class: "primary",
                    onclick: move |_| handler.call(bag_id),
                    "{label}"
                }
            }
        }
    }
}

/// An order in the customer's order list. The pickup-confirmation button is
/// rendered only while the order is still pending.
#[component]
pub fn OrderCard(order: Order, on_pickup: EventHandler<i64>) -> Element {
    let bag_id = order.bag_id;

    rsx! {
        div {
            class: "bag-item",
            p {
                class: "bag-meta",
                "Bag ID: {order.bag_id} | Ordered: {order.order_time} | Status: {order.status}"
            }
            if order.is_pending() {
                button {
                    class: "primary",
                    onclick: move |_| on_pickup.call(bag_id),
                    "Confirm Pickup"
                }
            }
        }
    }
}
