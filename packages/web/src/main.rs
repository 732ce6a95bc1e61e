use dioxus::prelude::*;

use ui::AuthProvider;
use views::{Auth, Customer, Settings, Shop};

mod views;

/// One route per page template. Which workflow a visitor gets is decided
/// here, not by probing the document for known elements.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Auth {},
    #[route("/shop")]
    Shop {},
    #[route("/customer")]
    Customer {},
    #[route("/settings")]
    Settings {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}
