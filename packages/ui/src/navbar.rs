use api::UserInfo;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaBagShopping;
use dioxus_free_icons::Icon;

use crate::auth::LogoutButton;

#[component]
pub fn Navbar(user: Option<UserInfo>) -> Element {
    let nav = use_navigator();

    rsx! {
        div {
            class: "navbar",

            div {
                class: "navbar-brand",
                Icon { icon: FaBagShopping, width: 18, height: 18 }
                span { "SurplusSaver" }
            }

            div {
                class: "navbar-actions",
                if let Some(ref u) = user {
                    span { class: "navbar-username", "{u.username}" }
                    button {
                        class: "link-button",
                        onclick: move |_| {
                            nav.push("/settings");
                        },
                        "Settings"
                    }
                    LogoutButton { class: "navbar-logout" }
                }
            }
        }
    }
}
