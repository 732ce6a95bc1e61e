//! Inline feedback banner, the replacement for the old blocking alerts.

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeedbackKind {
    Error,
    Success,
}

/// A one-line status banner rendered above a form or list.
#[component]
pub fn Feedback(kind: FeedbackKind, message: String) -> Element {
    let class = match kind {
        FeedbackKind::Error => "feedback feedback-error",
        FeedbackKind::Success => "feedback feedback-success",
    };

    rsx! {
        div {
            class: "{class}",
            "{message}"
        }
    }
}
