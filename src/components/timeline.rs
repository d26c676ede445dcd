//! Timeline Component
//!
//! "About" section entries that fade in from the left.

use dioxus::prelude::*;
use portfolio_core::{RevealKind, TimelineEntry};

use crate::context::use_reveal;

#[component]
pub fn Timeline(entries: Vec<TimelineEntry>) -> Element {
    let reveal = use_reveal();

    rsx! {
        div { class: "timeline",
            for (index, entry) in entries.iter().enumerate() {
                div {
                    key: "{index}",
                    class: "timeline-item",
                    "data-reveal": RevealKind::TimelineItem.key(index),
                    style: reveal.read().style(RevealKind::TimelineItem, index),

                    span { class: "timeline-period", "{entry.period}" }
                    h3 { class: "timeline-title", "{entry.title}" }
                    p { class: "timeline-detail", "{entry.detail}" }
                }
            }
        }
    }
}
