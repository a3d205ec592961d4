//! Application status badge.

use board_core::StatusEmphasis;
use dioxus::prelude::*;

/// Uppercased status text, colored by outcome.
#[component]
pub fn ApplicationStatusBadge(text: String, emphasis: StatusEmphasis) -> Element {
    let emphasis_class = emphasis.css_class();

    rsx! {
        p {
            class: "uppercase font-semibold {emphasis_class}",
            "{text}"
        }
    }
}
