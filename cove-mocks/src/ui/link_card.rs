//! Link card component

use crate::Route;
use dioxus::prelude::*;

/// A card-style navigation link with title, description and a live specimen
#[component]
pub fn LinkCard(
    to: Route,
    title: &'static str,
    description: &'static str,
    children: Element,
) -> Element {
    rsx! {
        Link { to, class: "mock-card",
            div { class: "mock-card-title", "{title}" }
            div { class: "mock-card-description", "{description}" }
            div { class: "mock-card-specimen", {children} }
        }
    }
}
