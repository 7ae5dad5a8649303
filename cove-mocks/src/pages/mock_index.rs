//! Mock pages with URL state persistence

use crate::mocks::CheckboxMock;
use crate::ui::LinkCard;
use crate::Route;
use cove_ui::{use_color_mode, Checkbox};
use dioxus::prelude::*;

#[component]
pub fn MockIndex() -> Element {
    let color_mode = use_color_mode();
    let mode = color_mode.mode();

    rsx! {
        div { class: if mode.is_dark() { "mock-index dark" } else { "mock-index" },
            div { class: "mock-header",
                h1 { "cove mocks" }
                button {
                    class: "mock-chip",
                    onclick: move |_| color_mode.toggle(),
                    "Color mode: {mode}"
                }
            }

            h2 { "Components" }
            div { class: "mock-grid",
                LinkCard {
                    to: Route::MockCheckbox { state: None },
                    title: "Checkbox",
                    description: "Sizes, colors, states and the indeterminate parent",
                    Checkbox { default_is_checked: true, label: rsx! { "Checked" } }
                    Checkbox { is_checked: true, is_indeterminate: true, label: rsx! { "Mixed" } }
                    Checkbox { is_disabled: true, label: rsx! { "Disabled" } }
                }
            }
        }
    }
}

#[component]
pub fn MockCheckbox(state: Option<String>) -> Element {
    rsx! {
        CheckboxMock { initial_state: state }
    }
}
