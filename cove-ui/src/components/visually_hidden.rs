//! Content hidden from sight but kept in the accessibility tree

use crate::style::Style;
use dioxus::prelude::*;

/// Clip an element to a single invisible pixel without removing it from layout
/// flow for assistive technology or keyboard focus.
pub fn visually_hidden_style() -> Style {
    Style::new()
        .set("border", "0")
        .set("clip", "rect(0, 0, 0, 0)")
        .set("height", "1px")
        .set("width", "1px")
        .set("margin", "-1px")
        .set("padding", "0")
        .set("overflow", "hidden")
        .set("white-space", "nowrap")
        .set("position", "absolute")
}

/// Screen-reader-only text
#[component]
pub fn VisuallyHidden(children: Element) -> Element {
    let css = visually_hidden_style().to_css();

    rsx! {
        span { style: "{css}", {children} }
    }
}

/// A native checkbox or radio input that is hidden but still focusable.
///
/// `checked` makes the input controlled; `default_checked` only sets the
/// initial state. Event callbacks are forwarded untouched.
#[component]
pub fn VisuallyHiddenInput(
    #[props(default = "checkbox")] input_type: &'static str,
    #[props(default)] id: Option<String>,
    #[props(default)] name: Option<String>,
    #[props(default)] value: Option<String>,
    #[props(default)] aria_label: Option<String>,
    #[props(default)] aria_labelledby: Option<String>,
    #[props(default)] checked: Option<bool>,
    #[props(default)] default_checked: Option<bool>,
    #[props(default)] disabled: bool,
    #[props(default)] invalid: bool,
    #[props(default)] indeterminate: bool,
    #[props(default)] onchange: Option<EventHandler<FormEvent>>,
    #[props(default)] onblur: Option<EventHandler<FocusEvent>>,
    #[props(default)] onfocus: Option<EventHandler<FocusEvent>>,
    #[props(default)] onmounted: Option<EventHandler<MountedEvent>>,
) -> Element {
    let css = visually_hidden_style().to_css();

    rsx! {
        input {
            r#type: input_type,
            style: "{css}",
            id: id.as_deref(),
            name: name.as_deref(),
            value: value.as_deref(),
            aria_label: aria_label.as_deref(),
            aria_labelledby: aria_labelledby.as_deref(),
            checked,
            initial_checked: default_checked,
            disabled,
            aria_invalid: if invalid { Some("true") } else { None },
            aria_checked: if indeterminate { Some("mixed") } else { None },
            "data-indeterminate": if indeterminate { Some("true") } else { None },
            onchange: move |e| {
                if let Some(ref handler) = onchange {
                    handler.call(e);
                }
            },
            onblur: move |e| {
                if let Some(ref handler) = onblur {
                    handler.call(e);
                }
            },
            onfocus: move |e| {
                if let Some(ref handler) = onfocus {
                    handler.call(e);
                }
            },
            onmounted: move |e| {
                if let Some(ref handler) = onmounted {
                    handler.call(e);
                }
            },
        }
    }
}
