//! Auto-generated control panel UI

use super::registry::ControlRegistry;
use crate::Route;
use cove_ui::{Checkbox, CheckboxSize};
use dioxus::prelude::*;

/// Main mock panel component that renders controls, presets, and the specimen
#[component]
pub fn MockPanel(title: String, registry: ControlRegistry, children: Element) -> Element {
    rsx! {
        div { class: "mock-page",
            div { class: "mock-controls",
                div { class: "mock-header",
                    Link { to: Route::MockIndex {}, class: "mock-back", "← All mocks" }
                    h1 { "{title}" }
                }

                if !registry.presets.is_empty() {
                    PresetBar { registry: registry.clone() }
                }

                ControlsRow { registry: registry.clone() }
            }

            div { class: "mock-content", {children} }
        }
    }
}

/// Preset buttons bar
#[component]
fn PresetBar(registry: ControlRegistry) -> Element {
    rsx! {
        div { class: "mock-row",
            span { class: "mock-row-label", "Presets:" }
            for preset in &registry.presets {
                button {
                    class: if preset.matches(&registry) { "mock-chip selected" } else { "mock-chip" },
                    onclick: {
                        let preset = preset.clone();
                        let registry = registry.clone();
                        move |_| registry.apply_preset(&preset)
                    },
                    "{preset.name}"
                }
            }
        }
    }
}

/// Enum controls as button groups, bool controls as checkboxes
#[component]
fn ControlsRow(registry: ControlRegistry) -> Element {
    let enum_controls: Vec<_> = registry
        .controls
        .iter()
        .filter(|c| c.enum_options.is_some())
        .collect();
    let bool_controls: Vec<_> = registry
        .controls
        .iter()
        .filter(|c| c.enum_options.is_none())
        .collect();

    rsx! {
        for control in enum_controls {
            div { class: "mock-row",
                span { class: "mock-row-label", "{control.label}:" }
                if let Some(options) = &control.enum_options {
                    for (value , label) in options {
                        EnumButton {
                            registry: registry.clone(),
                            control_key: control.key,
                            value,
                            label,
                            doc: control.doc,
                        }
                    }
                }
            }
        }

        if !bool_controls.is_empty() {
            div { class: "mock-row",
                for control in bool_controls {
                    BoolControl {
                        registry: registry.clone(),
                        control_key: control.key,
                        label: control.label,
                        doc: control.doc,
                    }
                }
            }
        }
    }
}

/// Individual enum button - reads signal reactively
#[component]
fn EnumButton(
    registry: ControlRegistry,
    control_key: &'static str,
    value: &'static str,
    label: &'static str,
    doc: Option<&'static str>,
) -> Element {
    let is_selected = registry.get_string(control_key) == value;

    rsx! {
        button {
            class: if is_selected { "mock-chip selected" } else { "mock-chip" },
            onclick: move |_| registry.set_string(control_key, value.to_string()),
            title: doc.unwrap_or(""),
            "{label}"
        }
    }
}

/// Individual bool control, rendered with the library's own checkbox
#[component]
fn BoolControl(
    registry: ControlRegistry,
    control_key: &'static str,
    label: &'static str,
    doc: Option<&'static str>,
) -> Element {
    let current = registry.get_bool(control_key);

    rsx! {
        span { class: "mock-bool", title: doc.unwrap_or(""),
            Checkbox {
                size: CheckboxSize::Small,
                is_checked: current,
                onchange: Some(EventHandler::new(move |e: FormEvent| registry.set_bool(control_key, e.checked()))),
                label: rsx! { "{label}" },
            }
            if doc.is_some() {
                span { class: "mock-doc", "ⓘ" }
            }
        }
    }
}
