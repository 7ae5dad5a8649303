//! Checkbox mock component

use super::framework::{ControlRegistryBuilder, MockPanel, Preset};
use crate::Route;
use cove_ui::{Checkbox, CheckboxSize, CheckboxValue, DarkMode, LightMode};
use dioxus::prelude::*;

const COLORS: [&str; 6] = ["blue", "green", "red", "purple", "teal", "pink"];

#[component]
pub fn CheckboxMock(initial_state: Option<String>) -> Element {
    let registry = ControlRegistryBuilder::new()
        .enum_control(
            "size",
            "Size",
            "md",
            vec![("sm", "Small"), ("md", "Medium"), ("lg", "Large")],
        )
        .enum_control(
            "color",
            "Color",
            "blue",
            COLORS.iter().map(|c| (*c, *c)).collect(),
        )
        .bool_control("checked", "Checked", false)
        .bool_control("indeterminate", "Indeterminate", false)
        .doc("Draws the minus glyph; does not change checked")
        .bool_control("disabled", "Disabled", false)
        .bool_control("invalid", "Invalid", false)
        .bool_control("full_width", "Full width", false)
        .bool_control("label", "Label", true)
        .bool_control("dark", "Dark mode", false)
        .with_presets(vec![
            Preset::new("Default"),
            Preset::new("Checked").set_bool("checked", true),
            Preset::new("Indeterminate").set_bool("indeterminate", true),
            Preset::new("Disabled Checked")
                .set_bool("checked", true)
                .set_bool("disabled", true),
            Preset::new("Invalid").set_bool("invalid", true),
            Preset::new("Dark Green")
                .set_bool("dark", true)
                .set_bool("checked", true)
                .set_string("color", "green"),
        ])
        .build(initial_state);

    registry.use_url_sync(|state| Route::MockCheckbox { state });

    let size: CheckboxSize = registry.get_string("size").parse().unwrap_or_default();
    let color = registry.get_string("color");
    let checked = registry.get_bool("checked");
    let indeterminate = registry.get_bool("indeterminate");
    let disabled = registry.get_bool("disabled");
    let invalid = registry.get_bool("invalid");
    let full_width = registry.get_bool("full_width");
    let show_label = registry.get_bool("label");
    let dark = registry.get_bool("dark");

    let on_toggle = {
        let registry = registry.clone();
        EventHandler::new(move |e: FormEvent| registry.set_bool("checked", e.checked()))
    };

    let demo_label = show_label.then(|| rsx! { "Email me about new releases" });

    let specimen = rsx! {
        div { class: if dark { "mock-stage dark" } else { "mock-stage" },
            section {
                h3 { "Interactive Demo" }
                Checkbox {
                    id: Some("mock-checkbox".to_string()),
                    name: Some("mock".to_string()),
                    value: CheckboxValue::from("yes"),
                    color: color.clone(),
                    size,
                    is_checked: checked,
                    is_indeterminate: indeterminate,
                    is_disabled: disabled,
                    is_invalid: invalid,
                    is_full_width: full_width,
                    onchange: Some(on_toggle),
                    label: demo_label,
                }
            }

            section {
                h3 { "Sizes" }
                div { class: "mock-specimens",
                    for size in [CheckboxSize::Small, CheckboxSize::Medium, CheckboxSize::Large] {
                        Checkbox {
                            key: "{size}",
                            size,
                            color: color.clone(),
                            default_is_checked: true,
                            label: rsx! { "{size}" },
                        }
                    }
                }
            }

            section {
                h3 { "Colors" }
                div { class: "mock-specimens",
                    for c in COLORS {
                        Checkbox {
                            key: "{c}",
                            color: c,
                            default_is_checked: true,
                            label: rsx! { "{c}" },
                        }
                    }
                }
            }

            section {
                h3 { "Parent and children" }
                NestedGroup { color: color.clone() }
            }
        }
    };

    let stage = if dark {
        rsx! {
            DarkMode { {specimen} }
        }
    } else {
        rsx! {
            LightMode { {specimen} }
        }
    };

    rsx! {
        MockPanel { title: "Checkbox".to_string(), registry, {stage} }
    }
}

/// A parent checkbox that is indeterminate while only some children are checked
#[component]
fn NestedGroup(color: String) -> Element {
    let mut items = use_signal(|| vec![true, false]);

    let all_checked = items.read().iter().all(|c| *c);
    let some_checked = items.read().iter().any(|c| *c) && !all_checked;

    rsx! {
        Checkbox {
            color: color.clone(),
            is_checked: all_checked,
            is_indeterminate: some_checked,
            onchange: Some(EventHandler::new(move |e: FormEvent| {
                let checked = e.checked();
                items.with_mut(|list| list.iter_mut().for_each(|c| *c = checked));
            })),
            label: rsx! { "Parent" },
        }
        div { class: "mock-nested",
            for (index , name) in ["Child 1", "Child 2"].into_iter().enumerate() {
                Checkbox {
                    key: "{name}",
                    color: color.clone(),
                    is_checked: items.read()[index],
                    onchange: Some(EventHandler::new(move |e: FormEvent| {
                        items.with_mut(|list| list[index] = e.checked());
                    })),
                    label: rsx! { "{name}" },
                }
            }
        }
    }
}
