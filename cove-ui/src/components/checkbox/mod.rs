//! Styled checkbox
//!
//! A visually hidden native input followed by a `ControlBox` proxy and an
//! optional label, all inside a `label` wrapper so clicking anywhere toggles
//! the input.

mod styles;

pub use styles::{checkbox_styles, CheckboxSize};

use crate::components::block::{Block, BlockTag};
use crate::components::control_box::ControlBox;
use crate::components::flex::{Flex, FlexTag};
use crate::components::icon::{Icon, IconName};
use crate::components::visually_hidden::VisuallyHiddenInput;
use crate::style::Style;
use crate::theme::{use_color_mode, use_theme, Theme};
use dioxus::prelude::*;
use std::fmt;

/// Label opacity while disabled
pub const DISABLED_LABEL_OPACITY: &str = "0.32";

/// Value submitted with the form when the box is checked
#[derive(Clone, Debug, PartialEq)]
pub enum CheckboxValue {
    Text(String),
    Integer(i64),
    Number(f64),
}

impl fmt::Display for CheckboxValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckboxValue::Text(text) => f.write_str(text),
            CheckboxValue::Integer(integer) => write!(f, "{integer}"),
            CheckboxValue::Number(number) => write!(f, "{number}"),
        }
    }
}

impl From<&str> for CheckboxValue {
    fn from(value: &str) -> Self {
        CheckboxValue::Text(value.to_string())
    }
}

impl From<String> for CheckboxValue {
    fn from(value: String) -> Self {
        CheckboxValue::Text(value)
    }
}

impl From<i64> for CheckboxValue {
    fn from(value: i64) -> Self {
        CheckboxValue::Integer(value)
    }
}

impl From<f64> for CheckboxValue {
    fn from(value: f64) -> Self {
        CheckboxValue::Number(value)
    }
}

/// Indeterminate wins over checked
pub fn glyph_for(is_indeterminate: bool) -> IconName {
    if is_indeterminate {
        IconName::Minus
    } else {
        IconName::Check
    }
}

/// Wrapper declarations on top of the inline-flex layout
pub fn wrapper_style(is_full_width: bool, is_disabled: bool) -> Style {
    Style::new()
        .set("vertical-align", "top")
        .set_opt("width", is_full_width.then_some("100%"))
        .set(
            "cursor",
            if is_disabled { "not-allowed" } else { "pointer" },
        )
}

pub fn label_style(theme: &Theme, size: CheckboxSize, is_disabled: bool) -> Style {
    Style::new()
        .set("margin-left", theme.space(2))
        .set("font-size", theme.font_size(size.as_str()))
        .set("user-select", "none")
        .set(
            "opacity",
            if is_disabled { DISABLED_LABEL_OPACITY } else { "1" },
        )
}

/// Themed checkbox.
///
/// Pass `is_checked` for a controlled checkbox (update it from `onchange`),
/// or `default_is_checked` to let the input own its state. `is_indeterminate`
/// only changes what is drawn; it never changes `is_checked`.
#[component]
pub fn Checkbox(
    #[props(default)] id: Option<String>,
    #[props(default)] name: Option<String>,
    #[props(default)] value: Option<CheckboxValue>,
    #[props(default)] aria_label: Option<String>,
    #[props(default)] aria_labelledby: Option<String>,
    /// Theme color scale used when checked, e.g. "green"
    #[props(into, default = "blue".to_string())]
    color: String,
    #[props(default)] size: CheckboxSize,
    #[props(default)] icon_color: Option<String>,
    #[props(into, default = "10px".to_string())] icon_size: String,
    #[props(default)] default_is_checked: Option<bool>,
    #[props(default)] is_checked: Option<bool>,
    #[props(default)] is_indeterminate: bool,
    #[props(default)] is_disabled: bool,
    #[props(default)] is_invalid: bool,
    #[props(default)] is_full_width: bool,
    #[props(default)] onchange: Option<EventHandler<FormEvent>>,
    #[props(default)] onblur: Option<EventHandler<FocusEvent>>,
    #[props(default)] onfocus: Option<EventHandler<FocusEvent>>,
    /// Receives the native input once mounted
    #[props(default)]
    onmounted: Option<EventHandler<MountedEvent>>,
    /// Label rendered to the right of the box
    #[props(default)]
    label: Option<Element>,
    /// Extra class for the wrapper
    #[props(default)]
    class: Option<String>,
    /// Extra declarations for the wrapper; these win over the computed ones
    #[props(default)]
    style: Style,
) -> Element {
    let mode = use_color_mode().mode();
    let theme = use_theme();

    let control_styles = checkbox_styles(&theme, &color, size, mode);
    let wrapper = wrapper_style(is_full_width, is_disabled).merge(&style);
    let label_css = label_style(&theme, size, is_disabled);

    rsx! {
        Flex {
            tag: FlexTag::Label,
            inline: true,
            align: "center",
            class,
            style: wrapper,
            VisuallyHiddenInput {
                input_type: "checkbox",
                id,
                name,
                value: value.map(|v| v.to_string()),
                aria_label,
                aria_labelledby,
                checked: is_checked,
                default_checked: default_is_checked,
                disabled: is_disabled,
                invalid: is_invalid,
                indeterminate: is_indeterminate,
                onchange,
                onblur,
                onfocus,
                onmounted,
            }
            ControlBox { styles: control_styles,
                Icon {
                    name: glyph_for(is_indeterminate),
                    size: icon_size,
                    color: icon_color,
                }
            }
            if let Some(label) = label {
                Block { tag: BlockTag::Span, style: label_css, {label} }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::DarkMode;
    use dioxus::dioxus_core::{Mutation, Mutations};
    use dioxus_html::{
        set_event_converter, PlatformEventData, SerializedFocusData, SerializedFormData,
        SerializedHtmlEventConverter,
    };
    use std::any::Any;
    use std::rc::Rc;
    use std::sync::Mutex;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    /// The opening `<input ...>` tag of the rendered tree
    fn input_tag(html: &str) -> &str {
        let start = html.find("<input").expect("input rendered");
        let end = start + html[start..].find('>').expect("input tag closed");
        &html[start..=end]
    }

    #[test]
    fn test_glyph_selection() {
        assert_eq!(glyph_for(true), IconName::Minus);
        assert_eq!(glyph_for(false), IconName::Check);
    }

    #[test]
    fn test_wrapper_style() {
        assert_eq!(
            wrapper_style(false, false).to_css(),
            "vertical-align: top; cursor: pointer;"
        );
        assert_eq!(
            wrapper_style(true, true).to_css(),
            "vertical-align: top; width: 100%; cursor: not-allowed;"
        );
    }

    #[test]
    fn test_label_style() {
        let theme = Theme::default();
        let enabled = label_style(&theme, CheckboxSize::Large, false);
        assert_eq!(enabled.get("opacity"), Some("1"));
        assert_eq!(enabled.get("font-size"), Some("1.125rem"));
        assert_eq!(enabled.get("margin-left"), Some("0.5rem"));

        let disabled = label_style(&theme, CheckboxSize::Small, true);
        assert_eq!(disabled.get("opacity"), Some(DISABLED_LABEL_OPACITY));
        assert_eq!(disabled.get("font-size"), Some("0.875rem"));
    }

    #[test]
    fn test_value_display() {
        assert_eq!(CheckboxValue::from("apples").to_string(), "apples");
        assert_eq!(CheckboxValue::from(3_i64).to_string(), "3");
        assert_eq!(
            CheckboxValue::from(9_007_199_254_740_993_i64).to_string(),
            "9007199254740993"
        );
        assert_eq!(CheckboxValue::from(-4_i64), CheckboxValue::Integer(-4));
        assert_eq!(CheckboxValue::from(2.5).to_string(), "2.5");
    }

    #[test]
    fn test_renders_label_wrapper_and_hidden_input() {
        fn app() -> Element {
            rsx! {
                Checkbox {
                    id: Some("terms".to_string()),
                    name: Some("terms".to_string()),
                    value: CheckboxValue::from(1_i64),
                }
            }
        }
        let html = render(app);
        assert!(html.starts_with("<label"));
        assert!(html.contains("display: inline-flex;"));
        assert!(html.contains("cursor: pointer;"));
        assert!(!html.contains("width: 100%"));

        let input = input_tag(&html);
        assert!(input.contains("type=\"checkbox\""));
        assert!(input.contains("id=\"terms\""));
        assert!(input.contains("name=\"terms\""));
        assert!(input.contains("value=\"1\""));
        assert!(input.contains("clip: rect(0, 0, 0, 0)"));
        assert!(!input.contains("checked"));
        assert!(!input.contains("aria-invalid"));
    }

    #[test]
    fn test_controlled_checked_reaches_input() {
        fn app() -> Element {
            rsx! {
                Checkbox { is_checked: true }
            }
        }
        let html = render(app);
        assert!(input_tag(&html).contains("checked"));
    }

    #[test]
    fn test_explicit_unchecked_renders_no_checked_state() {
        fn app() -> Element {
            rsx! {
                Checkbox { is_checked: false }
            }
        }
        let html = render(app);
        assert!(!input_tag(&html).contains("checked"));
    }

    #[test]
    fn test_uncontrolled_default_leaves_state_to_input() {
        fn app() -> Element {
            rsx! {
                Checkbox { default_is_checked: true }
            }
        }
        let html = render(app);
        let input = input_tag(&html);
        assert!(input.contains("initial_checked=true"));
        assert!(!input.contains(" checked"));
    }

    #[test]
    fn test_handlers_receive_input_events() {
        static SEEN: Mutex<Vec<String>> = Mutex::new(Vec::new());

        fn app() -> Element {
            rsx! {
                Checkbox {
                    onfocus: Some(EventHandler::new(|_: FocusEvent| SEEN.lock().unwrap().push("focus".to_string()))),
                    onchange: Some(
                        EventHandler::new(|e: FormEvent| {
                            SEEN.lock().unwrap().push(format!("change:{}", e.checked()));
                        }),
                    ),
                    onblur: Some(EventHandler::new(|_: FocusEvent| SEEN.lock().unwrap().push("blur".to_string()))),
                }
            }
        }

        set_event_converter(Box::new(SerializedHtmlEventConverter));
        let mut dom = VirtualDom::new(app);
        let mut mutations = Mutations::default();
        dom.rebuild(&mut mutations);

        // Only the native input listens for focus
        let input = mutations
            .edits
            .iter()
            .find_map(|edit| match edit {
                Mutation::NewEventListener { name, id } if name == "focus" => Some(*id),
                _ => None,
            })
            .expect("input has a focus listener");

        let fire = |name: &str, data: Box<dyn Any>| {
            let event = Event::new(Rc::new(PlatformEventData::new(data)) as Rc<dyn Any>, false);
            dom.runtime().handle_event(name, event, input);
        };
        fire("focus", Box::new(SerializedFocusData::default()));
        fire(
            "change",
            Box::new(SerializedFormData::new("true".to_string(), Vec::new())),
        );
        fire("blur", Box::new(SerializedFocusData::default()));

        assert_eq!(*SEEN.lock().unwrap(), ["focus", "change:true", "blur"]);
    }

    #[test]
    fn test_indeterminate_draws_minus_even_when_checked() {
        fn app() -> Element {
            rsx! {
                Checkbox { is_checked: true, is_indeterminate: true }
            }
        }
        let html = render(app);
        assert!(html.contains("data-icon=\"minus\""));
        assert!(!html.contains("data-icon=\"check\""));

        let input = input_tag(&html);
        assert!(input.contains("aria-checked=\"mixed\""));
        assert!(input.contains("data-indeterminate=\"true\""));
    }

    #[test]
    fn test_check_glyph_by_default() {
        fn app() -> Element {
            rsx! {
                Checkbox {}
            }
        }
        let html = render(app);
        assert!(html.contains("data-icon=\"check\""));
        assert!(html.contains("width: 10px;"));
    }

    #[test]
    fn test_disabled_dims_label_and_blocks_pointer() {
        fn app() -> Element {
            rsx! {
                Checkbox { is_disabled: true, label: rsx! { "Subscribe" } }
            }
        }
        let html = render(app);
        assert!(html.contains("cursor: not-allowed;"));
        assert!(html.contains("opacity: 0.32;"));
        assert!(html.contains("Subscribe"));
    }

    #[test]
    fn test_enabled_label_is_opaque() {
        fn app() -> Element {
            rsx! {
                Checkbox { label: rsx! { "Subscribe" } }
            }
        }
        let html = render(app);
        assert!(html.contains("margin-left: 0.5rem;"));
        assert!(!html.contains("opacity: 0.32;"));
    }

    #[test]
    fn test_no_label_region_without_label() {
        fn app() -> Element {
            rsx! {
                Checkbox {}
            }
        }
        assert!(!render(app).contains("margin-left"));
    }

    #[test]
    fn test_full_width_stretches_wrapper() {
        fn app() -> Element {
            rsx! {
                Checkbox { is_full_width: true }
            }
        }
        assert!(render(app).contains("width: 100%;"));
    }

    #[test]
    fn test_invalid_marks_input() {
        fn app() -> Element {
            rsx! {
                Checkbox { is_invalid: true }
            }
        }
        let html = render(app);
        assert!(input_tag(&html).contains("aria-invalid=\"true\""));
    }

    #[test]
    fn test_wrapper_style_override() {
        fn app() -> Element {
            rsx! {
                Checkbox {
                    style: Style::new().set("cursor", "default"),
                    class: Some("row".to_string()),
                }
            }
        }
        let html = render(app);
        assert!(html.contains("cursor: default;"));
        assert!(!html.contains("cursor: pointer;"));
        assert!(html.contains("class=\"row\""));
    }

    #[test]
    fn test_color_mode_changes_accent() {
        fn light() -> Element {
            rsx! {
                Checkbox {}
            }
        }
        fn dark() -> Element {
            rsx! {
                DarkMode { Checkbox {} }
            }
        }
        assert!(render(light).contains("#3182CE"));
        assert!(render(dark).contains("#90CDF4"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        fn app() -> Element {
            rsx! {
                Checkbox {
                    color: "teal",
                    size: CheckboxSize::Large,
                    is_checked: true,
                    is_invalid: true,
                    label: rsx! { "Same every time" },
                }
            }
        }
        assert_eq!(render(app), render(app));
    }
}
