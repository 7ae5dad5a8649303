//! Styled stand-in for a hidden native input
//!
//! `ControlBox` must be rendered directly after the hidden input: its state
//! rules are adjacent-sibling selectors on `input[type=..]`.

use crate::style::{ScopedCss, ScopedRule, Style};
use dioxus::prelude::*;

/// Per-state declarations for a control box
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ControlBoxStyles {
    pub base: Style,
    pub hover: Style,
    pub focus: Style,
    pub disabled: Style,
    pub invalid: Style,
    pub checked: Style,
    pub checked_and_disabled: Style,
    pub checked_and_focus: Style,
    pub checked_and_hover: Style,
    /// Applied to the box's contents (the icon)
    pub child: Style,
    /// Applied to the box's contents while checked or mixed
    pub checked_and_child: Style,
}

fn control_box_defaults() -> Style {
    Style::new()
        .set("display", "inline-flex")
        .set("align-items", "center")
        .set("justify-content", "center")
        .set("transition", "all 120ms")
        .set("flex-shrink", "0")
}

impl ControlBoxStyles {
    /// Selector rules in cascade order. Later rules win at equal specificity.
    pub fn rules(&self, input_type: &str) -> Vec<ScopedRule> {
        let input = format!("input[type={input_type}]");
        let mixed = format!("{input}[aria-checked=mixed]");

        vec![
            ScopedRule::new("&", control_box_defaults().merge(&self.base)),
            ScopedRule::new(format!("{input}:focus + &"), self.focus.clone()),
            ScopedRule::new(
                format!("{input}:hover:not(:disabled):not(:checked) + &"),
                self.hover.clone(),
            ),
            ScopedRule::new(format!("{input}:disabled + &"), self.disabled.clone()),
            ScopedRule::new(
                format!("{input}[aria-invalid=true] + &"),
                self.invalid.clone(),
            ),
            ScopedRule::new(
                format!("{input}:checked:disabled + &, {mixed}:disabled + &"),
                self.checked_and_disabled.clone(),
            ),
            ScopedRule::new(
                format!("{input}:checked:focus + &, {mixed}:focus + &"),
                self.checked_and_focus.clone(),
            ),
            ScopedRule::new(
                format!("{input}:checked:hover:not(:disabled) + &, {mixed}:hover:not(:disabled) + &"),
                self.checked_and_hover.clone(),
            ),
            ScopedRule::new("& > *", self.child.clone()),
            ScopedRule::new(
                format!("{input}:checked + &, {mixed} + &"),
                self.checked.clone(),
            ),
            ScopedRule::new(
                format!("{input}:checked + & > *, {mixed} + & > *"),
                self.checked_and_child.clone(),
            ),
        ]
    }

    pub fn scoped_css(&self, input_type: &str) -> ScopedCss {
        ScopedCss::build("cove-cb", &self.rules(input_type))
    }
}

/// Visual proxy for a hidden input. Hidden from assistive technology since
/// the input itself carries the semantics.
#[component]
pub fn ControlBox(
    styles: ControlBoxStyles,
    #[props(default = "checkbox")] input_type: &'static str,
    children: Element,
) -> Element {
    let scoped = styles.scoped_css(input_type);

    // The stylesheet goes after the box so the box stays the input's adjacent sibling
    rsx! {
        div { class: "{scoped.class_name}", aria_hidden: "true", {children} }
        style { "{scoped.css}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ControlBoxStyles {
        ControlBoxStyles {
            base: Style::new().set("width", "1rem"),
            checked: Style::new().set("background", "blue"),
            child: Style::new().set("opacity", "0"),
            checked_and_child: Style::new().set("opacity", "1"),
            ..Default::default()
        }
    }

    #[test]
    fn test_base_rule_includes_defaults() {
        let rules = sample().rules("checkbox");
        assert_eq!(rules[0].selector, "&");
        assert_eq!(rules[0].style.get("display"), Some("inline-flex"));
        assert_eq!(rules[0].style.get("width"), Some("1rem"));
    }

    #[test]
    fn test_checked_rule_covers_mixed_state() {
        let css = sample().scoped_css("checkbox");
        let class = &css.class_name;
        assert!(css.css.contains(&format!(
            "input[type=checkbox]:checked + .{class}, input[type=checkbox][aria-checked=mixed] + .{class} {{ background: blue; }}"
        )));
    }

    #[test]
    fn test_checked_rules_come_after_plain_state_rules() {
        let selectors: Vec<String> = sample()
            .rules("radio")
            .into_iter()
            .map(|r| r.selector)
            .collect();
        let invalid = selectors
            .iter()
            .position(|s| s == "input[type=radio][aria-invalid=true] + &")
            .unwrap();
        let checked = selectors
            .iter()
            .position(|s| s.starts_with("input[type=radio]:checked + &,"))
            .unwrap();
        assert!(invalid < checked);
    }

    #[test]
    fn test_child_rules_target_direct_children_only() {
        let css = sample().scoped_css("checkbox");
        let class = &css.class_name;
        assert!(css.css.contains(&format!(".{class} > * {{ opacity: 0; }}")));
        assert!(css.css.contains(&format!(
            "input[type=checkbox]:checked + .{class} > *, input[type=checkbox][aria-checked=mixed] + .{class} > * {{ opacity: 1; }}"
        )));
        assert!(!css.css.contains(&format!(".{class} * ")));
    }

    #[test]
    fn test_empty_states_are_omitted() {
        let css = sample().scoped_css("checkbox");
        assert!(!css.css.contains(":focus"));
        assert!(!css.css.contains(":disabled"));
    }
}
