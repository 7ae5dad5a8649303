//! Class-scoped stylesheets
//!
//! Rules are written against `&`, a placeholder for a generated class name.
//! The class name is a hash of the rule text, so identical rules always map to
//! the same class and can be emitted more than once without conflict.

use super::Style;

/// A selector template (using `&` for the scoped class) and its declarations
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScopedRule {
    pub selector: String,
    pub style: Style,
}

impl ScopedRule {
    pub fn new(selector: impl Into<String>, style: Style) -> Self {
        Self {
            selector: selector.into(),
            style,
        }
    }
}

/// A generated class name plus the stylesheet that targets it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScopedCss {
    pub class_name: String,
    pub css: String,
}

impl ScopedCss {
    /// Build a stylesheet from rules, skipping rules with no declarations
    pub fn build(prefix: &str, rules: &[ScopedRule]) -> Self {
        let rules: Vec<&ScopedRule> = rules.iter().filter(|r| !r.style.is_empty()).collect();

        let template: String = rules
            .iter()
            .map(|r| format!("{}{{{}}}", r.selector, r.style.to_css()))
            .collect();
        let class_name = format!("{prefix}-{:08x}", fnv1a(template.as_bytes()));
        let class_selector = format!(".{class_name}");

        let css = rules
            .iter()
            .map(|r| {
                format!(
                    "{} {{ {} }}",
                    r.selector.replace('&', &class_selector),
                    r.style.to_css()
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        Self { class_name, css }
    }
}

/// 32-bit FNV-1a
fn fnv1a(bytes: &[u8]) -> u32 {
    bytes.iter().fold(0x811c_9dc5_u32, |hash, byte| {
        (hash ^ u32::from(*byte)).wrapping_mul(0x0100_0193)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules(color: &str) -> Vec<ScopedRule> {
        vec![
            ScopedRule::new("&", Style::new().set("color", color)),
            ScopedRule::new(
                "input:checked + &, input[aria-checked=mixed] + &",
                Style::new().set("opacity", "1"),
            ),
        ]
    }

    #[test]
    fn test_selectors_are_scoped() {
        let scoped = ScopedCss::build("x", &rules("red"));
        let class = &scoped.class_name;
        assert!(class.starts_with("x-"));
        assert!(scoped.css.contains(&format!(".{class} {{ color: red; }}")));
        assert!(scoped.css.contains(&format!(
            "input:checked + .{class}, input[aria-checked=mixed] + .{class} {{ opacity: 1; }}"
        )));
        assert!(!scoped.css.contains('&'));
    }

    #[test]
    fn test_class_name_is_deterministic() {
        assert_eq!(
            ScopedCss::build("x", &rules("red")),
            ScopedCss::build("x", &rules("red"))
        );
        assert_ne!(
            ScopedCss::build("x", &rules("red")).class_name,
            ScopedCss::build("x", &rules("blue")).class_name
        );
    }

    #[test]
    fn test_empty_rules_are_skipped() {
        let scoped = ScopedCss::build(
            "x",
            &[
                ScopedRule::new("&", Style::new()),
                ScopedRule::new("& *", Style::new().set("opacity", "0")),
            ],
        );
        assert_eq!(scoped.css.lines().count(), 1);
    }

    #[test]
    fn test_fnv1a_reference_values() {
        assert_eq!(fnv1a(b""), 0x811c9dc5);
        assert_eq!(fnv1a(b"a"), 0xe40c292c);
    }
}
