//! Checkbox visual styles keyed by color, size and color mode

use crate::components::control_box::ControlBoxStyles;
use crate::error::UiError;
use crate::style::Style;
use crate::theme::{ColorMode, Theme};
use std::fmt;
use std::str::FromStr;

/// Checkbox size
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum CheckboxSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl CheckboxSize {
    /// Short token, also used as the label's font size key
    pub fn as_str(self) -> &'static str {
        match self {
            CheckboxSize::Small => "sm",
            CheckboxSize::Medium => "md",
            CheckboxSize::Large => "lg",
        }
    }

    /// Space step used for the box's width and height
    fn space_step(self) -> u16 {
        match self {
            CheckboxSize::Small => 3,
            CheckboxSize::Medium => 4,
            CheckboxSize::Large => 5,
        }
    }
}

impl fmt::Display for CheckboxSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CheckboxSize {
    type Err = UiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sm" | "small" => Ok(CheckboxSize::Small),
            "md" | "medium" => Ok(CheckboxSize::Medium),
            "lg" | "large" => Ok(CheckboxSize::Large),
            other => Err(UiError::UnknownSize(other.to_string())),
        }
    }
}

/// Compute the control box styles for a checkbox.
///
/// `color` names a theme color scale. Light mode uses its 500 shade (600 on
/// hover), dark mode its 200 shade (300 on hover).
pub fn checkbox_styles(
    theme: &Theme,
    color: &str,
    size: CheckboxSize,
    mode: ColorMode,
) -> ControlBoxStyles {
    let dark = mode.is_dark();
    let pick = |light: &str, dark_value: &str| theme.color(if dark { dark_value } else { light });
    let (shade, hover_shade) = if dark { (200, 300) } else { (500, 600) };
    let accent = theme.color(&format!("{color}.{shade}"));
    let accent_hover = theme.color(&format!("{color}.{hover_shade}"));
    let box_size = theme.space(size.space_step());

    let base = Style::new()
        .set("user-select", "none")
        .set("border-width", "2px")
        .set("border-style", "solid")
        .set("border-radius", theme.radius("sm"))
        .set("border-color", pick("gray.200", "whiteAlpha.300"))
        .set("color", "white")
        .set("transition", "background-color 120ms, box-shadow 250ms")
        .set("width", box_size.clone())
        .set("height", box_size);

    let checked = Style::new()
        .set("background", accent.clone())
        .set("border-color", accent)
        .set_opt("color", dark.then(|| theme.color("gray.900")));

    let focus = Style::new().set("box-shadow", theme.shadow("outline"));

    ControlBoxStyles {
        base,
        hover: Style::new().set("border-color", pick("gray.300", "whiteAlpha.400")),
        focus: focus.clone(),
        disabled: Style::new()
            .set("background", pick("gray.100", "whiteAlpha.100"))
            .set("border-color", pick("gray.100", "transparent")),
        invalid: Style::new().set("border-color", pick("red.500", "red.300")),
        checked,
        checked_and_disabled: Style::new()
            .set("background", pick("gray.200", "whiteAlpha.300"))
            .set("border-color", pick("gray.200", "transparent"))
            .set("color", pick("gray.500", "whiteAlpha.500")),
        checked_and_focus: focus,
        checked_and_hover: Style::new()
            .set("background", accent_hover.clone())
            .set("border-color", accent_hover),
        child: Style::new().set("opacity", "0"),
        checked_and_child: Style::new().set("opacity", "1"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_size() {
        assert_eq!("sm".parse::<CheckboxSize>().unwrap(), CheckboxSize::Small);
        assert_eq!("medium".parse::<CheckboxSize>().unwrap(), CheckboxSize::Medium);
        assert_eq!("lg".parse::<CheckboxSize>().unwrap(), CheckboxSize::Large);
        assert!(matches!(
            "xl".parse::<CheckboxSize>(),
            Err(UiError::UnknownSize(s)) if s == "xl"
        ));
    }

    #[test]
    fn test_default_size_is_medium() {
        assert_eq!(CheckboxSize::default(), CheckboxSize::Medium);
    }

    #[test]
    fn test_box_dimensions_follow_size() {
        let theme = Theme::default();
        let cases = [
            (CheckboxSize::Small, "0.75rem"),
            (CheckboxSize::Medium, "1rem"),
            (CheckboxSize::Large, "1.25rem"),
        ];
        for (size, expected) in cases {
            let styles = checkbox_styles(&theme, "blue", size, ColorMode::Light);
            assert_eq!(styles.base.get("width"), Some(expected));
            assert_eq!(styles.base.get("height"), Some(expected));
        }
    }

    #[test]
    fn test_light_mode_uses_500_shade() {
        let theme = Theme::default();
        let styles = checkbox_styles(&theme, "blue", CheckboxSize::Medium, ColorMode::Light);
        assert_eq!(styles.checked.get("background"), Some("#3182CE"));
        assert_eq!(styles.checked.get("border-color"), Some("#3182CE"));
        assert_eq!(styles.checked.get("color"), None);
        assert_eq!(styles.checked_and_hover.get("background"), Some("#2B6CB0"));
        assert_eq!(styles.invalid.get("border-color"), Some("#E53E3E"));
        assert_eq!(styles.base.get("border-color"), Some("#E2E8F0"));
    }

    #[test]
    fn test_dark_mode_uses_200_shade_and_dark_icon() {
        let theme = Theme::default();
        let styles = checkbox_styles(&theme, "green", CheckboxSize::Medium, ColorMode::Dark);
        assert_eq!(styles.checked.get("background"), Some("#9AE6B4"));
        assert_eq!(styles.checked.get("color"), Some("#171923"));
        assert_eq!(styles.disabled.get("border-color"), Some("transparent"));
        assert_eq!(styles.invalid.get("border-color"), Some("#FC8181"));
    }

    #[test]
    fn test_icon_hidden_until_checked() {
        let styles = checkbox_styles(
            &Theme::default(),
            "blue",
            CheckboxSize::Medium,
            ColorMode::Light,
        );
        assert_eq!(styles.child.get("opacity"), Some("0"));
        assert_eq!(styles.checked_and_child.get("opacity"), Some("1"));
    }

    #[test]
    fn test_styles_are_pure() {
        let theme = Theme::default();
        let a = checkbox_styles(&theme, "purple", CheckboxSize::Large, ColorMode::Dark);
        let b = checkbox_styles(&theme, "purple", CheckboxSize::Large, ColorMode::Dark);
        assert_eq!(a, b);
        assert_eq!(a.scoped_css("checkbox"), b.scoped_css("checkbox"));
    }
}
