//! Named SVG glyphs
//!
//! Glyphs fill with `currentColor`, so `color` on the icon (or an ancestor)
//! sets their color.

use crate::error::UiError;
use crate::style::Style;
use crate::theme::use_theme;
use dioxus::prelude::*;
use std::str::FromStr;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum IconName {
    Check,
    Minus,
}

impl IconName {
    pub fn as_str(self) -> &'static str {
        match self {
            IconName::Check => "check",
            IconName::Minus => "minus",
        }
    }

    fn view_box(self) -> &'static str {
        match self {
            IconName::Check => "0 0 14 14",
            IconName::Minus => "0 0 24 24",
        }
    }
}

impl FromStr for IconName {
    type Err = UiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "check" => Ok(IconName::Check),
            "minus" => Ok(IconName::Minus),
            other => Err(UiError::UnknownIcon(other.to_string())),
        }
    }
}

pub fn icon_style(size: &str, color: Option<&str>) -> Style {
    Style::new()
        .set("width", size)
        .set("height", size)
        .set("color", color.unwrap_or("currentColor"))
        .set("display", "inline-block")
        .set("vertical-align", "middle")
        .set("flex-shrink", "0")
        .set("backface-visibility", "hidden")
}

/// A decorative icon. `color` accepts a theme token (`"gray.900"`) or CSS color.
#[component]
pub fn Icon(
    name: IconName,
    #[props(into, default = "1em".to_string())] size: String,
    #[props(default)] color: Option<String>,
) -> Element {
    let theme = use_theme();
    let color = color.as_deref().map(|c| theme.color(c));
    let css = icon_style(&size, color.as_deref()).to_css();

    let glyph = match name {
        IconName::Check => rsx! {
            g { fill: "currentColor",
                polygon { points: "5.5 11.9993304 14 3.49933039 12.5 2 5.5 8.99933039 1.5 4.9968652 0 6.49933039" }
            }
        },
        IconName::Minus => rsx! {
            g { fill: "currentColor",
                rect {
                    x: "2",
                    y: "10",
                    width: "20",
                    height: "4",
                }
            }
        },
    };

    rsx! {
        svg {
            style: "{css}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: name.view_box(),
            role: "presentation",
            "aria-hidden": "true",
            "focusable": "false",
            "data-icon": name.as_str(),
            {glyph}
        }
    }
}
