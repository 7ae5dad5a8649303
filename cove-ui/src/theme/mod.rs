//! Design tokens, theme provider and color mode

pub mod color_mode;
pub mod colors;
mod storage;

pub use color_mode::{
    resolve_initial_mode, use_color_mode, ColorMode, ColorModeConfig, ColorModeContext,
    ColorModeProvider, DarkMode, LightMode,
};

use crate::error::UiError;
use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::rc::Rc;
use tracing::warn;

/// A color scale: shade (50, 100 ... 900) to CSS color
pub type ColorScale = BTreeMap<u16, String>;

/// Design tokens consumed by the components
///
/// Deserializing merges the input over [`Theme::default`] entry by entry, so a
/// JSON override only needs the tokens it changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "ThemeOverrides")]
pub struct Theme {
    pub colors: BTreeMap<String, ColorScale>,
    /// Spacing scale keyed by step (`space[2]` = 0.5rem)
    pub space: BTreeMap<u16, String>,
    pub font_sizes: BTreeMap<String, String>,
    pub radii: BTreeMap<String, String>,
    pub shadows: BTreeMap<String, String>,
}

/// Sparse theme as written by hosts
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ThemeOverrides {
    colors: BTreeMap<String, ColorScale>,
    space: BTreeMap<u16, String>,
    font_sizes: BTreeMap<String, String>,
    radii: BTreeMap<String, String>,
    shadows: BTreeMap<String, String>,
}

impl From<ThemeOverrides> for Theme {
    fn from(overrides: ThemeOverrides) -> Self {
        let mut theme = Theme::default();
        for (name, shades) in overrides.colors {
            theme.colors.entry(name).or_default().extend(shades);
        }
        theme.space.extend(overrides.space);
        theme.font_sizes.extend(overrides.font_sizes);
        theme.radii.extend(overrides.radii);
        theme.shadows.extend(overrides.shadows);
        theme
    }
}

fn table<K: Ord + Copy, V: ToString>(entries: &[(K, V)]) -> BTreeMap<K, String> {
    entries.iter().map(|(k, v)| (*k, v.to_string())).collect()
}

fn named(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

impl Default for Theme {
    fn default() -> Self {
        let colors = colors::SCALES
            .iter()
            .map(|(name, shades)| {
                let scale = colors::SHADES
                    .iter()
                    .zip(shades.iter())
                    .map(|(shade, value)| (*shade, value.to_string()))
                    .collect();
                (name.to_string(), scale)
            })
            .collect();

        Self {
            colors,
            space: table(&[
                (0, "0"),
                (1, "0.25rem"),
                (2, "0.5rem"),
                (3, "0.75rem"),
                (4, "1rem"),
                (5, "1.25rem"),
                (6, "1.5rem"),
                (8, "2rem"),
                (10, "2.5rem"),
                (12, "3rem"),
                (16, "4rem"),
            ]),
            font_sizes: named(&[
                ("xs", "0.75rem"),
                ("sm", "0.875rem"),
                ("md", "1rem"),
                ("lg", "1.125rem"),
                ("xl", "1.25rem"),
                ("2xl", "1.5rem"),
                ("3xl", "1.875rem"),
                ("4xl", "2.25rem"),
                ("5xl", "3rem"),
                ("6xl", "4rem"),
            ]),
            radii: named(&[
                ("none", "0"),
                ("sm", "0.125rem"),
                ("md", "0.25rem"),
                ("lg", "0.5rem"),
                ("full", "9999px"),
            ]),
            shadows: named(&[
                ("sm", "0 1px 2px 0 rgba(0, 0, 0, 0.05)"),
                ("md", "0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06)"),
                ("outline", "0 0 0 3px rgba(66, 153, 225, 0.6)"),
                ("none", "none"),
            ]),
        }
    }
}

impl Theme {
    /// Parse a theme from JSON; omitted tokens keep their defaults
    pub fn from_json(json: &str) -> Result<Self, UiError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Add or replace a color scale
    pub fn with_color_scale(mut self, name: impl Into<String>, scale: ColorScale) -> Self {
        self.colors.insert(name.into(), scale);
        self
    }

    /// Resolve a `scale.shade` token to a CSS color.
    ///
    /// Values without a dot are CSS literals and pass through unchanged, as do
    /// tokens naming an unknown scale or shade.
    pub fn color(&self, token: &str) -> String {
        let Some((scale, shade)) = token.split_once('.') else {
            return token.to_string();
        };

        let resolved = shade
            .parse::<u16>()
            .ok()
            .and_then(|shade| self.colors.get(scale)?.get(&shade));

        match resolved {
            Some(value) => value.clone(),
            None => {
                warn!("Unknown color token '{token}', using it verbatim");
                token.to_string()
            }
        }
    }

    /// Spacing step, falling back to `0`
    pub fn space(&self, step: u16) -> String {
        match self.space.get(&step) {
            Some(value) => value.clone(),
            None => {
                warn!("Unknown space step {step}");
                "0".to_string()
            }
        }
    }

    /// Named font size; unknown names pass through as CSS
    pub fn font_size(&self, key: &str) -> String {
        lookup_or_literal(&self.font_sizes, key)
    }

    /// Named radius; unknown names pass through as CSS
    pub fn radius(&self, key: &str) -> String {
        lookup_or_literal(&self.radii, key)
    }

    /// Named shadow; unknown names pass through as CSS
    pub fn shadow(&self, key: &str) -> String {
        lookup_or_literal(&self.shadows, key)
    }
}

fn lookup_or_literal(map: &BTreeMap<String, String>, key: &str) -> String {
    map.get(key).cloned().unwrap_or_else(|| key.to_string())
}

/// Provides a theme to every descendant. Passing a different `theme` later
/// re-renders the components that read it.
#[component]
pub fn ThemeProvider(#[props(default)] theme: Theme, children: Element) -> Element {
    let current = use_memo(use_reactive!(|theme| Rc::new(theme)));
    use_context_provider(|| current);

    rsx! {
        {children}
    }
}

/// Nearest theme, or the default theme when no provider is mounted
pub fn use_theme() -> Rc<Theme> {
    let provided = use_hook(try_consume_context::<Memo<Rc<Theme>>>);
    let fallback = use_hook(|| Rc::new(Theme::default()));

    match provided {
        Some(theme) => theme.read().clone(),
        None => fallback,
    }
}
