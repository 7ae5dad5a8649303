//! cove-ui - Themed form controls for Dioxus
//!
//! Contains the theme and color mode providers, the style engine, the layout
//! primitives and the `Checkbox` built from them.

pub mod components;
pub mod error;
pub mod style;
pub mod theme;

pub use components::*;
pub use error::UiError;
pub use style::{ScopedCss, Style};
pub use theme::{
    use_color_mode, use_theme, ColorMode, ColorModeConfig, ColorModeContext, ColorModeProvider,
    DarkMode, LightMode, Theme, ThemeProvider,
};
