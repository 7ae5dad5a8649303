//! Ambient light/dark color mode

use super::storage;
use crate::error::UiError;
use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Storage key used when the config does not name one
pub const DEFAULT_STORAGE_KEY: &str = "cove-color-mode";

/// Light or dark theme selector
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == ColorMode::Dark
    }

    /// The opposite mode
    pub fn toggled(self) -> Self {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorMode {
    type Err = UiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(ColorMode::Light),
            "dark" => Ok(ColorMode::Dark),
            other => Err(UiError::UnknownColorMode(other.to_string())),
        }
    }
}

/// Color mode provider configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorModeConfig {
    /// Mode used when nothing is persisted and the system preference is not consulted
    pub initial: ColorMode,
    /// Local storage key for persisting the mode (None disables persistence)
    pub storage_key: Option<String>,
    /// Consult `prefers-color-scheme` when nothing is persisted
    pub use_system_preference: bool,
}

impl Default for ColorModeConfig {
    fn default() -> Self {
        Self {
            initial: ColorMode::Light,
            storage_key: Some(DEFAULT_STORAGE_KEY.to_string()),
            use_system_preference: false,
        }
    }
}

/// Pick the starting mode: persisted value, then system preference, then config.
pub fn resolve_initial_mode(
    config: &ColorModeConfig,
    stored: Option<ColorMode>,
    system_prefers_dark: Option<bool>,
) -> ColorMode {
    if let Some(mode) = stored {
        return mode;
    }
    if config.use_system_preference {
        if let Some(dark) = system_prefers_dark {
            return if dark { ColorMode::Dark } else { ColorMode::Light };
        }
    }
    config.initial
}

/// Handle to the nearest color mode, shared through context
#[derive(Clone, Copy, PartialEq)]
pub struct ColorModeContext {
    mode: Signal<ColorMode>,
    storage_key: Signal<Option<String>>,
}

impl ColorModeContext {
    /// Create a context owned by the current scope
    pub fn new(mode: ColorMode, storage_key: Option<String>) -> Self {
        Self {
            mode: Signal::new(mode),
            storage_key: Signal::new(storage_key),
        }
    }

    /// Current mode (subscribes the caller)
    pub fn mode(&self) -> ColorMode {
        *self.mode.read()
    }

    pub fn is_dark(&self) -> bool {
        self.mode().is_dark()
    }

    /// Switch to `mode`, persisting it when a storage key is configured
    pub fn set(&self, mode: ColorMode) {
        let mut signal = self.mode;
        if *signal.peek() == mode {
            return;
        }
        signal.set(mode);
        debug!("Color mode changed to {mode}");

        if let Some(key) = self.storage_key.peek().as_deref() {
            storage::save_mode(key, mode);
        }
    }

    pub fn toggle(&self) {
        let next = self.mode.peek().toggled();
        self.set(next);
    }
}

/// Provides a color mode to every descendant.
///
/// A fixed `value` wins and is never persisted; changing it later switches the
/// subtree to the new mode. Otherwise the mode starts from local storage, then
/// the system preference (if enabled), then `config.initial`. `config` is only
/// read on mount.
#[component]
pub fn ColorModeProvider(
    #[props(default)] config: ColorModeConfig,
    #[props(default)] value: Option<ColorMode>,
    children: Element,
) -> Element {
    let context = use_context_provider(|| match value {
        Some(forced) => ColorModeContext::new(forced, None),
        None => {
            let stored = config.storage_key.as_deref().and_then(storage::load_mode);
            let system = if config.use_system_preference {
                storage::prefers_dark()
            } else {
                None
            };
            let mode = resolve_initial_mode(&config, stored, system);
            debug!("Initial color mode: {mode}");
            ColorModeContext::new(mode, config.storage_key.clone())
        }
    });

    use_effect(use_reactive!(|value| {
        if let Some(forced) = value {
            let mut mode = context.mode;
            if *mode.peek() != forced {
                debug!("Forced color mode changed to {forced}");
                mode.set(forced);
            }
        }
    }));

    rsx! {
        {children}
    }
}

/// Forces dark mode for a subtree
#[component]
pub fn DarkMode(children: Element) -> Element {
    rsx! {
        ColorModeProvider { value: ColorMode::Dark, {children} }
    }
}

/// Forces light mode for a subtree
#[component]
pub fn LightMode(children: Element) -> Element {
    rsx! {
        ColorModeProvider { value: ColorMode::Light, {children} }
    }
}

/// Nearest color mode; light when no provider is mounted above the caller
pub fn use_color_mode() -> ColorModeContext {
    use_hook(|| {
        try_consume_context::<ColorModeContext>().unwrap_or_else(|| {
            debug!("No ColorModeProvider in scope, using light mode");
            ColorModeContext::new(ColorMode::Light, None)
        })
    })
}
