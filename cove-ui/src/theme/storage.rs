//! Color mode persistence
//!
//! Uses browser local storage on wasm32. Other targets have no storage, so
//! loads return `None` and saves are dropped.

use super::color_mode::ColorMode;

#[cfg(target_arch = "wasm32")]
mod imp {
    use super::ColorMode;
    use tracing::warn;

    fn get_storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }

    pub fn load_mode(key: &str) -> Option<ColorMode> {
        let raw = get_storage().and_then(|s| s.get_item(key).ok().flatten())?;
        match raw.parse() {
            Ok(mode) => Some(mode),
            Err(e) => {
                warn!("Ignoring stored color mode under '{key}': {e}");
                None
            }
        }
    }

    pub fn save_mode(key: &str, mode: ColorMode) {
        if let Some(storage) = get_storage() {
            if let Err(e) = storage.set_item(key, mode.as_str()) {
                warn!("Failed to persist color mode under '{key}': {e:?}");
            }
        }
    }

    pub fn prefers_dark() -> Option<bool> {
        let query = web_sys::window()?
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()?;
        Some(query.matches())
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    use super::ColorMode;

    pub fn load_mode(_key: &str) -> Option<ColorMode> {
        None
    }

    pub fn save_mode(_key: &str, _mode: ColorMode) {}

    pub fn prefers_dark() -> Option<bool> {
        None
    }
}

/// Read a previously persisted mode
pub fn load_mode(key: &str) -> Option<ColorMode> {
    imp::load_mode(key)
}

/// Persist the mode under `key`
pub fn save_mode(key: &str, mode: ColorMode) {
    imp::save_mode(key, mode)
}

/// Whether the platform asks for a dark color scheme, if it can tell
pub fn prefers_dark() -> Option<bool> {
    imp::prefers_dark()
}
