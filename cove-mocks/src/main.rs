//! cove mocks - Interactive component gallery
//!
//! Renders each component with a control panel and named presets. Control
//! state lives in the URL so a configuration can be linked to.

mod mocks;
mod pages;
mod ui;

use cove_ui::{ColorModeConfig, ColorModeProvider, ThemeProvider};
use dioxus::prelude::*;
use pages::{MockCheckbox, MockIndex};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    MockIndex {},
    #[route("/checkbox?:state")]
    MockCheckbox { state: Option<String> },
}

#[component]
pub fn App() -> Element {
    let config = use_hook(|| {
        let config = ColorModeConfig {
            use_system_preference: true,
            ..Default::default()
        };
        tracing::info!("Starting cove mocks with {config:?}");
        config
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ThemeProvider {
            ColorModeProvider { config, Router::<Route> {} }
        }
    }
}

fn main() {
    dioxus::launch(App);
}
