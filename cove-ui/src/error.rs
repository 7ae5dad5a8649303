//! Error type shared by the parsing and theme loading helpers

use thiserror::Error;

#[derive(Error, Debug)]
pub enum UiError {
    #[error("Unknown checkbox size: {0} (expected sm, md or lg)")]
    UnknownSize(String),
    #[error("Unknown color mode: {0} (expected light or dark)")]
    UnknownColorMode(String),
    #[error("Unknown icon: {0}")]
    UnknownIcon(String),
    #[error("Invalid theme: {0}")]
    Theme(#[from] serde_json::Error),
}
