//! Generic styled container

use crate::style::Style;
use dioxus::prelude::*;

/// Element rendered by `Block`
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum BlockTag {
    #[default]
    Div,
    /// For phrasing contexts such as inside a `label`
    Span,
}

/// A plain box carrying an inline style
#[component]
pub fn Block(
    #[props(default)] tag: BlockTag,
    #[props(default)] style: Style,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let css = (!style.is_empty()).then(|| style.to_css());

    match tag {
        BlockTag::Div => rsx! {
            div { class: class.as_deref(), style: css, {children} }
        },
        BlockTag::Span => rsx! {
            span { class: class.as_deref(), style: css, {children} }
        },
    }
}
