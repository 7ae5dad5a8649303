//! Flexbox container

use crate::style::Style;
use dioxus::prelude::*;

/// Element rendered by `Flex`
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum FlexTag {
    #[default]
    Div,
    Label,
}

/// Flex layout declarations followed by `extra`
pub fn flex_style(
    inline: bool,
    direction: Option<&str>,
    align: Option<&str>,
    justify: Option<&str>,
    wrap: Option<&str>,
    extra: &Style,
) -> Style {
    Style::new()
        .set("display", if inline { "inline-flex" } else { "flex" })
        .set_opt("flex-direction", direction)
        .set_opt("align-items", align)
        .set_opt("justify-content", justify)
        .set_opt("flex-wrap", wrap)
        .merge(extra)
}

/// A flex container, optionally rendered as a `label`
#[component]
pub fn Flex(
    #[props(default)] tag: FlexTag,
    #[props(default)] inline: bool,
    #[props(default)] direction: Option<&'static str>,
    #[props(default)] align: Option<&'static str>,
    #[props(default)] justify: Option<&'static str>,
    #[props(default)] wrap: Option<&'static str>,
    #[props(default)] style: Style,
    #[props(default)] class: Option<String>,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let css = flex_style(inline, direction, align, justify, wrap, &style).to_css();

    match tag {
        FlexTag::Div => rsx! {
            div {
                class: class.as_deref(),
                style: "{css}",
                onclick: move |e| {
                    if let Some(ref handler) = onclick {
                        handler.call(e);
                    }
                },
                {children}
            }
        },
        FlexTag::Label => rsx! {
            label {
                class: class.as_deref(),
                style: "{css}",
                onclick: move |e| {
                    if let Some(ref handler) = onclick {
                        handler.call(e);
                    }
                },
                {children}
            }
        },
    }
}
