use dioxus::prelude::*;

use crate::domain::models::NavEmphasis;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ButtonVariant {
    Ghost,
    Outline,
    Accent,
}

impl ButtonVariant {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Ghost => "c-button--ghost",
            ButtonVariant::Outline => "c-button--outline",
            ButtonVariant::Accent => "c-button--accent",
        }
    }
}

impl From<NavEmphasis> for ButtonVariant {
    fn from(emphasis: NavEmphasis) -> Self {
        match emphasis {
            NavEmphasis::Ghost => ButtonVariant::Ghost,
            NavEmphasis::Outline => ButtonVariant::Outline,
            NavEmphasis::Accent => ButtonVariant::Accent,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ButtonSize {
    Regular,
    Small,
}

#[component]
pub fn Button(
    variant: Option<ButtonVariant>,
    size: Option<ButtonSize>,
    /// Stretch to the container width (mobile panel)
    #[props(default)]
    block: bool,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let variant_class = variant.unwrap_or(ButtonVariant::Ghost).class();
    let size_class = match size.unwrap_or(ButtonSize::Regular) {
        ButtonSize::Regular => "",
        ButtonSize::Small => "c-button--small",
    };
    let block_class = if block { "c-button--block" } else { "" };

    rsx! {
        button {
            r#type: "button",
            class: "c-button {variant_class} {size_class} {block_class}",
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}
