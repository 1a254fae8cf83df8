use dioxus::prelude::*;

use crate::app::components::{Button, ButtonVariant};
use crate::domain::models::UserIdentity;

/// Identity control for a signed-in viewer: avatar plus a small account popover.
///
/// Account management and sign-out are links handed over by the identity
/// provider; nothing here touches the session itself.
#[component]
pub fn UserButton(identity: UserIdentity) -> Element {
    let mut popover_open = use_signal(|| false);
    let is_open = popover_open();
    let initials = identity.initials();

    rsx! {
        div { class: "c-user-button",
            button {
                r#type: "button",
                class: "c-user-button__avatar",
                title: "{identity.display_name}",
                aria_label: "Open account menu",
                aria_expanded: "{is_open}",
                onclick: move |_| popover_open.set(!is_open),
                if let Some(avatar_url) = identity.avatar_url.clone() {
                    img { src: "{avatar_url}", alt: "{identity.display_name}" }
                } else {
                    "{initials}"
                }
            }

            if is_open {
                div { class: "c-user-button__popover", role: "menu",
                    span { class: "c-user-button__name", "{identity.display_name}" }
                    if let Some(email) = identity.email.clone() {
                        span { class: "c-user-button__email", "{email}" }
                    }
                    if let Some(account_url) = identity.account_url.clone() {
                        a { href: "{account_url}",
                            Button { variant: ButtonVariant::Ghost, block: true, "Manage account" }
                        }
                    }
                    if let Some(sign_out_url) = identity.sign_out_url.clone() {
                        a { href: "{sign_out_url}",
                            Button { variant: ButtonVariant::Outline, block: true, "Sign out" }
                        }
                    }
                }
            }
        }
    }
}
