use dioxus::prelude::*;

use crate::app::components::{Button, ButtonVariant};
use crate::app::pages::Route;
use crate::domain::models::ExternalLink;
use crate::shared::config::SiteConfig;
use crate::shared::hooks::use_auth_state;

#[component]
fn Page(title: String, lead: String, children: Element) -> Element {
    rsx! {
        section { class: "c-page",
            h1 { class: "c-page__title", "{title}" }
            p { class: "c-page__lead", "{lead}" }
            {children}
        }
    }
}

#[component]
pub fn Home() -> Element {
    rsx! {
        Page {
            title: "Smriti AI",
            lead: "Your AI study companion: turn notes, videos and documents into quizzes, mind maps and summaries.",
            Link { to: Route::About {},
                Button { variant: ButtonVariant::Outline, "Learn more" }
            }
        }
    }
}

#[component]
pub fn About() -> Element {
    rsx! {
        Page {
            title: "About Us",
            lead: "Smriti AI is an open-source learning assistant built by students, for students.",
            p { "We believe revision should be active: every resource you add becomes something you can practise with." }
        }
    }
}

#[component]
pub fn Contributors() -> Element {
    let config = try_use_context::<SiteConfig>().unwrap_or_default();
    let link = ExternalLink::repository(&format!("{}/graphs/contributors", config.repository_url));

    rsx! {
        Page {
            title: "Contributors",
            lead: "Smriti AI is built in the open. Everyone who sends a pull request shows up here.",
            a { href: "{link.href}", target: link.target(), rel: link.rel(),
                Button { variant: ButtonVariant::Outline, "See all contributors" }
            }
        }
    }
}

#[component]
pub fn Contact() -> Element {
    rsx! {
        Page {
            title: "Contact Us",
            lead: "Questions, feedback or partnership ideas? Open an issue on the repository and we will get back to you.",
            p { "We usually answer within a few days." }
        }
    }
}

#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth_state();

    rsx! {
        if let Some(identity) = auth.identity() {
            Page {
                title: "Dashboard",
                lead: format!("Welcome back, {}.", identity.display_name),
                p { "Your study resources will appear here." }
            }
        } else {
            Page {
                title: "Dashboard",
                lead: "Sign in to see your study resources.",
                Link { to: Route::SignIn {},
                    Button { variant: ButtonVariant::Accent, "Sign In" }
                }
            }
        }
    }
}

#[component]
pub fn SignIn() -> Element {
    rsx! {
        Page {
            title: "Sign In",
            lead: "Sign-in is handled by the identity provider configured for this deployment.",
            Link { to: Route::Home {},
                Button { variant: ButtonVariant::Ghost, "Back home" }
            }
        }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        Page {
            title: "Page not found",
            lead: format!("Nothing lives at /{path}."),
            Link { to: Route::Home {},
                Button { variant: ButtonVariant::Outline, "Back home" }
            }
        }
    }
}
