//! Top navigation bar
//!
//! Wide viewports get the link row; narrow ones get the settings toggle and
//! a collapsible panel. Which rows exist is decided by `build_nav`, which
//! breakpoint shows them is decided by the stylesheet.

use dioxus::prelude::*;

use crate::app::components::{nav_icon, BrainIcon, Button, ButtonSize, ButtonVariant, SettingsIcon, UserButton};
use crate::app::pages::Route;
use crate::domain::models::{build_nav, ExternalLink, NavEntry, PanelPhase};
use crate::shared::config::{SiteConfig, TransitionConfig};
use crate::shared::hooks::{use_auth_state, use_close_on_route_change, use_nav_menu};

/// Rotation of the settings icon while the menu is open
const OPEN_ICON_ROTATION_DEG: i32 = -90;

#[component]
pub fn NavigationBar() -> Element {
    let config = try_use_context::<SiteConfig>().unwrap_or_default();
    let auth = use_auth_state();
    let route = use_route::<Route>();

    let mut menu = use_nav_menu(config.menu_transition);
    use_close_on_route_change(menu, route.to_string());

    let model = build_nav(&auth, &config);
    let transition = menu.transition();
    let is_open = menu.is_open();
    let phase = menu.phase();

    let rotation = if is_open { OPEN_ICON_ROTATION_DEG } else { 0 };
    let icon_style = format!(
        "display: flex; transform: rotate({}deg); transition: {};",
        rotation,
        transition.css_transition("transform")
    );

    rsx! {
        nav { class: "c-navbar",
            div { class: "c-navbar__inner",
                div { class: "c-navbar__bar",
                    Link {
                        to: Route::Home {},
                        class: "c-navbar__logo",
                        BrainIcon {}
                        span { "{model.brand_name}" }
                    }

                    div { class: "c-navbar__links",
                        for entry in model.desktop.iter().cloned() {
                            NavButton { key: "{entry.target.path()}", entry }
                        }
                    }

                    div { class: "c-navbar__actions",
                        RepositoryLink { link: model.repository.clone() }

                        if let Some(identity) = model.identity.clone() {
                            UserButton { identity }
                        }

                        button {
                            r#type: "button",
                            class: "c-navbar__menu-toggle",
                            aria_label: "Toggle navigation menu",
                            aria_expanded: "{is_open}",
                            onclick: move |_| menu.toggle(),
                            span { style: "{icon_style}", SettingsIcon {} }
                        }
                    }
                }

                if phase != PanelPhase::Hidden {
                    MobilePanel {
                        entries: model.mobile.clone(),
                        repository: model.mobile_repository.clone(),
                        phase,
                        transition,
                    }
                }
            }
        }
    }
}

/// Collapsible link list for narrow viewports
#[component]
fn MobilePanel(
    entries: Vec<NavEntry>,
    #[props(!optional)]
    repository: Option<ExternalLink>,
    phase: PanelPhase,
    transition: TransitionConfig,
) -> Element {
    let phase_class = match phase {
        PanelPhase::Exiting => "c-navbar__panel--exiting",
        _ => "c-navbar__panel--entering",
    };
    let animation_style = transition.css_animation();

    rsx! {
        div {
            class: "c-navbar__panel {phase_class}",
            style: "{animation_style}",
            div { class: "c-navbar__panel-list",
                for entry in entries {
                    NavButton { key: "{entry.target.path()}", entry, block: true }
                }
                if let Some(link) = repository {
                    RepositoryLink { link, block: true }
                }
            }
        }
    }
}

#[component]
fn NavButton(entry: NavEntry, #[props(default)] block: bool) -> Element {
    let target = Route::from(entry.target);

    rsx! {
        Link { to: target,
            Button { variant: ButtonVariant::from(entry.emphasis), block,
                if let Some(icon) = entry.icon {
                    {nav_icon(icon)}
                }
                "{entry.label()}"
            }
        }
    }
}

/// Outbound repository link; always opened in a new context without opener access
#[component]
fn RepositoryLink(link: ExternalLink, #[props(default)] block: bool) -> Element {
    let size = if block { ButtonSize::Regular } else { ButtonSize::Small };

    rsx! {
        a {
            href: "{link.href}",
            target: link.target(),
            rel: link.rel(),
            Button { variant: ButtonVariant::Outline, size, block,
                {nav_icon(link.icon)}
                span { "{link.label}" }
            }
        }
    }
}
