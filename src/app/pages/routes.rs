use dioxus::prelude::*;

use crate::app::layouts::NavigationBar;
use crate::app::pages::{About, Contact, Contributors, Dashboard, Home, NotFound, SignIn};
use crate::domain::models::{AuthState, NavTarget};
use crate::shared::config::SiteConfig;
use crate::shared::hooks::use_auth_provider;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},
    #[route("/about")]
    About {},
    #[route("/contributors")]
    Contributors {},
    #[route("/contact")]
    Contact {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/sign-in")]
    SignIn {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl From<NavTarget> for Route {
    fn from(target: NavTarget) -> Self {
        match target {
            NavTarget::Home => Route::Home {},
            NavTarget::About => Route::About {},
            NavTarget::Contributors => Route::Contributors {},
            NavTarget::Contact => Route::Contact {},
            NavTarget::Dashboard => Route::Dashboard {},
            NavTarget::SignIn => Route::SignIn {},
        }
    }
}

#[component]
pub fn App() -> Element {
    use_context_provider(SiteConfig::load);
    // Identity integrations replace this provider with one fed by their session
    use_auth_provider(AuthState::default);

    use_effect(|| {
        tracing::info!("Dioxus App initialized successfully");
    });

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn Layout() -> Element {
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        },
        NavigationBar {}
        main { class: "c-layout__main",
            Outlet::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_targets_match_route_paths() {
        let targets = [
            NavTarget::Home,
            NavTarget::About,
            NavTarget::Contributors,
            NavTarget::Contact,
            NavTarget::Dashboard,
            NavTarget::SignIn,
        ];
        for target in targets {
            assert_eq!(Route::from(target).to_string(), target.path());
        }
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        let parsed = "/missing/page".parse::<Route>();
        assert!(matches!(parsed, Ok(Route::NotFound { .. })));
    }
}
