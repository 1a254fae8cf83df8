//! Render model of the navigation bar
//!
//! `build_nav` is a pure function of the auth state and the site config;
//! the Dioxus component only maps this model onto markup.

use crate::domain::models::{AuthState, UserIdentity};
use crate::shared::config::SiteConfig;

/// In-app destinations reachable from the navbar
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavTarget {
    Home,
    About,
    Contributors,
    Contact,
    Dashboard,
    SignIn,
}

impl NavTarget {
    pub fn path(&self) -> &'static str {
        match self {
            NavTarget::Home => "/",
            NavTarget::About => "/about",
            NavTarget::Contributors => "/contributors",
            NavTarget::Contact => "/contact",
            NavTarget::Dashboard => "/dashboard",
            NavTarget::SignIn => "/sign-in",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NavTarget::Home => "Home",
            NavTarget::About => "About Us",
            NavTarget::Contributors => "Contributors",
            NavTarget::Contact => "Contact Us",
            NavTarget::Dashboard => "Dashboard",
            NavTarget::SignIn => "Sign In",
        }
    }

    /// Links shown to every viewer at every width
    pub fn primary() -> [NavTarget; 4] {
        [
            NavTarget::Home,
            NavTarget::About,
            NavTarget::Contributors,
            NavTarget::Contact,
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavEmphasis {
    Ghost,
    Outline,
    Accent,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIcon {
    Dashboard,
    Star,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavEntry {
    pub target: NavTarget,
    pub emphasis: NavEmphasis,
    pub icon: Option<NavIcon>,
}

impl NavEntry {
    fn ghost(target: NavTarget) -> Self {
        Self {
            target,
            emphasis: NavEmphasis::Ghost,
            icon: None,
        }
    }

    fn dashboard() -> Self {
        Self {
            target: NavTarget::Dashboard,
            emphasis: NavEmphasis::Outline,
            icon: Some(NavIcon::Dashboard),
        }
    }

    fn sign_in() -> Self {
        Self {
            target: NavTarget::SignIn,
            emphasis: NavEmphasis::Accent,
            icon: None,
        }
    }

    pub fn label(&self) -> &'static str {
        self.target.label()
    }
}

pub const NEW_CONTEXT_TARGET: &str = "_blank";
pub const OPENER_ISOLATION_REL: &str = "noopener noreferrer";

/// Outbound link opened in a new browsing context without opener access
#[derive(Clone, Debug, PartialEq)]
pub struct ExternalLink {
    pub href: String,
    pub label: &'static str,
    pub icon: NavIcon,
}

impl ExternalLink {
    pub fn repository(href: &str) -> Self {
        Self {
            href: href.to_string(),
            label: "Star",
            icon: NavIcon::Star,
        }
    }

    pub fn target(&self) -> &'static str {
        NEW_CONTEXT_TARGET
    }

    pub fn rel(&self) -> &'static str {
        OPENER_ISOLATION_REL
    }

    pub fn is_opener_isolated(&self) -> bool {
        let rel: Vec<&str> = self.rel().split_whitespace().collect();
        self.target() == "_blank" && rel.contains(&"noopener") && rel.contains(&"noreferrer")
    }
}

/// Viewport size classes; the breakpoint itself lives in the stylesheet
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportClass {
    Wide,
    Narrow,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavModel {
    pub brand_name: String,
    /// Link row visible at wide widths
    pub desktop: Vec<NavEntry>,
    /// Collapsible panel content at narrow widths
    pub mobile: Vec<NavEntry>,
    /// Present only when signed in
    pub identity: Option<UserIdentity>,
    pub repository: ExternalLink,
    pub mobile_repository: Option<ExternalLink>,
}

impl NavModel {
    pub fn entries(&self, viewport: ViewportClass) -> &[NavEntry] {
        match viewport {
            ViewportClass::Wide => &self.desktop,
            ViewportClass::Narrow => &self.mobile,
        }
    }

    pub fn contains(&self, viewport: ViewportClass, target: NavTarget) -> bool {
        self.entries(viewport).iter().any(|entry| entry.target == target)
    }

    /// Every outbound link the bar renders
    pub fn external_links(&self) -> impl Iterator<Item = &ExternalLink> {
        std::iter::once(&self.repository).chain(self.mobile_repository.iter())
    }
}

pub fn build_nav(auth: &AuthState, config: &SiteConfig) -> NavModel {
    let mut desktop: Vec<NavEntry> = NavTarget::primary().into_iter().map(NavEntry::ghost).collect();
    let mut mobile = desktop.clone();

    match auth {
        AuthState::SignedIn(_) => {
            desktop.push(NavEntry::dashboard());
            mobile.push(NavEntry::dashboard());
        }
        AuthState::SignedOut => {
            mobile.push(NavEntry::sign_in());
        }
    }

    let repository = ExternalLink::repository(&config.repository_url);
    let mobile_repository = config
        .show_star_in_mobile_menu
        .then(|| repository.clone());

    NavModel {
        brand_name: config.brand_name.clone(),
        desktop,
        mobile,
        identity: auth.identity().cloned(),
        repository,
        mobile_repository,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signed_in() -> AuthState {
        AuthState::SignedIn(UserIdentity::new("user_1", "Ada Lovelace"))
    }

    fn labels(entries: &[NavEntry]) -> Vec<&'static str> {
        entries.iter().map(NavEntry::label).collect()
    }

    #[test]
    fn test_signed_out_desktop_has_fixed_links_only() {
        let model = build_nav(&AuthState::SignedOut, &SiteConfig::default());
        assert_eq!(
            labels(model.entries(ViewportClass::Wide)),
            vec!["Home", "About Us", "Contributors", "Contact Us"]
        );
        assert!(!model.contains(ViewportClass::Wide, NavTarget::Dashboard));
        assert!(!model.contains(ViewportClass::Wide, NavTarget::SignIn));
    }

    #[test]
    fn test_signed_out_mobile_offers_sign_in() {
        let model = build_nav(&AuthState::SignedOut, &SiteConfig::default());
        assert!(model.contains(ViewportClass::Narrow, NavTarget::SignIn));
        assert!(!model.contains(ViewportClass::Narrow, NavTarget::Dashboard));
        assert!(model.identity.is_none());

        let sign_in = model.mobile.last().unwrap();
        assert_eq!(sign_in.emphasis, NavEmphasis::Accent);
        assert_eq!(sign_in.target.path(), "/sign-in");
    }

    #[test]
    fn test_signed_in_shows_dashboard_and_identity() {
        let model = build_nav(&signed_in(), &SiteConfig::default());
        assert!(model.contains(ViewportClass::Wide, NavTarget::Dashboard));
        assert!(model.contains(ViewportClass::Narrow, NavTarget::Dashboard));
        assert!(!model.contains(ViewportClass::Wide, NavTarget::SignIn));
        assert!(!model.contains(ViewportClass::Narrow, NavTarget::SignIn));
        assert_eq!(model.identity.as_ref().unwrap().display_name, "Ada Lovelace");

        let dashboard = model.desktop.last().unwrap();
        assert_eq!(dashboard.icon, Some(NavIcon::Dashboard));
        assert_eq!(dashboard.emphasis, NavEmphasis::Outline);
    }

    #[test]
    fn test_mobile_repeats_primary_links() {
        for auth in [AuthState::SignedOut, signed_in()] {
            let model = build_nav(&auth, &SiteConfig::default());
            assert_eq!(
                labels(&model.mobile[..4]),
                vec!["Home", "About Us", "Contributors", "Contact Us"]
            );
        }
    }

    #[test]
    fn test_external_links_are_opener_isolated() {
        let mut config = SiteConfig::default();
        for show_star in [false, true] {
            config.show_star_in_mobile_menu = show_star;
            for auth in [AuthState::SignedOut, signed_in()] {
                let model = build_nav(&auth, &config);
                assert_eq!(model.external_links().count(), if show_star { 2 } else { 1 });
                for link in model.external_links() {
                    assert!(link.is_opener_isolated());
                    assert_eq!(link.target(), "_blank");
                    assert_eq!(link.rel(), "noopener noreferrer");
                }
            }
        }
    }

    #[test]
    fn test_repository_link_follows_config() {
        let config = SiteConfig {
            repository_url: "https://github.com/acme/notes".to_string(),
            ..SiteConfig::default()
        };
        let model = build_nav(&AuthState::SignedOut, &config);
        assert_eq!(model.repository.href, "https://github.com/acme/notes");
        assert!(model.mobile_repository.is_none());
        assert_eq!(model.brand_name, "Smriti AI");
    }
}
