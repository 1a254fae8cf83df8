//! Site configuration
//!
//! Values are resolved at build time through `option_env!` so the server
//! render and the hydrated client always agree on the same config.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::shared::errors::{AppError, Result};
use crate::shared::logging;

pub const DEFAULT_BRAND_NAME: &str = "Smriti AI";
pub const DEFAULT_REPOSITORY_URL: &str = "https://github.com/vatsal-bhakodia/smriti-ai";
pub const DEFAULT_TRANSITION_MS: u32 = 300;

/// Upper bound for the menu animation; anything longer is a typo
pub const MAX_TRANSITION_MS: u32 = 5_000;

pub const ENV_BRAND_NAME: &str = "SMRITI_BRAND_NAME";
pub const ENV_REPOSITORY_URL: &str = "SMRITI_REPOSITORY_URL";
pub const ENV_TRANSITION_MS: &str = "SMRITI_MENU_TRANSITION_MS";
pub const ENV_EASING: &str = "SMRITI_MENU_EASING";
pub const ENV_MOBILE_STAR: &str = "SMRITI_MOBILE_STAR";

/// CSS easing curves accepted for the menu transition
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    pub fn as_css(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseIn => "ease-in",
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
        }
    }
}

impl FromStr for Easing {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(Easing::Linear),
            "ease-in" | "easein" => Ok(Easing::EaseIn),
            "ease-out" | "easeout" => Ok(Easing::EaseOut),
            "ease-in-out" | "easeinout" => Ok(Easing::EaseInOut),
            other => Err(AppError::InvalidEasing(other.to_string())),
        }
    }
}

/// Duration and curve of the menu open/close animation
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionConfig {
    pub duration_ms: u32,
    pub easing: Easing,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_TRANSITION_MS,
            easing: Easing::EaseInOut,
        }
    }
}

impl TransitionConfig {
    /// Same curve, no motion
    pub fn instant(self) -> Self {
        Self {
            duration_ms: 0,
            ..self
        }
    }

    /// CSS `transition` value for one property
    pub fn css_transition(&self, property: &str) -> String {
        format!("{} {}ms {}", property, self.duration_ms, self.easing.as_css())
    }

    /// CSS `animation-duration` / `animation-timing-function` pair
    pub fn css_animation(&self) -> String {
        format!(
            "animation-duration: {}ms; animation-timing-function: {};",
            self.duration_ms,
            self.easing.as_css()
        )
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub brand_name: String,
    pub repository_url: String,
    pub menu_transition: TransitionConfig,
    /// Repeat the repository star link inside the mobile panel
    pub show_star_in_mobile_menu: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand_name: DEFAULT_BRAND_NAME.to_string(),
            repository_url: DEFAULT_REPOSITORY_URL.to_string(),
            menu_transition: TransitionConfig::default(),
            show_star_in_mobile_menu: false,
        }
    }
}

impl SiteConfig {
    /// Build a config from a key lookup, keeping defaults for missing keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(name) = lookup(ENV_BRAND_NAME).filter(|v| !v.trim().is_empty()) {
            config.brand_name = name.trim().to_string();
        }

        if let Some(url) = lookup(ENV_REPOSITORY_URL) {
            config.repository_url = validate_repository_url(&url)?;
        }

        if let Some(raw) = lookup(ENV_TRANSITION_MS) {
            config.menu_transition.duration_ms = parse_duration_ms(&raw)?;
        }

        if let Some(raw) = lookup(ENV_EASING) {
            config.menu_transition.easing = raw.parse()?;
        }

        if let Some(raw) = lookup(ENV_MOBILE_STAR) {
            config.show_star_in_mobile_menu = parse_flag(ENV_MOBILE_STAR, &raw)?;
        }

        Ok(config)
    }

    /// Load the build-time configuration, falling back to defaults when it is invalid.
    pub fn load() -> Self {
        match Self::from_lookup(build_env) {
            Ok(config) => {
                logging::log_config_loaded(
                    &config.repository_url,
                    config.menu_transition.duration_ms,
                );
                config
            }
            Err(e) => {
                logging::log_config_fallback(&e.to_string());
                Self::default()
            }
        }
    }
}

fn build_env(key: &str) -> Option<String> {
    let value = match key {
        ENV_BRAND_NAME => option_env!("SMRITI_BRAND_NAME"),
        ENV_REPOSITORY_URL => option_env!("SMRITI_REPOSITORY_URL"),
        ENV_TRANSITION_MS => option_env!("SMRITI_MENU_TRANSITION_MS"),
        ENV_EASING => option_env!("SMRITI_MENU_EASING"),
        ENV_MOBILE_STAR => option_env!("SMRITI_MOBILE_STAR"),
        _ => None,
    };
    value.map(str::to_string)
}

fn validate_repository_url(raw: &str) -> Result<String> {
    let url = raw.trim();
    let rest = url
        .strip_prefix("https://")
        .ok_or_else(|| AppError::InvalidRepositoryUrl(url.to_string()))?;

    // host plus at least one path segment
    let mut parts = rest.splitn(2, '/');
    let host = parts.next().unwrap_or_default();
    let path = parts.next().unwrap_or_default();
    if host.is_empty() || path.trim_matches('/').is_empty() || url.contains(char::is_whitespace) {
        return Err(AppError::InvalidRepositoryUrl(url.to_string()));
    }

    Ok(url.trim_end_matches('/').to_string())
}

fn parse_duration_ms(raw: &str) -> Result<u32> {
    let trimmed = raw.trim();
    let digits = trimmed.strip_suffix("ms").unwrap_or(trimmed);
    match digits.parse::<u32>() {
        Ok(ms) if ms <= MAX_TRANSITION_MS => Ok(ms),
        _ => Err(AppError::InvalidDuration(trimmed.to_string())),
    }
}

fn parse_flag(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(AppError::InvalidFlag {
            key: key.to_string(),
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_empty_lookup_gives_defaults() {
        let config = SiteConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.menu_transition.duration_ms, 300);
        assert_eq!(config.menu_transition.easing, Easing::EaseInOut);
        assert!(!config.show_star_in_mobile_menu);
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = SiteConfig::from_lookup(lookup_from(&[
            (ENV_BRAND_NAME, "  Smriti  "),
            (ENV_REPOSITORY_URL, "https://github.com/acme/notes/"),
            (ENV_TRANSITION_MS, "150ms"),
            (ENV_EASING, "ease-out"),
            (ENV_MOBILE_STAR, "true"),
        ]))
        .unwrap();

        assert_eq!(config.brand_name, "Smriti");
        assert_eq!(config.repository_url, "https://github.com/acme/notes");
        assert_eq!(config.menu_transition.duration_ms, 150);
        assert_eq!(config.menu_transition.easing, Easing::EaseOut);
        assert!(config.show_star_in_mobile_menu);
    }

    #[test]
    fn test_rejects_non_https_repository() {
        let err = SiteConfig::from_lookup(lookup_from(&[(
            ENV_REPOSITORY_URL,
            "http://github.com/acme/notes",
        )]))
        .unwrap_err();
        assert!(matches!(err, AppError::InvalidRepositoryUrl(_)));

        let err = SiteConfig::from_lookup(lookup_from(&[(ENV_REPOSITORY_URL, "https://github.com/")]))
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidRepositoryUrl(_)));
    }

    #[test]
    fn test_rejects_bad_durations() {
        for raw in ["fast", "-1", "99999"] {
            let err = SiteConfig::from_lookup(lookup_from(&[(ENV_TRANSITION_MS, raw)])).unwrap_err();
            assert!(matches!(err, AppError::InvalidDuration(_)), "{raw}");
        }
    }

    #[test]
    fn test_rejects_unknown_easing_and_flag() {
        let err = SiteConfig::from_lookup(lookup_from(&[(ENV_EASING, "bounce")])).unwrap_err();
        assert_eq!(err, AppError::InvalidEasing("bounce".to_string()));

        let err = SiteConfig::from_lookup(lookup_from(&[(ENV_MOBILE_STAR, "maybe")])).unwrap_err();
        assert!(matches!(err, AppError::InvalidFlag { .. }));
    }

    #[test]
    fn test_transition_css() {
        let transition = TransitionConfig::default();
        assert_eq!(transition.css_transition("transform"), "transform 300ms ease-in-out");
        assert_eq!(transition.instant().duration_ms, 0);
        assert_eq!(transition.instant().easing, Easing::EaseInOut);
        assert_eq!(
            transition.css_animation(),
            "animation-duration: 300ms; animation-timing-function: ease-in-out;"
        );
    }
}
