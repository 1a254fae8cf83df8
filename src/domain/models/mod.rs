// Domain models
// Pure Rust, no framework dependencies

pub mod auth;
pub mod menu;
pub mod nav;

pub use auth::{AuthState, UserIdentity};
pub use menu::{MenuState, MenuTransition, PanelPhase};
pub use nav::{
    build_nav, ExternalLink, NavEmphasis, NavEntry, NavIcon, NavModel, NavTarget, ViewportClass,
};
