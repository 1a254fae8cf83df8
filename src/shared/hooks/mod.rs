// Custom Dioxus hooks
pub mod use_auth;
pub mod use_nav_menu;

pub use use_auth::{use_auth_provider, use_auth_state, AuthContext};
pub use use_nav_menu::{use_close_on_route_change, use_nav_menu, NavMenu};
