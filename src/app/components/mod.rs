pub mod button;
pub mod icons;
pub mod user_button;

pub use button::{Button, ButtonSize, ButtonVariant};
pub use icons::{nav_icon, BrainIcon, DashboardIcon, SettingsIcon, StarIcon};
pub use user_button::UserButton;
