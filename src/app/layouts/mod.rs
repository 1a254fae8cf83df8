pub mod navbar;

pub use navbar::NavigationBar;
