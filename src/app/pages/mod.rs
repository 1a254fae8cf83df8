pub mod routes;
pub mod static_pages;

pub use routes::{App, Route};
pub use static_pages::{About, Contact, Contributors, Dashboard, Home, NotFound, SignIn};
