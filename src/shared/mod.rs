pub mod config;
pub mod errors;
pub mod logging;
pub mod utils;

// Available in fullstack mode (both client and server)
pub mod hooks;
