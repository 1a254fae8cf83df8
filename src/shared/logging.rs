//! Structured logging helpers for the navigation shell
//!
//! Every event carries an `operation` field so log lines from the menu,
//! the router observer and the identity context can be filtered apart.

use crate::domain::models::AuthState;

#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    MenuToggle,
    RouteChange,
    AuthResolve,
    ConfigLoad,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::MenuToggle => "menu_toggle",
            LogOperation::RouteChange => "route_change",
            LogOperation::AuthResolve => "auth_resolve",
            LogOperation::ConfigLoad => "config_load",
        }
    }
}

/// Log a user-initiated menu toggle
pub fn log_menu_toggle(is_open: bool, epoch: u64) {
    tracing::debug!(
        operation = LogOperation::MenuToggle.as_str(),
        is_open = is_open,
        epoch = epoch,
        "Mobile menu toggled"
    );
}

/// Log the auto-close triggered by navigation
pub fn log_route_change(path: &str, was_open: bool) {
    tracing::debug!(
        operation = LogOperation::RouteChange.as_str(),
        path = path,
        was_open = was_open,
        "Route changed, closing mobile menu"
    );
}

/// Log which auth branch the navbar rendered
pub fn log_auth_resolved(state: &AuthState, from_context: bool) {
    tracing::trace!(
        operation = LogOperation::AuthResolve.as_str(),
        signed_in = state.is_signed_in(),
        from_context = from_context,
        "Resolved authentication state"
    );
}

/// Log the effective site configuration
pub fn log_config_loaded(repository_url: &str, transition_ms: u32) {
    tracing::info!(
        operation = LogOperation::ConfigLoad.as_str(),
        repository_url = repository_url,
        transition_ms = transition_ms,
        "Site configuration loaded"
    );
}

/// Log a configuration error that fell back to defaults
pub fn log_config_fallback(error: &str) {
    tracing::warn!(
        operation = LogOperation::ConfigLoad.as_str(),
        error = error,
        "Invalid site configuration, using defaults"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_operation_as_str() {
        assert_eq!(LogOperation::MenuToggle.as_str(), "menu_toggle");
        assert_eq!(LogOperation::RouteChange.as_str(), "route_change");
        assert_eq!(LogOperation::AuthResolve.as_str(), "auth_resolve");
        assert_eq!(LogOperation::ConfigLoad.as_str(), "config_load");
    }
}
