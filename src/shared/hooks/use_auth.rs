use dioxus::prelude::*;

use crate::domain::models::AuthState;
use crate::shared::logging;

/// Read-only view of the identity provider's state, shared through context.
///
/// The navbar only ever reads it; whoever installs the provider owns the
/// signal and updates it when the session changes.
#[derive(Clone, Copy)]
pub struct AuthContext {
    state: Signal<AuthState>,
}

impl AuthContext {
    pub fn new(state: Signal<AuthState>) -> Self {
        Self { state }
    }

    pub fn state(&self) -> AuthState {
        self.state.read().clone()
    }
}

/// Install an auth context for the subtree, seeded with `initial`
pub fn use_auth_provider(initial: impl FnOnce() -> AuthState) -> AuthContext {
    let state = use_signal(initial);
    use_context_provider(|| AuthContext::new(state))
}

/// Current auth state; a missing provider reads as signed out
pub fn use_auth_state() -> AuthState {
    match try_use_context::<AuthContext>() {
        Some(context) => {
            let state = context.state();
            logging::log_auth_resolved(&state, true);
            state
        }
        None => {
            let state = AuthState::SignedOut;
            logging::log_auth_resolved(&state, false);
            state
        }
    }
}
