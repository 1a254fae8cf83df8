use serde::{Deserialize, Serialize};

/// Identity exposed by the external identity provider for a signed-in viewer
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub id: String,
    pub display_name: String,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
    /// Provider-hosted account management page
    pub account_url: Option<String>,
    /// Provider-hosted sign-out endpoint
    pub sign_out_url: Option<String>,
}

impl UserIdentity {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            email: None,
            avatar_url: None,
            account_url: None,
            sign_out_url: None,
        }
    }

    /// Up to two uppercase initials, falling back to the email, then "?"
    pub fn initials(&self) -> String {
        let from_name: String = self
            .display_name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect();
        if !from_name.is_empty() {
            return from_name;
        }

        self.email
            .as_deref()
            .and_then(|email| email.chars().next())
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "?".to_string())
    }
}

/// The two observable authentication states of a viewer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum AuthState {
    #[default]
    SignedOut,
    SignedIn(UserIdentity),
}

impl AuthState {
    /// Unknown or unloaded sessions are treated as signed out
    pub fn from_session(identity: Option<UserIdentity>) -> Self {
        match identity {
            Some(identity) => AuthState::SignedIn(identity),
            None => AuthState::SignedOut,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self, AuthState::SignedIn(_))
    }

    pub fn identity(&self) -> Option<&UserIdentity> {
        match self {
            AuthState::SignedIn(identity) => Some(identity),
            AuthState::SignedOut => None,
        }
    }
}
