use serde::{Deserialize, Serialize};

use crate::ADMIN_ROLE;

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "access_token";
/// Storage key for the role string.
pub const ROLE_KEY: &str = "user_role";

/// The client's view of who is signed in.
///
/// A value, not a handle: the login and logout actions produce a new
/// `Session` rather than mutating one in place. Token and role travel
/// together; an empty token is treated the same as an absent one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    token: Option<String>,
    role: Option<String>,
}

impl Session {
    /// Session written after a successful login.
    pub fn login(token: impl Into<String>, role: impl Into<String>) -> Self {
        Self::from_stored(Some(token.into()), Some(role.into()))
    }

    /// Session after logout: both halves absent.
    pub fn logged_out() -> Self {
        Self::default()
    }

    /// Rebuild a session from raw storage entries.
    ///
    /// A role without a token is dropped; a token without a role yields an
    /// authenticated, non-admin session.
    pub fn from_stored(token: Option<String>, role: Option<String>) -> Self {
        match token.filter(|t| !t.is_empty()) {
            Some(token) => Self {
                token: Some(token),
                role: role.filter(|r| !r.is_empty()),
            },
            None => Self::default(),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.is_authenticated() && self.role.as_deref() == Some(ADMIN_ROLE)
    }
}
