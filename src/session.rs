//! Login session state
//!
//! This module defines the per-login session the host web layer carries
//! between requests. Curio only reads and writes the fields; transport
//! (cookies, signing) and the identity provider's token exchange are the
//! host's concern.

use catalog_store::User;
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Mutable per-login state.
///
/// `state` holds the anti-forgery token issued before redirecting to the
/// identity provider; the provider must echo it back. The remaining
/// fields are stamped at sign-in and cleared at sign-out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub state: Option<String>,
    pub user_id: Option<i32>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub picture: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a fresh anti-forgery state token for the next login attempt,
    /// replacing any previous one
    pub fn issue_state_token(&mut self) -> &str {
        let mut bytes = [0u8; 20];
        rand::rng().fill_bytes(&mut bytes);
        let token: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
        self.state = Some(token);
        self.state.as_deref().unwrap_or_default()
    }

    /// Check an echoed state token against the issued one
    pub fn verify_state(&self, token: &str) -> bool {
        self.state.as_deref() == Some(token) && !token.is_empty()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user_id.is_some()
    }

    pub(crate) fn stamp(&mut self, user: &User) {
        self.user_id = Some(user.id);
        self.name = Some(user.name.clone());
        self.email = Some(user.email.clone());
        self.picture = user.picture.clone();
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }
}
