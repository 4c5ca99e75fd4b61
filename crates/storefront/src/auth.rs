//! The admin access gate.
//!
//! A single fixed credential pair guards the admin surface. This is a
//! placeholder gate for a client-side store, not a security control: the
//! comparison is a literal match, there is no hashing, no lockout, and no
//! attempt counting. Do not extend this pattern; replace it outright if the
//! store ever grows a real backend.
//!
//! Sessions are memory-only. A process restart, or never logging in, leaves
//! the gate with no identity.

use digivault_core::{AdminIdentity, Role};
use secrecy::{ExposeSecret, SecretString};
use tracing::{info, warn};

/// Default admin login email.
pub const DEFAULT_ADMIN_EMAIL: &str = "hangzin2@gmail.com";
/// Default admin login password.
pub const DEFAULT_ADMIN_PASSWORD: &str = "Chicken99";

/// Holds at most one authenticated admin identity.
pub struct AccessGate {
    expected_email: String,
    expected_password: SecretString,
    identity: Option<AdminIdentity>,
}

impl Default for AccessGate {
    fn default() -> Self {
        Self::new(
            DEFAULT_ADMIN_EMAIL,
            SecretString::from(DEFAULT_ADMIN_PASSWORD.to_owned()),
        )
    }
}

impl AccessGate {
    /// Create a gate expecting the given credential pair.
    #[must_use]
    pub fn new(expected_email: impl Into<String>, expected_password: SecretString) -> Self {
        Self {
            expected_email: expected_email.into(),
            expected_password,
            identity: None,
        }
    }

    /// Attempt to authenticate. On a match, installs an admin identity and
    /// returns `true`; otherwise returns `false` and leaves the session
    /// untouched.
    pub fn authenticate(&mut self, email: &str, password: &str) -> bool {
        let matches =
            email == self.expected_email && password == self.expected_password.expose_secret();
        if matches {
            info!(email, "admin authenticated");
            self.identity = Some(AdminIdentity {
                email: email.to_owned(),
                name: "Admin User".to_owned(),
                role: Role::Admin,
            });
        } else {
            warn!(email, "admin authentication failed");
        }
        matches
    }

    /// Clear the session identity.
    pub fn deauthenticate(&mut self) {
        if self.identity.take().is_some() {
            info!("admin session cleared");
        }
    }

    /// The authenticated identity, if any.
    #[must_use]
    pub const fn current_identity(&self) -> Option<&AdminIdentity> {
        self.identity.as_ref()
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }
}
