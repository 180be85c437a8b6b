//! Signing-secret configuration.

use std::fmt::Display;

/// Token signing configuration.
pub struct AuthConfig {
    /// Shared secret used to sign and verify session tokens.
    pub jwt_secret: String,
}

/// Get required environment variable or panic.
fn get_env_variable(var: &str) -> String {
    std::env::var(var).expect(&format!("Env Variable '{}' missing", var))
}

impl AuthConfig {
    /// Create signing configuration from environment variables.
    ///
    /// Reads the `JWT_SECRET` environment variable.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use warden_auth::config::AuthConfig;
    ///
    /// let config = AuthConfig::from_env();
    /// ```
    pub fn from_env() -> Self {
        Self {
            jwt_secret: get_env_variable("JWT_SECRET"),
        }
    }
}

impl Display for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "REDACTED")
    }
}
