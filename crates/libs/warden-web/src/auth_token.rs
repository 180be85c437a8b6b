//! Session token management for web requests.

use serde::{Deserialize, Serialize};
use tracing::error;
use warden_auth::jwt::JwtKeys;
use warden_models::user::user::User;

use crate::prelude::*;

/// JWT claims for an authenticated session.
///
/// The account email is the only claim; no profile data and no expiration
/// are embedded, which keeps the token small.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Email of the authenticated account.
    pub sub: String,
}

/// Signs a session token for the given user.
///
/// # Examples
///
/// ```rust
/// use warden_auth::jwt::JwtKeys;
/// use warden_models::user::user::User;
/// use warden_web::auth_token::{decode_token, issue_token};
///
/// # fn example(user: &User) -> Result<(), Box<dyn std::error::Error>> {
/// let keys = JwtKeys::new(b"secret");
/// let token = issue_token(user, &keys)?;
/// let claims = decode_token(&token, &keys)?;
/// assert_eq!(claims.sub, user.email);
/// # Ok(())
/// # }
/// ```
pub fn issue_token(user: &User, keys: &JwtKeys) -> Result<String> {
    let claims = SessionClaims {
        sub: user.email.clone(),
    };
    Ok(keys.encode(&claims).map_err(|err| {
        error!("Failed to encode JWT {err}");
        err
    })?)
}

/// Verifies a session token and extracts its claims.
pub fn decode_token(token: &str, keys: &JwtKeys) -> Result<SessionClaims> {
    Ok(keys.decode::<SessionClaims>(token)?.claims)
}
