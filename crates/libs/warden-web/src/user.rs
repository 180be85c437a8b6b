//! Login and registration cores for the authentication endpoints.

use serde::{Deserialize, Serialize};
use warden_auth::{
    jwt::JwtKeys,
    password_hash::{generate_password_hash, is_password_valid},
};
use warden_models::user::user::{UserCreate, UserShort};

use crate::{auth_token::issue_token, prelude::*, store::UserStore, validate::is_valid_email};

/// Credentials payload for login and registration.
///
/// Both fields are optional at the wire level so that an absent field is
/// reported as a validation failure rather than a body rejection. The
/// password is transient and never stored.
#[derive(Debug, Deserialize, Serialize)]
pub struct CredentialsRequest {
    /// Account email.
    pub email: Option<String>,
    /// Plaintext password.
    pub password: Option<String>,
}

/// Successful login response.
#[derive(Debug, Deserialize, Serialize)]
pub struct LoginResponse {
    /// Always true on success.
    pub auth: bool,
    /// Signed session token.
    pub token: String,
    /// Short form of the authenticated account.
    pub user: UserShort,
}

/// Successful registration response.
#[derive(Debug, Deserialize, Serialize)]
pub struct RegisterResponse {
    /// Signed session token for the new account.
    pub token: String,
    /// Short form of the created account.
    pub user: UserShort,
}

/// Validates the payload and returns `(email, password)`.
///
/// The email check runs before the password check; both endpoints share
/// this order.
fn validate_credentials(payload: &CredentialsRequest) -> Result<(&str, &str)> {
    let email = payload
        .email
        .as_deref()
        .filter(|email| is_valid_email(email))
        .ok_or(Error::InvalidEmail)?;
    let password = payload
        .password
        .as_deref()
        .filter(|password| !password.is_empty())
        .ok_or(Error::MissingPassword)?;
    Ok((email, password))
}

/// Authenticates an account and issues a session token.
///
/// An unknown email and a wrong password are indistinguishable to the
/// caller; both fail with [`Error::WrongCredentials`].
pub fn login_user(
    payload: &CredentialsRequest,
    users: &dyn UserStore,
    keys: &JwtKeys,
) -> Result<LoginResponse> {
    let (email, password) = validate_credentials(payload)?;

    let user = users
        .find_by_email(email)?
        .ok_or(Error::WrongCredentials)?;
    let is_valid = is_password_valid(password, &user.password_hash)?;
    if !is_valid {
        return Err(Error::WrongCredentials);
    }

    let token = issue_token(&user, keys)?;
    Ok(LoginResponse {
        auth: true,
        token,
        user: user.short(),
    })
}

/// Registers a new account and issues a session token for it.
pub fn register_user(
    payload: &CredentialsRequest,
    users: &dyn UserStore,
    keys: &JwtKeys,
) -> Result<RegisterResponse> {
    let (email, password) = validate_credentials(payload)?;

    if users.find_by_email(email)?.is_some() {
        return Err(Error::DuplicateUser);
    }

    let password_hash = generate_password_hash(password)?;
    let user = users.save(UserCreate {
        email: email.to_string(),
        password_hash,
    })?;

    let token = issue_token(&user, keys)?;
    Ok(RegisterResponse {
        token,
        user: user.short(),
    })
}
