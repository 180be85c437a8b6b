//! Web layer for the warden service.
//!
//! This library provides the bearer-token authentication guard, session
//! token helpers, request validation, and the login/registration cores used
//! by the HTTP API.

pub mod auth_token;
pub mod error;
pub mod mw_auth;
pub mod prelude;
pub mod store;
pub mod user;
pub mod validate;
