//! Warden Authentication Service (wardend)
//!
//! Serves the authentication surface of a web API:
//!
//! - **Registration**: creates accounts with salted, hashed passwords
//! - **Login**: verifies credentials and issues signed session tokens
//! - **Session verification**: guards protected routes behind bearer tokens
//! - **Liveness**: a trivial unauthenticated probe
//!
//! Persistence and signing-key material are injected into the router once at
//! startup; there is no module-level state.

pub mod api;
pub mod error;
pub mod prelude;
