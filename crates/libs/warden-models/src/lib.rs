//! Database models and ORM layer for the warden service.
//!
//! Provides the Diesel-based user model, queries, and connection management
//! backing the authentication endpoints.
//!
//! # Usage
//!
//! ```rust,no_run
//! use warden_models::{
//!     db::{config::DbConfig, connection::DbConnection},
//!     user::user::User,
//! };
//!
//! let config = DbConfig::from_env();
//! let conn = DbConnection::new(&config).setup();
//!
//! let user = User::fetch_by_email("someone@example.com", &conn).unwrap();
//! println!("found: {}", user.is_some());
//! ```

pub mod db;
pub mod error;
pub mod prelude;
mod schema;
pub mod user;
