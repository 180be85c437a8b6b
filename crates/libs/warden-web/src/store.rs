//! User persistence seam for the web layer.
//!
//! Handlers talk to the user collaborator only through [`UserStore`]; the
//! database-backed implementation delegates to the model layer.

use warden_models::{
    db::connection::DbConnection,
    user::user::{User, UserCreate},
};

use crate::prelude::*;

/// Lookup-by-key and save operations over the user collaborator.
pub trait UserStore: Send + Sync {
    /// Finds an account by email, `None` when no such account exists.
    fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Persists a new account and returns the stored record.
    fn save(&self, user: UserCreate) -> Result<User>;
}

impl UserStore for DbConnection {
    fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(User::fetch_by_email(email, self)?)
    }

    fn save(&self, user: UserCreate) -> Result<User> {
        Ok(user.save(self)?)
    }
}
