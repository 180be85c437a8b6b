//! User account model keyed by email.

use crate::prelude::*;
use crate::{db::connection::DbConnection, schema::users::dsl::*};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// A registered user account.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::users)]
#[diesel(primary_key(email))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct User {
    /// Email address, the account's unique key.
    pub email: String,
    /// Hash of the account password. Never a plaintext password.
    pub password_hash: String,
    /// When this account was created.
    pub created_at: DateTime<Utc>,
    /// When this account was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Reduced projection of an account for API responses.
///
/// Excludes the password hash and other sensitive fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserShort {
    /// Email address of the account.
    pub email: String,
}

/// Data for creating a new user account.
#[derive(Insertable, PartialEq, Debug, Clone, Deserialize)]
#[diesel(table_name = crate::schema::users)]
pub struct UserCreate {
    /// Email address for the new account.
    pub email: String,
    /// Pre-hashed password for the new account.
    pub password_hash: String,
}

impl UserCreate {
    /// Persists the new account and returns the stored row.
    pub fn save(self, connection: &DbConnection) -> Result<User> {
        let conn = &mut connection.pool.get()?;

        Ok(diesel::insert_into(users)
            .values(self)
            .returning(User::as_returning())
            .get_result(conn)?)
    }
}

impl User {
    /// Fetches an account by email, `None` when no such account exists.
    pub fn fetch_by_email(target: &str, connection: &DbConnection) -> Result<Option<Self>> {
        let conn = &mut connection.pool.get()?;

        Ok(User::by_email(target)
            .select(User::as_select())
            .get_result(conn)
            .optional()?)
    }

    /// Returns a query filtered by email.
    #[diesel::dsl::auto_type(no_type_alias)]
    pub fn by_email(target: &str) -> _ {
        crate::schema::users::dsl::users.filter(email.eq(target))
    }

    /// Short form of this account for responses.
    pub fn short(&self) -> UserShort {
        UserShort {
            email: self.email.clone(),
        }
    }
}
