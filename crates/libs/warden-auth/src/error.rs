/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Token signing or verification error.
    #[error(transparent)]
    Token(#[from] jsonwebtoken::errors::Error),

    /// Password hashing or hash parsing error.
    #[error("Error hashing password {0}")]
    PasswordHash(argon2::password_hash::Error),
}
