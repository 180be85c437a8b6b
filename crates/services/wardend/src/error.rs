//! Error types for the warden service.

/// Errors that can occur while running the warden service.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),
}
