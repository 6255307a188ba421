//! Errors raised at the edges of the state layer.
//!
//! Pagination, filtering and tab sync never fail: out-of-range input is
//! clamped or ignored. Only the runtime-bound clock and sign-in can error.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StateError {
    /// A periodic task was started outside a tokio runtime.
    #[error("periodic task requires a running tokio runtime")]
    NoRuntime,

    /// Email or password left empty.
    #[error("email and password are required")]
    MissingCredentials,

    /// The authenticator rejected the credentials.
    #[error("invalid email or password")]
    InvalidCredentials,
}

pub type Result<T> = std::result::Result<T, StateError>;
