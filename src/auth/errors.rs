//! Auth service errors.

use thiserror::Error;

use crate::storage::StorageError;

/// Failure categories for the auth operations. Every failure is synchronous
/// and leaves persisted state unchanged.
#[derive(Debug, Error)]
pub enum AuthError {
    /// A required registration field was empty.
    #[error("missing required field")]
    MissingField,

    /// No account has been registered.
    #[error("account not found")]
    AccountNotFound,

    /// Email or password did not match the stored account.
    #[error("wrong credentials")]
    InvalidCredentials,

    /// The reset email does not belong to the stored account.
    #[error("email not registered")]
    EmailNotRegistered,

    /// The supplied code did not match the live OTP challenge.
    #[error("wrong otp")]
    InvalidOtp,

    /// Underlying storage failure.
    #[error("storage error")]
    Storage(#[from] StorageError),

    /// The persisted account record could not be encoded or decoded.
    #[error("account record error")]
    Record(#[source] serde_json::Error),
}
