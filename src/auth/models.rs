//! Auth data models.

use serde::{Deserialize, Serialize};

/// The single registered account, as persisted under the `user` storage key.
///
/// The record is singular: registering again overwrites it. The password is
/// kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    /// Display name given at registration.
    pub name: String,

    /// Login identifier. Compared exactly, case-sensitive.
    pub email: String,

    /// Plaintext password.
    pub password: String,
}

/// OTP issuance result with the one-time code.
///
/// There is no delivery channel; surfacing the code to the caller is the
/// simulated email send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedOtp {
    /// Six-digit numeric code.
    pub code: String,
}
