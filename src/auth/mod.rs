//! Mock authentication
//!
//! The site's client-only stand-in for real authentication: one account
//! record and a logged-in flag in durable session storage, plus an in-memory
//! OTP challenge for password resets. Passwords are stored in plaintext and
//! the issued OTP is handed straight back to the caller; both are the
//! documented behavior of the system this models, not a recommendation.

mod errors;
mod models;
mod otp;
mod service;

pub use errors::AuthError;
pub use models::{IssuedOtp, UserAccount};
pub use otp::OtpChallenge;
pub use service::{AuthService, LOGGED_IN_KEY, USER_KEY};
