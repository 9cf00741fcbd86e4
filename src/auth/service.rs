//! Auth service.

use crate::{
    auth::{
        AuthError,
        models::{IssuedOtp, UserAccount},
        otp::OtpChallenge,
    },
    storage::Storage,
};

/// Storage key holding the JSON-encoded account record.
pub const USER_KEY: &str = "user";

/// Storage key holding the logged-in flag: the string `"true"` or absent.
pub const LOGGED_IN_KEY: &str = "isLoggedIn";

/// The register / login / OTP-reset flow over a storage backend.
///
/// All operations run to completion on the caller's thread. A failure never
/// leaves a partial mutation behind; the only write each operation performs
/// happens after every check has passed.
#[derive(Debug)]
pub struct AuthService<S> {
    storage: S,
    challenge: OtpChallenge,
}

impl<S: Storage> AuthService<S> {
    /// Create a service over the given storage backend.
    #[must_use]
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            challenge: OtpChallenge::new(),
        }
    }

    /// Read the persisted account, if one has been registered.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] if storage fails or the record is corrupt.
    pub fn account(&self) -> Result<Option<UserAccount>, AuthError> {
        let Some(raw) = self.storage.get(USER_KEY)? else {
            return Ok(None);
        };

        serde_json::from_str(&raw).map(Some).map_err(AuthError::Record)
    }

    /// Register an account, overwriting any previous one.
    ///
    /// No uniqueness or format validation is applied to the email; the only
    /// check is that every field is non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MissingField`] when any field is empty, leaving
    /// a previously persisted account untouched.
    pub fn register(&mut self, name: &str, email: &str, password: &str) -> Result<(), AuthError> {
        if name.is_empty() || email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingField);
        }

        let account = UserAccount {
            name: name.to_owned(),
            email: email.to_owned(),
            password: password.to_owned(),
        };

        self.store_account(&account)?;

        tracing::info!("account registered");

        Ok(())
    }

    /// Log in with an exact, case-sensitive credential match.
    ///
    /// Success persists the logged-in flag. There is no rate limiting and no
    /// lockout; there is also no logout path anywhere in the system, so the
    /// flag is never cleared once set.
    ///
    /// # Errors
    ///
    /// [`AuthError::AccountNotFound`] when nothing is registered,
    /// [`AuthError::InvalidCredentials`] when either field differs.
    pub fn login(&mut self, email: &str, password: &str) -> Result<(), AuthError> {
        let account = self.account()?.ok_or(AuthError::AccountNotFound)?;

        if account.email != email || account.password != password {
            tracing::warn!("login rejected: credential mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        self.storage.set(LOGGED_IN_KEY, "true")?;

        tracing::info!("login succeeded");

        Ok(())
    }

    /// Whether the persisted logged-in flag is set.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] if storage fails.
    pub fn is_logged_in(&self) -> Result<bool, AuthError> {
        Ok(self.storage.get(LOGGED_IN_KEY)?.as_deref() == Some("true"))
    }

    /// Issue a reset code for the registered email.
    ///
    /// The fresh code replaces any previous one and is returned directly to
    /// the caller, which is the simulated email send.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::EmailNotRegistered`] when no account exists or
    /// the email differs from the persisted one.
    pub fn request_otp(&mut self, email: &str) -> Result<IssuedOtp, AuthError> {
        let account = self.account()?.ok_or(AuthError::EmailNotRegistered)?;

        if account.email != email {
            return Err(AuthError::EmailNotRegistered);
        }

        let code = self.challenge.issue().to_owned();

        tracing::info!("otp issued");

        Ok(IssuedOtp { code })
    }

    /// Overwrite the persisted password after an exact OTP match.
    ///
    /// Success clears the challenge, so the same code cannot authorize a
    /// second reset.
    ///
    /// # Errors
    ///
    /// [`AuthError::InvalidOtp`] unless `otp_input` equals the live code;
    /// [`AuthError::AccountNotFound`] if the account has vanished since the
    /// code was issued.
    pub fn reset_password(&mut self, otp_input: &str, new_password: &str) -> Result<(), AuthError> {
        if !self.challenge.verify(otp_input) {
            tracing::warn!("password reset rejected: otp mismatch");
            return Err(AuthError::InvalidOtp);
        }

        let mut account = self.account()?.ok_or(AuthError::AccountNotFound)?;
        account.password = new_password.to_owned();

        self.store_account(&account)?;
        self.challenge.clear();

        tracing::info!("password reset");

        Ok(())
    }

    fn store_account(&mut self, account: &UserAccount) -> Result<(), AuthError> {
        let raw = serde_json::to_string(account).map_err(AuthError::Record)?;

        self.storage.set(USER_KEY, &raw)?;

        Ok(())
    }
}
