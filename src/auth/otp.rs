//! One-time password challenge.

use rand::Rng;

/// The in-memory OTP challenge for password resets.
///
/// The code lives only in memory, so it does not survive the session.
/// Issuing replaces any previous code; a successful reset clears it. There
/// is no expiry timer.
#[derive(Debug, Default)]
pub struct OtpChallenge {
    code: Option<String>,
}

impl OtpChallenge {
    /// Create an empty challenge.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a fresh uniformly random six-digit code, replacing any
    /// previous one, and return it.
    pub fn issue(&mut self) -> &str {
        let code = rand::rng().random_range(100_000..1_000_000_u32);

        self.code.insert(code.to_string()).as_str()
    }

    /// Whether `input` exactly matches the live code. Always false once the
    /// challenge has been cleared or was never issued.
    #[must_use]
    pub fn verify(&self, input: &str) -> bool {
        self.code.as_deref().is_some_and(|code| code == input)
    }

    /// Drop the live code, if any.
    pub fn clear(&mut self) {
        self.code = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_code_is_six_digits() {
        let mut challenge = OtpChallenge::new();

        let code = challenge.issue().to_owned();

        assert_eq!(code.len(), 6);
        assert!(
            code.chars().all(|digit| digit.is_ascii_digit()),
            "code should be numeric"
        );
        assert_ne!(
            code.chars().next(),
            Some('0'),
            "code should not have a leading zero"
        );
    }

    #[test]
    fn verify_matches_exactly() {
        let mut challenge = OtpChallenge::new();

        let code = challenge.issue().to_owned();

        assert!(challenge.verify(&code));
        assert!(!challenge.verify("000000"));
    }

    #[test]
    fn unissued_challenge_verifies_nothing() {
        let challenge = OtpChallenge::new();

        assert!(!challenge.verify(""));
        assert!(!challenge.verify("123456"));
    }

    #[test]
    fn clear_invalidates_the_code() {
        let mut challenge = OtpChallenge::new();

        let code = challenge.issue().to_owned();
        challenge.clear();

        assert!(!challenge.verify(&code));
    }

    #[test]
    fn reissue_replaces_the_previous_code() {
        let mut challenge = OtpChallenge::new();

        let first = challenge.issue().to_owned();
        let second = challenge.issue().to_owned();

        assert!(challenge.verify(&second));

        if first != second {
            assert!(!challenge.verify(&first), "stale code should not verify");
        }
    }
}
