//! Notifications and user-facing text
//!
//! The storefront reports successes as transient toasts and failures as
//! blocking alerts. This module holds both notification shapes and the
//! site's message catalog; user-visible strings are Indonesian, kept
//! verbatim from the storefront they belong to.

use std::time::Duration;

use crate::{
    auth::AuthError,
    cart::CartError,
    catalog::CatalogError,
    storefront::StorefrontError,
};

/// How long a toast stays on screen before auto-dismissing.
pub const TOAST_DISMISS: Duration = Duration::from_secs(2);

/// Placeholder shown in place of cart rows when the cart is empty.
pub const EMPTY_CART: &str = "Keranjang Anda masih kosong.";

/// Alert shown when a registration field is empty.
pub const FIELDS_REQUIRED: &str = "Semua field harus diisi!";

/// Alert shown after a successful registration.
pub const REGISTER_OK: &str = "Register berhasil! Silakan login.";

/// Alert shown when logging in with no registered account.
pub const ACCOUNT_NOT_FOUND: &str = "Akun tidak ditemukan!";

/// Alert shown after a successful login.
pub const LOGIN_OK: &str = "Login berhasil!";

/// Alert shown on a credential mismatch.
pub const WRONG_CREDENTIALS: &str = "Email atau password salah!";

/// Alert shown when requesting an OTP for an unknown email.
pub const EMAIL_NOT_REGISTERED: &str = "Email tidak terdaftar!";

/// Alert shown on an OTP mismatch.
pub const WRONG_OTP: &str = "OTP salah!";

/// Alert shown after a successful password reset.
pub const RESET_OK: &str = "Password berhasil diubah!";

/// Alert shown when checkout is attempted while logged out.
pub const LOGIN_BEFORE_CHECKOUT: &str = "Silakan login terlebih dahulu sebelum checkout!";

/// Alert shown when an added product is not on the menu.
pub const UNKNOWN_PRODUCT: &str = "Produk tidak ditemukan di menu!";

/// Alert shown when a remove action points at a vanished cart row.
pub const CART_LINE_MISSING: &str = "Item keranjang tidak ditemukan.";

/// Fallback alert for storage or arithmetic failures.
pub const UNEXPECTED_FAILURE: &str = "Terjadi kesalahan. Coba lagi.";

/// Color accent of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// The default accent used for cart activity.
    Default,

    /// The success accent.
    Success,
}

/// A transient, auto-dismissing notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Text shown to the user.
    pub message: String,

    /// Color accent.
    pub tone: Tone,
}

impl Toast {
    /// A default-tone toast.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            tone: Tone::Default,
        }
    }

    /// A success-tone toast.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            tone: Tone::Success,
        }
    }
}

/// Confirmation toast after adding a product.
#[must_use]
pub fn added_to_cart(name: &str) -> Toast {
    Toast::new(format!("{name} berhasil masuk ke keranjang!"))
}

/// Confirmation toast after removing a cart row.
#[must_use]
pub fn removed_from_cart(name: &str) -> Toast {
    Toast::new(format!("{name} dihapus dari keranjang."))
}

/// The two alerts that stand in for delivering a reset code by email.
#[must_use]
pub fn otp_reveal(code: &str) -> [String; 2] {
    [
        format!("OTP anda adalah: {code}"),
        "Simulasi: OTP dikirim ke email.".to_owned(),
    ]
}

/// The blocking alert text for a failed operation.
#[must_use]
pub fn alert_for(error: &StorefrontError) -> &'static str {
    match error {
        StorefrontError::LoginRequired => LOGIN_BEFORE_CHECKOUT,
        StorefrontError::Catalog(CatalogError::UnknownProduct(_)) => UNKNOWN_PRODUCT,
        StorefrontError::Cart(CartError::LineNotFound(_)) => CART_LINE_MISSING,
        StorefrontError::Auth(AuthError::MissingField) => FIELDS_REQUIRED,
        StorefrontError::Auth(AuthError::AccountNotFound) => ACCOUNT_NOT_FOUND,
        StorefrontError::Auth(AuthError::InvalidCredentials) => WRONG_CREDENTIALS,
        StorefrontError::Auth(AuthError::EmailNotRegistered) => EMAIL_NOT_REGISTERED,
        StorefrontError::Auth(AuthError::InvalidOtp) => WRONG_OTP,
        StorefrontError::Catalog(_) | StorefrontError::Cart(_) | StorefrontError::Auth(_) => {
            UNEXPECTED_FAILURE
        }
    }
}
