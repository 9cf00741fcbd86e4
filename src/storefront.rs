//! Storefront session
//!
//! The single owner of all page-session state: the catalog, the cart, the
//! auth service over durable storage, and the auth-modal pane. Every
//! operation here corresponds to one click handler on the page; all of them
//! run to completion synchronously, so no two mutations can interleave.

use thiserror::Error;

use crate::{
    auth::{AuthError, AuthService, IssuedOtp},
    cart::{Cart, CartError},
    catalog::{Catalog, CatalogError},
    notify::{self, Toast},
    storage::Storage,
    view::{CartViewModel, render_cart},
};

/// Which auth form the modal is showing. A display-visibility concern only,
/// not a security boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPane {
    /// The login form.
    Login,

    /// The registration form.
    Register,

    /// The forgot-password (OTP) form.
    Forgot,
}

/// Errors surfaced by storefront operations.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Catalog lookup failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Cart mutation or total failed.
    #[error(transparent)]
    Cart(#[from] CartError),

    /// Auth operation failed.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Checkout was attempted while logged out.
    #[error("login required before checkout")]
    LoginRequired,
}

/// One page session of the storefront.
#[derive(Debug)]
pub struct Storefront<S> {
    catalog: Catalog,
    cart: Cart,
    auth: AuthService<S>,
    pane: Option<AuthPane>,
}

impl<S: Storage> Storefront<S> {
    /// Start a session over the given catalog and storage backend. The cart
    /// starts empty; persisted auth state carries over from earlier
    /// sessions through the storage.
    #[must_use]
    pub fn new(catalog: Catalog, storage: S) -> Self {
        Self {
            catalog,
            cart: Cart::new(),
            auth: AuthService::new(storage),
            pane: None,
        }
    }

    /// The menu this session sells from.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Add one unit of the named product to the cart and return the
    /// confirmation toast.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownProduct`] for a name that is not on
    /// the menu; the cart is unchanged.
    pub fn add_to_cart(&mut self, name: &str) -> Result<Toast, StorefrontError> {
        let (key, product) = self.catalog.product_by_name(name)?;
        let quantity = self.cart.add(key, product);

        tracing::debug!(product = %product.name, quantity, "added to cart");

        Ok(notify::added_to_cart(&product.name))
    }

    /// Remove the cart row at `index` and return the removal toast.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::LineNotFound`] for an index that no longer
    /// points at a row; the cart is unchanged.
    pub fn remove_from_cart(&mut self, index: usize) -> Result<Toast, StorefrontError> {
        match self.cart.remove(index) {
            Ok(line) => {
                tracing::debug!(product = %line.name(), index, "removed from cart");

                Ok(notify::removed_from_cart(line.name()))
            }
            Err(error) => {
                tracing::warn!(index, "cart removal rejected: {error}");

                Err(error.into())
            }
        }
    }

    /// Project the cart into a fresh view model, as opening the cart modal
    /// always does.
    ///
    /// # Errors
    ///
    /// Returns a [`StorefrontError`] if the total cannot be calculated.
    pub fn open_cart(&self) -> Result<CartViewModel, StorefrontError> {
        render_cart(&self.cart).map_err(StorefrontError::from)
    }

    /// The cart-icon badge number.
    #[must_use]
    pub fn cart_badge(&self) -> u64 {
        self.cart.item_count()
    }

    /// The checkout gate. Logged-in sessions pass and nothing further
    /// happens, since no order submission flow exists. Logged-out sessions
    /// are sent to the login pane instead.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::LoginRequired`] while logged out; the
    /// cart is left untouched.
    pub fn checkout(&mut self) -> Result<(), StorefrontError> {
        if self.auth.is_logged_in()? {
            tracing::info!("checkout gate passed");

            return Ok(());
        }

        self.pane = Some(AuthPane::Login);

        Err(StorefrontError::LoginRequired)
    }

    /// Register an account and, on success, switch the modal to the login
    /// pane.
    ///
    /// # Errors
    ///
    /// Propagates [`AuthError`] failures; the pane is unchanged on failure.
    pub fn register(&mut self, name: &str, email: &str, password: &str) -> Result<(), StorefrontError> {
        self.auth.register(name, email, password)?;
        self.pane = Some(AuthPane::Login);

        Ok(())
    }

    /// Log in and, on success, close the auth modal.
    ///
    /// # Errors
    ///
    /// Propagates [`AuthError`] failures; the pane is unchanged on failure.
    pub fn login(&mut self, email: &str, password: &str) -> Result<(), StorefrontError> {
        self.auth.login(email, password)?;
        self.pane = None;

        Ok(())
    }

    /// Request a password-reset code for `email`. The code comes back to
    /// the caller; showing it is the simulated email send.
    ///
    /// # Errors
    ///
    /// Propagates [`AuthError`] failures.
    pub fn request_otp(&mut self, email: &str) -> Result<IssuedOtp, StorefrontError> {
        self.auth.request_otp(email).map_err(StorefrontError::from)
    }

    /// Reset the password with an issued code and, on success, return to
    /// the login pane.
    ///
    /// # Errors
    ///
    /// Propagates [`AuthError`] failures; the pane is unchanged on failure.
    pub fn reset_password(
        &mut self,
        otp_input: &str,
        new_password: &str,
    ) -> Result<(), StorefrontError> {
        self.auth.reset_password(otp_input, new_password)?;
        self.pane = Some(AuthPane::Login);

        Ok(())
    }

    /// Whether the persisted logged-in flag is set.
    ///
    /// # Errors
    ///
    /// Returns a [`StorefrontError`] if storage fails.
    pub fn is_logged_in(&self) -> Result<bool, StorefrontError> {
        self.auth.is_logged_in().map_err(StorefrontError::from)
    }

    /// Open the auth modal on its default pane, the login form.
    pub fn open_auth(&mut self) {
        self.pane = Some(AuthPane::Login);
    }

    /// Close the auth modal.
    pub fn close_auth(&mut self) {
        self.pane = None;
    }

    /// Show the login form.
    pub fn show_login(&mut self) {
        self.pane = Some(AuthPane::Login);
    }

    /// Show the registration form.
    pub fn show_register(&mut self) {
        self.pane = Some(AuthPane::Register);
    }

    /// Show the forgot-password form.
    pub fn show_forgot(&mut self) {
        self.pane = Some(AuthPane::Forgot);
    }

    /// The pane the auth modal is showing, if it is open.
    #[must_use]
    pub fn auth_pane(&self) -> Option<AuthPane> {
        self.pane
    }
}
