//! Kedai prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    auth::{AuthError, AuthService, IssuedOtp, OtpChallenge, UserAccount},
    cart::{Cart, CartError, CartLine},
    catalog::{Catalog, CatalogError, Product, ProductKey},
    money::{format_rupiah, rupiah},
    notify::{TOAST_DISMISS, Toast, Tone},
    storage::{FileStorage, MemoryStorage, Storage, StorageError},
    storefront::{AuthPane, Storefront, StorefrontError},
    view::{CartLineView, CartViewModel, render_cart},
};
