//! Cart
//!
//! Ordered line items for one page session. Lines merge by product, so a
//! repeat add bumps a quantity instead of appending a duplicate. The cart is
//! ephemeral: it lives and dies with the session and is never persisted.

use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

use crate::catalog::{Product, ProductKey};

/// Errors related to cart mutation or totals.
#[derive(Debug, Error)]
pub enum CartError {
    /// An index that does not point at a line.
    #[error("cart line {0} not found")]
    LineNotFound(usize),

    /// Wrapped money arithmetic error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// A merged cart line for one product.
#[derive(Debug, Clone)]
pub struct CartLine {
    product: ProductKey,
    name: String,
    unit_price: Money<'static, Currency>,
    quantity: u32,
}

impl CartLine {
    /// The product this line holds.
    #[must_use]
    pub fn product(&self) -> ProductKey {
        self.product
    }

    /// Display name snapshotted when the line was created.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Shelf price for one unit.
    #[must_use]
    pub fn unit_price(&self) -> &Money<'static, Currency> {
        &self.unit_price
    }

    /// How many units of the product the line holds. Always positive.
    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Money<'static, Currency> {
        Money::from_minor(
            self.unit_price.to_minor_units() * i64::from(self.quantity),
            self.unit_price.currency(),
        )
    }
}

/// Cart
#[derive(Debug, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Add one unit of a product, merging into an existing line when the
    /// product is already in the cart. Returns the resulting quantity.
    pub fn add(&mut self, key: ProductKey, product: &Product) -> u32 {
        if let Some(line) = self.lines.iter_mut().find(|line| line.product == key) {
            line.quantity += 1;
            return line.quantity;
        }

        self.lines.push(CartLine {
            product: key,
            name: product.name.clone(),
            unit_price: product.price,
            quantity: 1,
        });

        1
    }

    /// Remove the line at `index`, returning it. The relative order of the
    /// remaining lines is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::LineNotFound`] when `index` is out of range; the
    /// cart is left untouched.
    pub fn remove(&mut self, index: usize) -> Result<CartLine, CartError> {
        if index >= self.lines.len() {
            return Err(CartError::LineNotFound(index));
        }

        Ok(self.lines.remove(index))
    }

    /// Calculate the cart total.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] if there was a money arithmetic error.
    pub fn subtotal(&self) -> Result<Money<'static, Currency>, CartError> {
        let zero = Money::from_minor(0, rusty_money::iso::IDR);

        let total = self
            .lines
            .iter()
            .try_fold(zero, |acc, line| acc.add(line.line_total()))?;

        Ok(total)
    }

    /// Sum of quantities across all lines (the badge number).
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.lines
            .iter()
            .map(|line| u64::from(line.quantity))
            .sum()
    }

    /// Iterate over the lines in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.iter()
    }

    /// Get the number of lines in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{catalog::Catalog, money::rupiah};

    use super::*;

    fn menu() -> Catalog {
        Catalog::menu().unwrap_or_else(|error| panic!("menu fixture should load: {error}"))
    }

    #[test]
    fn adding_same_product_twice_merges_into_one_line() -> TestResult {
        let catalog = menu();
        let mut cart = Cart::new();

        let (key, product) = catalog.product_by_name("Americano")?;

        assert_eq!(cart.add(key, product), 1);
        assert_eq!(cart.add(key, product), 2);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.item_count(), 2);

        Ok(())
    }

    #[test]
    fn distinct_products_keep_insertion_order() -> TestResult {
        let catalog = menu();
        let mut cart = Cart::new();

        for name in ["Espresso", "Café Latte", "Americano"] {
            let (key, product) = catalog.product_by_name(name)?;
            cart.add(key, product);
        }

        let names: Vec<&str> = cart.iter().map(CartLine::name).collect();

        assert_eq!(names, ["Espresso", "Café Latte", "Americano"]);

        Ok(())
    }

    #[test]
    fn subtotal_is_sum_of_unit_price_times_quantity() -> TestResult {
        let catalog = menu();
        let mut cart = Cart::new();

        let (espresso_key, espresso) = catalog.product_by_name("Espresso")?;
        let (latte_key, latte) = catalog.product_by_name("Café Latte")?;

        cart.add(espresso_key, espresso);
        cart.add(espresso_key, espresso);
        cart.add(latte_key, latte);

        // 2 × 15 000 + 1 × 30 000
        assert_eq!(cart.subtotal()?, rupiah(60_000));

        Ok(())
    }

    #[test]
    fn empty_cart_totals_to_zero() -> TestResult {
        let cart = Cart::new();

        assert_eq!(cart.subtotal()?, rupiah(0));
        assert_eq!(cart.item_count(), 0);
        assert!(cart.is_empty());

        Ok(())
    }

    #[test]
    fn removing_a_line_preserves_relative_order() -> TestResult {
        let catalog = menu();
        let mut cart = Cart::new();

        for name in ["Espresso", "Café Latte", "Americano"] {
            let (key, product) = catalog.product_by_name(name)?;
            cart.add(key, product);
        }

        let removed = cart.remove(1)?;

        assert_eq!(removed.name(), "Café Latte");

        let names: Vec<&str> = cart.iter().map(CartLine::name).collect();

        assert_eq!(names, ["Espresso", "Americano"]);

        Ok(())
    }

    #[test]
    fn removing_the_only_line_returns_total_to_zero() -> TestResult {
        let catalog = menu();
        let mut cart = Cart::new();

        let (key, product) = catalog.product_by_name("Milk Coffee")?;
        cart.add(key, product);

        cart.remove(0)?;

        assert!(cart.is_empty());
        assert_eq!(cart.subtotal()?, rupiah(0));

        Ok(())
    }

    #[test]
    fn out_of_range_removal_is_an_error_and_a_no_op() -> TestResult {
        let catalog = menu();
        let mut cart = Cart::new();

        let (key, product) = catalog.product_by_name("Milk Coffee")?;
        cart.add(key, product);

        let result = cart.remove(1);

        assert!(
            matches!(result, Err(CartError::LineNotFound(1))),
            "expected LineNotFound, got {result:?}"
        );
        assert_eq!(cart.len(), 1);

        Ok(())
    }

    #[test]
    fn line_total_multiplies_by_quantity() -> TestResult {
        let catalog = menu();
        let mut cart = Cart::new();

        let (key, product) = catalog.product_by_name("Chocolate Frappé")?;
        cart.add(key, product);
        cart.add(key, product);
        cart.add(key, product);

        let line = cart
            .iter()
            .next()
            .ok_or_else(|| "expected one line".to_string())?;

        assert_eq!(line.line_total(), rupiah(135_000));
        assert_eq!(line.quantity(), 3);

        Ok(())
    }
}
