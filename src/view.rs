//! Cart view
//!
//! Pure projection from cart state to a render model. The model is rebuilt
//! in full after every mutation: row indexes are positional and shift when
//! a line is removed, so patching an old view would leave stale remove
//! actions behind.

use crate::{
    cart::{Cart, CartError},
    money::format_rupiah,
    notify,
};

/// One rendered cart row, carrying the positional index its remove action
/// is parameterized with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineView {
    /// Position of the row at render time.
    pub index: usize,

    /// Product display name.
    pub name: String,

    /// Units of the product in this row.
    pub quantity: u32,

    /// Formatted row total (`Rp…`).
    pub line_total: String,
}

/// Render model for the cart list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartViewModel {
    /// Rendered rows, in cart order.
    pub lines: Vec<CartLineView>,

    /// Formatted grand total; absent for an empty cart.
    pub total: Option<String>,

    /// Badge number: sum of quantities.
    pub item_count: u64,

    /// Placeholder message shown instead of rows when the cart is empty.
    pub placeholder: Option<&'static str>,
}

impl CartViewModel {
    /// Whether the view shows the empty-cart placeholder.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Project the cart into a fresh view model.
///
/// # Errors
///
/// Returns a [`CartError`] if the total cannot be calculated.
pub fn render_cart(cart: &Cart) -> Result<CartViewModel, CartError> {
    if cart.is_empty() {
        return Ok(CartViewModel {
            lines: Vec::new(),
            total: None,
            item_count: 0,
            placeholder: Some(notify::EMPTY_CART),
        });
    }

    let lines = cart
        .iter()
        .enumerate()
        .map(|(index, line)| CartLineView {
            index,
            name: line.name().to_owned(),
            quantity: line.quantity(),
            line_total: format_rupiah(&line.line_total()),
        })
        .collect();

    Ok(CartViewModel {
        lines,
        total: Some(format_rupiah(&cart.subtotal()?)),
        item_count: cart.item_count(),
        placeholder: None,
    })
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::catalog::Catalog;

    use super::*;

    #[test]
    fn empty_cart_renders_the_placeholder() -> TestResult {
        let view = render_cart(&Cart::new())?;

        assert!(view.is_empty());
        assert_eq!(view.placeholder, Some(notify::EMPTY_CART));
        assert_eq!(view.total, None);
        assert_eq!(view.item_count, 0);

        Ok(())
    }

    #[test]
    fn rows_carry_positional_indexes_and_formatted_totals() -> TestResult {
        let catalog = Catalog::menu()?;
        let mut cart = Cart::new();

        let (espresso_key, espresso) = catalog.product_by_name("Espresso")?;
        let (latte_key, latte) = catalog.product_by_name("Café Latte")?;

        cart.add(espresso_key, espresso);
        cart.add(espresso_key, espresso);
        cart.add(latte_key, latte);

        let view = render_cart(&cart)?;

        assert_eq!(view.lines.len(), 2);

        let first = view.lines.first().ok_or_else(|| "expected first row".to_string())?;
        let second = view.lines.get(1).ok_or_else(|| "expected second row".to_string())?;

        assert_eq!(first.index, 0);
        assert_eq!(first.name, "Espresso");
        assert_eq!(first.quantity, 2);
        assert_eq!(first.line_total, "Rp30.000");

        assert_eq!(second.index, 1);
        assert_eq!(second.name, "Café Latte");

        assert_eq!(view.total.as_deref(), Some("Rp60.000"));
        assert_eq!(view.item_count, 3);
        assert_eq!(view.placeholder, None);

        Ok(())
    }

    #[test]
    fn rerender_after_removal_reassigns_indexes() -> TestResult {
        let catalog = Catalog::menu()?;
        let mut cart = Cart::new();

        for name in ["Espresso", "Café Latte", "Americano"] {
            let (key, product) = catalog.product_by_name(name)?;
            cart.add(key, product);
        }

        cart.remove(0)?;

        let view = render_cart(&cart)?;

        let indexes: Vec<usize> = view.lines.iter().map(|line| line.index).collect();

        assert_eq!(indexes, [0, 1]);

        let first = view.lines.first().ok_or_else(|| "expected first row".to_string())?;

        assert_eq!(first.name, "Café Latte");

        Ok(())
    }
}
