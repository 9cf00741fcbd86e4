//! Product catalog
//!
//! The storefront's price table, keyed by a stable slug rather than by the
//! display string alone. Lookups that miss are errors, never zero-priced.

use rustc_hash::FxHashMap;
use rusty_money::{Money, iso::Currency};
use serde::Deserialize;
use slotmap::{SlotMap, new_key_type};
use thiserror::Error;

use crate::money::rupiah;

/// Built-in coffee menu fixture.
const MENU_FIXTURE: &str = include_str!("../fixtures/menu.yml");

new_key_type! {
    /// Product Key
    pub struct ProductKey;
}

/// Errors related to catalog construction or lookups.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A display name with no product behind it.
    #[error("unknown product: {0}")]
    UnknownProduct(String),

    /// Two fixture entries share one display name.
    #[error("duplicate product name: {0}")]
    DuplicateName(String),

    /// The fixture contained no products.
    #[error("no products in fixture")]
    Empty,

    /// The fixture could not be parsed.
    #[error("fixture parse error")]
    Fixture(#[source] serde_norway::Error),
}

/// Product
#[derive(Debug, Clone)]
pub struct Product {
    /// Stable identifier used by fixtures and lookups.
    pub slug: String,

    /// Display name, as printed on the menu.
    pub name: String,

    /// Shelf price in whole Rupiah.
    pub price: Money<'static, Currency>,
}

#[derive(Debug, Deserialize)]
struct MenuFixture {
    products: FxHashMap<String, ProductFixture>,
}

#[derive(Debug, Deserialize)]
struct ProductFixture {
    name: String,
    price: u32,
}

/// Catalog
#[derive(Debug)]
pub struct Catalog {
    products: SlotMap<ProductKey, Product>,
    key_by_name: FxHashMap<String, ProductKey>,
    display_order: Vec<ProductKey>,
}

impl Catalog {
    /// Load a catalog from a YAML products fixture.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the fixture cannot be parsed, holds no
    /// products, or repeats a display name.
    pub fn from_yaml(yaml: &str) -> Result<Self, CatalogError> {
        let fixture: MenuFixture = serde_norway::from_str(yaml).map_err(CatalogError::Fixture)?;

        if fixture.products.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut products: SlotMap<ProductKey, Product> = SlotMap::with_key();
        let mut key_by_name: FxHashMap<String, ProductKey> = FxHashMap::default();

        for (slug, product) in fixture.products {
            if key_by_name.contains_key(&product.name) {
                return Err(CatalogError::DuplicateName(product.name));
            }

            let name = product.name.clone();
            let key = products.insert(Product {
                slug,
                name: product.name,
                price: rupiah(i64::from(product.price)),
            });

            key_by_name.insert(name, key);
        }

        let mut display_order: Vec<ProductKey> = products.keys().collect();

        display_order.sort_by(|left, right| {
            let left_name = products.get(*left).map(|product| product.name.as_str());
            let right_name = products.get(*right).map(|product| product.name.as_str());

            left_name.cmp(&right_name)
        });

        Ok(Catalog {
            products,
            key_by_name,
            display_order,
        })
    }

    /// The built-in coffee menu.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the bundled fixture is invalid.
    pub fn menu() -> Result<Self, CatalogError> {
        Self::from_yaml(MENU_FIXTURE)
    }

    /// Look up a product by its exact display name.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownProduct`] when no product carries the
    /// name. Unmatched names are never priced at zero.
    pub fn product_by_name(&self, name: &str) -> Result<(ProductKey, &Product), CatalogError> {
        let key = self
            .key_by_name
            .get(name)
            .copied()
            .ok_or_else(|| CatalogError::UnknownProduct(name.to_owned()))?;

        let product = self
            .products
            .get(key)
            .ok_or_else(|| CatalogError::UnknownProduct(name.to_owned()))?;

        Ok((key, product))
    }

    /// Get a product by key.
    #[must_use]
    pub fn get(&self, key: ProductKey) -> Option<&Product> {
        self.products.get(key)
    }

    /// Iterate over products in display order (sorted by name).
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.display_order
            .iter()
            .filter_map(|key| self.products.get(*key))
    }

    /// Number of products on the menu.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::money::format_rupiah;

    use super::*;

    #[test]
    fn menu_has_all_eight_drinks() -> TestResult {
        let catalog = Catalog::menu()?;

        assert_eq!(catalog.len(), 8);

        Ok(())
    }

    #[test]
    fn menu_prices_match_the_board() -> TestResult {
        let catalog = Catalog::menu()?;

        let (_, latte) = catalog.product_by_name("Café Latte")?;
        let (_, espresso) = catalog.product_by_name("Espresso")?;
        let (_, macchiato) = catalog.product_by_name("Caramel Macchiato")?;

        assert_eq!(format_rupiah(&latte.price), "Rp30.000");
        assert_eq!(format_rupiah(&espresso.price), "Rp15.000");
        assert_eq!(format_rupiah(&macchiato.price), "Rp50.000");

        Ok(())
    }

    #[test]
    fn unknown_name_is_an_error_not_a_zero_price() -> TestResult {
        let catalog = Catalog::menu()?;

        let result = catalog.product_by_name("Kopi Tubruk");

        assert!(
            matches!(result, Err(CatalogError::UnknownProduct(name)) if name == "Kopi Tubruk"),
            "expected UnknownProduct"
        );

        Ok(())
    }

    #[test]
    fn lookup_is_exact_and_case_sensitive() -> TestResult {
        let catalog = Catalog::menu()?;

        assert!(
            catalog.product_by_name("café latte").is_err(),
            "lowercase lookup should miss"
        );

        Ok(())
    }

    #[test]
    fn products_iterate_in_name_order() -> TestResult {
        let catalog = Catalog::menu()?;

        let names: Vec<&str> = catalog
            .products()
            .map(|product| product.name.as_str())
            .collect();

        let mut sorted = names.clone();
        sorted.sort_unstable();

        assert_eq!(names, sorted);
        assert_eq!(names.first().copied(), Some("Americano"));

        Ok(())
    }

    #[test]
    fn duplicate_display_name_is_rejected() {
        let yaml = r#"
products:
  macchiato-a:
    name: "Caramel Macchiato"
    price: 50000
  macchiato-b:
    name: "Caramel Macchiato"
    price: 45000
"#;

        let result = Catalog::from_yaml(yaml);

        assert!(
            matches!(result, Err(CatalogError::DuplicateName(name)) if name == "Caramel Macchiato"),
            "expected DuplicateName"
        );
    }

    #[test]
    fn empty_fixture_is_rejected() {
        let yaml = "products: {}\n";

        let result = Catalog::from_yaml(yaml);

        assert!(matches!(result, Err(CatalogError::Empty)), "expected Empty");
    }

    #[test]
    fn invalid_yaml_is_rejected() {
        let result = Catalog::from_yaml("products: [not: a: map");

        assert!(
            matches!(result, Err(CatalogError::Fixture(_))),
            "expected Fixture error"
        );
    }
}
