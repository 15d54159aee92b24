//! Sales order pricing against a product price table
//!
//! Item codes carrying the `_SALE` suffix resolve against the base item and
//! take a 10% discount.

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Suffix marking an item sold at the discounted price
const SALE_SUFFIX: &str = "_SALE";

/// Pricing errors
#[derive(Debug, thiserror::Error)]
pub enum PricingError {
    #[error("Product not found: {0}")]
    UnknownItem(String),
}

/// Quote for a single order item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemQuote {
    /// Item code as it appeared on the order
    pub item_code: String,
    /// Catalog price before any discount
    pub base_price: BigDecimal,
    /// Whether the sale discount was applied
    pub on_sale: bool,
    /// Price charged for this item
    pub price: BigDecimal,
}

/// Totals for one processed order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderTotal {
    /// Quotes for the items that were priced
    pub quotes: Vec<ItemQuote>,
    /// Item codes that could not be resolved
    pub missing: Vec<String>,
    /// Sum of all priced items
    pub subtotal: BigDecimal,
}

/// Product price table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceList {
    prices: HashMap<String, BigDecimal>,
}

impl PriceList {
    /// Create an empty price list
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a price list seeded with the standard catalog
    pub fn with_standard_catalog() -> Self {
        let mut prices = HashMap::new();
        prices.insert("TSHIRT".to_string(), cents(2000));
        prices.insert("MUG".to_string(), cents(1250));
        prices.insert("HAT".to_string(), cents(1800));
        prices.insert("BOOK".to_string(), cents(2599));
        Self { prices }
    }

    /// Set or replace the price of an item
    pub fn set_price(&mut self, item_code: String, price: BigDecimal) {
        self.prices.insert(item_code, price);
    }

    /// Quote a single item code
    ///
    /// A code ending in `_SALE` is resolved against the base item and priced
    /// at 90% of the catalog price; the suffix itself is never a catalog key.
    pub fn quote(&self, item_code: &str) -> Result<ItemQuote, PricingError> {
        if let Some(base_price) = self.prices.get(item_code) {
            return Ok(ItemQuote {
                item_code: item_code.to_string(),
                base_price: base_price.clone(),
                on_sale: false,
                price: base_price.clone(),
            });
        }

        if let Some(base_code) = item_code.strip_suffix(SALE_SUFFIX) {
            if let Some(base_price) = self.prices.get(base_code) {
                let sale_price =
                    base_price * BigDecimal::from(90) / BigDecimal::from(100);
                return Ok(ItemQuote {
                    item_code: item_code.to_string(),
                    base_price: base_price.clone(),
                    on_sale: true,
                    price: sale_price,
                });
            }
        }

        Err(PricingError::UnknownItem(item_code.to_string()))
    }

    /// Price a whole order, summing known items and collecting unknown codes
    pub fn order_subtotal(&self, item_codes: &[&str]) -> OrderTotal {
        let mut quotes = Vec::new();
        let mut missing = Vec::new();
        let mut subtotal = BigDecimal::from(0);

        for code in item_codes {
            match self.quote(code) {
                Ok(item_quote) => {
                    subtotal += &item_quote.price;
                    quotes.push(item_quote);
                }
                Err(PricingError::UnknownItem(unknown)) => missing.push(unknown),
            }
        }

        OrderTotal {
            quotes,
            missing,
            subtotal,
        }
    }
}

/// Build an exact decimal amount from a number of cents
fn cents(value: i64) -> BigDecimal {
    BigDecimal::from(value) / BigDecimal::from(100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn test_catalog_price() {
        let prices = PriceList::with_standard_catalog();
        let quote = prices.quote("TSHIRT").unwrap();
        assert_eq!(quote.price, dec("20.00"));
        assert!(!quote.on_sale);
    }

    #[test]
    fn test_sale_suffix_discount() {
        let prices = PriceList::with_standard_catalog();
        let quote = prices.quote("MUG_SALE").unwrap();
        assert_eq!(quote.base_price, dec("12.50"));
        assert_eq!(quote.price, dec("11.25"));
        assert!(quote.on_sale);
    }

    #[test]
    fn test_unknown_item() {
        let prices = PriceList::with_standard_catalog();
        assert!(matches!(
            prices.quote("PANTS").unwrap_err(),
            PricingError::UnknownItem(_)
        ));
        // A sale suffix on an unknown base item is still unknown
        assert!(matches!(
            prices.quote("PANTS_SALE").unwrap_err(),
            PricingError::UnknownItem(_)
        ));
    }

    #[test]
    fn test_order_subtotal_skips_unknown_items() {
        let prices = PriceList::with_standard_catalog();
        let order = prices.order_subtotal(&["TSHIRT", "MUG_SALE", "HAT", "BOOK", "PANTS"]);

        // 20.00 + 11.25 + 18.00 + 25.99
        assert_eq!(order.subtotal, dec("75.24"));
        assert_eq!(order.quotes.len(), 4);
        assert_eq!(order.missing, vec!["PANTS".to_string()]);
    }

    #[test]
    fn test_custom_price() {
        let mut prices = PriceList::new();
        prices.set_price("PANTS".to_string(), dec("30.00"));
        assert_eq!(prices.quote("PANTS").unwrap().price, dec("30.00"));
        assert_eq!(prices.quote("PANTS_SALE").unwrap().price, dec("27.00"));
    }
}
