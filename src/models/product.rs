//! Product model
//!
//! A product is something the user buys regularly, priced per unit of measure
//! (e.g. rice at 2.5 CNY per jin). Built-in products come from a fixed seed
//! list; users may add their own custom products.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ProductId;

/// A price unit of the form `currency/measure`, e.g. `CNY/jin`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Unit {
    currency: String,
    measure: String,
}

impl Unit {
    /// Parse a unit string. A string without `/` is a bare currency.
    pub fn parse(s: &str) -> Result<Self, ProductValidationError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ProductValidationError::EmptyUnit);
        }

        let (currency, measure) = match s.split_once('/') {
            Some((currency, measure)) => (currency.trim(), measure.trim()),
            None => (s, ""),
        };

        Ok(Self {
            currency: currency.to_string(),
            measure: measure.to_string(),
        })
    }

    /// The currency part (`CNY` in `CNY/jin`)
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// The unit of measure (`jin` in `CNY/jin`), empty if none was given
    pub fn measure(&self) -> &str {
        &self.measure
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.measure.is_empty() {
            write!(f, "{}", self.currency)
        } else {
            write!(f, "{}/{}", self.currency, self.measure)
        }
    }
}

impl TryFrom<String> for Unit {
    type Error = ProductValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Unit::parse(&value)
    }
}

impl From<Unit> for String {
    fn from(unit: Unit) -> Self {
        unit.to_string()
    }
}

/// Display icon attached to a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProductIcon {
    Leaf,
    Wheat,
    Droplet,
    Beef,
    Egg,
    Milk,
    #[default]
    Basket,
}

impl ProductIcon {
    /// Terminal glyph for this icon
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Leaf => "🌿",
            Self::Wheat => "🌾",
            Self::Droplet => "🫗",
            Self::Beef => "🥩",
            Self::Egg => "🥚",
            Self::Milk => "🥛",
            Self::Basket => "🧺",
        }
    }
}

/// A product with a per-unit price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier
    pub id: ProductId,

    /// Product name
    pub name: String,

    /// Price unit (`currency/measure`)
    pub unit: Unit,

    /// Price per unit, never negative
    pub price: f64,

    /// Whether the user added this product (only custom products can be removed)
    #[serde(default)]
    pub is_custom: bool,

    /// Display icon
    #[serde(default)]
    pub icon: ProductIcon,
}

impl Product {
    /// Create a new custom product
    pub fn custom(name: impl Into<String>, unit: Unit, price: f64) -> Self {
        Self {
            id: ProductId::new(),
            name: name.into(),
            unit,
            price,
            is_custom: true,
            icon: ProductIcon::Basket,
        }
    }

    /// Create a built-in product with a stable ID derived from `slug`
    pub fn seeded(slug: &str, name: &str, unit: &str, price: f64, icon: ProductIcon) -> Self {
        Self {
            id: ProductId::seeded(slug),
            name: name.to_string(),
            unit: Unit {
                currency: unit.split('/').next().unwrap_or_default().to_string(),
                measure: unit.split('/').nth(1).unwrap_or_default().to_string(),
            },
            price,
            is_custom: false,
            icon,
        }
    }

    /// The built-in product list
    pub fn defaults() -> Vec<Product> {
        vec![
            Self::seeded("rice", "Rice", "CNY/jin", 2.5, ProductIcon::Leaf),
            Self::seeded("flour", "Flour", "CNY/jin", 3.0, ProductIcon::Wheat),
            Self::seeded("cooking-oil", "Cooking Oil", "CNY/liter", 8.0, ProductIcon::Droplet),
            Self::seeded("pork", "Pork", "CNY/jin", 15.0, ProductIcon::Beef),
            Self::seeded("eggs", "Eggs", "CNY/jin", 5.0, ProductIcon::Egg),
            Self::seeded("milk", "Milk", "CNY/bottle", 6.0, ProductIcon::Milk),
        ]
    }

    /// Validate the product
    pub fn validate(&self) -> Result<(), ProductValidationError> {
        if self.name.trim().is_empty() {
            return Err(ProductValidationError::EmptyName);
        }

        if self.name.len() > 100 {
            return Err(ProductValidationError::NameTooLong(self.name.len()));
        }

        validate_price(self.price)
    }

    /// Normalize a product name for matching
    pub fn normalize_name(name: &str) -> String {
        name.trim().to_lowercase()
    }

    /// Check if this product matches a name (case-insensitive)
    pub fn matches_name(&self, name: &str) -> bool {
        Self::normalize_name(&self.name) == Self::normalize_name(name)
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2} {})", self.name, self.price, self.unit)
    }
}

/// Check that a price is a finite, non-negative number
pub fn validate_price(price: f64) -> Result<(), ProductValidationError> {
    if !price.is_finite() {
        return Err(ProductValidationError::PriceNotFinite);
    }
    if price < 0.0 {
        return Err(ProductValidationError::NegativePrice(price));
    }
    Ok(())
}

/// Validation errors for products
#[derive(Debug, Clone, PartialEq)]
pub enum ProductValidationError {
    EmptyName,
    NameTooLong(usize),
    EmptyUnit,
    NegativePrice(f64),
    PriceNotFinite,
}

impl fmt::Display for ProductValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Product name is required"),
            Self::NameTooLong(len) => {
                write!(f, "Product name too long ({} chars, max 100)", len)
            }
            Self::EmptyUnit => write!(f, "Unit is required (e.g., CNY/jin)"),
            Self::NegativePrice(price) => {
                write!(f, "Price cannot be negative (got {})", price)
            }
            Self::PriceNotFinite => write!(f, "Price must be a number"),
        }
    }
}

impl std::error::Error for ProductValidationError {}
