//! Purchasing-power calculation
//!
//! The core arithmetic: how many units of a product one hour of work buys.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::product::Product;

/// Quantity of a product purchasable with one hour's wage
///
/// `wage / price` for positive prices, `+∞` for free products.
pub fn quantity_purchasable(wage: f64, price: f64) -> f64 {
    if price > 0.0 {
        wage / price
    } else {
        f64::INFINITY
    }
}

/// A product together with how much of it an hour of work buys
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    #[serde(flatten)]
    pub product: Product,

    /// Units purchasable; stored as `null` in JSON when infinite
    #[serde(with = "quantity_serde")]
    pub quantity_purchasable: f64,
}

impl CalculationResult {
    /// Compute the result for one product
    pub fn for_product(wage: f64, product: &Product) -> Self {
        Self {
            quantity_purchasable: quantity_purchasable(wage, product.price),
            product: product.clone(),
        }
    }

    /// Whether the product is free (infinite quantity)
    pub fn is_unlimited(&self) -> bool {
        self.quantity_purchasable.is_infinite()
    }

    /// Human-readable quantity, e.g. `20.00 jin` or `∞ (Free!)`
    pub fn quantity_label(&self) -> String {
        if self.quantity_purchasable.is_finite() {
            format!(
                "{:.2} {}",
                self.quantity_purchasable,
                self.product.unit.measure()
            )
            .trim_end()
            .to_string()
        } else if self.product.price == 0.0 {
            "∞ (Free!)".to_string()
        } else {
            "N/A".to_string()
        }
    }
}

/// Compute results for every product, preserving order
pub fn calculate(wage: f64, products: &[Product]) -> Vec<CalculationResult> {
    products
        .iter()
        .map(|product| CalculationResult::for_product(wage, product))
        .collect()
}

/// Pick the product giving the most units per hour
///
/// Falls back to the first free product, then to the first result, when no
/// result has a finite positive quantity.
pub fn best_value(results: &[CalculationResult]) -> Option<&CalculationResult> {
    let best = results
        .iter()
        .filter(|r| r.quantity_purchasable.is_finite() && r.quantity_purchasable > 0.0)
        .fold(None::<&CalculationResult>, |best, current| match best {
            Some(b) if b.quantity_purchasable >= current.quantity_purchasable => Some(b),
            _ => Some(current),
        });

    best.or_else(|| results.iter().find(|r| r.product.price == 0.0))
        .or_else(|| results.first())
}

/// One-line summary suitable for sharing
pub fn share_summary(wage: f64, results: &[CalculationResult], currency_symbol: &str) -> String {
    let items: Vec<String> = results
        .iter()
        .take(3)
        .map(|r| {
            let quantity = if r.quantity_purchasable.is_finite() {
                format!("{:.1}", r.quantity_purchasable)
            } else {
                "Many".to_string()
            };
            format!("{} × {} {}", r.product.name, quantity, r.product.unit.measure())
                .trim_end()
                .to_string()
        })
        .collect();

    format!(
        "With an hourly wage of {}{:.2}, I can buy: {}... Check out HourlyBuys!",
        currency_symbol,
        wage,
        items.join(", ")
    )
}

mod quantity_serde {
    use super::*;

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_some(value)
        } else {
            serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::product::Unit;

    fn product(name: &str, price: f64) -> Product {
        Product::custom(name, Unit::parse("CNY/jin").unwrap(), price)
    }

    #[test]
    fn test_quantity_is_exact_division() {
        assert_eq!(quantity_purchasable(50.0, 2.5), 20.0);
        for (wage, price) in [(37.5, 3.0), (100.0, 7.0), (0.01, 1234.5)] {
            assert_eq!(quantity_purchasable(wage, price), wage / price);
        }
    }

    #[test]
    fn test_free_product_is_infinite() {
        assert_eq!(quantity_purchasable(50.0, 0.0), f64::INFINITY);
    }

    #[test]
    fn test_calculate_preserves_order() {
        let products = vec![product("A", 5.0), product("B", 10.0)];
        let results = calculate(50.0, &products);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].product.name, "A");
        assert_eq!(results[0].quantity_purchasable, 10.0);
        assert_eq!(results[1].quantity_purchasable, 5.0);
    }

    #[test]
    fn test_quantity_label() {
        let results = calculate(50.0, &[product("Rice", 2.5), product("Air", 0.0)]);
        assert_eq!(results[0].quantity_label(), "20.00 jin");
        assert_eq!(results[1].quantity_label(), "∞ (Free!)");
    }

    #[test]
    fn test_best_value_prefers_largest_finite_quantity() {
        let results = calculate(
            50.0,
            &[product("Pork", 15.0), product("Rice", 2.5), product("Air", 0.0)],
        );
        assert_eq!(best_value(&results).unwrap().product.name, "Rice");
    }

    #[test]
    fn test_best_value_first_wins_ties() {
        let results = calculate(50.0, &[product("A", 5.0), product("B", 5.0)]);
        assert_eq!(best_value(&results).unwrap().product.name, "A");
    }

    #[test]
    fn test_best_value_falls_back_to_free_product() {
        let results = calculate(50.0, &[product("Air", 0.0), product("Water", 0.0)]);
        assert_eq!(best_value(&results).unwrap().product.name, "Air");
        assert!(best_value(&[]).is_none());
    }

    #[test]
    fn test_infinite_quantity_survives_json() {
        let results = calculate(50.0, &[product("Air", 0.0)]);
        let json = serde_json::to_string(&results).unwrap();
        assert!(json.contains("\"quantity_purchasable\":null"));

        let back: Vec<CalculationResult> = serde_json::from_str(&json).unwrap();
        assert!(back[0].is_unlimited());
        assert_eq!(back[0].product.name, "Air");
    }

    #[test]
    fn test_share_summary() {
        let results = calculate(
            50.0,
            &[
                product("Rice", 2.5),
                product("Flour", 3.0),
                product("Air", 0.0),
                product("Pork", 15.0),
            ],
        );
        let summary = share_summary(50.0, &results, "¥");
        assert_eq!(
            summary,
            "With an hourly wage of ¥50.00, I can buy: Rice × 20.0 jin, Flour × 16.7 jin, \
             Air × Many jin... Check out HourlyBuys!"
        );
    }
}
