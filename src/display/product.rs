//! Product display formatting
//!
//! Formats products for terminal output in table and detail views.

use crate::config::Settings;
use crate::models::Product;

/// Format the product list as a table
pub fn format_product_list(products: &[Product], settings: &Settings) -> String {
    if products.is_empty() {
        return "No products. Add one with `hourlybuys product add`.".to_string();
    }

    let name_width = products
        .iter()
        .map(|p| p.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let unit_width = products
        .iter()
        .map(|p| p.unit.to_string().chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<name_width$}  {:<unit_width$}  {:>10}  {}\n",
        "ID",
        "  Name",
        "Unit",
        "Price",
        "Type",
        name_width = name_width + 2,
        unit_width = unit_width,
    ));
    output.push_str(&format!(
        "{:-<12}  {:-<name_width$}  {:-<unit_width$}  {:->10}  {:-<7}\n",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width + 2,
        unit_width = unit_width,
    ));

    for product in products {
        output.push_str(&format!(
            "{:<12}  {} {:<name_width$}  {:<unit_width$}  {:>10}  {}\n",
            product.id.to_string(),
            product.icon.glyph(),
            product.name,
            product.unit.to_string(),
            settings.format_amount(product.price),
            if product.is_custom { "custom" } else { "default" },
            name_width = name_width,
            unit_width = unit_width,
        ));
    }

    output
}

/// Format a single product's details
pub fn format_product_details(product: &Product, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("{} {}\n", product.icon.glyph(), product.name));
    output.push_str(&format!("  ID:      {}\n", product.id));
    output.push_str(&format!("  Unit:    {}\n", product.unit));
    output.push_str(&format!(
        "  Price:   {} per {}\n",
        settings.format_amount(product.price),
        if product.unit.measure().is_empty() {
            "unit"
        } else {
            product.unit.measure()
        }
    ));
    output.push_str(&format!(
        "  Type:    {}\n",
        if product.is_custom {
            "Custom (removable)"
        } else {
            "Default"
        }
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_product_list() {
        let output = format_product_list(&Product::defaults(), &Settings::default());
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(lines.len(), 8);
        assert!(lines[2].contains("Rice"));
        assert!(lines[2].contains("¥2.50"));
        assert!(lines[2].ends_with("default"));
    }

    #[test]
    fn test_empty_list() {
        let output = format_product_list(&[], &Settings::default());
        assert!(output.starts_with("No products"));
    }

    #[test]
    fn test_format_details() {
        let product = Product::defaults().remove(2);
        let output = format_product_details(&product, &Settings::default());
        assert!(output.contains("Cooking Oil"));
        assert!(output.contains("¥8.00 per liter"));
        assert!(output.contains("Default"));
    }
}
