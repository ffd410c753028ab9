//! Product service
//!
//! Business logic for the product list: adding custom products, editing
//! prices, and removing custom products. Built-in products can be repriced
//! but never removed.

use tracing::info;

use crate::audit::EntityType;
use crate::error::{HourlyBuysError, HourlyBuysResult};
use crate::models::product::validate_price;
use crate::models::{PriceAnomaly, Product, ProductId, Unit};
use crate::storage::Storage;

/// Smallest price accepted for a newly added product
pub const MIN_NEW_PRICE: f64 = 0.01;

/// Parse a price typed by the user
pub fn parse_price(text: &str) -> HourlyBuysResult<f64> {
    let text = text.trim();
    let price: f64 = text.parse().map_err(|_| {
        HourlyBuysError::Validation(format!("'{}' is not a valid price", text))
    })?;
    validate_price(price).map_err(|e| HourlyBuysError::Validation(e.to_string()))?;
    Ok(price)
}

/// Service for product management
pub struct ProductService<'a> {
    storage: &'a Storage,
}

impl<'a> ProductService<'a> {
    /// Create a new product service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// List all products in display order
    pub fn list(&self) -> HourlyBuysResult<Vec<Product>> {
        self.storage.products.get_all()
    }

    /// Find a product by exact name (case-insensitive), then by ID
    ///
    /// A name such as "cafe" is also a valid short-ID prefix; the name wins.
    pub fn find(&self, identifier: &str) -> HourlyBuysResult<Option<Product>> {
        if let Some(product) = self.storage.products.get_by_name(identifier)? {
            return Ok(Some(product));
        }

        Ok(self
            .storage
            .products
            .get_all()?
            .into_iter()
            .find(|p| p.id.matches(identifier)))
    }

    /// Find a product or fail with a not-found error
    pub fn require(&self, identifier: &str) -> HourlyBuysResult<Product> {
        self.find(identifier)?
            .ok_or_else(|| HourlyBuysError::product_not_found(identifier))
    }

    /// Add a custom product
    pub fn add(&self, name: &str, unit: &str, price: f64) -> HourlyBuysResult<Product> {
        let name = name.trim();
        if name.is_empty() {
            return Err(HourlyBuysError::Validation(
                "Product name is required".into(),
            ));
        }

        let unit = Unit::parse(unit).map_err(|e| HourlyBuysError::Validation(e.to_string()))?;

        if !price.is_finite() || price < MIN_NEW_PRICE {
            return Err(HourlyBuysError::Validation(
                "Price must be greater than 0".into(),
            ));
        }

        if self.storage.products.get_by_name(name)?.is_some() {
            return Err(HourlyBuysError::Duplicate {
                entity_type: "Product",
                identifier: name.to_string(),
            });
        }

        let product = Product::custom(name, unit, price);
        product
            .validate()
            .map_err(|e| HourlyBuysError::Validation(e.to_string()))?;

        self.storage.products.upsert(product.clone())?;
        self.storage.products.save()?;

        self.storage.log_create(
            EntityType::Product,
            product.id.to_string(),
            Some(product.name.clone()),
            &product,
        )?;

        info!(
            "Added product {} at {} {}",
            product.name, product.price, product.unit
        );
        Ok(product)
    }

    /// Change a product's price (zero is allowed)
    pub fn update_price(&self, id: ProductId, price: f64) -> HourlyBuysResult<Product> {
        validate_price(price).map_err(|e| HourlyBuysError::Validation(e.to_string()))?;

        let before = self
            .storage
            .products
            .get(id)?
            .ok_or_else(|| HourlyBuysError::product_not_found(id.to_string()))?;

        let mut product = before.clone();
        product.price = price;

        self.storage.products.upsert(product.clone())?;
        self.storage.products.save()?;

        self.storage.log_update(
            EntityType::Product,
            product.id.to_string(),
            Some(product.name.clone()),
            &before,
            &product,
        )?;

        Ok(product)
    }

    /// Remove a custom product
    pub fn remove(&self, id: ProductId) -> HourlyBuysResult<Product> {
        let product = self
            .storage
            .products
            .get(id)?
            .ok_or_else(|| HourlyBuysError::product_not_found(id.to_string()))?;

        if !product.is_custom {
            return Err(HourlyBuysError::ProtectedProduct(product.name));
        }

        self.storage.products.delete(id)?;
        self.storage.products.save()?;

        self.storage.log_delete(
            EntityType::Product,
            product.id.to_string(),
            Some(product.name.clone()),
            &product,
        )?;

        info!("Removed product {}", product.name);
        Ok(product)
    }

    /// Take the price suggested by the price check for the named product
    ///
    /// Returns `None` if no product has that name.
    pub fn apply_suggestion(
        &self,
        anomaly: &PriceAnomaly,
    ) -> HourlyBuysResult<Option<Product>> {
        match self.storage.products.get_by_name(&anomaly.product_name)? {
            Some(product) => self
                .update_price(product.id, anomaly.suggested_price)
                .map(Some),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::HourlyBuysPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = HourlyBuysPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_add_custom_product() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ProductService::new(&storage);

        let product = service.add("Tofu", "CNY/block", 3.5).unwrap();
        assert!(product.is_custom);
        assert_eq!(product.unit.measure(), "block");
        assert_eq!(service.list().unwrap().last().unwrap().id, product.id);
    }

    #[test]
    fn test_add_rejects_bad_input() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ProductService::new(&storage);

        assert!(service.add("", "CNY/jin", 1.0).unwrap_err().is_validation());
        assert!(service.add("Tofu", " ", 1.0).unwrap_err().is_validation());
        assert!(service.add("Tofu", "CNY/block", 0.0).unwrap_err().is_validation());
        assert!(service
            .add("Tofu", "CNY/block", f64::NAN)
            .unwrap_err()
            .is_validation());
        assert!(matches!(
            service.add("rice", "CNY/jin", 1.0),
            Err(HourlyBuysError::Duplicate { .. })
        ));
        assert_eq!(service.list().unwrap().len(), 6);
    }

    #[test]
    fn test_custom_product_can_be_removed() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ProductService::new(&storage);

        let product = service.add("Tofu", "CNY/block", 3.5).unwrap();
        service.remove(product.id).unwrap();

        assert!(service.find("Tofu").unwrap().is_none());
        assert_eq!(service.list().unwrap().len(), 6);
    }

    #[test]
    fn test_seed_product_cannot_be_removed() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ProductService::new(&storage);

        let rice = service.require("Rice").unwrap();
        let err = service.remove(rice.id).unwrap_err();

        assert!(matches!(err, HourlyBuysError::ProtectedProduct(_)));
        assert_eq!(service.list().unwrap().len(), 6);
    }

    #[test]
    fn test_update_price() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ProductService::new(&storage);
        let rice = service.require("rice").unwrap();

        let updated = service.update_price(rice.id, 3.0).unwrap();
        assert_eq!(updated.price, 3.0);

        // Zero is a valid price, negative is not
        assert_eq!(service.update_price(rice.id, 0.0).unwrap().price, 0.0);
        assert!(service
            .update_price(rice.id, -1.0)
            .unwrap_err()
            .is_validation());
        assert_eq!(service.require("rice").unwrap().price, 0.0);
    }

    #[test]
    fn test_find_by_short_id() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ProductService::new(&storage);
        let milk = service.require("Milk").unwrap();

        let found = service.find(&milk.id.to_string()).unwrap().unwrap();
        assert_eq!(found.id, milk.id);
        assert!(service.require("caviar").unwrap_err().is_not_found());
    }

    #[test]
    fn test_find_prefers_name_over_short_id() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ProductService::new(&storage);
        let rice = service.require("Rice").unwrap();

        // A custom product named after the first digits of Rice's ID
        let prefix = rice.id.as_uuid().simple().to_string()[..4].to_string();
        let custom = service.add(&prefix, "CNY/jin", 1.0).unwrap();

        assert_eq!(service.find(&prefix).unwrap().unwrap().id, custom.id);
        assert_eq!(
            service.find(&prefix.to_uppercase()).unwrap().unwrap().id,
            custom.id
        );
        assert_eq!(
            service.find(&rice.id.to_string()).unwrap().unwrap().id,
            rice.id
        );
    }

    #[test]
    fn test_apply_suggestion() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ProductService::new(&storage);

        let anomaly = PriceAnomaly {
            product_name: "Pork".into(),
            suggested_price: 14.0,
            reason: "Too high".into(),
        };
        let updated = service.apply_suggestion(&anomaly).unwrap().unwrap();
        assert_eq!(updated.price, 14.0);

        let unknown = PriceAnomaly {
            product_name: "Caviar".into(),
            ..anomaly
        };
        assert!(service.apply_suggestion(&unknown).unwrap().is_none());
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price(" 2.5 ").unwrap(), 2.5);
        assert_eq!(parse_price("0").unwrap(), 0.0);
        assert!(parse_price("abc").unwrap_err().is_validation());
        assert!(parse_price("-3").unwrap_err().is_validation());
        assert!(parse_price("NaN").unwrap_err().is_validation());
    }

    #[test]
    fn test_changes_are_audited() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ProductService::new(&storage);

        let product = service.add("Tofu", "CNY/block", 3.5).unwrap();
        service.update_price(product.id, 4.0).unwrap();
        service.remove(product.id).unwrap();

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[1].diff_summary.as_deref(), Some("price: 3.5 -> 4.0"));
    }
}
