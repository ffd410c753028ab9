//! Product repository for JSON storage
//!
//! Manages loading and saving the product list to products.json. The list is
//! ordered: built-in products first, then custom products in the order they
//! were added.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::HourlyBuysError;
use crate::models::{Product, ProductId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable product data structure
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub(crate) struct ProductData {
    pub(crate) products: Vec<Product>,
}

impl Default for ProductData {
    /// A missing file means the built-in list
    fn default() -> Self {
        Self {
            products: Product::defaults(),
        }
    }
}

/// Repository for product persistence
pub struct ProductRepository {
    path: PathBuf,
    data: RwLock<Vec<Product>>,
}

impl ProductRepository {
    /// Create a new product repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Vec<Product>>, HourlyBuysError> {
        self.data
            .read()
            .map_err(|e| HourlyBuysError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Vec<Product>>, HourlyBuysError> {
        self.data
            .write()
            .map_err(|e| HourlyBuysError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Load products from disk
    pub fn load(&self) -> Result<(), HourlyBuysError> {
        let file_data: ProductData = read_json(&self.path)?;
        *self.write()? = file_data.products;
        Ok(())
    }

    /// Save products to disk
    pub fn save(&self) -> Result<(), HourlyBuysError> {
        let file_data = ProductData {
            products: self.read()?.clone(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get all products in display order
    pub fn get_all(&self) -> Result<Vec<Product>, HourlyBuysError> {
        Ok(self.read()?.clone())
    }

    /// Get a product by ID
    pub fn get(&self, id: ProductId) -> Result<Option<Product>, HourlyBuysError> {
        Ok(self.read()?.iter().find(|p| p.id == id).cloned())
    }

    /// Get a product by name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> Result<Option<Product>, HourlyBuysError> {
        Ok(self.read()?.iter().find(|p| p.matches_name(name)).cloned())
    }

    /// Insert a product at the end, or replace it in place if the ID exists
    pub fn upsert(&self, product: Product) -> Result<(), HourlyBuysError> {
        let mut data = self.write()?;
        match data.iter_mut().find(|p| p.id == product.id) {
            Some(existing) => *existing = product,
            None => data.push(product),
        }
        Ok(())
    }

    /// Delete a product, returning it if it existed
    pub fn delete(&self, id: ProductId) -> Result<Option<Product>, HourlyBuysError> {
        let mut data = self.write()?;
        let index = data.iter().position(|p| p.id == id);
        Ok(index.map(|index| data.remove(index)))
    }

    /// Replace the whole list
    pub fn replace_all(&self, products: Vec<Product>) -> Result<(), HourlyBuysError> {
        *self.write()? = products;
        Ok(())
    }

    /// Count products
    pub fn count(&self) -> Result<usize, HourlyBuysError> {
        Ok(self.read()?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Unit;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, ProductRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = ProductRepository::new(temp_dir.path().join("products.json"));
        (temp_dir, repo)
    }

    fn tofu() -> Product {
        Product::custom("Tofu", Unit::parse("CNY/block").unwrap(), 3.5)
    }

    #[test]
    fn test_missing_file_loads_defaults() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 6);
        assert_eq!(repo.get_all().unwrap()[0].name, "Rice");
    }

    #[test]
    fn test_upsert_appends_then_replaces() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let mut product = tofu();
        repo.upsert(product.clone()).unwrap();
        assert_eq!(repo.count().unwrap(), 7);
        assert_eq!(repo.get_all().unwrap()[6].name, "Tofu");

        product.price = 4.0;
        repo.upsert(product.clone()).unwrap();
        assert_eq!(repo.count().unwrap(), 7);
        assert_eq!(repo.get(product.id).unwrap().unwrap().price, 4.0);
    }

    #[test]
    fn test_get_by_name() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        assert!(repo.get_by_name("cooking oil").unwrap().is_some());
        assert!(repo.get_by_name("caviar").unwrap().is_none());
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let product = tofu();
        repo.upsert(product.clone()).unwrap();

        let removed = repo.delete(product.id).unwrap();
        assert_eq!(removed.unwrap().name, "Tofu");
        assert!(repo.delete(product.id).unwrap().is_none());
        assert_eq!(repo.count().unwrap(), 6);
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let product = tofu();
        repo.upsert(product.clone()).unwrap();
        repo.save().unwrap();

        let repo2 = ProductRepository::new(temp_dir.path().join("products.json"));
        repo2.load().unwrap();
        assert_eq!(repo2.get(product.id).unwrap(), Some(product));
        assert_eq!(repo2.count().unwrap(), 7);
    }
}
