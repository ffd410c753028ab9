//! Storage initialization
//!
//! Handles first-run setup and default data creation

use crate::config::paths::HourlyBuysPaths;
use crate::error::HourlyBuysError;
use crate::models::UserProfile;

use super::file_io::write_json_atomic;
use super::products::ProductData;

/// Initialize storage for a fresh installation
///
/// Writes the built-in product list and the guest profile if they are not
/// already on disk. Existing files are left untouched.
pub fn initialize_storage(paths: &HourlyBuysPaths) -> Result<(), HourlyBuysError> {
    paths.ensure_directories()?;

    if !paths.products_file().exists() {
        write_json_atomic(paths.products_file(), &ProductData::default())?;
    }

    if !paths.profile_file().exists() {
        write_json_atomic(paths.profile_file(), &UserProfile::default())?;
    }

    Ok(())
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &HourlyBuysPaths) -> bool {
    !paths.products_file().exists()
}
