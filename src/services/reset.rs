//! Application reset
//!
//! Puts products, wage, location and profile back to their first-run state.
//! Calculation history is kept.

use tracing::info;

use crate::audit::EntityType;
use crate::error::HourlyBuysResult;
use crate::models::{Product, Session, UserProfile};
use crate::storage::Storage;

/// Restore the seed product list, clear the session and reset the profile
pub fn reset_app(storage: &Storage) -> HourlyBuysResult<()> {
    let removed: Vec<Product> = storage
        .products
        .get_all()?
        .into_iter()
        .filter(|p| p.is_custom)
        .collect();

    storage.products.replace_all(Product::defaults())?;
    storage.products.save()?;
    if !removed.is_empty() {
        storage.log_delete_batch(
            EntityType::Product,
            removed.iter().map(|p| (p.id.to_string(), p)),
        )?;
    }

    let session = storage.session.get()?;
    if session != Session::default() {
        storage.session.set(Session::default())?;
        storage.session.save()?;
        storage.log_update(
            EntityType::Session,
            "session",
            None,
            &session,
            &Session::default(),
        )?;
    }

    let profile = storage.profile.get()?;
    if profile != UserProfile::default() {
        storage.profile.set(UserProfile::default())?;
        storage.profile.save()?;
        storage.log_update(
            EntityType::Profile,
            "profile",
            None,
            &profile,
            &UserProfile::default(),
        )?;
    }

    info!("Application reset; {} custom products removed", removed.len());
    Ok(())
}
