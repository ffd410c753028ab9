//! Profile service

use crate::audit::EntityType;
use crate::error::{HourlyBuysError, HourlyBuysResult};
use crate::models::{ProfileUpdate, UserProfile};
use crate::storage::Storage;

/// Service for the user profile
pub struct ProfileService<'a> {
    storage: &'a Storage,
}

impl<'a> ProfileService<'a> {
    /// Create a new profile service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// The current profile
    pub fn get(&self) -> HourlyBuysResult<UserProfile> {
        self.storage.profile.get()
    }

    /// Merge the given fields into the profile and replace it
    pub fn update(&self, update: ProfileUpdate) -> HourlyBuysResult<UserProfile> {
        if update.is_empty() {
            return Err(HourlyBuysError::Validation("Nothing to update".into()));
        }

        let before = self.storage.profile.get()?;
        let after = before.merged(update);
        after
            .validate()
            .map_err(|e| HourlyBuysError::Validation(e.to_string()))?;

        self.storage.profile.set(after.clone())?;
        self.storage.profile.save()?;
        self.storage.log_update(
            EntityType::Profile,
            "profile",
            Some(after.username.clone()),
            &before,
            &after,
        )?;

        Ok(after)
    }
}
