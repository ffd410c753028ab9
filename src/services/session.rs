//! Session service
//!
//! Manages the confirmed hourly wage and the user's location.

use tracing::info;

use crate::audit::EntityType;
use crate::error::{HourlyBuysError, HourlyBuysResult};
use crate::models::Session;
use crate::storage::Storage;

/// Parse a wage typed by the user
pub fn parse_wage(text: &str) -> HourlyBuysResult<f64> {
    let wage: f64 = text.trim().parse().map_err(|_| {
        HourlyBuysError::Validation(
            "Please enter a valid positive number for your hourly wage".into(),
        )
    })?;
    Session::validate_wage(wage).map_err(HourlyBuysError::Validation)?;
    Ok(wage)
}

/// Service for wage and location state
pub struct SessionService<'a> {
    storage: &'a Storage,
}

impl<'a> SessionService<'a> {
    /// Create a new session service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Current session state
    pub fn get(&self) -> HourlyBuysResult<Session> {
        self.storage.session.get()
    }

    /// Confirm an hourly wage
    pub fn set_wage(&self, wage: f64) -> HourlyBuysResult<Session> {
        Session::validate_wage(wage).map_err(HourlyBuysError::Validation)?;

        let session = self.modify(|session| session.hourly_wage = Some(wage))?;
        info!("Hourly wage set to {}", wage);
        Ok(session)
    }

    /// Forget the confirmed wage
    pub fn clear_wage(&self) -> HourlyBuysResult<Session> {
        self.modify(|session| session.hourly_wage = None)
    }

    /// Set or clear the location; blank input clears it
    pub fn set_location(&self, location: Option<&str>) -> HourlyBuysResult<Session> {
        let location = location
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string);

        self.modify(|session| session.location = location)
    }

    fn modify(&self, change: impl FnOnce(&mut Session)) -> HourlyBuysResult<Session> {
        let before = self.storage.session.get()?;
        let mut after = before.clone();
        change(&mut after);

        if after == before {
            return Ok(after);
        }

        self.storage.session.set(after.clone())?;
        self.storage.session.save()?;
        self.storage
            .log_update(EntityType::Session, "session", None, &before, &after)?;

        Ok(after)
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
    fn test_parse_wage() {
        assert_eq!(parse_wage("50").unwrap(), 50.0);
        assert_eq!(parse_wage(" 12.75\n").unwrap(), 12.75);
        for bad in ["", "abc", "0", "-10", "inf", "NaN"] {
            assert!(parse_wage(bad).unwrap_err().is_validation(), "{bad:?} accepted");
        }
    }

    #[test]
    fn test_set_and_clear_wage() {
        let (_temp_dir, storage) = create_test_storage();
        let service = SessionService::new(&storage);

        assert_eq!(service.set_wage(50.0).unwrap().hourly_wage, Some(50.0));
        assert!(service.set_wage(0.0).unwrap_err().is_validation());
        assert_eq!(service.get().unwrap().hourly_wage, Some(50.0));

        assert_eq!(service.clear_wage().unwrap().hourly_wage, None);
    }

    #[test]
    fn test_wage_persists() {
        let temp_dir = TempDir::new().unwrap();
        let paths = HourlyBuysPaths::with_base_dir(temp_dir.path().to_path_buf());
        {
            let mut storage = Storage::new(paths.clone()).unwrap();
            storage.load_all().unwrap();
            SessionService::new(&storage).set_wage(42.5).unwrap();
        }

        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        assert_eq!(
            SessionService::new(&storage).get().unwrap().hourly_wage,
            Some(42.5)
        );
    }

    #[test]
    fn test_location() {
        let (_temp_dir, storage) = create_test_storage();
        let service = SessionService::new(&storage);

        let session = service.set_location(Some("  Chengdu ")).unwrap();
        assert_eq!(session.location.as_deref(), Some("Chengdu"));

        assert_eq!(service.set_location(Some("   ")).unwrap().location, None);
        service.set_location(Some("Beijing")).unwrap();
        assert_eq!(service.set_location(None).unwrap().location, None);
    }

    #[test]
    fn test_unchanged_value_is_not_audited() {
        let (_temp_dir, storage) = create_test_storage();
        let service = SessionService::new(&storage);

        service.set_wage(30.0).unwrap();
        service.set_wage(30.0).unwrap();

        assert_eq!(storage.audit().read_all().unwrap().len(), 1);
    }
}
