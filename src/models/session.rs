//! Current session state: the confirmed hourly wage and the user's location

use serde::{Deserialize, Serialize};

/// Wage and location slots of the store
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Confirmed after-tax hourly wage, if set
    #[serde(default)]
    pub hourly_wage: Option<f64>,

    /// Free-form location (city or region), if set
    #[serde(default)]
    pub location: Option<String>,
}

impl Session {
    /// Check that a wage is a finite, strictly positive number
    pub fn validate_wage(wage: f64) -> Result<(), String> {
        if !wage.is_finite() || wage <= 0.0 {
            return Err("Please enter a valid positive number for your hourly wage".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_wage() {
        assert!(Session::validate_wage(50.0).is_ok());
        assert!(Session::validate_wage(0.01).is_ok());
        assert!(Session::validate_wage(0.0).is_err());
        assert!(Session::validate_wage(-5.0).is_err());
        assert!(Session::validate_wage(f64::NAN).is_err());
        assert!(Session::validate_wage(f64::INFINITY).is_err());
    }

    #[test]
    fn test_missing_fields_default_to_none() {
        let session: Session = serde_json::from_str("{}").unwrap();
        assert_eq!(session, Session::default());
    }
}
