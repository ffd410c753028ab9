//! User profile model

use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// The single user profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            username: "Guest User".to_string(),
            email: "guest@example.com".to_string(),
            bio: Some("Loves to calculate purchasing power!".to_string()),
            avatar_url: Some("https://placehold.co/128x128.png".to_string()),
        }
    }
}

/// Fields to change on the profile; `None` keeps the current value
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub username: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.email.is_none()
            && self.bio.is_none()
            && self.avatar_url.is_none()
    }
}

impl UserProfile {
    /// Build the replacement profile from an update.
    ///
    /// An empty bio or avatar URL clears that field.
    pub fn merged(&self, update: ProfileUpdate) -> Self {
        let clearable = |new: Option<String>, old: &Option<String>| match new {
            Some(value) if value.trim().is_empty() => None,
            Some(value) => Some(value.trim().to_string()),
            None => old.clone(),
        };

        Self {
            username: update
                .username
                .map(|u| u.trim().to_string())
                .unwrap_or_else(|| self.username.clone()),
            email: update
                .email
                .map(|e| e.trim().to_string())
                .unwrap_or_else(|| self.email.clone()),
            bio: clearable(update.bio, &self.bio),
            avatar_url: clearable(update.avatar_url, &self.avatar_url),
        }
    }

    /// Validate the profile
    pub fn validate(&self) -> Result<(), ProfileValidationError> {
        let name_len = self.username.chars().count();
        if name_len < 2 {
            return Err(ProfileValidationError::UsernameTooShort);
        }
        if name_len > 50 {
            return Err(ProfileValidationError::UsernameTooLong);
        }

        if !is_valid_email(&self.email) {
            return Err(ProfileValidationError::InvalidEmail(self.email.clone()));
        }

        if let Some(bio) = &self.bio {
            if bio.chars().count() > 200 {
                return Err(ProfileValidationError::BioTooLong);
            }
        }

        if let Some(avatar_url) = &self.avatar_url {
            if !is_valid_avatar_url(avatar_url) {
                return Err(ProfileValidationError::InvalidAvatarUrl(
                    avatar_url.clone(),
                ));
            }
        }

        Ok(())
    }

    /// Uppercase first letter of the username, for avatar fallbacks
    pub fn initial(&self) -> char {
        self.username
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('U')
    }
}

/// An absolute http(s) URL with a host
fn is_valid_avatar_url(avatar_url: &str) -> bool {
    Url::parse(avatar_url).is_ok_and(|parsed| {
        matches!(parsed.scheme(), "http" | "https")
            && parsed.host_str().is_some_and(|host| !host.is_empty())
    })
}

fn is_valid_email(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        }
        None => false,
    }
}

/// Validation errors for the profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileValidationError {
    UsernameTooShort,
    UsernameTooLong,
    InvalidEmail(String),
    BioTooLong,
    InvalidAvatarUrl(String),
}

impl fmt::Display for ProfileValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UsernameTooShort => write!(f, "Username must be at least 2 characters"),
            Self::UsernameTooLong => write!(f, "Username too long (max 50 characters)"),
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
            Self::BioTooLong => write!(f, "Bio too long (max 200 characters)"),
            Self::InvalidAvatarUrl(url) => write!(f, "Invalid URL for avatar: {}", url),
        }
    }
}

impl std::error::Error for ProfileValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_is_valid() {
        let profile = UserProfile::default();
        assert_eq!(profile.username, "Guest User");
        assert!(profile.validate().is_ok());
        assert_eq!(profile.initial(), 'G');
    }

    #[test]
    fn test_merge_keeps_unchanged_fields() {
        let profile = UserProfile::default();
        let merged = profile.merged(ProfileUpdate {
            username: Some("  Li Wei ".into()),
            ..Default::default()
        });

        assert_eq!(merged.username, "Li Wei");
        assert_eq!(merged.email, profile.email);
        assert_eq!(merged.bio, profile.bio);
    }

    #[test]
    fn test_merge_empty_clears_optional_fields() {
        let merged = UserProfile::default().merged(ProfileUpdate {
            bio: Some(String::new()),
            avatar_url: Some("  ".into()),
            ..Default::default()
        });
        assert!(merged.bio.is_none());
        assert!(merged.avatar_url.is_none());
        assert!(merged.validate().is_ok());
    }

    #[test]
    fn test_validation_rules() {
        let base = UserProfile::default();

        let short = UserProfile {
            username: "L".into(),
            ..base.clone()
        };
        assert_eq!(
            short.validate(),
            Err(ProfileValidationError::UsernameTooShort)
        );

        for email in ["nobody", "a@b", "@example.com", "a b@example.com", "a@@b.com"] {
            let p = UserProfile {
                email: email.into(),
                ..base.clone()
            };
            assert!(
                matches!(p.validate(), Err(ProfileValidationError::InvalidEmail(_))),
                "{email} should be rejected"
            );
        }

        let bio = UserProfile {
            bio: Some("x".repeat(201)),
            ..base
        };
        assert_eq!(bio.validate(), Err(ProfileValidationError::BioTooLong));
    }

    #[test]
    fn test_avatar_url_must_be_well_formed_http() {
        let with_avatar = |url: &str| UserProfile {
            avatar_url: Some(url.to_string()),
            ..UserProfile::default()
        };

        for url in [
            "https://example.com/me.png",
            "http://placehold.co/128x128.png",
            "https://cdn.example.com:8443/a?b=c",
        ] {
            assert!(with_avatar(url).validate().is_ok(), "{url} should be accepted");
        }

        for url in [
            "ftp://x",
            "example.com/me.png",
            "https://[",
            "http://exa%mple.com",
            "https:///",
            "http://:::",
            "mailto:me@example.com",
        ] {
            assert!(
                matches!(
                    with_avatar(url).validate(),
                    Err(ProfileValidationError::InvalidAvatarUrl(_))
                ),
                "{url} should be rejected"
            );
        }
    }
}
