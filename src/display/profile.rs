//! Profile display formatting

use crate::models::UserProfile;

/// Format the profile as a small card
pub fn format_profile(profile: &UserProfile) -> String {
    let mut output = String::new();

    output.push_str(&format!("[{}] {}\n", profile.initial(), profile.username));
    output.push_str(&format!("  Email:   {}\n", profile.email));
    output.push_str(&format!(
        "  Bio:     {}\n",
        profile.bio.as_deref().unwrap_or("-")
    ));
    output.push_str(&format!(
        "  Avatar:  {}\n",
        profile.avatar_url.as_deref().unwrap_or("-")
    ));

    output
}
