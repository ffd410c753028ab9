//! Profile CLI commands

use clap::Subcommand;

use crate::display::format_profile;
use crate::error::HourlyBuysResult;
use crate::models::ProfileUpdate;
use crate::services::ProfileService;
use crate::storage::Storage;

/// Profile subcommands
#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Show the profile
    Show,
    /// Edit profile fields; omitted fields are kept
    Edit {
        /// Display name (2-50 characters)
        #[arg(long)]
        username: Option<String>,
        /// Email address
        #[arg(long)]
        email: Option<String>,
        /// Short bio (max 200 characters, empty to clear)
        #[arg(long)]
        bio: Option<String>,
        /// Avatar image URL (empty to clear)
        #[arg(long)]
        avatar_url: Option<String>,
    },
}

/// Handle a profile command
pub fn handle_profile_command(storage: &Storage, cmd: ProfileCommands) -> HourlyBuysResult<()> {
    let service = ProfileService::new(storage);

    match cmd {
        ProfileCommands::Show => {
            print!("{}", format_profile(&service.get()?));
        }
        ProfileCommands::Edit {
            username,
            email,
            bio,
            avatar_url,
        } => {
            let profile = service.update(ProfileUpdate {
                username,
                email,
                bio,
                avatar_url,
            })?;
            println!("Profile updated.\n");
            print!("{}", format_profile(&profile));
        }
    }

    Ok(())
}
