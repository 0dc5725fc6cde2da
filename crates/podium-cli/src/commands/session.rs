//! Session command implementation.

use crate::cli::{SessionAction, SessionArgs};
use crate::commands::analyze::read_profile;
use crate::error::Result;
use crate::output::Formatter;
use crate::session_store::FileSessionStore;
use podium_sources::ProfileSession;
use std::path::Path;

/// Execute the session command.
pub async fn execute_session(
    args: SessionArgs,
    session_path: &Path,
    formatter: &Formatter,
) -> Result<()> {
    let mut session = ProfileSession::new(FileSessionStore::open(session_path)?);

    match args.action {
        SessionAction::Import {
            file,
            token,
            expires_in,
        } => {
            let profile = read_profile(&file)?;
            session.connect(&token, expires_in, &profile)?;
            println!(
                "{}",
                formatter.success(&format!(
                    "Cached profile for {} (valid for {} seconds)",
                    profile.display_name(),
                    expires_in
                ))
            );
        }
        SessionAction::Show => match session.restore()? {
            Some(profile) => println!("{}", formatter.format_profile(&profile)?),
            None => println!("{}", formatter.info("No active profile session")),
        },
        SessionAction::Clear => {
            session.disconnect()?;
            println!("{}", formatter.success("Profile session cleared"));
        }
    }

    Ok(())
}
