//! User CLI commands

use clap::Subcommand;

use crate::display::format_user_list;
use crate::error::ReportResult;
use crate::services::UserService;
use crate::storage::Storage;

/// User subcommands
#[derive(Subcommand)]
pub enum UserCommands {
    /// Register a new user
    Add {
        /// Email address
        email: String,
        /// Display name
        #[arg(short, long)]
        name: Option<String>,
    },

    /// List registered users
    List,
}

/// Handle a user command
pub fn handle_user_command(storage: &Storage, cmd: UserCommands) -> ReportResult<()> {
    let service = UserService::new(storage);

    match cmd {
        UserCommands::Add { email, name } => {
            let user = service.create(&email, name.as_deref())?;
            println!("Created user: {} ({})", user.email, user.id);
        }

        UserCommands::List => {
            print!("{}", format_user_list(&service.list()?));
        }
    }

    Ok(())
}
