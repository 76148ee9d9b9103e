//! Category CLI commands
//!
//! Implements CLI commands for the shared category catalog.

use clap::Subcommand;

use crate::display::format_category_list;
use crate::error::{ReportError, ReportResult};
use crate::models::TransactionKind;
use crate::services::CategoryService;
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories in catalog order
    List,

    /// Add a new category
    Add {
        /// Category name
        name: String,
        /// Category type (income or expense)
        #[arg(short = 't', long = "type", default_value = "expense")]
        kind: String,
    },

    /// Exclude a category from reports
    Disable {
        /// Category name or ID
        category: String,
    },

    /// Include a previously disabled category in reports again
    Enable {
        /// Category name or ID
        category: String,
    },
}

/// Handle a category command
pub fn handle_category_command(storage: &Storage, cmd: CategoryCommands) -> ReportResult<()> {
    let service = CategoryService::new(storage);

    match cmd {
        CategoryCommands::List => {
            print!("{}", format_category_list(&service.list()?));
        }

        CategoryCommands::Add { name, kind } => {
            let kind: TransactionKind = kind.parse().map_err(ReportError::Validation)?;
            let category = service.create(&name, kind)?;
            println!(
                "Created category: {} ({}, {})",
                category.name,
                category.kind.label(),
                category.id
            );
        }

        CategoryCommands::Disable { category } => {
            let category = service.set_enabled(&category, false)?;
            println!("Disabled category: {}", category.name);
        }

        CategoryCommands::Enable { category } => {
            let category = service.set_enabled(&category, true)?;
            println!("Enabled category: {}", category.name);
        }
    }

    Ok(())
}
