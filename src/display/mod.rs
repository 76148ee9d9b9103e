//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models and report documents for
//! terminal display.

pub mod category;
pub mod report;
pub mod transaction;
pub mod user;

pub use category::format_category_list;
pub use report::{format_report, format_section};
pub use transaction::format_transaction_register;
pub use user::format_user_list;
