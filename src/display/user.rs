//! User display formatting

use tabled::builder::Builder;
use tabled::settings::Style;

use crate::models::User;

/// Format registered users as a table
pub fn format_user_list(users: &[User]) -> String {
    if users.is_empty() {
        return "No users found.\n".to_string();
    }

    let mut builder = Builder::default();
    builder.push_record(["ID", "Email", "Name"].map(String::from));
    for user in users {
        builder.push_record([user.id.to_string(), user.email.clone(), user.name.clone()]);
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    format!("{}\n", table)
}
