//! Category display formatting

use crate::models::Category;

/// Format the category catalog as a simple list
pub fn format_category_list(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found.\n\nRun 'expense-report init' to create default categories.\n"
            .to_string();
    }

    let name_width = categories
        .iter()
        .map(|c| c.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:8} {:width$} {:8}\n",
        "ID",
        "Name",
        "Type",
        width = name_width
    ));
    output.push_str(&"-".repeat(name_width + 18));
    output.push('\n');

    for category in categories {
        let disabled = if category.enabled { "" } else { " (disabled)" };
        output.push_str(&format!(
            "{:8} {:width$} {:8}{}\n",
            category.id.to_string(),
            category.name,
            category.kind.label(),
            disabled,
            width = name_width
        ));
    }

    output
}
