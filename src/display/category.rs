//! Category catalog display

use crate::models::{EXPENSE_CATEGORIES, INCOME_CATEGORIES};

/// Format both catalogs as two indented lists
pub fn format_category_catalog() -> String {
    let mut output = String::new();

    output.push_str("Expense categories:\n");
    for name in EXPENSE_CATEGORIES {
        output.push_str(&format!("  {}\n", name));
    }

    output.push_str("\nIncome categories:\n");
    for name in INCOME_CATEGORIES {
        output.push_str(&format!("  {}\n", name));
    }

    output.push_str("\nAny other name can be used as a custom category.\n");
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_lists_everything() {
        let formatted = format_category_catalog();
        for name in EXPENSE_CATEGORIES.iter().chain(INCOME_CATEGORIES) {
            assert!(formatted.contains(name));
        }
    }
}
