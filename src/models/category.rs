//! Category catalog
//!
//! Categories are free text on each record. The catalog below is the
//! conventional set offered when entering transactions and budgets.

use super::transaction::TransactionType;

/// Conventional expense categories
pub const EXPENSE_CATEGORIES: &[&str] = &[
    "Food & Dining",
    "Transportation",
    "Shopping",
    "Entertainment",
    "Bills & Utilities",
    "Healthcare",
    "Education",
    "Travel",
    "Home & Garden",
    "Personal Care",
    "Gifts & Donations",
    "Business",
    "Other",
];

/// Conventional income categories
pub const INCOME_CATEGORIES: &[&str] = &[
    "Salary",
    "Freelance",
    "Business",
    "Investments",
    "Rental",
    "Gifts",
    "Refunds",
    "Other",
];

/// Catalog for a transaction direction
pub fn categories_for(kind: TransactionType) -> &'static [&'static str] {
    match kind {
        TransactionType::Income => INCOME_CATEGORIES,
        TransactionType::Expense => EXPENSE_CATEGORIES,
    }
}

/// Look up the catalog spelling of a category, ignoring case
///
/// Returns `None` for categories outside the catalog; those are still valid.
pub fn canonical_category(kind: TransactionType, name: &str) -> Option<&'static str> {
    let name = name.trim();
    categories_for(kind)
        .iter()
        .copied()
        .find(|c| c.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(EXPENSE_CATEGORIES.len(), 13);
        assert_eq!(INCOME_CATEGORIES.len(), 8);
        assert_eq!(categories_for(TransactionType::Expense)[0], "Food & Dining");
    }

    #[test]
    fn test_canonical_category() {
        assert_eq!(
            canonical_category(TransactionType::Expense, "food & dining"),
            Some("Food & Dining")
        );
        assert_eq!(
            canonical_category(TransactionType::Income, " SALARY "),
            Some("Salary")
        );
        assert_eq!(canonical_category(TransactionType::Income, "Groceries"), None);
    }
}
