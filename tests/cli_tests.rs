use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fintrack(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("fintrack").unwrap();
    cmd.env("FINTRACK_DATA_DIR", data_dir);
    cmd
}

fn add_expense(data_dir: &Path, amount: &str, description: &str, category: &str, date: &str) {
    fintrack(data_dir)
        .args(["transaction", "add", amount, description, "-c", category, "-d", date])
        .assert()
        .success();
}

fn add_income(data_dir: &Path, amount: &str, description: &str, date: &str) {
    fintrack(data_dir)
        .args([
            "transaction", "add", amount, description, "-c", "Salary", "-t", "income", "-d", date,
        ])
        .assert()
        .success();
}

#[test]
fn test_no_command_prints_hint() {
    let dir = TempDir::new().unwrap();
    fintrack(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("fintrack --help"));
}

#[test]
fn test_add_and_list_transactions() {
    let dir = TempDir::new().unwrap();
    add_expense(dir.path(), "12.50", "Lunch", "food & dining", "2025-03-04");
    add_income(dir.path(), "2000", "Paycheck", "2025-03-01");

    fintrack(dir.path())
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lunch"))
        .stdout(predicate::str::contains("Food & Dining"))
        .stdout(predicate::str::contains("-$12.50"))
        .stdout(predicate::str::contains("+$2000.00"))
        .stdout(predicate::str::contains("Showing 2 transactions"));

    fintrack(dir.path())
        .args(["transaction", "list", "-t", "income"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Paycheck"))
        .stdout(predicate::str::contains("Lunch").not());

    assert!(dir.path().join("data/transactions.json").exists());
}

#[test]
fn test_invalid_amount_is_rejected() {
    let dir = TempDir::new().unwrap();
    fintrack(dir.path())
        .args(["transaction", "add", "0", "Nothing", "-c", "Other"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));

    fintrack(dir.path())
        .args(["transaction", "add", "abc", "Nothing", "-c", "Other"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));

    fintrack(dir.path())
        .args(["transaction", "add", "50000000000000000", "Castle", "-c", "Other"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("may not exceed"));

    fintrack(dir.path())
        .args(["budget", "set", "Other", "50000000000000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("may not exceed"));
}

#[test]
fn test_budget_report_flags_overspending() {
    let dir = TempDir::new().unwrap();
    add_expense(dir.path(), "100", "Groceries", "Food & Dining", "2025-03-10");
    fintrack(dir.path())
        .args(["budget", "set", "Food & Dining", "80", "-m", "2025-03"])
        .assert()
        .success();

    fintrack(dir.path())
        .args(["report", "budgets", "-m", "2025-03", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"over\""))
        .stdout(predicate::str::contains("\"percentage\": 125.0"));

    fintrack(dir.path())
        .args(["report", "insights", "-m", "2025-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget Exceeded"))
        .stdout(predicate::str::contains("$20.00"));
}

#[test]
fn test_budget_set_replaces_existing() {
    let dir = TempDir::new().unwrap();
    for amount in ["300", "450"] {
        fintrack(dir.path())
            .args(["budget", "set", "Travel", amount, "-m", "2025-06"])
            .assert()
            .success();
    }

    fintrack(dir.path())
        .args(["budget", "list", "-m", "2025-06"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$450.00"))
        .stdout(predicate::str::contains("$300.00").not());
}

#[test]
fn test_delete_requires_force() {
    let dir = TempDir::new().unwrap();
    add_expense(dir.path(), "5", "Coffee", "Food & Dining", "2025-03-04");

    fintrack(dir.path())
        .args(["transaction", "clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Use --force"));

    fintrack(dir.path())
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Coffee"));

    fintrack(dir.path())
        .args(["transaction", "clear", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 1 transactions"));

    fintrack(dir.path())
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions found"));
}

#[test]
fn test_unknown_transaction_id() {
    let dir = TempDir::new().unwrap();
    fintrack(dir.path())
        .args(["transaction", "show", "txn-0000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Transaction not found"));
}

#[test]
fn test_csv_export_to_stdout() {
    let dir = TempDir::new().unwrap();
    add_expense(dir.path(), "9.99", "Movie", "Entertainment", "2025-05-05");

    fintrack(dir.path())
        .args(["export", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "id,date,type,description,category,amount",
        ))
        .stdout(predicate::str::contains("2025-05-05,expense,Movie,Entertainment,9.99"));
}

#[test]
fn test_json_export_to_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("backup.json");
    fintrack(dir.path())
        .args(["budget", "set", "Shopping", "50", "-m", "2025-01"])
        .assert()
        .success();

    fintrack(dir.path())
        .args(["export", "json", "--pretty", "-o"])
        .arg(&out)
        .assert()
        .success();

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(out).unwrap()).unwrap();
    assert_eq!(value["schema_version"], 1);
    assert_eq!(value["budgets"][0]["category"], "Shopping");
    assert_eq!(value["budgets"][0]["month"], "2025-01");
}

#[test]
fn test_corrupt_file_is_quarantined() {
    let dir = TempDir::new().unwrap();
    let data_dir = dir.path().join("data");
    fs::create_dir_all(&data_dir).unwrap();
    fs::write(data_dir.join("transactions.json"), "{ not json").unwrap();

    fintrack(dir.path())
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions found"))
        .stderr(predicate::str::contains("WARN"));

    assert!(data_dir.join("transactions.json.corrupt").exists());
}

#[test]
fn test_summary_report() {
    let dir = TempDir::new().unwrap();
    add_income(dir.path(), "1000", "Paycheck", "2025-04-01");
    add_expense(dir.path(), "700", "Rent", "Bills & Utilities", "2025-04-02");

    fintrack(dir.path())
        .args(["report", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$1000.00"))
        .stdout(predicate::str::contains("$300.00"))
        .stdout(predicate::str::contains("30.0%"))
        .stdout(predicate::str::contains("Rent"));
}

#[test]
fn test_categories_and_months() {
    let dir = TempDir::new().unwrap();
    fintrack(dir.path())
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bills & Utilities"))
        .stdout(predicate::str::contains("Freelance"));

    let output = fintrack(dir.path())
        .args(["budget", "months"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(String::from_utf8(output).unwrap().lines().count(), 12);
}
