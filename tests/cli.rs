//! Binary-level tests: every command runs against a temporary data directory

mod common;

use common::TestEnv;
use predicates::prelude::*;
use predicates::str::contains;

use expense_report::delivery::OutboxDispatcher;

fn record_march(env: &TestEnv) {
    env.cmd()
        .args(["txn", "add", "ana@example.com", "Salary", "5000", "-d", "2024-03-01"])
        .assert()
        .success()
        .stdout(contains("Recorded transaction"));
    env.cmd()
        .args([
            "txn",
            "add",
            "ana@example.com",
            "Rent",
            "1200",
            "-d",
            "2024-03-05",
            "-D",
            "March rent",
        ])
        .assert()
        .success();
    env.cmd()
        .args([
            "budget", "set", "ana@example.com", "Rent", "1500", "--month", "3", "--year", "2024",
        ])
        .assert()
        .success()
        .stdout(contains("Budget for 'Rent' in March 2024 set to 1500.00"));
}

#[test]
fn test_help() {
    let env = TestEnv::new();
    env.cmd()
        .arg("-h")
        .assert()
        .success()
        .stdout(contains("Monthly expense report"));
}

#[test]
fn test_init_lists_default_categories() {
    let env = TestEnv::new();
    env.cmd()
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Initialization complete!"))
        .stdout(contains("Salary"));

    env.cmd()
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(contains("Groceries"));
}

#[test]
fn test_generate() {
    let env = TestEnv::seeded();
    record_march(&env);

    env.cmd()
        .args([
            "report",
            "generate",
            "ana@example.com",
            "--month",
            "3",
            "--year",
            "2024",
        ])
        .assert()
        .success()
        .stdout(contains("Report generated for 3/2024"));
}

#[test]
fn test_show_prints_sections() {
    let env = TestEnv::seeded();
    record_march(&env);

    env.cmd()
        .args(["report", "show", "ana@example.com", "-m", "3", "-y", "2024"])
        .assert()
        .success()
        .stdout(contains("Monthly Summary"))
        .stdout(contains("Budget vs Actual"))
        .stdout(contains("3800.00"))
        .stdout(contains("March rent"));
}

#[test]
fn test_download_writes_file() {
    let env = TestEnv::seeded();
    record_march(&env);

    let out_dir = env.path().join("downloads");
    std::fs::create_dir_all(&out_dir).unwrap();

    env.cmd()
        .args(["report", "download", "ana@example.com", "-m", "3", "-y", "2024", "-o"])
        .arg(&out_dir)
        .assert()
        .success()
        .stdout(contains("expense_report_march_2024.xlsx"));

    let bytes = std::fs::read(out_dir.join("expense_report_march_2024.xlsx")).unwrap();
    assert!(bytes.starts_with(b"PK"));

    let csv_path = env.path().join("march.csv");
    env.cmd()
        .args([
            "report",
            "download",
            "ana@example.com",
            "-m",
            "3",
            "-y",
            "2024",
            "-f",
            "csv",
            "-o",
        ])
        .arg(&csv_path)
        .assert()
        .success();

    let csv = std::fs::read_to_string(&csv_path).unwrap();
    assert!(csv.starts_with("Monthly Summary"));
    assert!(csv.contains("Net Savings,3800.00"));
}

#[test]
fn test_email_goes_to_outbox() {
    let env = TestEnv::seeded();
    record_march(&env);

    env.cmd()
        .args(["report", "email", "ana@example.com", "-m", "3", "-y", "2024"])
        .assert()
        .success()
        .stdout(contains("Report sent to ana@example.com"));

    let delivered = OutboxDispatcher::new(env.path().join("outbox"))
        .delivered()
        .unwrap();
    assert_eq!(delivered.len(), 1);
    let (dir, envelope) = &delivered[0];
    assert_eq!(envelope.to, "ana@example.com");
    assert_eq!(envelope.subject, "Monthly Expense Report - March 2024");
    assert!(dir.join(&envelope.attachment_file).exists());
}

#[test]
fn test_email_rejects_bad_recipient() {
    let env = TestEnv::seeded();

    env.cmd()
        .args([
            "report",
            "email",
            "ana@example.com",
            "-m",
            "3",
            "-y",
            "2024",
            "--to",
            "not-an-address",
        ])
        .assert()
        .failure()
        .stderr(contains("Failed to send email: Delivery error"));
}

#[test]
fn test_missing_user() {
    let env = TestEnv::seeded();

    env.cmd()
        .args(["report", "generate", "ghost@example.com", "-m", "3", "-y", "2024"])
        .assert()
        .failure()
        .stderr(contains("Failed to generate report: User not found"));

    env.cmd()
        .args(["report", "email", "ghost@example.com", "-m", "3", "-y", "2024"])
        .assert()
        .failure()
        .stderr(contains("Failed to send email"));

    assert!(!env.path().join("outbox").exists());
}

#[test]
fn test_invalid_month_rejected() {
    let env = TestEnv::seeded();

    env.cmd()
        .args(["report", "generate", "ana@example.com", "--month", "13"])
        .assert()
        .failure()
        .stderr(contains("13").and(contains("month")));
}

#[test]
fn test_budget_requires_expense_category() {
    let env = TestEnv::seeded();

    env.cmd()
        .args(["budget", "set", "ana@example.com", "Salary", "100", "-m", "3", "-y", "2024"])
        .assert()
        .failure();
}
