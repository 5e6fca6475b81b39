use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

const BIN_NAME: &str = "iexpense";

fn iexpense(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("IEXPENSE_DATA_DIR", data_dir)
        .env_remove("IEXPENSE_LOG")
        .arg("--no-color");
    cmd
}

fn add(data_dir: &Path, name: &str, amount: &str, category: &str) {
    iexpense(data_dir)
        .args(["add", name, amount, "--category", category])
        .assert()
        .success();
}

#[test]
fn add_then_list_groups_by_section() {
    let dir = TempDir::new().unwrap();
    add(dir.path(), "Coffee", "4.50", "personal");
    add(dir.path(), "Hosting", "120", "business");

    iexpense(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(contains("Personal (1)"))
        .stdout(contains("Coffee"))
        .stdout(contains("$4.50"))
        .stdout(contains("Business (1)"))
        .stdout(contains("$120.00"));

    iexpense(dir.path())
        .args(["list", "--category", "business"])
        .assert()
        .success()
        .stdout(contains("Hosting").and(contains("Coffee").not()));
}

#[test]
fn category_flag_is_case_insensitive_and_limited_to_sections() {
    let dir = TempDir::new().unwrap();

    iexpense(dir.path())
        .args(["add", "Coffee", "4.50", "-c", "personal"])
        .assert()
        .success()
        .stdout(contains("Added Personal expense"));

    iexpense(dir.path())
        .args(["add", "Flight", "300", "-c", "travel"])
        .assert()
        .failure()
        .stderr(contains("expected Personal or Business"));

    iexpense(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(contains("Personal (1)"))
        .stdout(contains("Flight").not());
}

#[test]
fn list_persists_the_stored_wire_format() {
    let dir = TempDir::new().unwrap();
    add(dir.path(), "Lunch", "12.25", "personal");

    let saved = fs::read_to_string(dir.path().join("data").join("Items.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&saved).unwrap();
    assert_eq!(value[0]["name"], "Lunch");
    assert_eq!(value[0]["type"], "Personal");
    assert_eq!(value[0]["currencyCode"], "USD");
}

#[test]
fn delete_previews_until_forced() {
    let dir = TempDir::new().unwrap();
    add(dir.path(), "Coffee", "4.50", "personal");
    add(dir.path(), "Hosting", "12", "business");
    add(dir.path(), "Rent", "950", "personal");

    iexpense(dir.path())
        .args(["delete", "1", "--section", "personal"])
        .assert()
        .success()
        .stdout(contains("Would delete 1 expense(s)"))
        .stdout(contains("Rent"));

    iexpense(dir.path())
        .args(["delete", "1", "--section", "personal", "--force"])
        .assert()
        .success()
        .stdout(contains("Deleted 1 expense(s)"));

    iexpense(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(contains("Rent").not())
        .stdout(contains("Coffee"))
        .stdout(contains("Hosting"));
}

#[test]
fn delete_out_of_range_fails_without_changes() {
    let dir = TempDir::new().unwrap();
    add(dir.path(), "Coffee", "4.50", "personal");

    iexpense(dir.path())
        .args(["delete", "0", "3", "--position", "--force"])
        .assert()
        .failure()
        .stderr(contains("Position 3 is out of range (length 1)"));

    iexpense(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(contains("Coffee"));
}

#[test]
fn negative_and_zero_amounts_are_accepted() {
    let dir = TempDir::new().unwrap();
    add(dir.path(), "Refund", "-5", "personal");
    add(dir.path(), "Freebie", "0", "personal");

    iexpense(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(contains("-$5.00"))
        .stdout(contains("$0.00"));
}

#[test]
fn invalid_input_is_rejected() {
    let dir = TempDir::new().unwrap();

    iexpense(dir.path())
        .args(["add", "Coffee", "lots"])
        .assert()
        .failure()
        .stderr(contains("not a number"));

    iexpense(dir.path())
        .args(["add", "Coffee", "4", "--category", "travel"])
        .assert()
        .failure();

    assert!(!dir.path().join("data").join("Items.json").exists());
}

#[test]
fn ephemeral_session_writes_nothing() {
    let dir = TempDir::new().unwrap();

    iexpense(dir.path())
        .args(["--ephemeral", "add", "Coffee", "4.50"])
        .assert()
        .success()
        .stdout(contains("Added Personal expense: Coffee $4.50"));

    assert!(!dir.path().join("data").exists());
    assert!(!dir.path().join("audit.log").exists());
}

#[test]
fn corrupt_list_opens_empty() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(data.join("Items.json"), "{ not json").unwrap();

    iexpense(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(contains("Personal (0)"))
        .stdout(contains("Business (0)"));
}

#[test]
fn history_records_additions_and_deletions() {
    let dir = TempDir::new().unwrap();
    add(dir.path(), "Coffee", "4.50", "personal");
    iexpense(dir.path())
        .args(["delete", "0", "--section", "personal", "--force"])
        .assert()
        .success();

    iexpense(dir.path())
        .arg("history")
        .assert()
        .success()
        .stdout(contains("CREATE"))
        .stdout(contains("DELETE"))
        .stdout(contains("Coffee"));
}

#[test]
fn export_writes_csv() {
    let dir = TempDir::new().unwrap();
    add(dir.path(), "Coffee", "4.50", "personal");
    let output = dir.path().join("expenses.csv");

    iexpense(dir.path())
        .arg("export")
        .arg(&output)
        .assert()
        .success()
        .stdout(contains("Exported 1 expense(s)"));

    let csv = fs::read_to_string(&output).unwrap();
    assert!(csv.starts_with("ID,Name,Type,Amount,Currency\n"));
    assert!(csv.contains("Coffee,Personal,4.50,USD"));
}

#[test]
fn init_and_config_report_paths() {
    let dir = TempDir::new().unwrap();

    iexpense(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Initialization complete!"));
    assert!(dir.path().join("config.json").exists());

    iexpense(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(contains("Items.json"))
        .stdout(contains("Initialized:      true"));
}
