//! CLI and basic command tests

mod common;

use common::{add_test_supplier, osm, osm_in, setup_catalog};
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

// ============================================================================
// CLI Basic Tests
// ============================================================================

#[test]
fn test_help_displays() {
    osm()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("optical-material suppliers"));
}

#[test]
fn test_version_displays() {
    osm()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("osm"));
}

#[test]
fn test_unknown_command_fails() {
    osm()
        .arg("unknown-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_completions_generate() {
    osm()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("osm"));
}

// ============================================================================
// Supplier Command Tests
// ============================================================================

#[test]
fn test_sup_add_writes_supplier_file() {
    let tmp = TempDir::new().unwrap();

    osm_in(&tmp)
        .args([
            "sup",
            "add",
            "--tax-id",
            "123456789",
            "--name",
            "Acme Optics",
            "--location",
            "Sofia",
            "--phone",
            "+359-88-123-4567",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added supplier #1"));

    let content = fs::read_to_string(tmp.path().join("suppliers.dat")).unwrap();
    assert_eq!(
        content,
        "1\n123456789\nAcme Optics\nSofia\n+359-88-123-4567\n0\n"
    );
    assert_eq!(
        fs::read_to_string(tmp.path().join("orders.dat")).unwrap(),
        "0\n"
    );
}

#[test]
fn test_sup_add_rejects_invalid_tax_id() {
    let tmp = TempDir::new().unwrap();

    osm_in(&tmp)
        .args([
            "sup",
            "add",
            "--tax-id",
            "12345678",
            "--name",
            "Acme",
            "--location",
            "Sofia",
            "--phone",
            "0881234567",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("must be 9 or 13 digits"));

    assert!(!tmp.path().join("suppliers.dat").exists());
}

#[test]
fn test_sup_add_rejects_invalid_phone() {
    let tmp = TempDir::new().unwrap();

    osm_in(&tmp)
        .args([
            "sup", "add", "--tax-id", "123456789", "--name", "Acme", "--location", "Sofia",
            "--phone", "12a3456789",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid characters"));
}

#[test]
fn test_sup_add_rejects_duplicate_tax_id() {
    let tmp = TempDir::new().unwrap();
    add_test_supplier(&tmp, "123456789", "Acme Optics", "0881111111");

    osm_in(&tmp)
        .args([
            "sup", "add", "--tax-id", "123456789", "--name", "Other", "--location", "Varna",
            "--phone", "0882222222",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("tax ID already exists"));

    osm_in(&tmp)
        .args(["sup", "list", "--count"])
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn test_sup_add_rejects_duplicate_phone() {
    let tmp = TempDir::new().unwrap();
    add_test_supplier(&tmp, "123456789", "Acme Optics", "0881111111");

    osm_in(&tmp)
        .args([
            "sup", "add", "--tax-id", "987654321", "--name", "Other", "--location", "Varna",
            "--phone", "0881111111",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("phone number already exists"));
}

#[test]
fn test_sup_list_empty() {
    let tmp = TempDir::new().unwrap();

    osm_in(&tmp)
        .args(["sup", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No suppliers found."));
}

#[test]
fn test_sup_list_table() {
    let tmp = setup_catalog();

    osm_in(&tmp)
        .args(["sup", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Acme Optics"))
        .stdout(predicate::str::contains("123456789"));
}

#[test]
fn test_sup_list_json() {
    let tmp = setup_catalog();

    let output = osm_in(&tmp)
        .args(["sup", "list", "--output", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["tax_id"], "123456789");
    assert_eq!(json[0]["materials"][0]["type"], "Lens");
    assert_eq!(json[0]["materials"][1]["price"], 80.0);
}

#[test]
fn test_sup_show_lists_materials() {
    let tmp = setup_catalog();

    osm_in(&tmp)
        .args(["sup", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Supplier Information:"))
        .stdout(predicate::str::contains("Number of materials: 2"))
        .stdout(predicate::str::contains("Polycarbonate"))
        .stdout(predicate::str::contains("Titanium"));
}

#[test]
fn test_sup_show_unknown_supplier() {
    let tmp = setup_catalog();

    osm_in(&tmp)
        .args(["sup", "show", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No supplier #3"));

    osm_in(&tmp)
        .args(["sup", "show", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("start at 1"));
}

// ============================================================================
// Material Command Tests
// ============================================================================

#[test]
fn test_mat_add_rejects_non_positive_thickness() {
    let tmp = setup_catalog();

    osm_in(&tmp)
        .args([
            "mat",
            "add",
            "1",
            "--type",
            "Lens",
            "--thickness",
            "0",
            "--name",
            "CR-39",
            "--price",
            "5",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Thickness must be positive"));
}

#[test]
fn test_mat_add_rejects_negative_price() {
    let tmp = setup_catalog();

    osm_in(&tmp)
        .args([
            "mat",
            "add",
            "1",
            "--type",
            "Lens",
            "--thickness",
            "1",
            "--name",
            "CR-39",
            "--price",
            "-5",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Price cannot be negative"));
}

#[test]
fn test_mat_add_rejects_non_finite_diopter() {
    let tmp = setup_catalog();

    osm_in(&tmp)
        .args([
            "mat",
            "add",
            "1",
            "--type",
            "Lens",
            "--thickness",
            "1",
            "--diopter",
            "NaN",
            "--name",
            "CR-39",
            "--price",
            "5",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Diopter must be a finite number"));

    osm_in(&tmp)
        .args(["sup", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Number of materials: 2"));
}

#[test]
fn test_mat_remove() {
    let tmp = setup_catalog();

    osm_in(&tmp)
        .args(["mat", "remove", "1", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed Type: Lens"));

    osm_in(&tmp)
        .args(["sup", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Number of materials: 1"))
        .stdout(predicate::str::contains("Polycarbonate").not());
}

#[test]
fn test_mat_remove_out_of_range() {
    let tmp = setup_catalog();

    osm_in(&tmp)
        .args(["mat", "remove", "1", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid material index"));
}

// ============================================================================
// Order Command Tests
// ============================================================================

#[test]
fn test_order_new_merges_repeated_material() {
    let tmp = setup_catalog();

    osm_in(&tmp)
        .args(["order", "new", "1", "--item", "1:2", "--item", "1:3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TOTAL: 62.50 BGN"))
        .stdout(predicate::str::contains("Order created successfully"));

    let output = osm_in(&tmp)
        .args(["order", "list", "--output", "json"])
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["items"].as_array().unwrap().len(), 1);
    assert_eq!(json[0]["items"][0]["quantity"], 5);
    assert_eq!(json[0]["total_price"], 62.5);
    assert_eq!(json[0]["supplier_tax_id"], "123456789");
}

#[test]
fn test_order_new_rejects_zero_quantity() {
    let tmp = setup_catalog();

    osm_in(&tmp)
        .args(["order", "new", "1", "--item", "2:0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Quantity must be positive"));

    osm_in(&tmp)
        .args(["order", "list", "--count"])
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn test_order_new_rejects_unknown_material() {
    let tmp = setup_catalog();

    osm_in(&tmp)
        .args(["order", "new", "1", "--item", "9:1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid material index"));
}

#[test]
fn test_order_new_requires_items() {
    let tmp = setup_catalog();

    osm_in(&tmp).args(["order", "new", "1"]).assert().failure();
}

#[test]
fn test_order_list_and_show() {
    let tmp = setup_catalog();

    osm_in(&tmp)
        .args(["order", "new", "1", "-i", "2:1", "-i", "1:4"])
        .assert()
        .success();

    osm_in(&tmp)
        .args(["order", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ORD"))
        .stdout(predicate::str::contains("130.00 BGN"));

    osm_in(&tmp)
        .args(["order", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ORDER DETAILS"))
        .stdout(predicate::str::contains("Supplier: Acme Optics (Tax ID: 123456789)"))
        .stdout(predicate::str::contains("Titanium"))
        .stdout(predicate::str::contains("TOTAL: 130.00 BGN"));
}

// ============================================================================
// Data and Configuration Tests
// ============================================================================

#[test]
fn test_data_dir_option() {
    let tmp = TempDir::new().unwrap();
    let data_dir = tmp.path().join("store");

    osm()
        .args(["--data-dir", data_dir.to_str().unwrap()])
        .args([
            "sup", "add", "--tax-id", "123456789", "--name", "Acme", "--location", "Sofia",
            "--phone", "0881234567",
        ])
        .assert()
        .success();

    assert!(data_dir.join("suppliers.dat").exists());
    assert!(data_dir.join("orders.dat").exists());
}

#[test]
fn test_data_dir_env() {
    let tmp = TempDir::new().unwrap();

    osm()
        .env("OSM_DATA_DIR", tmp.path())
        .env("OSM_SUPPLIERS_FILE", "vendors.txt")
        .args([
            "sup", "add", "--tax-id", "123456789", "--name", "Acme", "--location", "Sofia",
            "--phone", "0881234567",
        ])
        .assert()
        .success();

    assert!(tmp.path().join("vendors.txt").exists());
}

#[test]
fn test_data_check_reports_duplicates() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("suppliers.dat"),
        "2\n123456789\nAcme\nSofia\n0881111111\n0\n123456789\nCopy\nVarna\n0882222222\n0\n",
    )
    .unwrap();

    osm_in(&tmp)
        .args(["data", "check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Suppliers: 1"))
        .stdout(predicate::str::contains("Skipped 1 duplicate supplier(s)"))
        .stdout(predicate::str::contains("tax ID: 123456789"));
}

#[test]
fn test_malformed_file_fails() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("suppliers.dat"), "2\n123456789\nAcme\n").unwrap();

    osm_in(&tmp)
        .args(["sup", "list"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Malformed data"));
}

#[test]
fn test_extra_records_block_saving() {
    let tmp = TempDir::new().unwrap();
    let content = "1\n123456789\nAcme\nSofia\n0881111111\n0\n\
                   987654321\nOther\nVarna\n0882222222\n0\n";
    fs::write(tmp.path().join("suppliers.dat"), content).unwrap();

    osm_in(&tmp)
        .args([
            "sup", "add", "--tax-id", "555555555", "--name", "New", "--location", "Ruse",
            "--phone", "0883333333",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed data"));

    assert_eq!(
        fs::read_to_string(tmp.path().join("suppliers.dat")).unwrap(),
        content
    );
}

#[test]
fn test_menu_without_terminal_fails_cleanly() {
    let tmp = setup_catalog();

    osm_in(&tmp).write_stdin("").assert().failure().code(1);
}
