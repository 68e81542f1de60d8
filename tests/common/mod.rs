//! Shared test helpers for integration tests
//!
//! This module provides common utilities used across all test files.

#![allow(dead_code)]

use assert_cmd::cargo;
use assert_cmd::Command;
use tempfile::TempDir;

/// Helper to get an osm command with no configuration leaking in from the environment
pub fn osm() -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("osm"));
    cmd.env_remove("OSM_DATA_DIR")
        .env_remove("OSM_SUPPLIERS_FILE")
        .env_remove("OSM_ORDERS_FILE")
        .env_remove("RUST_LOG");
    cmd
}

/// Helper to create an osm command running in a temp data directory
pub fn osm_in(tmp: &TempDir) -> Command {
    let mut cmd = osm();
    cmd.current_dir(tmp.path());
    cmd
}

/// Helper to add a supplier through the CLI
pub fn add_test_supplier(tmp: &TempDir, tax_id: &str, name: &str, phone: &str) {
    osm_in(tmp)
        .args([
            "sup",
            "add",
            "--tax-id",
            tax_id,
            "--name",
            name,
            "--location",
            "Sofia",
            "--phone",
            phone,
        ])
        .assert()
        .success();
}

/// Helper to add a material to a supplier through the CLI
pub fn add_test_material(
    tmp: &TempDir,
    supplier: &str,
    kind: &str,
    name: &str,
    diopter: &str,
    price: &str,
) {
    osm_in(tmp)
        .args([
            "mat",
            "add",
            supplier,
            "--type",
            kind,
            "--thickness",
            "1.5",
            "--diopter",
            diopter,
            "--name",
            name,
            "--price",
            price,
        ])
        .assert()
        .success();
}

/// Helper to set up a data directory with one supplier and two materials
pub fn setup_catalog() -> TempDir {
    let tmp = TempDir::new().unwrap();
    add_test_supplier(&tmp, "123456789", "Acme Optics", "+359-88-123-4567");
    add_test_material(&tmp, "1", "Lens", "Polycarbonate", "-2", "12.5");
    add_test_material(&tmp, "1", "Frame", "Titanium", "0", "80");
    tmp
}
