//! Shared helper functions for CLI commands
//!
//! This module contains utility functions that are used across multiple
//! command modules to avoid code duplication.

use console::style;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{DataStore, LoadReport, Session};

/// Load the session from the configured data files
///
/// Duplicate suppliers found in the file are reported and skipped.
pub fn open_session(global: &GlobalOpts) -> Result<(Session, DataStore)> {
    let store = DataStore::from_config(&global.config());
    let mut session = Session::new();
    let report = session.load(&store).into_diagnostic()?;
    print_skipped(&report);
    Ok((session, store))
}

/// Print a summary of duplicate suppliers dropped during load
pub fn print_skipped(report: &LoadReport) {
    if report.skipped.is_empty() {
        return;
    }
    println!(
        "{} Skipped {} duplicate supplier(s) during load.",
        style("!").yellow(),
        report.skipped.len()
    );
}

/// Convert a 1-based position from the command line into an index
pub fn position_to_index(position: usize, what: &str) -> Result<usize> {
    position
        .checked_sub(1)
        .ok_or_else(|| miette::miette!("{} numbers start at 1", what))
}

/// Print a value as pretty JSON when requested
///
/// Returns `true` if JSON was printed and the caller should skip its own output.
pub fn print_json_if_requested<T: Serialize + ?Sized>(value: &T, global: &GlobalOpts) -> Result<bool> {
    if global.output != OutputFormat::Json {
        return Ok(false);
    }
    let json = serde_json::to_string_pretty(value).into_diagnostic()?;
    println!("{}", json);
    Ok(true)
}

/// Truncate a string to max_len characters, adding "..." if truncated
///
/// Useful for table columns that need fixed-width output.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Format a price for display
pub fn format_price(price: f64) -> String {
    format!("{:.2} BGN", price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_to_index() {
        assert_eq!(position_to_index(1, "Supplier").unwrap(), 0);
        assert_eq!(position_to_index(7, "Supplier").unwrap(), 6);
        assert!(position_to_index(0, "Supplier").is_err());
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("hello", 10), "hello");
        assert_eq!(truncate_str("hello world", 8), "hello...");
        assert_eq!(truncate_str("hi", 2), "hi");
        assert_eq!(truncate_str("Оптика София ООД", 9), "Оптика...");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(12.5), "12.50 BGN");
        assert_eq!(format_price(0.0), "0.00 BGN");
    }
}
