//! `osm data` command - Data file maintenance

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::GlobalOpts;
use crate::core::{DataStore, Session};

#[derive(Subcommand, Debug)]
pub enum DataCommands {
    /// Load both data files and report what they contain
    Check,
}

/// Run a data subcommand
pub fn run(cmd: DataCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        DataCommands::Check => run_check(global),
    }
}

fn run_check(global: &GlobalOpts) -> Result<()> {
    let store = DataStore::from_config(&global.config());
    let mut session = Session::new();
    let report = session.load(&store).into_diagnostic()?;

    let describe = |found: bool| {
        if found {
            style("found").green()
        } else {
            style("missing").dim()
        }
    };

    println!(
        "{}: {} ({})",
        style("Suppliers").bold(),
        session.suppliers().len(),
        describe(report.suppliers_found)
    );
    println!("  {}", store.suppliers_path().display());
    println!(
        "{}: {} ({})",
        style("Orders").bold(),
        session.orders().len(),
        describe(report.orders_found)
    );
    println!("  {}", store.orders_path().display());

    if report.skipped.is_empty() {
        println!("{} No duplicate suppliers", style("✓").green());
    } else {
        println!(
            "{} Skipped {} duplicate supplier(s):",
            style("!").yellow(),
            report.skipped.len()
        );
        for skipped in &report.skipped {
            println!("  • {}: {}", skipped.field, skipped.value);
        }
    }

    Ok(())
}
