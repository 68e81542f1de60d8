//! `osm sup` command - Supplier management

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::{open_session, position_to_index, print_json_if_requested};
use crate::cli::output::{material_table, supplier_table};
use crate::cli::GlobalOpts;
use crate::entities::Supplier;

#[derive(Subcommand, Debug)]
pub enum SupCommands {
    /// Add a new supplier
    Add(AddArgs),

    /// List suppliers
    List(ListArgs),

    /// Show a supplier's details and material catalog
    Show(ShowArgs),
}

#[derive(clap::Args, Debug)]
pub struct AddArgs {
    /// Tax ID (BULSTAT), 9 or 13 digits
    #[arg(long, short = 't')]
    pub tax_id: String,

    /// Company name
    #[arg(long, short = 'n')]
    pub name: String,

    /// Location
    #[arg(long, short = 'l')]
    pub location: String,

    /// Phone number (7-15 digits, optional leading +)
    #[arg(long, short = 'p')]
    pub phone: String,
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Show only count
    #[arg(long)]
    pub count: bool,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Supplier number as shown by `osm sup list`
    pub supplier: usize,
}

/// Run a supplier subcommand
pub fn run(cmd: SupCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        SupCommands::Add(args) => run_add(args, global),
        SupCommands::List(args) => run_list(args, global),
        SupCommands::Show(args) => run_show(args, global),
    }
}

fn run_add(args: AddArgs, global: &GlobalOpts) -> Result<()> {
    let supplier =
        Supplier::new(args.tax_id, args.name, args.location, args.phone).into_diagnostic()?;

    let (mut session, store) = open_session(global)?;
    let index = session.add_supplier(supplier).into_diagnostic()?;
    session.save(&store).into_diagnostic()?;

    println!(
        "{} Added supplier #{} {}",
        style("✓").green(),
        index + 1,
        style(session.suppliers()[index].name()).yellow()
    );
    Ok(())
}

fn run_list(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let (session, _) = open_session(global)?;
    let suppliers = session.suppliers();

    if args.count {
        println!("{}", suppliers.len());
        return Ok(());
    }

    if print_json_if_requested(suppliers, global)? {
        return Ok(());
    }

    if suppliers.is_empty() {
        println!("No suppliers found.");
        return Ok(());
    }

    println!("{}", supplier_table(suppliers));
    Ok(())
}

fn run_show(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let (session, _) = open_session(global)?;
    let index = position_to_index(args.supplier, "Supplier")?;
    let supplier = session.supplier(index).into_diagnostic()?;

    if print_json_if_requested(supplier, global)? {
        return Ok(());
    }

    print_supplier_details(supplier);
    Ok(())
}

/// Print the supplier information block and its catalog
pub fn print_supplier_details(supplier: &Supplier) {
    println!("{}", supplier);
    if supplier.materials().is_empty() {
        println!("No materials available from this supplier.");
    } else {
        println!();
        println!("{}", style("Available materials:").bold());
        println!("{}", material_table(supplier.materials()));
    }
}
