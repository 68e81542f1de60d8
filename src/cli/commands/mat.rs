//! `osm mat` command - Supplier catalog management

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::{open_session, position_to_index};
use crate::cli::GlobalOpts;
use crate::entities::Material;

#[derive(Subcommand, Debug)]
pub enum MatCommands {
    /// Add a material to a supplier's catalog
    Add(AddArgs),

    /// Remove a material from a supplier's catalog
    Remove(RemoveArgs),
}

#[derive(clap::Args, Debug)]
pub struct AddArgs {
    /// Supplier number as shown by `osm sup list`
    pub supplier: usize,

    /// Material type (e.g., Lens, Frame)
    #[arg(long = "type", short = 't')]
    pub kind: String,

    /// Thickness in mm (must be positive)
    #[arg(long, allow_negative_numbers = true)]
    pub thickness: f64,

    /// Diopter (any sign)
    #[arg(long, short = 'd', allow_negative_numbers = true, default_value_t = 0.0)]
    pub diopter: f64,

    /// Material name (e.g., Polycarbonate)
    #[arg(long, short = 'n')]
    pub name: String,

    /// Unit price in BGN
    #[arg(long, short = 'p', allow_negative_numbers = true)]
    pub price: f64,
}

#[derive(clap::Args, Debug)]
pub struct RemoveArgs {
    /// Supplier number as shown by `osm sup list`
    pub supplier: usize,

    /// Material number as shown by `osm sup show`
    pub material: usize,
}

/// Run a material subcommand
pub fn run(cmd: MatCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        MatCommands::Add(args) => run_add(args, global),
        MatCommands::Remove(args) => run_remove(args, global),
    }
}

fn run_add(args: AddArgs, global: &GlobalOpts) -> Result<()> {
    let material = Material::new(
        args.kind,
        args.thickness,
        args.diopter,
        args.name,
        args.price,
    )
    .into_diagnostic()?;

    let (mut session, store) = open_session(global)?;
    let supplier = position_to_index(args.supplier, "Supplier")?;
    session.add_material(supplier, material).into_diagnostic()?;
    session.save(&store).into_diagnostic()?;

    let supplier = session.supplier(supplier).into_diagnostic()?;
    println!(
        "{} Added material #{} to {}",
        style("✓").green(),
        supplier.material_count(),
        style(supplier.name()).yellow()
    );
    Ok(())
}

fn run_remove(args: RemoveArgs, global: &GlobalOpts) -> Result<()> {
    let (mut session, store) = open_session(global)?;
    let supplier = position_to_index(args.supplier, "Supplier")?;
    let material = position_to_index(args.material, "Material")?;

    let removed = session
        .remove_material(supplier, material)
        .into_diagnostic()?;
    session.save(&store).into_diagnostic()?;

    println!("{} Removed {}", style("✓").green(), removed);
    Ok(())
}
