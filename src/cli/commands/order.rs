//! `osm order` command - Purchase orders

use std::str::FromStr;

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::{format_price, open_session, position_to_index, print_json_if_requested};
use crate::cli::output::order_table;
use crate::cli::GlobalOpts;
use crate::entities::Order;

#[derive(Subcommand, Debug)]
pub enum OrderCommands {
    /// Create an order against a supplier's catalog
    New(NewArgs),

    /// List orders
    List(ListArgs),

    /// Show an order with all line items
    Show(ShowArgs),
}

/// A requested line: catalog material number and quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemSpec {
    /// 1-based material number in the supplier catalog
    pub material: usize,
    pub quantity: i64,
}

impl FromStr for ItemSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (material, quantity) = s
            .split_once(':')
            .ok_or_else(|| format!("Invalid item '{}'. Use MATERIAL:QUANTITY, e.g. 2:10", s))?;
        let material = material
            .trim()
            .parse()
            .map_err(|_| format!("Invalid material number '{}'", material))?;
        let quantity = quantity
            .trim()
            .parse()
            .map_err(|_| format!("Invalid quantity '{}'", quantity))?;
        Ok(Self { material, quantity })
    }
}

#[derive(clap::Args, Debug)]
pub struct NewArgs {
    /// Supplier number as shown by `osm sup list`
    pub supplier: usize,

    /// Line item as MATERIAL:QUANTITY (repeatable)
    #[arg(long = "item", short = 'i', required = true)]
    pub items: Vec<ItemSpec>,
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Show only count
    #[arg(long)]
    pub count: bool,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Order number as shown by `osm order list`
    pub order: usize,
}

/// Run an order subcommand
pub fn run(cmd: OrderCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        OrderCommands::New(args) => run_new(args, global),
        OrderCommands::List(args) => run_list(args, global),
        OrderCommands::Show(args) => run_show(args, global),
    }
}

fn run_new(args: NewArgs, global: &GlobalOpts) -> Result<()> {
    let (mut session, store) = open_session(global)?;
    let supplier = session
        .supplier(position_to_index(args.supplier, "Supplier")?)
        .into_diagnostic()?;

    let mut order = Order::new(supplier);
    for item in &args.items {
        let material = supplier
            .material(position_to_index(item.material, "Material")?)
            .into_diagnostic()?;
        order.add_item(material, item.quantity).into_diagnostic()?;
    }

    println!("{}", order);
    let total = order.total_price();
    session.place_order(order).into_diagnostic()?;
    session.save(&store).into_diagnostic()?;

    println!(
        "{} Order created successfully! Total: {}",
        style("✓").green(),
        style(format_price(total)).yellow()
    );
    Ok(())
}

fn run_list(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let (session, _) = open_session(global)?;
    let orders = session.orders();

    if args.count {
        println!("{}", orders.len());
        return Ok(());
    }

    if print_json_if_requested(orders, global)? {
        return Ok(());
    }

    if orders.is_empty() {
        println!("No orders found.");
        return Ok(());
    }

    println!("{}", order_table(orders));
    Ok(())
}

fn run_show(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let (session, _) = open_session(global)?;
    let order = session
        .order(position_to_index(args.order, "Order")?)
        .into_diagnostic()?;

    if print_json_if_requested(order, global)? {
        return Ok(());
    }

    println!("{}", order);
    Ok(())
}
