//! Interactive menu - the default mode when `osm` runs without a subcommand
//!
//! Data is loaded once at startup and saved on exit. Domain errors inside an
//! action are reported and the menu continues; terminal I/O errors end the
//! session.

use console::style;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use miette::{IntoDiagnostic, Result};

use crate::cli::commands::sup::print_supplier_details;
use crate::cli::helpers::{format_price, print_skipped};
use crate::cli::output::supplier_table;
use crate::cli::GlobalOpts;
use crate::core::validation::{
    require_finite, require_non_negative, require_positive, require_text, validate_phone,
    validate_tax_id,
};
use crate::core::{DataStore, LoadReport, Session};
use crate::entities::{Material, Order, Supplier};

/// Largest quantity accepted for a single line in the interactive order builder
const MAX_QUANTITY: i64 = 10_000;

const MENU_ITEMS: &[&str] = &[
    "Add Supplier",
    "Add Material to Supplier",
    "Display All Suppliers",
    "Display Supplier Details",
    "Create Order",
    "Display All Orders",
    "Save Data to File",
    "Load Data from File",
    "Exit",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    AddSupplier,
    AddMaterial,
    ListSuppliers,
    ShowSupplier,
    CreateOrder,
    ListOrders,
    Save,
    Load,
    Exit,
}

impl MenuAction {
    fn from_index(index: usize) -> Self {
        match index {
            0 => MenuAction::AddSupplier,
            1 => MenuAction::AddMaterial,
            2 => MenuAction::ListSuppliers,
            3 => MenuAction::ShowSupplier,
            4 => MenuAction::CreateOrder,
            5 => MenuAction::ListOrders,
            6 => MenuAction::Save,
            7 => MenuAction::Load,
            _ => MenuAction::Exit,
        }
    }
}

struct Menu {
    session: Session,
    store: DataStore,
    theme: ColorfulTheme,
}

/// Run the interactive menu loop
pub fn run(global: &GlobalOpts) -> Result<()> {
    let store = DataStore::from_config(&global.config());
    let mut session = Session::new();
    let report = session.load(&store).into_diagnostic()?;
    print_load_summary(&report, &session);

    let rule = "=".repeat(65);
    println!();
    println!("{}", rule);
    println!(
        "{}",
        style("        Optical Materials & Suppliers Management System").bold()
    );
    println!("{}", rule);

    let mut menu = Menu {
        session,
        store,
        theme: ColorfulTheme::default(),
    };
    menu.run_loop()
}

impl Menu {
    fn run_loop(&mut self) -> Result<()> {
        loop {
            println!();
            let choice = Select::with_theme(&self.theme)
                .with_prompt("Main menu")
                .items(MENU_ITEMS)
                .default(0)
                .interact()
                .into_diagnostic()?;

            match MenuAction::from_index(choice) {
                MenuAction::AddSupplier => self.add_supplier()?,
                MenuAction::AddMaterial => self.add_material()?,
                MenuAction::ListSuppliers => self.list_suppliers(),
                MenuAction::ShowSupplier => self.show_supplier()?,
                MenuAction::CreateOrder => self.create_order()?,
                MenuAction::ListOrders => self.list_orders(),
                MenuAction::Save => self.save(),
                MenuAction::Load => self.load(),
                MenuAction::Exit => {
                    println!("\nSaving data...");
                    self.session.save(&self.store).into_diagnostic()?;
                    println!("Thank you for using the system!");
                    return Ok(());
                }
            }
        }
    }

    fn add_supplier(&mut self) -> Result<()> {
        println!("\n=== ADD SUPPLIER ===\n");

        let tax_id: String = Input::with_theme(&self.theme)
            .with_prompt("Tax ID (9 or 13 digits)")
            .validate_with(|v: &String| validate_tax_id(v).map_err(|e| e.to_string()))
            .interact_text()
            .into_diagnostic()?;
        let name: String = Input::with_theme(&self.theme)
            .with_prompt("Company name")
            .validate_with(|v: &String| require_text("Name", v).map_err(|e| e.to_string()))
            .interact_text()
            .into_diagnostic()?;
        let location: String = Input::with_theme(&self.theme)
            .with_prompt("Location")
            .validate_with(|v: &String| require_text("Location", v).map_err(|e| e.to_string()))
            .interact_text()
            .into_diagnostic()?;
        let phone: String = Input::with_theme(&self.theme)
            .with_prompt("Phone number")
            .validate_with(|v: &String| validate_phone(v).map_err(|e| e.to_string()))
            .interact_text()
            .into_diagnostic()?;

        let added = Supplier::new(tax_id, name, location, phone)
            .map_err(|e| e.to_string())
            .and_then(|s| self.session.add_supplier(s).map_err(|e| e.to_string()));
        match added {
            Ok(_) => report_ok("Supplier added successfully!"),
            Err(e) => report_error(&format!("Error adding supplier: {}", e)),
        }
        Ok(())
    }

    fn add_material(&mut self) -> Result<()> {
        if self.session.suppliers().is_empty() {
            report_error("No suppliers available! Add a supplier first.");
            return Ok(());
        }
        println!("\n=== ADD MATERIAL ===\n");
        let Some(supplier) = self.select_supplier()? else {
            return Ok(());
        };

        let kind: String = Input::with_theme(&self.theme)
            .with_prompt("Type")
            .validate_with(|v: &String| require_text("Type", v).map_err(|e| e.to_string()))
            .interact_text()
            .into_diagnostic()?;
        let thickness: f64 = Input::with_theme(&self.theme)
            .with_prompt("Thickness (mm)")
            .validate_with(|v: &f64| require_positive("Thickness", *v).map_err(|e| e.to_string()))
            .interact_text()
            .into_diagnostic()?;
        let diopter: f64 = Input::with_theme(&self.theme)
            .with_prompt("Diopter")
            .validate_with(|v: &f64| require_finite("Diopter", *v).map_err(|e| e.to_string()))
            .interact_text()
            .into_diagnostic()?;
        let material_name: String = Input::with_theme(&self.theme)
            .with_prompt("Material name")
            .validate_with(|v: &String| {
                require_text("Material name", v).map_err(|e| e.to_string())
            })
            .interact_text()
            .into_diagnostic()?;
        let price: f64 = Input::with_theme(&self.theme)
            .with_prompt("Price (BGN)")
            .validate_with(|v: &f64| require_non_negative("Price", *v).map_err(|e| e.to_string()))
            .interact_text()
            .into_diagnostic()?;

        let added = Material::new(kind, thickness, diopter, material_name, price)
            .map_err(|e| e.to_string())
            .and_then(|m| {
                self.session
                    .add_material(supplier, m)
                    .map_err(|e| e.to_string())
            });
        match added {
            Ok(()) => report_ok("Material added successfully!"),
            Err(e) => report_error(&format!("Error adding material: {}", e)),
        }
        Ok(())
    }

    fn list_suppliers(&self) {
        let suppliers = self.session.suppliers();
        if suppliers.is_empty() {
            report_error("No suppliers available!");
            return;
        }
        println!("\n=== ALL SUPPLIERS ===\n");
        println!("{}", supplier_table(suppliers));
    }

    fn show_supplier(&self) -> Result<()> {
        if self.session.suppliers().is_empty() {
            report_error("No suppliers available!");
            return Ok(());
        }
        if let Some(index) = self.select_supplier()? {
            print_supplier_details(&self.session.suppliers()[index]);
        }
        Ok(())
    }

    fn create_order(&mut self) -> Result<()> {
        if self.session.suppliers().is_empty() {
            report_error("No suppliers available!");
            return Ok(());
        }
        println!("\n=== CREATE ORDER ===\n");
        let Some(index) = self.select_supplier()? else {
            return Ok(());
        };

        let supplier = self.session.suppliers()[index].clone();
        if supplier.materials().is_empty() {
            report_error("This supplier has no available materials!");
            return Ok(());
        }

        let mut order = Order::new(&supplier);
        let mut choices: Vec<String> = supplier.materials().iter().map(|m| m.to_string()).collect();
        choices.push("Finish order".to_string());
        let finish = choices.len() - 1;

        loop {
            println!("\n=== CURRENT ORDER ===");
            println!("{}", order);

            let choice = Select::with_theme(&self.theme)
                .with_prompt(format!("Add material from {}", supplier.name()))
                .items(&choices[..])
                .default(0)
                .interact()
                .into_diagnostic()?;

            if choice == finish {
                break;
            }

            let quantity: i64 = Input::with_theme(&self.theme)
                .with_prompt("Quantity")
                .validate_with(|v: &i64| {
                    if (1..=MAX_QUANTITY).contains(v) {
                        Ok(())
                    } else {
                        Err(format!("Number must be between 1 and {}", MAX_QUANTITY))
                    }
                })
                .interact_text()
                .into_diagnostic()?;

            let added = supplier
                .material(choice)
                .map_err(|e| e.to_string())
                .and_then(|m| order.add_item(m, quantity).map_err(|e| e.to_string()));
            match added {
                Ok(()) => report_ok("Material added to order!"),
                Err(e) => report_error(&format!("Error: {}", e)),
            }
        }

        let total = order.total_price();
        match self.session.place_order(order) {
            Ok(()) => {
                report_ok("Order created successfully!");
                println!("Total: {}", format_price(total));
            }
            Err(e) => report_error(&e.to_string()),
        }
        Ok(())
    }

    fn list_orders(&self) {
        let orders = self.session.orders();
        if orders.is_empty() {
            report_error("No orders available!");
            return;
        }
        println!("\n=== ALL ORDERS ===");
        for (i, order) in orders.iter().enumerate() {
            println!("\n[Order {}]", i + 1);
            println!("{}", order);
        }
    }

    fn save(&self) {
        match self.session.save(&self.store) {
            Ok(()) => {
                report_ok("Data saved successfully!");
                println!("  Suppliers: {}", self.session.suppliers().len());
                println!("  Orders: {}", self.session.orders().len());
            }
            Err(e) => report_error(&format!("Error saving: {}", e)),
        }
    }

    fn load(&mut self) {
        match self.session.load(&self.store) {
            Ok(report) => print_load_summary(&report, &self.session),
            Err(e) => report_error(&format!("Error loading: {}", e)),
        }
    }

    /// Prompt for a supplier; `None` if the user cancels with Esc
    fn select_supplier(&self) -> Result<Option<usize>> {
        let items: Vec<String> = self
            .session
            .suppliers()
            .iter()
            .map(|s| format!("{} - {}", s.name(), s.location()))
            .collect();
        Select::with_theme(&self.theme)
            .with_prompt("Select supplier")
            .items(&items[..])
            .default(0)
            .interact_opt()
            .into_diagnostic()
    }
}

fn print_load_summary(report: &LoadReport, session: &Session) {
    print_skipped(report);
    if report.found_any() {
        report_ok("Data loaded successfully!");
        println!("  Suppliers: {}", session.suppliers().len());
        println!("  Orders: {}", session.orders().len());
    }
}

fn report_ok(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

fn report_error(message: &str) {
    eprintln!("{} {}", style("✗").red(), message);
}
