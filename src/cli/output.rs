//! Table rendering for list output

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::cli::helpers::{format_price, truncate_str};
use crate::entities::{Material, Order, Supplier};

#[derive(Tabled)]
struct SupplierRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "TAX ID")]
    tax_id: String,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "LOCATION")]
    location: String,
    #[tabled(rename = "PHONE")]
    phone: String,
    #[tabled(rename = "MATERIALS")]
    materials: usize,
}

#[derive(Tabled)]
struct MaterialRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "TYPE")]
    kind: String,
    #[tabled(rename = "MATERIAL")]
    material_name: String,
    #[tabled(rename = "THICKNESS")]
    thickness: String,
    #[tabled(rename = "DIOPTER")]
    diopter: String,
    #[tabled(rename = "PRICE")]
    price: String,
}

#[derive(Tabled)]
struct OrderRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "ORDER ID")]
    order_id: String,
    #[tabled(rename = "SUPPLIER")]
    supplier: String,
    #[tabled(rename = "DATE")]
    date: String,
    #[tabled(rename = "ITEMS")]
    items: usize,
    #[tabled(rename = "TOTAL")]
    total: String,
}

/// Render suppliers as a table, numbered from 1
pub fn supplier_table(suppliers: &[Supplier]) -> String {
    let rows = suppliers.iter().enumerate().map(|(i, s)| SupplierRow {
        position: i + 1,
        tax_id: s.tax_id().to_string(),
        name: truncate_str(s.name(), 30),
        location: truncate_str(s.location(), 20),
        phone: s.phone().to_string(),
        materials: s.material_count(),
    });
    Table::new(rows).with(Style::psql()).to_string()
}

/// Render a material catalog as a table, numbered from 1
pub fn material_table(materials: &[Material]) -> String {
    let rows = materials.iter().enumerate().map(|(i, m)| MaterialRow {
        position: i + 1,
        kind: truncate_str(m.kind(), 20),
        material_name: truncate_str(m.material_name(), 20),
        thickness: format!("{:.2}mm", m.thickness()),
        diopter: format!("{:+.2}", m.diopter()),
        price: format_price(m.price()),
    });
    Table::new(rows).with(Style::psql()).to_string()
}

/// Render an order summary table, numbered from 1
pub fn order_table(orders: &[Order]) -> String {
    let rows = orders.iter().enumerate().map(|(i, o)| OrderRow {
        position: i + 1,
        order_id: o.order_id().to_string(),
        supplier: truncate_str(o.supplier_name(), 30),
        date: o.order_date().to_string(),
        items: o.item_count(),
        total: format_price(o.total_price()),
    });
    Table::new(rows).with(Style::psql()).to_string()
}
