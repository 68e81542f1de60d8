//! Order entity type - Purchase orders placed against a supplier catalog

use chrono::Local;
use rand::Rng;
use serde::Serialize;

use crate::core::codec::{LineReader, LineWriter, ParseError, Record};
use crate::core::validation::{require_quantity, require_text, validate_tax_id, ValidationError};
use crate::entities::material::Material;
use crate::entities::supplier::Supplier;
use crate::entities::EntityError;

/// Prefix of every generated order ID
pub const ORDER_ID_PREFIX: &str = "ORD";

/// Timestamp layout of `order_date`
pub const ORDER_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Width of the rendered order table
const RENDER_WIDTH: usize = 100;

/// Relative tolerance when comparing a persisted total with the recomputed one
const TOTAL_TOLERANCE: f64 = 1e-9;

/// A line of an order: a copy of a catalog material and a quantity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineItem {
    pub material: Material,
    pub quantity: u32,
}

impl LineItem {
    /// Unit price times quantity
    pub fn subtotal(&self) -> f64 {
        self.material.price() * f64::from(self.quantity)
    }
}

/// An Order entity
///
/// The supplier name and tax ID are copied when the order is created; the
/// order never refers back to the live supplier. `total_price` always equals
/// the sum of the line subtotals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    /// Order ID (ORD + 5 digits, not guaranteed unique)
    order_id: String,

    /// Supplier name at the time of ordering
    supplier_name: String,

    /// Supplier tax ID at the time of ordering
    supplier_tax_id: String,

    /// Line items in insertion order
    items: Vec<LineItem>,

    /// Sum of line subtotals
    total_price: f64,

    /// Local creation time, `YYYY-MM-DD HH:MM:SS`
    order_date: String,
}

/// Generate an order ID: `ORD` followed by a random number in 10000..=99999
pub fn generate_order_id() -> String {
    let n: u32 = rand::rng().random_range(10000..=99999);
    format!("{}{}", ORDER_ID_PREFIX, n)
}

impl Order {
    /// Start an empty order against a supplier
    pub fn new(supplier: &Supplier) -> Self {
        Self {
            order_id: generate_order_id(),
            supplier_name: supplier.name().to_string(),
            supplier_tax_id: supplier.tax_id().to_string(),
            items: Vec::new(),
            total_price: 0.0,
            order_date: Local::now().format(ORDER_DATE_FORMAT).to_string(),
        }
    }

    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    pub fn supplier_name(&self) -> &str {
        &self.supplier_name
    }

    pub fn supplier_tax_id(&self) -> &str {
        &self.supplier_tax_id
    }

    pub fn order_date(&self) -> &str {
        &self.order_date
    }

    pub fn total_price(&self) -> f64 {
        self.total_price
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add a quantity of a material
    ///
    /// If a line with the same type, material name, thickness and diopter
    /// exists, its quantity grows; otherwise a new line is appended.
    pub fn add_item(&mut self, material: Material, quantity: i64) -> Result<(), ValidationError> {
        let quantity = require_quantity(quantity)?;

        match self
            .items
            .iter_mut()
            .find(|item| item.material.same_item(&material))
        {
            Some(item) => {
                let merged = i64::from(item.quantity) + i64::from(quantity);
                item.quantity = require_quantity(merged)?;
            }
            None => self.items.push(LineItem { material, quantity }),
        }

        self.recalculate_total();
        Ok(())
    }

    /// Remove and return the line at `index`
    pub fn remove_item(&mut self, index: usize) -> Result<LineItem, EntityError> {
        if index >= self.items.len() {
            return Err(EntityError::IndexOutOfRange {
                what: "item",
                index,
                len: self.items.len(),
            });
        }
        let removed = self.items.remove(index);
        self.recalculate_total();
        Ok(removed)
    }

    /// Remove every line
    pub fn clear(&mut self) {
        self.items.clear();
        self.total_price = 0.0;
    }

    fn recalculate_total(&mut self) {
        self.total_price = sum_items(&self.items);
    }
}

fn sum_items(items: &[LineItem]) -> f64 {
    items.iter().map(LineItem::subtotal).sum()
}

fn totals_agree(persisted: f64, computed: f64) -> bool {
    let scale = persisted.abs().max(computed.abs()).max(1.0);
    (persisted - computed).abs() <= TOTAL_TOLERANCE * scale
}

impl std::fmt::Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let heavy = "=".repeat(RENDER_WIDTH);
        let light = "-".repeat(RENDER_WIDTH);

        writeln!(f, "{}", heavy)?;
        writeln!(f, "ORDER DETAILS")?;
        writeln!(f, "{}", heavy)?;
        writeln!(f, "Order ID: {}", self.order_id)?;
        writeln!(
            f,
            "Supplier: {} (Tax ID: {})",
            self.supplier_name, self.supplier_tax_id
        )?;
        writeln!(f, "Order Date: {}", self.order_date)?;
        writeln!(f, "{}", light)?;

        if self.items.is_empty() {
            writeln!(f, "No items in order.")?;
        } else {
            writeln!(
                f,
                "{:<5}{:<20}{:<15}{:<12}{:<10}{:<10}{:<12}{:<12}",
                "No.", "Type", "Material", "Thickness", "Diopter", "Quantity", "Price/Unit", "Subtotal"
            )?;
            writeln!(f, "{}", light)?;
            for (i, item) in self.items.iter().enumerate() {
                let m = &item.material;
                writeln!(
                    f,
                    "{:<5}{:<20}{:<15}{:<12}{:<10}{:<10}{:<12.2}{:<12.2}",
                    i + 1,
                    m.kind(),
                    m.material_name(),
                    format!("{:.2}mm", m.thickness()),
                    format!("{:.2}", m.diopter()),
                    item.quantity,
                    m.price(),
                    item.subtotal()
                )?;
            }
        }

        writeln!(f, "{}", heavy)?;
        writeln!(
            f,
            "{:>width$}{:.2} BGN",
            "TOTAL: ",
            self.total_price,
            width = RENDER_WIDTH - 12
        )?;
        write!(f, "{}", heavy)
    }
}

impl Record for Order {
    const NAME: &'static str = "order count";

    fn encode(&self, w: &mut LineWriter) {
        w.text(&self.order_id)
            .text(&self.supplier_name)
            .text(&self.supplier_tax_id)
            .text(&self.order_date)
            .number(self.total_price)
            .number(self.items.len());
        for item in &self.items {
            item.material.encode(w);
            w.number(item.quantity);
        }
    }

    fn decode(r: &mut LineReader<'_>) -> Result<Self, ParseError> {
        let order_id = r.text("order ID")?;
        require_text("Order ID", order_id).map_err(|e| r.invalid(e))?;
        let supplier_name = r.text("supplier name")?;
        require_text("Supplier name", supplier_name).map_err(|e| r.invalid(e))?;
        let supplier_tax_id = r.text("supplier tax ID")?;
        validate_tax_id(supplier_tax_id).map_err(|e| r.invalid(e))?;
        let order_date = r.text("order date")?;
        require_text("Order date", order_date).map_err(|e| r.invalid(e))?;
        let persisted_total: f64 = r.number("total price")?;

        let count: usize = r.number("item count")?;
        if count == 0 {
            return Err(r.invalid(ValidationError::NoItems));
        }
        let mut items = Vec::with_capacity(count.min(1024));
        for _ in 0..count {
            let material = Material::decode(r)?;
            let quantity: i64 = r.number("quantity")?;
            let quantity = require_quantity(quantity).map_err(|e| r.invalid(e))?;
            items.push(LineItem { material, quantity });
        }

        let total_price = sum_items(&items);
        if !totals_agree(persisted_total, total_price) {
            tracing::warn!(
                order = order_id,
                persisted = persisted_total,
                computed = total_price,
                "persisted order total disagrees with line items; using computed total"
            );
        }

        Ok(Self {
            order_id: order_id.to_string(),
            supplier_name: supplier_name.to_string(),
            supplier_tax_id: supplier_tax_id.to_string(),
            items,
            total_price,
            order_date: order_date.to_string(),
        })
    }
}
