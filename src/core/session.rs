//! Session state - the in-memory supplier and order collections
//!
//! The session owns both collections for the life of the process and applies
//! the duplicate-supplier policy: no two suppliers may share a tax ID or a
//! phone number. New suppliers that collide are rejected; colliding records
//! in a loaded file are skipped with a warning.

use thiserror::Error;

use crate::core::store::{DataStore, StoreError};
use crate::entities::{EntityError, Material, Order, Supplier};

/// Identity field on which two suppliers collided
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateField {
    TaxId,
    Phone,
}

impl std::fmt::Display for DuplicateField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DuplicateField::TaxId => write!(f, "tax ID"),
            DuplicateField::Phone => write!(f, "phone number"),
        }
    }
}

/// A supplier record dropped while loading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedSupplier {
    pub field: DuplicateField,
    pub value: String,
}

/// Outcome of [`Session::load`]
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Whether the supplier file existed
    pub suppliers_found: bool,
    /// Whether the order file existed
    pub orders_found: bool,
    /// Duplicate suppliers that were skipped
    pub skipped: Vec<SkippedSupplier>,
}

impl LoadReport {
    pub fn found_any(&self) -> bool {
        self.suppliers_found || self.orders_found
    }
}

/// Errors raised by session operations
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("A supplier with this {field} already exists: {value}")]
    DuplicateSupplier { field: DuplicateField, value: String },

    #[error("No supplier #{position} (have {count})")]
    UnknownSupplier { position: usize, count: usize },

    #[error("No order #{position} (have {count})")]
    UnknownOrder { position: usize, count: usize },

    #[error("Order is empty and will not be saved")]
    EmptyOrder,

    #[error(transparent)]
    Entity(#[from] EntityError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// The working set of suppliers and orders
#[derive(Debug, Default)]
pub struct Session {
    suppliers: Vec<Supplier>,
    orders: Vec<Order>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn suppliers(&self) -> &[Supplier] {
        &self.suppliers
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Find which identity field of `candidate` is already taken
    pub fn find_duplicate(&self, candidate: &Supplier) -> Option<DuplicateField> {
        find_duplicate(&self.suppliers, candidate)
    }

    /// Add a supplier, rejecting tax ID or phone collisions
    ///
    /// Returns the 0-based index of the new supplier.
    pub fn add_supplier(&mut self, supplier: Supplier) -> Result<usize, SessionError> {
        if let Some(field) = self.find_duplicate(&supplier) {
            let value = duplicate_value(&supplier, field).to_string();
            return Err(SessionError::DuplicateSupplier { field, value });
        }
        self.suppliers.push(supplier);
        Ok(self.suppliers.len() - 1)
    }

    /// Look up a supplier by 0-based index
    pub fn supplier(&self, index: usize) -> Result<&Supplier, SessionError> {
        let count = self.suppliers.len();
        self.suppliers
            .get(index)
            .ok_or(SessionError::UnknownSupplier {
                position: index + 1,
                count,
            })
    }

    /// Look up an order by 0-based index
    pub fn order(&self, index: usize) -> Result<&Order, SessionError> {
        let count = self.orders.len();
        self.orders.get(index).ok_or(SessionError::UnknownOrder {
            position: index + 1,
            count,
        })
    }

    /// Append a material to a supplier's catalog
    pub fn add_material(&mut self, supplier: usize, material: Material) -> Result<(), SessionError> {
        self.supplier_mut(supplier)?.add_material(material);
        Ok(())
    }

    /// Remove a material from a supplier's catalog
    pub fn remove_material(
        &mut self,
        supplier: usize,
        material: usize,
    ) -> Result<Material, SessionError> {
        Ok(self.supplier_mut(supplier)?.remove_material(material)?)
    }

    /// Record a finished order; empty orders are refused
    pub fn place_order(&mut self, order: Order) -> Result<(), SessionError> {
        if order.is_empty() {
            return Err(SessionError::EmptyOrder);
        }
        self.orders.push(order);
        Ok(())
    }

    /// Write both collections to disk
    pub fn save(&self, store: &DataStore) -> Result<(), SessionError> {
        store.save_suppliers(&self.suppliers)?;
        store.save_orders(&self.orders)?;
        tracing::info!(
            suppliers = self.suppliers.len(),
            orders = self.orders.len(),
            "data saved"
        );
        Ok(())
    }

    /// Replace the collections with the contents of the data files
    ///
    /// A missing file leaves its collection untouched. Both files are fully
    /// decoded before anything is replaced, so a malformed file leaves the
    /// session unchanged.
    pub fn load(&mut self, store: &DataStore) -> Result<LoadReport, SessionError> {
        let suppliers = store.load_suppliers()?;
        let orders = store.load_orders()?;

        let mut report = LoadReport {
            suppliers_found: suppliers.is_some(),
            orders_found: orders.is_some(),
            skipped: Vec::new(),
        };

        if let Some(loaded) = suppliers {
            let mut accepted: Vec<Supplier> = Vec::with_capacity(loaded.len());
            for supplier in loaded {
                if let Some(field) = find_duplicate(&accepted, &supplier) {
                    let value = duplicate_value(&supplier, field).to_string();
                    tracing::warn!(%field, %value, "skipping duplicate supplier");
                    report.skipped.push(SkippedSupplier { field, value });
                    continue;
                }
                accepted.push(supplier);
            }
            self.suppliers = accepted;
        }

        if let Some(loaded) = orders {
            self.orders = loaded;
        }

        tracing::info!(
            suppliers = self.suppliers.len(),
            orders = self.orders.len(),
            skipped = report.skipped.len(),
            "data loaded"
        );
        Ok(report)
    }

    fn supplier_mut(&mut self, index: usize) -> Result<&mut Supplier, SessionError> {
        let count = self.suppliers.len();
        self.suppliers
            .get_mut(index)
            .ok_or(SessionError::UnknownSupplier {
                position: index + 1,
                count,
            })
    }
}

fn find_duplicate(existing: &[Supplier], candidate: &Supplier) -> Option<DuplicateField> {
    if existing.iter().any(|s| s.tax_id() == candidate.tax_id()) {
        Some(DuplicateField::TaxId)
    } else if existing.iter().any(|s| s.phone() == candidate.phone()) {
        Some(DuplicateField::Phone)
    } else {
        None
    }
}

fn duplicate_value(supplier: &Supplier, field: DuplicateField) -> &str {
    match field {
        DuplicateField::TaxId => supplier.tax_id(),
        DuplicateField::Phone => supplier.phone(),
    }
}
