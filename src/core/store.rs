//! Whole-file persistence for the supplier and order collections
//!
//! Each collection lives in its own text file and is rewritten in full on
//! every save. A missing file on load means there is nothing to load; a
//! present but malformed file is an error.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::codec::{decode_all, encode_all, ParseError, Record};
use crate::core::config::Config;
use crate::entities::{Order, Supplier};

/// Errors reading or writing persisted data
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed data in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}

/// Locations of the persisted collections
#[derive(Debug, Clone)]
pub struct DataStore {
    suppliers_path: PathBuf,
    orders_path: PathBuf,
}

impl DataStore {
    pub fn new(suppliers_path: impl Into<PathBuf>, orders_path: impl Into<PathBuf>) -> Self {
        Self {
            suppliers_path: suppliers_path.into(),
            orders_path: orders_path.into(),
        }
    }

    /// Resolve both file paths from configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.suppliers_path(), config.orders_path())
    }

    pub fn suppliers_path(&self) -> &Path {
        &self.suppliers_path
    }

    pub fn orders_path(&self) -> &Path {
        &self.orders_path
    }

    pub fn save_suppliers(&self, suppliers: &[Supplier]) -> Result<(), StoreError> {
        write_records(&self.suppliers_path, suppliers)
    }

    pub fn save_orders(&self, orders: &[Order]) -> Result<(), StoreError> {
        write_records(&self.orders_path, orders)
    }

    /// Load suppliers, or `None` if the file does not exist
    pub fn load_suppliers(&self) -> Result<Option<Vec<Supplier>>, StoreError> {
        read_records(&self.suppliers_path)
    }

    /// Load orders, or `None` if the file does not exist
    pub fn load_orders(&self) -> Result<Option<Vec<Order>>, StoreError> {
        read_records(&self.orders_path)
    }
}

fn write_records<T: Record>(path: &Path, items: &[T]) -> Result<(), StoreError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| StoreError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, encode_all(items)).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), count = items.len(), "saved {}", T::NAME);
    Ok(())
}

fn read_records<T: Record>(path: &Path) -> Result<Option<Vec<T>>, StoreError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no data file, nothing to load");
            return Ok(None);
        }
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let items = decode_all(&content).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), count = items.len(), "loaded {}", T::NAME);
    Ok(Some(items))
}
