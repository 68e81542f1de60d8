//! Runtime configuration - where the data files live

use std::path::{Path, PathBuf};

/// Default supplier file name
pub const DEFAULT_SUPPLIERS_FILE: &str = "suppliers.dat";

/// Default order file name
pub const DEFAULT_ORDERS_FILE: &str = "orders.dat";

/// Resolved configuration
///
/// Built from the global CLI options, which fall back to `OSM_*`
/// environment variables and then to the defaults above.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    data_dir: PathBuf,
    suppliers_file: PathBuf,
    orders_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            suppliers_file: PathBuf::from(DEFAULT_SUPPLIERS_FILE),
            orders_file: PathBuf::from(DEFAULT_ORDERS_FILE),
        }
    }
}

impl Config {
    pub fn new(
        data_dir: impl Into<PathBuf>,
        suppliers_file: impl Into<PathBuf>,
        orders_file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            data_dir: data_dir.into(),
            suppliers_file: suppliers_file.into(),
            orders_file: orders_file.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Supplier file path; absolute file names ignore the data directory
    pub fn suppliers_path(&self) -> PathBuf {
        self.data_dir.join(&self.suppliers_file)
    }

    /// Order file path; absolute file names ignore the data directory
    pub fn orders_path(&self) -> PathBuf {
        self.data_dir.join(&self.orders_file)
    }
}
