//! Command-line argument definitions

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::cli::commands::{
    completions::CompletionsArgs, data::DataCommands, mat::MatCommands, order::OrderCommands,
    sup::SupCommands,
};
use crate::core::config::{Config, DEFAULT_ORDERS_FILE, DEFAULT_SUPPLIERS_FILE};

#[derive(Parser, Debug)]
#[command(
    name = "osm",
    author,
    version,
    about = "Optical Supply Manager - manage optical-material suppliers and purchase orders",
    long_about = "Manage optical-material suppliers, their material catalogs and purchase \
                  orders. Data is kept in two plain-text files in the data directory.\n\n\
                  Run without a subcommand to start the interactive menu."
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Options shared by every command
#[derive(clap::Args, Debug, Clone)]
pub struct GlobalOpts {
    /// Directory holding the data files
    #[arg(long, global = true, env = "OSM_DATA_DIR", default_value = ".")]
    pub data_dir: PathBuf,

    /// Supplier file name (relative to the data directory)
    #[arg(long, global = true, env = "OSM_SUPPLIERS_FILE", default_value = DEFAULT_SUPPLIERS_FILE)]
    pub suppliers_file: PathBuf,

    /// Order file name (relative to the data directory)
    #[arg(long, global = true, env = "OSM_ORDERS_FILE", default_value = DEFAULT_ORDERS_FILE)]
    pub orders_file: PathBuf,

    /// Output format for list and show commands
    #[arg(long, short = 'o', global = true, value_enum, default_value_t = OutputFormat::Auto)]
    pub output: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

impl GlobalOpts {
    /// Resolve the runtime configuration
    pub fn config(&self) -> Config {
        Config::new(&self.data_dir, &self.suppliers_file, &self.orders_file)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables
    Auto,
    /// Same as auto
    Table,
    /// Pretty-printed JSON
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive menu (default)
    Menu,

    /// Supplier management
    #[command(subcommand)]
    Sup(SupCommands),

    /// Supplier catalog management
    #[command(subcommand)]
    Mat(MatCommands),

    /// Purchase orders
    #[command(subcommand)]
    Order(OrderCommands),

    /// Data file maintenance
    #[command(subcommand)]
    Data(DataCommands),

    /// Generate a shell completion script
    Completions(CompletionsArgs),
}
