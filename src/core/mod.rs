//! Core module - validation, persistence and session state

pub mod codec;
pub mod config;
pub mod session;
pub mod store;
pub mod validation;

pub use codec::{decode_all, encode_all, LineReader, LineWriter, ParseError, Record};
pub use config::Config;
pub use session::{DuplicateField, LoadReport, Session, SessionError, SkippedSupplier};
pub use store::{DataStore, StoreError};
pub use validation::ValidationError;
