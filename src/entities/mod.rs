//! Entity type definitions

pub mod material;
pub mod order;
pub mod supplier;

pub use material::Material;
pub use order::{LineItem, Order};
pub use supplier::Supplier;

use thiserror::Error;

use crate::core::validation::ValidationError;

/// Errors raised by entity operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EntityError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid {what} index {index} (have {len})")]
    IndexOutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },
}
