//! CLI command implementations

pub mod completions;
pub mod data;
pub mod mat;
pub mod menu;
pub mod order;
pub mod sup;
