//! OSM: Optical Supply Manager
//!
//! Manage optical-material suppliers, their material catalogs and purchase
//! orders, persisted as line-oriented plain-text files.

pub mod cli;
pub mod core;
pub mod entities;
