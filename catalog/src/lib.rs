//! # Catalog
//!
//! This crate loads the clothing catalog and turns each row into an
//! [`ItemRecord`] with a derived human-readable description.
//!
//! The catalog is a CSV file with one row per garment. Required columns are
//! `Clothes`, `Color`, `Category`, `Occasion` (or `Outdoor`), and `Size`;
//! optional garment-type flag columns (`Tshirt`, `Pant`, `Hoodie`,
//! `Business`) are picked up when present.

pub mod error;
pub mod reader;
pub mod record;

pub use error::{CatalogError, Result};
pub use reader::read_catalog;
pub use record::{ItemFlags, ItemRecord};
