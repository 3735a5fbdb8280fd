//! # Gantry Schema
//!
//! Input descriptors for the Gantry generator.
//!
//! ## Core Concepts
//!
//! - **FieldSpec**: One typed column of a table (name + raw SQL type)
//! - **TableSpec**: The generator's input descriptor for one table
//!   (name, ordered fields, optional parent reference)
//! - **Manifest**: A JSON file listing several TableSpecs for batch
//!   generation
//!

// Module declarations
pub mod field;
pub mod manifest;
pub mod table;

// Re-export commonly used types at crate root
pub use field::FieldSpec;
pub use manifest::{Manifest, load_manifest, save_manifest};
pub use table::TableSpec;

// Re-export core types that are commonly used with schema types
pub use gantry_core::{GantryError, GantryResult, Validatable};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
