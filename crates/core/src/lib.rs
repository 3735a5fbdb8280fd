//! # Gantry Core
//!
//! Core types, traits, and error handling for Gantry.
//!
//! This crate provides the foundational building blocks used throughout
//! the Gantry workspace, including:
//!
//! - **Types**: The SQL → Go type vocabulary (`GoType` and its mapping table)
//! - **Traits**: Common behaviors like `Validatable`
//! - **Errors**: Unified error handling with `GantryError` and `GantryResult`
//!

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use error::{GantryError, GantryResult, ResultExt};
pub use traits::Validatable;
pub use types::{FALLBACK_GO_TYPE, GoType, SQL_TYPE_MAP};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
