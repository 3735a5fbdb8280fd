//! Field specifications for table columns
//!
//! This module contains the `FieldSpec` struct describing one typed column
//! of a table: a snake_case name and the raw SQL type emitted verbatim into
//! the migration.

use gantry_core::{GantryError, GantryResult, Validatable};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// ============================================================================
// FieldSpec
// ============================================================================

/// Represents one typed column of a table
///
/// The SQL type is kept as the caller wrote it (including constraint
/// suffixes like `NOT NULL`) and emitted verbatim into the migration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Column name (snake_case identifier)
    pub name: String,

    /// Raw SQL column type, e.g. `VARCHAR(255)` or `INT`
    pub sql_type: String,
}

impl FieldSpec {
    /// Create a new field spec
    pub fn new(name: impl Into<String>, sql_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sql_type: sql_type.into(),
        }
    }
}

impl Validatable for FieldSpec {
    fn validate(&self) -> GantryResult<()> {
        if self.name.trim().is_empty() {
            return Err(GantryError::validation("Field name cannot be empty"));
        }

        if !is_valid_identifier(&self.name) {
            return Err(GantryError::field_validation(
                &self.name,
                "not a valid identifier",
            ));
        }

        if self.sql_type.trim().is_empty() {
            return Err(GantryError::field_validation(
                &self.name,
                "SQL type cannot be empty",
            ));
        }

        Ok(())
    }
}

impl FromStr for FieldSpec {
    type Err = GantryError;

    /// Parse the CLI field syntax `name:SQL TYPE`
    fn from_str(s: &str) -> GantryResult<Self> {
        let Some((name, sql_type)) = s.split_once(':') else {
            return Err(GantryError::validation(format!(
                "invalid field '{}': expected 'name:SQL TYPE'",
                s
            )));
        };

        let field = FieldSpec::new(name.trim(), sql_type.trim());
        field.validate()?;
        Ok(field)
    }
}

impl std::fmt::Display for FieldSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.name, self.sql_type)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Check if a string is a valid snake_case identifier
pub(crate) fn is_valid_identifier(s: &str) -> bool {
    if s.is_empty() {
        return false;
    }

    let mut chars = s.chars();
    let first = chars.next().unwrap();

    // First character must be letter or underscore
    if !first.is_alphabetic() && first != '_' {
        return false;
    }

    // Rest must be alphanumeric or underscore
    chars.all(|c| c.is_alphanumeric() || c == '_')
}

// ============================================================================
// Tests
// ============================================================================
