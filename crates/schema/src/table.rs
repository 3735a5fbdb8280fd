//! Table specifications
//!
//! This module contains the `TableSpec` struct, the generator's input
//! descriptor for one table: a singular snake_case name, an ordered list
//! of fields, and an optional parent-reference table.

use gantry_core::{GantryError, GantryResult, Validatable};
use heck::ToUpperCamelCase;
use serde::{Deserialize, Serialize};

use crate::field::{FieldSpec, is_valid_identifier};

/// Column names the generator adds to every table
///
/// Declared fields may not reuse them.
pub const RESERVED_COLUMNS: &[&str] = &["id", "created_at"];

// ============================================================================
// TableSpec
// ============================================================================

/// The generator's input descriptor for one table
///
/// Field order is significant: it determines both the column order in the
/// migration SQL and the struct-field order in the emitted model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSpec {
    /// Logical table name (singular, snake_case)
    pub table_name: String,

    /// Ordered list of typed columns
    #[serde(default)]
    pub fields: Vec<FieldSpec>,

    /// Optional name of a referenced parent table
    ///
    /// The referenced table is assumed already defined; generation performs
    /// no existence check.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub references: Option<String>,
}

impl TableSpec {
    /// Create a new table spec with no fields
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            fields: Vec::new(),
            references: None,
        }
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    /// Add a field
    pub fn with_field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    /// Replace the field list
    pub fn with_fields(mut self, fields: Vec<FieldSpec>) -> Self {
        self.fields = fields;
        self
    }

    /// Set the referenced parent table
    pub fn with_reference(mut self, table: impl Into<String>) -> Self {
        self.references = Some(table.into());
        self
    }

    // ========================================================================
    // Naming
    // ========================================================================

    /// SQL table name: the logical name pluralized by appending `s`
    ///
    /// A pure suffix rule, no irregular-plural handling.
    pub fn sql_table_name(&self) -> String {
        format!("{}s", self.table_name)
    }

    /// Model type name: snake_case → UpperCamelCase
    /// (e.g. `game_score` → `GameScore`)
    pub fn model_name(&self) -> String {
        self.table_name.to_upper_camel_case()
    }
}

impl Validatable for TableSpec {
    fn validate(&self) -> GantryResult<()> {
        if self.table_name.trim().is_empty() {
            return Err(GantryError::validation("Table name cannot be empty"));
        }

        if !is_valid_identifier(&self.table_name) {
            return Err(GantryError::table_validation(
                &self.table_name,
                "not a valid identifier",
            ));
        }

        if let Some(reference) = &self.references {
            if !is_valid_identifier(reference) {
                return Err(GantryError::table_validation(
                    &self.table_name,
                    format!("reference '{}' is not a valid identifier", reference),
                ));
            }
        }

        let mut seen = Vec::with_capacity(self.fields.len());
        for field in &self.fields {
            field.validate()?;

            if RESERVED_COLUMNS.contains(&field.name.as_str()) {
                return Err(GantryError::field_validation(
                    &field.name,
                    "column name is reserved (added automatically)",
                ));
            }

            if self.references.as_deref() == Some(field.name.as_str()) {
                return Err(GantryError::field_validation(
                    &field.name,
                    "column name collides with the reference column",
                ));
            }

            if seen.contains(&&field.name) {
                return Err(GantryError::DuplicateField {
                    table: self.table_name.clone(),
                    field: field.name.clone(),
                });
            }
            seen.push(&field.name);
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
