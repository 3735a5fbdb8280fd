//! Error types for Gantry
//!
//! This module provides unified error handling across the whole tool,
//! including validation errors, IO errors, serialization errors, and more.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for Gantry
#[derive(Debug, Error)]
pub enum GantryError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// General validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Table spec validation failed
    #[error("Table validation failed for '{table}': {message}")]
    TableValidation { table: String, message: String },

    /// Field spec validation failed
    #[error("Field validation failed for '{field}': {message}")]
    FieldValidation { field: String, message: String },

    // ========================================================================
    // Duplicate Errors
    // ========================================================================
    /// Duplicate field name within a table
    #[error("Duplicate field name: '{field}' already exists in table '{table}'")]
    DuplicateField { table: String, field: String },

    /// Duplicate table name within a manifest
    #[error("Duplicate table name: '{0}' already exists")]
    DuplicateTable(String),

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    /// Manifest file not found
    #[error("Manifest not found at path: {0}")]
    ManifestNotFound(PathBuf),

    // ========================================================================
    // IO Errors
    // ========================================================================
    /// File IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File read error
    #[error("Failed to read file '{path}': {message}")]
    FileRead { path: PathBuf, message: String },

    /// File write error
    #[error("Failed to write file '{path}': {message}")]
    FileWrite { path: PathBuf, message: String },

    /// Directory creation failed
    #[error("Failed to create directory '{path}': {message}")]
    DirectoryCreate { path: PathBuf, message: String },

    // ========================================================================
    // Serialization Errors
    // ========================================================================
    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Config file could not be parsed
    #[error("Failed to parse config file '{path}': {message}")]
    ConfigParse { path: PathBuf, message: String },

    // ========================================================================
    // Generic Errors
    // ========================================================================
    /// Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

impl GantryError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        GantryError::Validation(msg.into())
    }

    /// Create a table validation error
    pub fn table_validation(table: impl Into<String>, msg: impl Into<String>) -> Self {
        GantryError::TableValidation {
            table: table.into(),
            message: msg.into(),
        }
    }

    /// Create a field validation error
    pub fn field_validation(field: impl Into<String>, msg: impl Into<String>) -> Self {
        GantryError::FieldValidation {
            field: field.into(),
            message: msg.into(),
        }
    }

    /// Create an error with context
    pub fn with_context(context: impl Into<String>, msg: impl Into<String>) -> Self {
        GantryError::WithContext {
            context: context.into(),
            message: msg.into(),
        }
    }

    /// Check if this error is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            GantryError::Validation(_)
                | GantryError::TableValidation { .. }
                | GantryError::FieldValidation { .. }
                | GantryError::DuplicateField { .. }
                | GantryError::DuplicateTable(_)
        )
    }

    /// Check if this error is an IO error
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            GantryError::Io(_)
                | GantryError::FileRead { .. }
                | GantryError::FileWrite { .. }
                | GantryError::ManifestNotFound(_)
        )
    }

    /// Check if this error is a configuration error
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            GantryError::DirectoryCreate { .. } | GantryError::ConfigParse { .. }
        )
    }
}

/// Result type alias using GantryError
pub type GantryResult<T> = Result<T, GantryError>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn with_context<C: Into<String>>(self, context: C) -> GantryResult<T>;
}

impl<T, E: Into<GantryError>> ResultExt<T> for Result<T, E> {
    fn with_context<C: Into<String>>(self, context: C) -> GantryResult<T> {
        self.map_err(|e| {
            let err: GantryError = e.into();
            GantryError::WithContext {
                context: context.into(),
                message: err.to_string(),
            }
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = GantryError::validation("Table name is required");
        assert!(err.is_validation());
        assert!(!err.is_io());
        assert_eq!(err.to_string(), "Validation error: Table name is required");
    }

    #[test]
    fn test_table_validation_error() {
        let err = GantryError::table_validation("game", "name is not a valid identifier");
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Table validation failed for 'game': name is not a valid identifier"
        );
    }

    #[test]
    fn test_field_validation_error() {
        let err = GantryError::field_validation("name", "SQL type cannot be empty");
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Field validation failed for 'name': SQL type cannot be empty"
        );
    }

    #[test]
    fn test_duplicate_errors() {
        let err = GantryError::DuplicateTable("game".to_string());
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Duplicate table name: 'game' already exists");

        let err = GantryError::DuplicateField {
            table: "player".to_string(),
            field: "name".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Duplicate field name: 'name' already exists in table 'player'"
        );
    }

    #[test]
    fn test_error_with_context() {
        let err = GantryError::with_context("Loading manifest", "Permission denied");
        assert_eq!(err.to_string(), "Loading manifest: Permission denied");
    }

    #[test]
    fn test_io_error_classification() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: GantryError = io_err.into();
        assert!(err.is_io());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_config_error_classification() {
        let err = GantryError::DirectoryCreate {
            path: PathBuf::from("/readonly/migrations"),
            message: "permission denied".to_string(),
        };
        assert!(err.is_config());
        assert!(!err.is_validation());
    }
}
