//! # Generated Artifacts
//!
//! The write-once outputs of one generation call: a migration file and a
//! model file. Artifacts are immutable after construction (private fields,
//! accessor methods); this component never mutates or deletes files it
//! has written.

use gantry_core::{GantryError, GantryResult};
use std::path::{Path, PathBuf};

use crate::sql::{DOWN_MARKER, UP_MARKER};

// ============================================================================
// MigrationArtifact
// ============================================================================

/// A generated goose migration: paired up/down SQL and the file path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationArtifact {
    path: PathBuf,
    up_sql: String,
    down_sql: String,
}

impl MigrationArtifact {
    /// Create a new migration artifact
    pub fn new(path: impl Into<PathBuf>, up_sql: impl Into<String>, down_sql: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            up_sql: up_sql.into(),
            down_sql: down_sql.into(),
        }
    }

    /// Target file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The `CREATE TABLE` statement
    pub fn up_sql(&self) -> &str {
        &self.up_sql
    }

    /// The `DROP TABLE` statement
    pub fn down_sql(&self) -> &str {
        &self.down_sql
    }

    /// Assemble the full migration file text.
    ///
    /// Goose layout: up marker, blank line, CREATE statement, blank line,
    /// down marker, blank line, DROP statement, no trailing newline.
    pub fn content(&self) -> String {
        format!(
            "{}\n\n{}\n\n{}\n\n{}",
            UP_MARKER, self.up_sql, DOWN_MARKER, self.down_sql
        )
    }

    /// Write the migration file to disk
    pub fn write(&self) -> GantryResult<()> {
        std::fs::write(&self.path, self.content()).map_err(|e| GantryError::FileWrite {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }
}

// ============================================================================
// ModelArtifact
// ============================================================================

/// A generated Go model source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelArtifact {
    path: PathBuf,
    source: String,
}

impl ModelArtifact {
    /// Create a new model artifact
    pub fn new(path: impl Into<PathBuf>, source: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            source: source.into(),
        }
    }

    /// Target file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The model source text
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Write the model file to disk
    pub fn write(&self) -> GantryResult<()> {
        std::fs::write(&self.path, &self.source).map_err(|e| GantryError::FileWrite {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }
}

// ============================================================================
// TableArtifacts
// ============================================================================

/// The artifact pair produced for one table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableArtifacts {
    /// The goose migration file
    pub migration: MigrationArtifact,
    /// The Go model file
    pub model: ModelArtifact,
}

// ============================================================================
// Tests
// ============================================================================
