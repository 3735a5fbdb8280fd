//! Manifest files for batch generation
//!
//! A manifest is a JSON file listing several table specs, so one process
//! run can scaffold a whole schema. This module provides serialization,
//! file I/O, validation, and a warn-only lint for references to tables
//! the manifest does not define.

use gantry_core::{GantryError, GantryResult, Validatable};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::table::TableSpec;

// ============================================================================
// Manifest
// ============================================================================

/// A batch of table specs, generated in order in a single run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Tables to generate, in order
    pub tables: Vec<TableSpec>,
}

impl Manifest {
    /// Create an empty manifest
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a table
    pub fn with_table(mut self, table: TableSpec) -> Self {
        self.tables.push(table);
        self
    }

    /// Number of tables in the manifest
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Check if the manifest has no tables
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> GantryResult<String> {
        serde_json::to_string_pretty(self).map_err(Into::into)
    }

    /// Deserialize from a JSON string
    pub fn from_json(json: &str) -> GantryResult<Self> {
        serde_json::from_str(json).map_err(Into::into)
    }

    /// Warn-only lint: references to tables the manifest does not define.
    ///
    /// Generation itself never checks reference existence (the referenced
    /// table may live outside the manifest), so these are warnings rather
    /// than errors.
    pub fn lint(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        for table in &self.tables {
            if let Some(reference) = &table.references {
                let defined = self.tables.iter().any(|t| &t.table_name == reference);
                if !defined {
                    warnings.push(format!(
                        "table '{}' references '{}', which this manifest does not define",
                        table.table_name, reference
                    ));
                }
            }
        }

        warnings
    }
}

impl Validatable for Manifest {
    fn validate(&self) -> GantryResult<()> {
        let mut seen = Vec::with_capacity(self.tables.len());
        for table in &self.tables {
            table.validate()?;

            if seen.contains(&&table.table_name) {
                return Err(GantryError::DuplicateTable(table.table_name.clone()));
            }
            seen.push(&table.table_name);
        }

        Ok(())
    }
}

// ============================================================================
// File I/O
// ============================================================================

/// Load a manifest from a JSON file
pub fn load_manifest(path: impl AsRef<Path>) -> GantryResult<Manifest> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(GantryError::ManifestNotFound(path.to_path_buf()));
    }

    let json = std::fs::read_to_string(path).map_err(|e| GantryError::FileRead {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    Manifest::from_json(&json).map_err(|e| match e {
        GantryError::JsonSerialization(je) => GantryError::FileRead {
            path: path.to_path_buf(),
            message: format!("Invalid manifest format: {}", je),
        },
        other => other,
    })
}

/// Save a manifest to a JSON file
pub fn save_manifest(manifest: &Manifest, path: impl AsRef<Path>) -> GantryResult<()> {
    let path = path.as_ref();
    let json = manifest.to_json()?;

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| GantryError::DirectoryCreate {
                path: parent.to_path_buf(),
                message: e.to_string(),
            })?;
        }
    }

    std::fs::write(path, json).map_err(|e| GantryError::FileWrite {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldSpec;
    use tempfile::TempDir;

    fn sample_manifest() -> Manifest {
        Manifest::new()
            .with_table(TableSpec::new("game").with_field(FieldSpec::new(
                "name",
                "VARCHAR(100) NOT NULL",
            )))
            .with_table(
                TableSpec::new("player")
                    .with_field(FieldSpec::new("name", "VARCHAR(300) NOT NULL"))
                    .with_reference("game"),
            )
    }

    #[test]
    fn test_json_round_trip() {
        let manifest = sample_manifest();

        let json = manifest.to_json().unwrap();
        assert!(json.contains("\"game\""));

        let loaded = Manifest::from_json(&json).unwrap();
        assert_eq!(loaded, manifest);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tables.json");

        let manifest = sample_manifest();
        save_manifest(&manifest, &path).unwrap();
        assert!(path.exists());

        let loaded = load_manifest(&path).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.tables[1].references.as_deref(), Some("game"));
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = load_manifest("/nonexistent/path/tables.json");
        assert!(matches!(result, Err(GantryError::ManifestNotFound(_))));
    }

    #[test]
    fn test_load_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let result = load_manifest(&path);
        assert!(matches!(result, Err(GantryError::FileRead { .. })));
    }

    #[test]
    fn test_optional_fields_are_lenient() {
        // `fields` and `references` may be omitted entirely
        let manifest = Manifest::from_json(r#"{"tables": [{"table_name": "game"}]}"#).unwrap();
        assert_eq!(manifest.tables[0].fields.len(), 0);
        assert!(manifest.tables[0].references.is_none());
    }

    #[test]
    fn test_duplicate_table_names_rejected() {
        let manifest = Manifest::new()
            .with_table(TableSpec::new("game"))
            .with_table(TableSpec::new("game"));

        let err = manifest.validate().unwrap_err();
        assert!(matches!(err, GantryError::DuplicateTable(_)));
    }

    #[test]
    fn test_lint_unknown_reference_warns() {
        let manifest =
            Manifest::new().with_table(TableSpec::new("player").with_reference("game"));

        // Valid, but linted
        assert!(manifest.is_valid());
        let warnings = manifest.lint();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("'game'"));
    }

    #[test]
    fn test_lint_defined_reference_is_clean() {
        assert!(sample_manifest().lint().is_empty());
    }
}
