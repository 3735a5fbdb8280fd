//! Config-file loading
//!
//! An optional `gantry.toml` can pin the two output directories:
//!
//! ```toml
//! [paths]
//! migrations = "db/migrations"
//! models = "app/models"
//! ```
//!
//! Precedence is CLI flag > config file > built-in default.

use gantry_codegen::GeneratorConfig;
use gantry_core::{GantryError, GantryResult};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// File name probed when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "gantry.toml";

// ============================================================================
// File format
// ============================================================================

/// Parsed contents of a `gantry.toml`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    /// Output path overrides
    #[serde(default)]
    pub paths: PathsSection,
}

/// The `[paths]` table
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathsSection {
    /// Migrations output directory
    pub migrations: Option<PathBuf>,

    /// Models output directory
    pub models: Option<PathBuf>,
}

// ============================================================================
// Loading
// ============================================================================

/// Load the config file.
///
/// An explicitly named file must exist; the default `gantry.toml` is
/// optional and its absence yields an empty config.
pub fn load_config(explicit: Option<&Path>) -> GantryResult<FileConfig> {
    let (path, required) = match explicit {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
    };

    if !path.exists() {
        if required {
            return Err(GantryError::ConfigParse {
                path,
                message: "file not found".to_string(),
            });
        }
        return Ok(FileConfig::default());
    }

    let text = std::fs::read_to_string(&path).map_err(|e| GantryError::FileRead {
        path: path.clone(),
        message: e.to_string(),
    })?;

    toml::from_str(&text).map_err(|e| GantryError::ConfigParse {
        path,
        message: e.to_string(),
    })
}

/// Resolve the generator configuration from flags and the config file.
pub fn resolve_generator_config(
    file: &FileConfig,
    migrations_flag: Option<PathBuf>,
    models_flag: Option<PathBuf>,
) -> GeneratorConfig {
    let defaults = GeneratorConfig::default();

    GeneratorConfig {
        migrations_dir: migrations_flag
            .or_else(|| file.paths.migrations.clone())
            .unwrap_or(defaults.migrations_dir),
        models_dir: models_flag
            .or_else(|| file.paths.models.clone())
            .unwrap_or(defaults.models_dir),
    }
}

// ============================================================================
// Tests
// ============================================================================
