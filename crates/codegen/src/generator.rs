//! # Generator Orchestrator
//!
//! The `Generator` is the top-level entry point for one-shot scaffolding.
//! It takes a [`TableSpec`], builds a [`TablePlan`], renders the SQL and
//! model outputs, and persists both artifacts under the configured output
//! directories.
//!
//! ## Pipeline
//!
//! ```text
//! TableSpec + GeneratorConfig
//!         │
//!         ▼
//!   TablePlan::from_spec()        (validates, fails fast)
//!         │
//!         ├──► sql::render_up / render_down ──► MigrationArtifact
//!         ├──► model::render ─────────────────► ModelArtifact
//!         │
//!         ▼
//!   TableArtifacts written to disk
//! ```
//!
//! Any failure is terminal for the run: no retry, and no cleanup of files
//! already written (an accepted gap for an offline scaffolding tool).

use gantry_core::{GantryError, GantryResult};
use gantry_schema::TableSpec;
use std::path::PathBuf;
use tracing::info;

use crate::artifact::{MigrationArtifact, ModelArtifact, TableArtifacts};
use crate::plan::TablePlan;
use crate::version::VersionClock;
use crate::{model, sql};

// ============================================================================
// GeneratorConfig
// ============================================================================

/// Configuration for the generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Output directory for migration files
    pub migrations_dir: PathBuf,

    /// Output directory for model files
    pub models_dir: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            migrations_dir: PathBuf::from("migrations"),
            models_dir: PathBuf::from("models"),
        }
    }
}

impl GeneratorConfig {
    /// Create a configuration with the default directories
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the migrations output directory
    pub fn with_migrations_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.migrations_dir = dir.into();
        self
    }

    /// Set the models output directory
    pub fn with_models_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.models_dir = dir.into();
        self
    }

    /// Create both output directories (idempotent)
    pub fn ensure_dirs(&self) -> GantryResult<()> {
        for dir in [&self.migrations_dir, &self.models_dir] {
            std::fs::create_dir_all(dir).map_err(|e| GantryError::DirectoryCreate {
                path: dir.clone(),
                message: e.to_string(),
            })?;
        }
        Ok(())
    }
}

// ============================================================================
// Generator
// ============================================================================

/// Top-level generator driving the table-spec to artifacts pipeline.
///
/// Holds the [`VersionClock`], so version tokens stay strictly increasing
/// across every generation in one process run.
#[derive(Debug, Clone)]
pub struct Generator {
    config: GeneratorConfig,
    clock: VersionClock,
}

impl Generator {
    // ====================================================================
    // Construction
    // ====================================================================

    /// Create a new generator with the given configuration
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            clock: VersionClock::new(),
        }
    }

    /// Create a generator with default configuration
    pub fn with_defaults() -> Self {
        Self::new(GeneratorConfig::default())
    }

    /// Get the current configuration
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    // ====================================================================
    // Generation
    // ====================================================================

    /// Run the pure pipeline without touching the filesystem.
    ///
    /// Validates the table spec, allocates a version token, and renders both
    /// artifacts. Used by dry runs and tests.
    pub fn build(&mut self, table: &TableSpec) -> GantryResult<TableArtifacts> {
        let plan = TablePlan::from_spec(table)?;
        let token = self.clock.next_token();

        let migration = MigrationArtifact::new(
            self.migration_path(&token, &plan.logical_name),
            sql::render_up(&plan),
            sql::render_down(&plan),
        );
        let model = ModelArtifact::new(
            self.model_path(&plan.logical_name),
            model::render(&plan),
        );

        Ok(TableArtifacts { migration, model })
    }

    /// Generate and persist both artifacts for one table.
    ///
    /// An invalid spec fails before any filesystem effect; a failed write
    /// aborts without cleaning up the other file.
    pub fn generate(&mut self, table: &TableSpec) -> GantryResult<TableArtifacts> {
        let artifacts = self.build(table)?;
        self.config.ensure_dirs()?;

        artifacts.migration.write()?;
        info!(path = %artifacts.migration.path().display(), "wrote migration");

        artifacts.model.write()?;
        info!(path = %artifacts.model.path().display(), "wrote model");

        Ok(artifacts)
    }

    /// Generate artifacts for several tables in order.
    ///
    /// Version tokens stay strictly increasing across the whole batch.
    pub fn generate_all(&mut self, tables: &[TableSpec]) -> GantryResult<Vec<TableArtifacts>> {
        let mut results = Vec::with_capacity(tables.len());
        for table in tables {
            results.push(self.generate(table)?);
        }
        Ok(results)
    }

    // ====================================================================
    // Paths
    // ====================================================================

    fn migration_path(&self, token: &str, logical_name: &str) -> PathBuf {
        self.config
            .migrations_dir
            .join(migration_file_name(token, logical_name))
    }

    fn model_path(&self, logical_name: &str) -> PathBuf {
        self.config.models_dir.join(format!("{}.go", logical_name))
    }
}

/// File name (without directory) a migration gets for a given version token
pub fn migration_file_name(token: &str, logical_name: &str) -> String {
    format!("{}_create_{}_table.sql", token, logical_name)
}

// ============================================================================
// Tests
// ============================================================================
