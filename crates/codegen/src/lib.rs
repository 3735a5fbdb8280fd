//! # Gantry Codegen
//!
//! Code generation engine for Gantry.
//!
//! This crate turns a validated [`TableSpec`](gantry_schema::TableSpec) into
//! two persisted text artifacts: a timestamped reversible SQL migration
//! (goose convention) and a GORM model source file.
//!
//! ## Pipeline
//!
//! ```text
//! TableSpec
//!     │  validate
//!     ▼
//! TablePlan ──► sql::render_up / render_down ──► MigrationArtifact
//!     │
//!     └──────► model::render ─────────────────► ModelArtifact
//! ```
//!
//! Both output formats render from the same `TablePlan`, so the migration
//! and the model cannot drift apart in field set or order.
//!

// ============================================================================
// Modules
// ============================================================================

pub mod artifact;
pub mod generator;
pub mod model;
pub mod plan;
pub mod sql;
pub mod version;

// ============================================================================
// Re-exports
// ============================================================================

pub use artifact::{MigrationArtifact, ModelArtifact, TableArtifacts};
pub use generator::{Generator, GeneratorConfig, migration_file_name};
pub use plan::{ColumnDef, ColumnKind, FieldKind, ModelField, ReferencePlan, TablePlan};
pub use version::VersionClock;
