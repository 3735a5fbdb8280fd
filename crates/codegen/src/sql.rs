//! # SQL Renderer
//!
//! Renders the "up" and "down" SQL statements for a table plan. Each
//! renderer is a single formatting pass over the plan.
//!
//! Generated migrations follow the goose convention: an `-- +goose Up`
//! section with one `CREATE TABLE` statement and an `-- +goose Down`
//! section with one `DROP TABLE` statement, so an external runner can
//! split and apply the directions independently.

use crate::plan::{ColumnKind, TablePlan};

/// Marker opening the apply section of a migration file
pub const UP_MARKER: &str = "-- +goose Up";

/// Marker opening the revert section of a migration file
pub const DOWN_MARKER: &str = "-- +goose Down";

// ============================================================================
// Renderers
// ============================================================================

/// Render the `CREATE TABLE` statement for the plan.
///
/// Columns are emitted in plan order; table-level constraint clauses sit
/// between the reference column and `created_at`.
pub fn render_up(plan: &TablePlan) -> String {
    let mut out = String::with_capacity(256);

    out.push_str(&format!("CREATE TABLE {} (\n", plan.sql_table_name));

    for column in &plan.columns {
        if column.kind == ColumnKind::CreatedAt {
            for constraint in &plan.constraints {
                out.push_str(&format!("  {},\n", constraint));
            }
            // The trailing column carries no comma
            out.push_str(&format!("  {} {}\n", column.name, column.sql_type));
        } else {
            out.push_str(&format!("  {} {},\n", column.name, column.sql_type));
        }
    }

    out.push_str(");");
    out
}

/// Render the `DROP TABLE` statement for the plan.
pub fn render_down(plan: &TablePlan) -> String {
    format!("DROP TABLE {};", plan.sql_table_name)
}

// ============================================================================
// Tests
// ============================================================================
