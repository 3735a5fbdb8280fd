//! Core types used throughout Gantry
//!
//! This module contains the SQL → Go type vocabulary used by the model
//! emitter: the `GoType` enum and the fixed mapping table from raw SQL
//! column types to Go field types.

// ============================================================================
// Go Types
// ============================================================================

/// Go types that generated model fields can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GoType {
    /// Go `string`
    String,
    /// Go `int`
    Int,
    /// Go `time.Time`
    Time,
}

impl GoType {
    /// The Go source spelling of this type
    pub fn go_name(&self) -> &'static str {
        match self {
            GoType::String => "string",
            GoType::Int => "int",
            GoType::Time => "time.Time",
        }
    }

    /// The import path this type requires, if any
    pub fn required_import(&self) -> Option<&'static str> {
        match self {
            GoType::Time => Some("time"),
            GoType::String | GoType::Int => None,
        }
    }

    /// Map a raw SQL column type to a Go type.
    ///
    /// Matching is case-insensitive and exact on the whole raw string after
    /// trimming, so a type carrying constraints (e.g. `VARCHAR(100) NOT NULL`)
    /// falls through to the fallback.
    pub fn from_sql_type(raw: &str) -> GoType {
        let normalized = raw.trim().to_ascii_uppercase();
        for (sql_type, go_type) in SQL_TYPE_MAP {
            if *sql_type == normalized {
                return *go_type;
            }
        }
        FALLBACK_GO_TYPE
    }
}

impl std::fmt::Display for GoType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.go_name())
    }
}

// ============================================================================
// SQL → Go Mapping Table
// ============================================================================

/// Fixed mapping from normalized SQL column types to Go types
pub const SQL_TYPE_MAP: &[(&str, GoType)] = &[
    ("VARCHAR(255)", GoType::String),
    ("TEXT", GoType::String),
    ("INT", GoType::Int),
    ("TIMESTAMP", GoType::Time),
];

/// Fallback for SQL types with no entry in the mapping table
pub const FALLBACK_GO_TYPE: GoType = GoType::String;

// ============================================================================
// Tests
// ============================================================================
