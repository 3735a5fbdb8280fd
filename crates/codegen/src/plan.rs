//! # Table Plan
//!
//! The `TablePlan` is the single validated descriptor set both renderers
//! consume. It is built once from a `TableSpec` and carries everything the
//! SQL and model emitters need: the plural SQL table name, the model type
//! name, the ordered column list, table-level constraint clauses, and the
//! ordered model-field list.
//!
//! Because `sql::render_up`, `sql::render_down`, and `model::render` are
//! each a single formatting pass over one plan, the migration and the model
//! stay mutually consistent by construction.

use gantry_core::{GantryResult, GoType, Validatable};
use gantry_schema::TableSpec;
use heck::ToUpperCamelCase;

// ============================================================================
// Column descriptors (SQL side)
// ============================================================================

/// What role a column plays in the generated table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// The auto-increment `id` primary key
    PrimaryKey,
    /// A column declared by the caller's field list
    Declared,
    /// The foreign-key column added for a parent reference
    Reference,
    /// The trailing `created_at` timestamp
    CreatedAt,
}

/// One column of the generated `CREATE TABLE` statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    /// Column name
    pub name: String,
    /// Raw SQL type and constraints, emitted verbatim
    pub sql_type: String,
    /// Role of the column
    pub kind: ColumnKind,
}

impl ColumnDef {
    fn new(name: impl Into<String>, sql_type: impl Into<String>, kind: ColumnKind) -> Self {
        Self {
            name: name.into(),
            sql_type: sql_type.into(),
            kind,
        }
    }
}

// ============================================================================
// Field descriptors (model side)
// ============================================================================

/// What role a field plays in the generated model struct
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// The embedded `gorm.Model` record-metadata block
    Embedded,
    /// A field mirroring a declared column
    Declared,
    /// The `<Ref>ID int` foreign-key field
    ForeignKey,
    /// The `<Ref> <Ref>` association field
    Association,
}

/// One field of the generated model struct
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelField {
    /// Exported field name (UpperCamelCase); for the embedded block this is
    /// the embedded type itself
    pub name: String,
    /// Go type spelling (empty for the embedded block)
    pub go_type: String,
    /// Optional struct tag, without backticks
    pub tag: Option<String>,
    /// Role of the field
    pub kind: FieldKind,
}

impl ModelField {
    fn embedded(type_name: impl Into<String>) -> Self {
        Self {
            name: type_name.into(),
            go_type: String::new(),
            tag: None,
            kind: FieldKind::Embedded,
        }
    }

    fn declared(name: impl Into<String>, go_type: GoType) -> Self {
        Self {
            name: name.into(),
            go_type: go_type.go_name().to_string(),
            tag: None,
            kind: FieldKind::Declared,
        }
    }
}

// ============================================================================
// Reference plan
// ============================================================================

/// Derived names for a parent-table reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferencePlan {
    /// Referenced table as given (singular, snake_case)
    pub table: String,
    /// Referenced model type name (UpperCamelCase)
    pub model_name: String,
}

// ============================================================================
// TablePlan
// ============================================================================

/// Everything the SQL and model renderers need for one table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TablePlan {
    /// Plural SQL table name
    pub sql_table_name: String,
    /// Model type name
    pub model_name: String,
    /// Logical (singular) table name, used for file naming
    pub logical_name: String,
    /// All columns in emission order: id, declared fields, optional
    /// reference column, created_at
    pub columns: Vec<ColumnDef>,
    /// Table-level constraint clauses, emitted between the reference
    /// column and `created_at`
    pub constraints: Vec<String>,
    /// All model fields in emission order
    pub model_fields: Vec<ModelField>,
    /// Parent reference, if any
    pub reference: Option<ReferencePlan>,
}

impl TablePlan {
    /// Validate a table spec and derive the full plan from it.
    pub fn from_spec(spec: &TableSpec) -> GantryResult<TablePlan> {
        spec.validate()?;

        let reference = spec.references.as_ref().map(|table| ReferencePlan {
            table: table.clone(),
            model_name: table.to_upper_camel_case(),
        });

        // Columns: id, declared fields, reference column, created_at
        let mut columns = Vec::with_capacity(spec.fields.len() + 3);
        columns.push(ColumnDef::new(
            "id",
            "INT AUTO_INCREMENT PRIMARY KEY",
            ColumnKind::PrimaryKey,
        ));
        for field in &spec.fields {
            columns.push(ColumnDef::new(
                &field.name,
                &field.sql_type,
                ColumnKind::Declared,
            ));
        }

        let mut constraints = Vec::new();
        if let Some(reference) = &reference {
            columns.push(ColumnDef::new(
                &reference.table,
                "INT NOT NULL",
                ColumnKind::Reference,
            ));
            // References the singular table name exactly as given
            constraints.push(format!(
                "FOREIGN KEY ({0}) REFERENCES {0}(id)",
                reference.table
            ));
        }

        columns.push(ColumnDef::new(
            "created_at",
            "TIMESTAMP DEFAULT CURRENT_TIMESTAMP",
            ColumnKind::CreatedAt,
        ));

        // Model fields: gorm.Model, declared fields, FK pair
        let mut model_fields = Vec::with_capacity(spec.fields.len() + 3);
        model_fields.push(ModelField::embedded("gorm.Model"));
        for field in &spec.fields {
            model_fields.push(ModelField::declared(
                field.name.to_upper_camel_case(),
                GoType::from_sql_type(&field.sql_type),
            ));
        }
        if let Some(reference) = &reference {
            model_fields.push(ModelField {
                name: format!("{}ID", reference.model_name),
                go_type: "int".to_string(),
                tag: None,
                kind: FieldKind::ForeignKey,
            });
            model_fields.push(ModelField {
                name: reference.model_name.clone(),
                go_type: reference.model_name.clone(),
                tag: Some(format!(
                    "gorm:\"foreignKey:{}ID;references:ID\"",
                    reference.model_name
                )),
                kind: FieldKind::Association,
            });
        }

        Ok(TablePlan {
            sql_table_name: spec.sql_table_name(),
            model_name: spec.model_name(),
            logical_name: spec.table_name.clone(),
            columns,
            constraints,
            model_fields,
            reference,
        })
    }

    /// Whether the model needs the `time` import
    pub fn needs_time_import(&self) -> bool {
        self.model_fields.iter().any(|f| f.go_type == "time.Time")
    }

    /// Declared column names, in order (excluding id/created_at/reference)
    pub fn declared_column_names(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|c| c.kind == ColumnKind::Declared)
            .map(|c| c.name.as_str())
            .collect()
    }

    /// Declared model field names, in order (excluding the embedded block
    /// and FK/association fields)
    pub fn declared_field_names(&self) -> Vec<&str> {
        self.model_fields
            .iter()
            .filter(|f| f.kind == FieldKind::Declared)
            .map(|f| f.name.as_str())
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use gantry_schema::FieldSpec;

    fn game_spec() -> TableSpec {
        TableSpec::new("game").with_field(FieldSpec::new("name", "VARCHAR(100) NOT NULL"))
    }

    fn player_spec() -> TableSpec {
        TableSpec::new("player")
            .with_field(FieldSpec::new("name", "VARCHAR(300) NOT NULL"))
            .with_reference("game")
    }

    #[test]
    fn test_plan_names() {
        let plan = TablePlan::from_spec(&game_spec()).unwrap();
        assert_eq!(plan.sql_table_name, "games");
        assert_eq!(plan.model_name, "Game");
        assert_eq!(plan.logical_name, "game");
    }

    #[test]
    fn test_column_order() {
        let plan = TablePlan::from_spec(&player_spec()).unwrap();
        let names: Vec<_> = plan.columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["id", "name", "game", "created_at"]);

        let kinds: Vec<_> = plan.columns.iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ColumnKind::PrimaryKey,
                ColumnKind::Declared,
                ColumnKind::Reference,
                ColumnKind::CreatedAt,
            ]
        );
    }

    #[test]
    fn test_non_fk_column_count() {
        // len(fields) + 2 non-foreign-key columns, + 1 when referenced
        for spec in [game_spec(), player_spec()] {
            let plan = TablePlan::from_spec(&spec).unwrap();
            let non_fk = plan
                .columns
                .iter()
                .filter(|c| c.kind != ColumnKind::Reference)
                .count();
            assert_eq!(non_fk, spec.fields.len() + 2);
        }

        // One more column in total when a reference is set
        let with_ref = TablePlan::from_spec(&player_spec()).unwrap();
        let without_ref = TablePlan::from_spec(&game_spec()).unwrap();
        assert_eq!(with_ref.columns.len(), without_ref.columns.len() + 1);
    }

    #[test]
    fn test_foreign_key_constraint() {
        let plan = TablePlan::from_spec(&player_spec()).unwrap();
        assert_eq!(
            plan.constraints,
            vec!["FOREIGN KEY (game) REFERENCES game(id)".to_string()]
        );

        let plan = TablePlan::from_spec(&game_spec()).unwrap();
        assert!(plan.constraints.is_empty());
    }

    #[test]
    fn test_model_fields() {
        let plan = TablePlan::from_spec(&player_spec()).unwrap();
        let names: Vec<_> = plan.model_fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["gorm.Model", "Name", "GameID", "Game"]);

        let association = plan.model_fields.last().unwrap();
        assert_eq!(association.kind, FieldKind::Association);
        assert_eq!(association.go_type, "Game");
        assert_eq!(
            association.tag.as_deref(),
            Some("gorm:\"foreignKey:GameID;references:ID\"")
        );
    }

    #[test]
    fn test_columns_and_fields_agree() {
        // The round-trip invariant: declared columns and declared model
        // fields correspond one-to-one, in order.
        let spec = TableSpec::new("game_score")
            .with_field(FieldSpec::new("points", "INT"))
            .with_field(FieldSpec::new("recorded_at", "TIMESTAMP"))
            .with_reference("player");

        let plan = TablePlan::from_spec(&spec).unwrap();
        assert_eq!(plan.declared_column_names(), vec!["points", "recorded_at"]);
        assert_eq!(plan.declared_field_names(), vec!["Points", "RecordedAt"]);
    }

    #[test]
    fn test_needs_time_import() {
        let without = TablePlan::from_spec(&game_spec()).unwrap();
        assert!(!without.needs_time_import());

        let spec = TableSpec::new("event").with_field(FieldSpec::new("starts_at", "TIMESTAMP"));
        let with = TablePlan::from_spec(&spec).unwrap();
        assert!(with.needs_time_import());
    }

    #[test]
    fn test_empty_fields_plan() {
        let plan = TablePlan::from_spec(&TableSpec::new("session")).unwrap();
        let names: Vec<_> = plan.columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["id", "created_at"]);
        assert_eq!(plan.model_fields.len(), 1); // just gorm.Model
    }

    #[test]
    fn test_invalid_spec_rejected() {
        assert!(TablePlan::from_spec(&TableSpec::new("")).is_err());

        let dup = TableSpec::new("game")
            .with_field(FieldSpec::new("name", "TEXT"))
            .with_field(FieldSpec::new("name", "INT"));
        assert!(TablePlan::from_spec(&dup).is_err());
    }
}
