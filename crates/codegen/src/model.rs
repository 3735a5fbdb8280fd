//! # Model Renderer
//!
//! Renders the GORM model source for a table plan: `package models`, an
//! import block, and one struct embedding `gorm.Model` with one exported
//! field per column, plus the foreign-key pair when a parent reference is
//! set.
//!
//! The import block is conditional: `time` is added exactly when some
//! field maps to `time.Time`.

use crate::plan::{FieldKind, TablePlan};

/// Import path every generated model needs
const GORM_IMPORT: &str = "gorm.io/gorm";

// ============================================================================
// Renderer
// ============================================================================

/// Render the Go model source for the plan.
pub fn render(plan: &TablePlan) -> String {
    let mut out = String::with_capacity(512);

    out.push_str("package models\n\n");
    out.push_str(&render_imports(plan));

    out.push_str(&format!("// {} model\n", plan.model_name));
    out.push_str(&format!("type {} struct {{\n", plan.model_name));

    for field in &plan.model_fields {
        match field.kind {
            FieldKind::Embedded => out.push_str(&format!("\t{}\n", field.name)),
            _ => {
                out.push_str(&format!("\t{} {}", field.name, field.go_type));
                if let Some(tag) = &field.tag {
                    out.push_str(&format!(" `{}`", tag));
                }
                out.push('\n');
            }
        }
    }

    out.push_str("}\n");
    out
}

fn render_imports(plan: &TablePlan) -> String {
    if plan.needs_time_import() {
        format!("import (\n\t\"time\"\n\n\t\"{}\"\n)\n\n", GORM_IMPORT)
    } else {
        format!("import \"{}\"\n\n", GORM_IMPORT)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::TablePlan;
    use gantry_schema::{FieldSpec, TableSpec};

    #[test]
    fn test_render_game_model() {
        let spec =
            TableSpec::new("game").with_field(FieldSpec::new("name", "VARCHAR(100) NOT NULL"));
        let plan = TablePlan::from_spec(&spec).unwrap();

        assert_eq!(
            render(&plan),
            "package models\n\
             \n\
             import \"gorm.io/gorm\"\n\
             \n\
             // Game model\n\
             type Game struct {\n\
             \tgorm.Model\n\
             \tName string\n\
             }\n"
        );
    }

    #[test]
    fn test_render_model_with_association() {
        let spec = TableSpec::new("player")
            .with_field(FieldSpec::new("name", "VARCHAR(300) NOT NULL"))
            .with_reference("game");
        let plan = TablePlan::from_spec(&spec).unwrap();

        let source = render(&plan);
        assert!(source.contains("type Player struct {"));
        assert!(source.contains("\tGameID int\n"));
        assert!(source.contains("\tGame Game `gorm:\"foreignKey:GameID;references:ID\"`\n"));
    }

    #[test]
    fn test_time_import_is_conditional() {
        let without = TablePlan::from_spec(
            &TableSpec::new("game").with_field(FieldSpec::new("name", "TEXT")),
        )
        .unwrap();
        assert!(render(&without).contains("import \"gorm.io/gorm\""));
        assert!(!render(&without).contains("\"time\""));

        let with = TablePlan::from_spec(
            &TableSpec::new("event").with_field(FieldSpec::new("starts_at", "TIMESTAMP")),
        )
        .unwrap();
        let source = render(&with);
        assert!(source.contains("import (\n\t\"time\"\n\n\t\"gorm.io/gorm\"\n)"));
        assert!(source.contains("\tStartsAt time.Time\n"));
    }

    #[test]
    fn test_field_names_are_upper_camel() {
        let spec = TableSpec::new("game_score")
            .with_field(FieldSpec::new("player_score", "INT"))
            .with_field(FieldSpec::new("recorded_at", "TIMESTAMP"));
        let plan = TablePlan::from_spec(&spec).unwrap();

        let source = render(&plan);
        assert!(source.contains("type GameScore struct {"));
        assert!(source.contains("\tPlayerScore int\n"));
        assert!(source.contains("\tRecordedAt time.Time\n"));
    }

    #[test]
    fn test_empty_fields_model() {
        let plan = TablePlan::from_spec(&TableSpec::new("session")).unwrap();
        assert_eq!(
            render(&plan),
            "package models\n\
             \n\
             import \"gorm.io/gorm\"\n\
             \n\
             // Session model\n\
             type Session struct {\n\
             \tgorm.Model\n\
             }\n"
        );
    }
}
