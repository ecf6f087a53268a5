//! Fizz schema rendering
//!
//! Renders the migration pair for a model: a `create_table` description with
//! one column directive per user attribute, and the matching `drop_table`.
//! Reserved columns never appear here; the migration runner adds the
//! primary key and timestamp columns itself.

use modelsmith_ir::Model;

/// Render the fizz `create_table` description for a model.
pub fn render_create(model: &Model) -> String {
    let mut lines = vec![format!("create_table(\"{}\", func(t) {{", model.names.table)];

    for attribute in model.user_attributes() {
        let options = if attribute.is_nullable() {
            "{\"null\": true}"
        } else {
            "{}"
        };
        lines.push(format!(
            "\tt.Column(\"{}\", \"{}\", {})",
            attribute.names.original,
            attribute.ty.column_type(),
            options
        ));
    }

    lines.push("})".to_string());
    lines.join("\n")
}

/// Render the matching fizz `drop_table` description.
pub fn render_drop(model: &Model) -> String {
    format!("drop_table(\"{}\")", model.names.table)
}

// ============================================================================
// Tests
// ============================================================================
