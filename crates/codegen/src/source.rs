//! Go source rendering
//!
//! Renders a [`Model`] into the Go declaration written under `models/`: the
//! package clause, the import block, the struct with tagged fields, and the
//! plural slice alias. Output is deterministic text assembly; `gofmt` takes
//! care of final alignment.

use modelsmith_ir::Model;

/// Render the Go source file for a model declaration.
pub fn render_model(model: &Model) -> String {
    let mut lines = vec![format!("package {}\n", model.package)];

    // Single imports use the one-line form, anything more gets a block.
    if model.imports.len() == 1 {
        lines.push(format!("import \"{}\"\n", model.imports[0]));
    } else {
        lines.push("import (".to_string());
        for import in &model.imports {
            lines.push(format!("\t\"{}\"", import));
        }
        lines.push(")\n".to_string());
    }

    lines.push(format!(
        "// {} maps to the database table '{}'",
        model.names.proper, model.names.table
    ));
    lines.push(format!("type {} struct {{", model.names.proper));
    for attribute in &model.attributes {
        lines.push(format!(
            "\t{} {} `json:\"{}\" db:\"{}\"`",
            attribute.names.proper,
            attribute.go_type(),
            attribute.names.original,
            attribute.names.original
        ));
    }
    lines.push("}".to_string());
    lines.push(format!(
        "\ntype {} []{}",
        model.names.plural, model.names.proper
    ));

    lines.join("\n")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn assemble(name: &str, tokens: &[&str]) -> Model {
        let tokens: Vec<String> = tokens.iter().map(|s| s.to_string()).collect();
        Model::assemble(name, &tokens).unwrap()
    }

    #[test]
    fn test_render_bare_model() {
        let expected = concat!(
            "package models\n",
            "\n",
            "import \"time\"\n",
            "\n",
            "// Widget maps to the database table 'widgets'\n",
            "type Widget struct {\n",
            "\tID int `json:\"id\" db:\"id\"`\n",
            "\tCreatedAt time.Time `json:\"created_at\" db:\"created_at\"`\n",
            "\tUpdatedAt time.Time `json:\"updated_at\" db:\"updated_at\"`\n",
            "}\n",
            "\n",
            "type Widgets []Widget",
        );
        assert_eq!(render_model(&assemble("widget", &[])), expected);
    }

    #[test]
    fn test_render_model_with_attributes() {
        let source = render_model(&assemble("post", &["title:text", "views:int"]));
        assert!(source.contains("\tTitle string `json:\"title\" db:\"title\"`"));
        assert!(source.contains("\tViews int `json:\"views\" db:\"views\"`"));
        assert!(source.contains("type Posts []Post"));
    }

    #[test]
    fn test_render_nullable_model_uses_import_block() {
        let expected = concat!(
            "package models\n",
            "\n",
            "import (\n",
            "\t\"time\"\n",
            "\t\"github.com/markbates/going/nulls\"\n",
            ")\n",
            "\n",
            "// Comment maps to the database table 'comments'\n",
            "type Comment struct {\n",
            "\tID int `json:\"id\" db:\"id\"`\n",
            "\tCreatedAt time.Time `json:\"created_at\" db:\"created_at\"`\n",
            "\tUpdatedAt time.Time `json:\"updated_at\" db:\"updated_at\"`\n",
            "\tBody nulls.String `json:\"body\" db:\"body\"`\n",
            "}\n",
            "\n",
            "type Comments []Comment",
        );
        assert_eq!(render_model(&assemble("comment", &["body:nulls.String"])), expected);
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let model = assemble("post", &["title:text"]);
        assert_eq!(render_model(&model), render_model(&model));
    }
}
