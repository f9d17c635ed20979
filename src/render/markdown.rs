//! GitHub-flavored markdown renderer.
//!
//! One `#` section per module, an index of its entities, then a `##` section
//! per entity with attribute tables, requires and methods.

use super::toc;
use crate::mapper::{attribute_strategy, AttributeStrategy};
use crate::model::*;
use crate::render::Renderer;
use anyhow::Result;

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, modules: &[Module]) -> Result<String> {
        let mut lines: Vec<String> = Vec::new();
        for module in modules {
            render_module(&mut lines, module);
        }
        let mut out = lines.join("\n");
        if !out.is_empty() {
            out.push('\n');
        }
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}

fn render_module(lines: &mut Vec<String>, module: &Module) {
    lines.push(format!("# {}\n", module.name));
    render_deprecated(lines, module.deprecated.as_deref());
    if let Some(ref desc) = module.description {
        lines.push(desc.clone());
        lines.push(String::new());
    }

    if !module.entities.is_empty() {
        lines.push("## Index\n".to_string());
        for entity in &module.entities {
            lines.push(toc::render_toc_item(&entity.name, &entity.kind));
        }
        lines.push(String::new());
    }

    for entity in &module.entities {
        render_entity(lines, entity);
    }
}

fn render_entity(lines: &mut Vec<String>, entity: &Entity) {
    lines.push(format!("## {}\n", entity.name));
    if !entity.kind.is_empty() {
        lines.push(format!("`{}`\n", entity.kind));
    }
    render_deprecated(lines, entity.deprecated.as_deref());
    if let Some(ref desc) = entity.description {
        lines.push(desc.clone());
        lines.push(String::new());
    }

    if !entity.attributes.is_empty() {
        let with_binding = attribute_strategy(&entity.kind) == AttributeStrategy::Binding;
        let title = if with_binding { "Bindings" } else { "Attributes" };
        lines.push(format!("### {}\n", title));
        render_attribute_table(lines, &entity.attributes, with_binding);
    }

    if !entity.requires.is_empty() {
        lines.push("### Requires\n".to_string());
        for name in &entity.requires {
            lines.push(format!("* {}", name));
        }
        lines.push(String::new());
    }

    if !entity.methods.is_empty() {
        lines.push("### Methods\n".to_string());
        for method in &entity.methods {
            render_method(lines, method);
        }
    }
}

fn render_method(lines: &mut Vec<String>, method: &Method) {
    let params: Vec<&str> = method.params.iter().map(|p| p.name.as_str()).collect();
    lines.push(format!("#### {}({})\n", method.name, params.join(", ")));
    render_deprecated(lines, method.deprecated.as_deref());
    if let Some(ref desc) = method.description {
        lines.push(desc.clone());
        lines.push(String::new());
    }

    if !method.params.is_empty() {
        lines.push("**Parameters**\n".to_string());
        render_attribute_table(lines, &method.params, false);
    }

    if let Some(ref returns) = method.returns {
        let mut line = "**Returns**".to_string();
        if let Some(ref ty) = returns.ty {
            line.push_str(&format!(" `{}`", ty));
        }
        if !returns.name.is_empty() {
            line.push_str(&format!(" {}", returns.name));
        }
        lines.push(line);
        lines.push(String::new());
    }
}

fn render_deprecated(lines: &mut Vec<String>, reason: Option<&str>) {
    match reason {
        Some("") => lines.push("> **Deprecated**\n".to_string()),
        Some(reason) => lines.push(format!("> **Deprecated:** {}\n", reason.replace('\n', " "))),
        None => {}
    }
}

fn render_attribute_table(lines: &mut Vec<String>, attributes: &[Attribute], with_binding: bool) {
    if with_binding {
        lines.push("| Name | Type | Binding | Default | Description |".to_string());
        lines.push("|------|------|---------|---------|-------------|".to_string());
    } else {
        lines.push("| Name | Type | Default | Description |".to_string());
        lines.push("|------|------|---------|-------------|".to_string());
    }

    for attr in attributes {
        let mut cells = vec![attribute_name(attr), code_cell(attr.ty.as_deref())];
        if with_binding {
            cells.push(code_cell(attr.binding.as_deref()));
        }
        cells.push(code_cell(attr.default_value.as_deref()));
        cells.push(table_cell(attr.description.as_deref().unwrap_or("")));
        lines.push(format!("| {} |", cells.join(" | ")));
    }
    lines.push(String::new());
}

fn attribute_name(attr: &Attribute) -> String {
    let name = table_cell(&attr.name);
    if attr.optional {
        format!("{} *(optional)*", name)
    } else {
        name
    }
}

fn code_cell(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => format!("`{}`", table_cell(v)),
        _ => String::new(),
    }
}

/// Escape pipes and fold line breaks so text stays inside one table cell.
fn table_cell(text: &str) -> String {
    text.replace('|', "\\|")
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("<br>")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Module> {
        vec![Module {
            name: "myModule".to_string(),
            description: Some("A module".to_string()),
            deprecated: Some("Gone\nsoon".to_string()),
            entities: vec![
                Entity {
                    name: "myComponent".to_string(),
                    kind: "component".to_string(),
                    attributes: vec![Attribute {
                        name: "parameter".to_string(),
                        description: Some("An optional | parameter".to_string()),
                        optional: true,
                        ty: Some("boolean".to_string()),
                        default_value: Some("true".to_string()),
                        binding: Some("@".to_string()),
                    }],
                    ..Default::default()
                },
                Entity {
                    name: "myService".to_string(),
                    kind: "service".to_string(),
                    requires: vec!["$http".to_string()],
                    methods: vec![Method {
                        name: "fetch".to_string(),
                        params: vec![Attribute {
                            name: "url".to_string(),
                            ty: Some("string".to_string()),
                            description: Some("Where\nto go".to_string()),
                            ..Default::default()
                        }],
                        returns: Some(ReturnType {
                            name: "the response".to_string(),
                            ty: Some("Promise".to_string()),
                        }),
                        ..Default::default()
                    }],
                    ..Default::default()
                },
            ],
        }]
    }

    #[test]
    fn renders_module_header_and_index() {
        let out = MarkdownRenderer.render(&sample()).unwrap();
        assert!(out.starts_with("# myModule\n\n> **Deprecated:** Gone soon\n\nA module\n"));
        assert!(out.contains("* [myComponent](#mycomponent) (component)\n"));
        assert!(out.contains("* [myService](#myservice) (service)\n"));
    }

    #[test]
    fn component_gets_binding_column() {
        let out = MarkdownRenderer.render(&sample()).unwrap();
        assert!(out.contains("### Bindings\n"));
        assert!(out.contains(
            "| parameter *(optional)* | `boolean` | `@` | `true` | An optional \\| parameter |"
        ));
    }

    #[test]
    fn methods_with_params_and_returns() {
        let out = MarkdownRenderer.render(&sample()).unwrap();
        assert!(out.contains("### Requires\n\n* $http\n"));
        assert!(out.contains("#### fetch(url)\n"));
        assert!(out.contains("| url | `string` |  | Where<br>to go |"));
        assert!(out.contains("**Returns** `Promise` the response\n"));
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert_eq!(MarkdownRenderer.render(&[]).unwrap(), "");
    }

    #[test]
    fn deprecation_without_reason() {
        let modules = vec![Module {
            name: "old".to_string(),
            deprecated: Some(String::new()),
            ..Default::default()
        }];
        let out = MarkdownRenderer.render(&modules).unwrap();
        assert!(out.starts_with("# old\n\n> **Deprecated**\n"));
    }
}
