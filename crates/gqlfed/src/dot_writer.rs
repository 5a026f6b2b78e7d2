//! Rendering of an [`SdlDocument`]'s reference graph as Graphviz dot code.
//!
//! The output is an undirected `graph` with one filled node per `enum`,
//! `input` and `type` declaration, a node per field connected to its struct,
//! and optionally nodes for parameters and enum values. The reference graph's
//! edges come last, under a `# Connections between types` comment. Scalars,
//! directives and schemas are not rendered.

use libgqlfed::Declaration;
use libgqlfed::Entity;
use libgqlfed::EnumDeclaration;
use libgqlfed::SdlDocument;
use libgqlfed::StructDeclaration;

const INDENT: &str = "    ";

const ENUM_COLOR: &str = "mediumpurple1";
const FIELD_COLOR: &str = "snow2";
const INPUT_COLOR: &str = "lightskyblue";
const TYPE_COLOR: &str = "greenyellow";

#[derive(Debug)]
pub(crate) struct DotWriter<'doc> {
    document: &'doc SdlDocument,
    include_enum_values: bool,
    include_params: bool,
}

impl<'doc> DotWriter<'doc> {
    pub fn new(document: &'doc SdlDocument) -> Self {
        Self {
            document,
            include_enum_values: false,
            include_params: false,
        }
    }

    /// Also emit a node per enum value, connected to its enum.
    pub fn include_enum_values(mut self, include: bool) -> Self {
        self.include_enum_values = include;
        self
    }

    /// Also emit a node per field parameter, connected to its field.
    pub fn include_params(mut self, include: bool) -> Self {
        self.include_params = include;
        self
    }

    pub fn write(&self) -> String {
        let mut out = String::from("graph {\n");
        for declaration in self.document.declarations() {
            match declaration {
                Declaration::Enum(enum_declaration) =>
                    self.write_enum(&mut out, enum_declaration),
                Declaration::Input(struct_declaration) =>
                    self.write_struct(&mut out, declaration, struct_declaration, INPUT_COLOR),
                Declaration::Type(struct_declaration) =>
                    self.write_struct(&mut out, declaration, struct_declaration, TYPE_COLOR),
                Declaration::Scalar(_)
                    | Declaration::Directive(_)
                    | Declaration::Schema(_) => continue,
            }
            out.push('\n');
        }

        out.push('\n');
        push_line(&mut out, "# Connections between types");
        for (declaration, targets) in self.document.adjacency() {
            if !declaration.is_reference_target() {
                continue;
            }
            let source_id = declaration.as_entity().unique_id();
            for target in targets {
                push_edge(&mut out, &source_id, &target.as_entity().unique_id());
            }
        }

        out.push_str("}\n");
        out
    }

    fn write_enum(&self, out: &mut String, enum_declaration: &EnumDeclaration) {
        let enum_entity = Entity::Enum(enum_declaration);
        let enum_id = enum_entity.unique_id();
        push_line(out, &format!("# enum: {}", enum_declaration.name()));
        push_node(out, &enum_id, Some(ENUM_COLOR), enum_declaration.name());

        if !self.include_enum_values {
            return;
        }
        let value_ids: Vec<String> = enum_declaration
            .values()
            .iter()
            .map(|value| Entity::EnumValue(value).unique_id())
            .collect();
        for (value, value_id) in enum_declaration.values().iter().zip(&value_ids) {
            push_node(out, value_id, None, value.alpha_name());
        }
        for value_id in &value_ids {
            push_edge(out, &enum_id, value_id);
        }
    }

    fn write_struct(
        &self,
        out: &mut String,
        declaration: &Declaration,
        struct_declaration: &StructDeclaration,
        color: &str,
    ) {
        let struct_id = declaration.as_entity().unique_id();
        push_line(out, &format!(
            "# {}: {}",
            declaration.keyword(),
            struct_declaration.alpha_name(),
        ));
        push_node(out, &struct_id, Some(color), struct_declaration.alpha_name());

        let mut field_ids = Vec::with_capacity(struct_declaration.fields().len());
        for field in struct_declaration.fields() {
            let field_id = Entity::Field(field).unique_id();
            push_node(out, &field_id, Some(FIELD_COLOR), field.alpha_name());

            if self.include_params && field.has_params() {
                let param_ids: Vec<String> = field
                    .params()
                    .iter()
                    .map(|param| Entity::Param(param).unique_id())
                    .collect();
                for (param, param_id) in field.params().iter().zip(&param_ids) {
                    push_node(out, param_id, None, param.alpha_name());
                }
                for param_id in &param_ids {
                    push_edge(out, &field_id, param_id);
                }
            }
            field_ids.push(field_id);
        }

        for field_id in &field_ids {
            push_edge(out, &struct_id, field_id);
        }
    }
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(INDENT);
    out.push_str(line);
    out.push('\n');
}

fn push_node(out: &mut String, id: &str, color: Option<&str>, label: &str) {
    let label = label.replace('"', "\\\"");
    let line = match color {
        Some(color) => format!("{id}[color={color}, style=filled, label=\"{label}\"];"),
        None => format!("{id}[label=\"{label}\"];"),
    };
    push_line(out, &line);
}

fn push_edge(out: &mut String, from_id: &str, to_id: &str) {
    push_line(out, &format!("{from_id} -- {to_id};"));
}
