use super::{ClassUnit, SourceParser};
use crate::error::ExtractError;
use tracing::warn;
use tree_sitter::{Language, Node, Parser};

/// Node kinds that declare a top-level type in the Java grammar
const TYPE_DECLARATION_KINDS: [&str; 5] = [
    "class_declaration",
    "interface_declaration",
    "enum_declaration",
    "record_declaration",
    "annotation_type_declaration",
];

/// Java front-end built on tree-sitter.
///
/// Only top-level type declarations become units; member types stay part
/// of their enclosing declaration's body. tree-sitter offers no binding
/// resolution, so names are qualified with the file's package declaration
/// and that locally derived name is the unit key.
pub struct JavaParser {
    language: Language,
}

impl JavaParser {
    pub fn new() -> Self {
        Self {
            language: tree_sitter_java::LANGUAGE.into(),
        }
    }
}

impl Default for JavaParser {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceParser for JavaParser {
    fn extract_units(&self, source: &str) -> Result<Vec<ClassUnit>, ExtractError> {
        let mut parser = Parser::new();
        parser
            .set_language(&self.language)
            .map_err(|_| ExtractError::Parse)?;
        let tree = parser.parse(source, None).ok_or(ExtractError::Parse)?;

        let root = tree.root_node();
        let package = package_name(root, source);

        let mut units = Vec::new();
        let mut cursor = root.walk();
        for child in root.named_children(&mut cursor) {
            if !TYPE_DECLARATION_KINDS.contains(&child.kind()) {
                continue;
            }
            match unit_for(child, source, package.as_deref()) {
                Ok(unit) => units.push(unit),
                Err(ExtractError::UnresolvedName) => {
                    // Skip this declaration, keep its siblings
                    warn!(
                        line = child.start_position().row + 1,
                        "skipping type declaration with no resolvable name"
                    );
                }
                Err(err) => return Err(err),
            }
        }

        Ok(units)
    }
}

/// The dotted path of the file's package declaration, if any
fn package_name(root: Node, source: &str) -> Option<String> {
    let mut cursor = root.walk();
    let decl = root
        .named_children(&mut cursor)
        .find(|n| n.kind() == "package_declaration")?;

    let mut inner = decl.walk();
    let path = decl
        .named_children(&mut inner)
        .find(|n| matches!(n.kind(), "identifier" | "scoped_identifier"))?;
    Some(node_text(path, source).to_string())
}

fn unit_for(
    node: Node,
    source: &str,
    package: Option<&str>,
) -> Result<ClassUnit, ExtractError> {
    let name_node = node
        .child_by_field_name("name")
        .ok_or(ExtractError::UnresolvedName)?;
    let name = node_text(name_node, source).trim();
    if name.is_empty() {
        return Err(ExtractError::UnresolvedName);
    }

    let qualified_name = match package {
        Some(package) => format!("{package}.{name}"),
        None => name.to_string(),
    };

    Ok(ClassUnit {
        qualified_name,
        body: render_canonical(node, source),
    })
}

/// Deterministic rendering of a declaration subtree: its token stream
/// joined by single spaces, comments dropped. Formatting and comment
/// edits never change the rendering; any token change inside the
/// declaration does. Never the raw source slice.
fn render_canonical(node: Node, source: &str) -> String {
    let mut tokens: Vec<&str> = Vec::new();
    collect_tokens(node, source, &mut tokens);
    tokens.join(" ")
}

fn collect_tokens<'s>(node: Node, source: &'s str, out: &mut Vec<&'s str>) {
    if matches!(node.kind(), "line_comment" | "block_comment") {
        return;
    }
    if node.child_count() == 0 {
        let text = node_text(node, source);
        if !text.is_empty() {
            out.push(text);
        }
        return;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_tokens(child, source, out);
    }
}

fn node_text<'s>(node: Node, source: &'s str) -> &'s str {
    &source[node.byte_range()]
}
