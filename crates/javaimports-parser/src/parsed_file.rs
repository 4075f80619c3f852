use std::collections::HashSet;

use javaimports_core::{ClassEntity, Identifier, Import, Selector};
use tree_sitter::Node;

use crate::analyzer;
use crate::node_text;

/// The analysis result for one compilation unit.
#[derive(Clone, Debug)]
pub struct ParsedFile {
    /// The file's own package, `None` for the unnamed package.
    pub package: Option<Selector>,
    /// Single-type imports already present in the file. Wildcard imports are
    /// not recorded; they cannot be compared against the fixes we add.
    pub imports: Vec<Import>,
    /// Identifiers used somewhere in the file but declared nowhere in it.
    pub unresolved: HashSet<Identifier>,
    /// Classes whose declared superclass was not found in the file.
    pub orphans: Vec<ClassEntity>,
    /// Top-level type declarations, by name. These are what the file offers
    /// to its package siblings.
    pub top_level: Vec<ClassEntity>,
    /// Byte offset at which new import statements are inserted.
    pub(crate) insert_offset: usize,
    pub(crate) has_imports: bool,
    pub(crate) has_package: bool,
}

impl ParsedFile {
    pub fn same_package(&self, other: &ParsedFile) -> bool {
        self.package == other.package
    }

    /// Everything the fixer must satisfy: the file-level unresolved set plus
    /// the pending sets of the still-orphaned classes.
    pub fn all_unresolved(&self) -> HashSet<Identifier> {
        let mut all = self.unresolved.clone();
        for orphan in &self.orphans {
            all.extend(orphan.not_yet_resolved.iter().cloned());
        }
        all
    }
}

pub(crate) fn build(root: Node<'_>, source: &str) -> ParsedFile {
    let analysis = analyzer::analyze(root, source);

    let mut package = None;
    let mut imports = Vec::new();
    let mut insert_offset = 0;
    let mut has_imports = false;
    let mut has_package = false;

    let mut cursor = root.walk();
    for child in root.named_children(&mut cursor) {
        match child.kind() {
            "package_declaration" => {
                package = child
                    .named_children(&mut child.walk())
                    .find(|n| matches!(n.kind(), "identifier" | "scoped_identifier"))
                    .map(|n| Selector::from_dotted(node_text(source, n)));
                has_package = true;
                insert_offset = insert_offset.max(child.end_byte());
            }
            "import_declaration" => {
                if let Some(import) = parse_import(child, source) {
                    imports.push(import);
                }
                has_imports = true;
                insert_offset = insert_offset.max(child.end_byte());
            }
            _ => {}
        }
    }

    ParsedFile {
        package,
        imports,
        unresolved: analysis.unresolved,
        orphans: analysis.orphans,
        top_level: analysis.top_level,
        insert_offset,
        has_imports,
        has_package,
    }
}

fn parse_import(node: Node<'_>, source: &str) -> Option<Import> {
    let mut is_static = false;
    let mut wildcard = false;
    let mut path = None;

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        match child.kind() {
            "static" => is_static = true,
            "asterisk" => wildcard = true,
            "identifier" | "scoped_identifier" => path = Some(node_text(source, child)),
            _ => {}
        }
    }

    if wildcard {
        return None;
    }
    let selector = Selector::from_dotted(path?);
    Some(if is_static {
        Import::new_static(selector)
    } else {
        Import::new(selector)
    })
}
