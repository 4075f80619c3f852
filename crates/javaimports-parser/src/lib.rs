//! Java compilation-unit analysis.
//!
//! [`parse`] runs tree-sitter-java over a source file and walks the resulting
//! tree with a scope-tracking analyzer. The outcome is a [`ParsedFile`]: the
//! file's package, its existing imports, the set of identifiers used but not
//! declared anywhere in the file, and the class entities whose superclass
//! could not be found in the file (orphans).
//!
//! The grammar itself is an external dependency; this crate only decides what
//! the nodes *mean* for identifier resolution.

mod analyzer;
mod parsed_file;
mod rewrite;
mod scope;

pub use parsed_file::ParsedFile;
pub use rewrite::insert_imports;

use thiserror::Error;
use tree_sitter::Node;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("tree-sitter-java language load failed")]
    Language,
    #[error("tree-sitter failed to parse the source")]
    Parser,
    #[error("{} syntax error(s)", .0.len())]
    Syntax(Vec<ParseDiagnostic>),
}

/// One parser diagnostic, rendered as `line:column: error: message`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDiagnostic {
    pub line: usize,
    pub column: usize,
    pub message: String,
}

impl std::fmt::Display for ParseDiagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}: error: {}", self.line, self.column, self.message)
    }
}

/// Parse `source` into a [`ParsedFile`].
///
/// Syntax errors are fatal: the analyzer only runs over well-formed trees, so
/// a file that does not parse yields `ParseError::Syntax` with one diagnostic
/// per error node.
pub fn parse(source: &str) -> Result<ParsedFile, ParseError> {
    let mut parser = tree_sitter::Parser::new();
    parser
        .set_language(tree_sitter_java::language())
        .map_err(|_| ParseError::Language)?;
    let tree = parser.parse(source, None).ok_or(ParseError::Parser)?;

    let root = tree.root_node();
    let errors = collect_syntax_errors(root);
    if !errors.is_empty() {
        return Err(ParseError::Syntax(errors));
    }

    Ok(parsed_file::build(root, source))
}

fn collect_syntax_errors(root: Node<'_>) -> Vec<ParseDiagnostic> {
    let mut out = Vec::new();
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if node.is_error() || node.is_missing() {
            let pos = node.start_position();
            let message = if node.is_missing() {
                format!("missing {}", node.kind())
            } else {
                "syntax error".to_string()
            };
            out.push(ParseDiagnostic {
                line: pos.row + 1,
                column: pos.column + 1,
                message,
            });
            continue;
        }
        if !node.has_error() {
            continue;
        }
        for i in (0..node.child_count()).rev() {
            if let Some(child) = node.child(i) {
                stack.push(child);
            }
        }
    }
    out.sort_by_key(|d| (d.line, d.column));
    out
}

pub(crate) fn node_text<'a>(source: &'a str, node: Node<'_>) -> &'a str {
    &source[node.byte_range()]
}
