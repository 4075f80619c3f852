//! Scope-tracking walk over the tree-sitter-java tree.
//!
//! The walk mirrors what the language defines: every construct that opens a
//! lexical region pushes a scope, every declaration records a binding, and
//! every identifier reference is resolved against the scope chain or recorded
//! as not-yet-resolved. Qualified accesses (`a.b.c`) only ever reference
//! their leftmost name; the rest are member names and never need an import.

use std::collections::HashSet;

use javaimports_core::{ClassEntity, Identifier, Selector};
use tree_sitter::Node;

use crate::node_text;
use crate::scope::{Binding, ScopeGraph, ScopeId};

pub(crate) struct Analysis {
    pub(crate) unresolved: HashSet<Identifier>,
    pub(crate) orphans: Vec<ClassEntity>,
    pub(crate) top_level: Vec<ClassEntity>,
}

pub(crate) fn analyze(root: Node<'_>, source: &str) -> Analysis {
    let (graph, top) = ScopeGraph::new();
    let mut analyzer = Analyzer {
        source,
        graph,
        current: top,
    };

    let mut cursor = root.walk();
    for child in root.named_children(&mut cursor) {
        analyzer.visit(child);
    }

    let (unresolved, orphans, top_level) = analyzer.graph.finish(top);
    Analysis {
        unresolved,
        orphans,
        top_level,
    }
}

struct Analyzer<'s> {
    source: &'s str,
    graph: ScopeGraph,
    current: ScopeId,
}

impl<'s> Analyzer<'s> {
    fn visit(&mut self, node: Node<'_>) {
        match node.kind() {
            // Package and import clauses never contribute identifier
            // references; they are read separately.
            "package_declaration" | "import_declaration" => {}

            "identifier" | "type_identifier" => self.reference(node),

            "class_declaration"
            | "interface_declaration"
            | "enum_declaration"
            | "record_declaration"
            | "annotation_type_declaration" => self.visit_type_declaration(node),

            "method_declaration" | "constructor_declaration" | "compact_constructor_declaration" => {
                self.visit_method(node)
            }

            "field_declaration" | "local_variable_declaration" => {
                self.visit_variable_declaration(node)
            }

            "formal_parameter" | "catch_formal_parameter" => self.visit_parameter(node),
            "spread_parameter" => self.visit_spread_parameter(node),
            "resource" => self.visit_resource(node),
            "enum_constant" => self.visit_enum_constant(node),
            "type_parameters" => self.visit_type_parameters(node),

            "block" | "class_body" | "for_statement" | "try_statement"
            | "try_with_resources_statement" | "catch_clause" | "switch_expression"
            | "switch_statement" => self.with_scope(|a| a.descend(node)),

            "enhanced_for_statement" => self.with_scope(|a| a.visit_enhanced_for(node)),

            "lambda_expression" => self.visit_lambda(node),

            // `a.b` and `a.b()`: only the leftmost name is an identifier
            // reference; member names resolve against the receiver's type.
            "field_access" => {
                if let Some(object) = node.child_by_field_name("object") {
                    self.visit(object);
                }
            }
            "method_invocation" => self.visit_method_invocation(node),
            "scoped_identifier" | "scoped_type_identifier" => {
                if let Some(first) = node.named_child(0) {
                    self.visit(first);
                }
            }
            "method_reference" => {
                if let Some(first) = node.named_child(0) {
                    self.visit(first);
                }
            }

            // `x instanceof Foo f` declares `f` for the statements after it.
            "instanceof_expression" => {
                let mut cursor = node.walk();
                for child in node.named_children(&mut cursor) {
                    if node.child_by_field_name("name") == Some(child) {
                        self.declare(
                            Identifier::from(node_text(self.source, child)),
                            Binding::Variable,
                        );
                    } else {
                        self.visit(child);
                    }
                }
            }

            // Labels are names, not identifier references.
            "labeled_statement" => {
                let mut cursor = node.walk();
                for child in node.named_children(&mut cursor).skip(1) {
                    self.visit(child);
                }
            }
            "break_statement" | "continue_statement" => {}

            "this" | "super" => {}

            _ => self.descend(node),
        }
    }

    fn descend(&mut self, node: Node<'_>) {
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            self.visit(child);
        }
    }

    fn with_scope(&mut self, f: impl FnOnce(&mut Self)) {
        let opened = self.graph.open(self.current);
        let previous = self.current;
        self.current = opened;
        f(self);
        self.graph.close(opened, None);
        self.current = previous;
    }

    fn reference(&mut self, node: Node<'_>) {
        let name = node_text(self.source, node);
        // `var` appears as a type in the grammar but declares nothing.
        if name == "var" {
            return;
        }
        let identifier = Identifier::from(name);
        if !self.graph.resolve(self.current, &identifier) {
            self.graph.mark_unresolved(self.current, identifier);
        }
    }

    fn declare(&mut self, name: Identifier, binding: Binding) {
        self.graph.declare(self.current, name, binding);
    }

    fn declare_name_field(&mut self, node: Node<'_>, binding: Binding) -> bool {
        match node.child_by_field_name("name") {
            Some(name) => {
                self.declare(Identifier::from(node_text(self.source, name)), binding);
                true
            }
            None => false,
        }
    }

    /// Class-like declarations: the name is bound in the *enclosing* scope so
    /// siblings (and the class itself) can see it, then a fresh scope covers
    /// the body. An `extends` clause is registered for deferred resolution
    /// and deliberately not scanned for references.
    fn visit_type_declaration(&mut self, node: Node<'_>) {
        let Some(name_node) = node.child_by_field_name("name") else {
            self.descend(node);
            return;
        };
        let name = Identifier::from(node_text(self.source, name_node));

        let superclass = node
            .child_by_field_name("superclass")
            .and_then(|n| n.named_child(0))
            .and_then(|n| self.type_path(n));

        let is_child = superclass.is_some();
        let entity = match superclass {
            Some(path) => ClassEntity::named_and_extending(name.clone(), path),
            None => ClassEntity::named(name.clone()),
        };
        let class = self.graph.new_class(entity);
        self.declare(name, Binding::Class(class));
        if is_child {
            self.graph.defer_extension(self.current, class);
        }

        let opened = self.graph.open(self.current);
        let previous = self.current;
        self.current = opened;

        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            match child.kind() {
                // Handled above; scanning it would report the superclass
                // name as unresolved even when it is declared later.
                "superclass" => {}
                "class_body" | "interface_body" | "enum_body" | "annotation_type_body" => {
                    self.descend(child)
                }
                _ => self.visit(child),
            }
        }

        self.graph.close(opened, Some(class));
        self.current = previous;
    }

    /// The method name is declared in the enclosing scope; parameters and
    /// type variables live in the method's own scope, as does the body.
    fn visit_method(&mut self, node: Node<'_>) {
        self.declare_name_field(node, Binding::Method);
        self.with_scope(|a| a.descend(node));
    }

    fn visit_variable_declaration(&mut self, node: Node<'_>) {
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            if child.kind() == "variable_declarator" {
                self.declare_name_field(child, Binding::Variable);
            }
        }
        // Types and initializers are scanned after the names are in scope.
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            match child.kind() {
                "variable_declarator" => {
                    if let Some(value) = child.child_by_field_name("value") {
                        self.visit(value);
                    }
                }
                _ => self.visit(child),
            }
        }
    }

    fn visit_parameter(&mut self, node: Node<'_>) {
        self.declare_name_field(node, Binding::Variable);
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            if node.child_by_field_name("name") != Some(child) {
                self.visit(child);
            }
        }
    }

    fn visit_spread_parameter(&mut self, node: Node<'_>) {
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            if child.kind() == "variable_declarator" {
                self.declare_name_field(child, Binding::Variable);
            } else {
                self.visit(child);
            }
        }
    }

    fn visit_resource(&mut self, node: Node<'_>) {
        let declared = self.declare_name_field(node, Binding::Variable);
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            if declared && node.child_by_field_name("name") == Some(child) {
                continue;
            }
            self.visit(child);
        }
    }

    fn visit_enum_constant(&mut self, node: Node<'_>) {
        self.declare_name_field(node, Binding::Variable);
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            match child.kind() {
                "argument_list" => self.visit(child),
                "class_body" => self.with_scope(|a| a.descend(child)),
                _ => {}
            }
        }
    }

    fn visit_type_parameters(&mut self, node: Node<'_>) {
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            if child.kind() != "type_parameter" {
                continue;
            }
            let mut inner = child.walk();
            for part in child.named_children(&mut inner) {
                match part.kind() {
                    // The type variable itself is a declaration, its bounds
                    // are references.
                    "identifier" | "type_identifier" => {
                        self.declare(
                            Identifier::from(node_text(self.source, part)),
                            Binding::Variable,
                        );
                    }
                    _ => self.visit(part),
                }
            }
        }
    }

    fn visit_enhanced_for(&mut self, node: Node<'_>) {
        self.declare_name_field(node, Binding::Variable);
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            if node.child_by_field_name("name") == Some(child) {
                continue;
            }
            self.visit(child);
        }
    }

    fn visit_lambda(&mut self, node: Node<'_>) {
        let opened = self.graph.open(self.current);
        let previous = self.current;
        self.current = opened;

        if let Some(params) = node.child_by_field_name("parameters") {
            match params.kind() {
                "identifier" => {
                    self.declare(
                        Identifier::from(node_text(self.source, params)),
                        Binding::Variable,
                    );
                }
                "inferred_parameters" => {
                    let mut cursor = params.walk();
                    for p in params.named_children(&mut cursor) {
                        if p.kind() == "identifier" {
                            self.declare(
                                Identifier::from(node_text(self.source, p)),
                                Binding::Variable,
                            );
                        }
                    }
                }
                _ => self.visit(params),
            }
        }
        if let Some(body) = node.child_by_field_name("body") {
            self.visit(body);
        }

        self.graph.close(opened, None);
        self.current = previous;
    }

    fn visit_method_invocation(&mut self, node: Node<'_>) {
        match node.child_by_field_name("object") {
            Some(object) => self.visit(object),
            None => {
                if let Some(name) = node.child_by_field_name("name") {
                    self.reference(name);
                }
            }
        }
        if let Some(type_arguments) = node.child_by_field_name("type_arguments") {
            self.visit(type_arguments);
        }
        if let Some(arguments) = node.child_by_field_name("arguments") {
            self.visit(arguments);
        }
    }

    /// The dotted path of a superclass clause, with type arguments stripped.
    fn type_path(&self, node: Node<'_>) -> Option<Selector> {
        match node.kind() {
            "type_identifier" => Some(Selector::single(Identifier::from(node_text(
                self.source,
                node,
            )))),
            "scoped_type_identifier" => {
                let mut segments = Vec::new();
                collect_type_segments(node, self.source, &mut segments);
                if segments.is_empty() {
                    None
                } else {
                    Some(Selector::of(segments))
                }
            }
            "generic_type" => node.named_child(0).and_then(|n| self.type_path(n)),
            _ => None,
        }
    }
}

fn collect_type_segments(node: Node<'_>, source: &str, out: &mut Vec<Identifier>) {
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        match child.kind() {
            "type_identifier" => out.push(Identifier::from(node_text(source, child))),
            "scoped_type_identifier" | "generic_type" => {
                collect_type_segments(child, source, out)
            }
            _ => {}
        }
    }
}
