//! Lexical scope graph.
//!
//! Scopes and class entities live in flat arenas and refer to each other by
//! index. A class entity holds its superclass as a *selector*, not a
//! reference, and is attached to the enclosing scope's not-yet-extended list;
//! that keeps the graph acyclic no matter what the source declares.

use std::collections::{HashMap, HashSet};
use std::mem;

use javaimports_core::{ClassEntity, Identifier};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) struct ScopeId(usize);

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) struct ClassId(usize);

#[derive(Clone, Debug)]
pub(crate) enum Binding {
    Variable,
    Method,
    Class(ClassId),
}

#[derive(Default)]
struct Scope {
    parent: Option<ScopeId>,
    bindings: HashMap<Identifier, Binding>,
    /// Identifiers referenced here that no enclosing scope declared (yet).
    not_yet_resolved: HashSet<Identifier>,
    /// Classes declared here whose superclass lookup has been deferred.
    not_yet_extended: Vec<ClassId>,
}

pub(crate) struct ScopeGraph {
    scopes: Vec<Scope>,
    classes: Vec<ClassEntity>,
}

impl ScopeGraph {
    pub(crate) fn new() -> (Self, ScopeId) {
        let graph = Self {
            scopes: vec![Scope::default()],
            classes: Vec::new(),
        };
        (graph, ScopeId(0))
    }

    pub(crate) fn open(&mut self, parent: ScopeId) -> ScopeId {
        let id = ScopeId(self.scopes.len());
        self.scopes.push(Scope {
            parent: Some(parent),
            ..Scope::default()
        });
        id
    }

    pub(crate) fn declare(&mut self, scope: ScopeId, name: Identifier, binding: Binding) {
        self.scopes[scope.0].bindings.insert(name, binding);
    }

    pub(crate) fn new_class(&mut self, entity: ClassEntity) -> ClassId {
        let id = ClassId(self.classes.len());
        self.classes.push(entity);
        id
    }

    pub(crate) fn defer_extension(&mut self, scope: ScopeId, class: ClassId) {
        self.scopes[scope.0].not_yet_extended.push(class);
    }

    /// Walk from `scope` up through parent links looking for a binding.
    pub(crate) fn resolve(&self, scope: ScopeId, name: &Identifier) -> bool {
        let mut current = Some(scope);
        while let Some(id) = current {
            if self.scopes[id.0].bindings.contains_key(name) {
                return true;
            }
            current = self.scopes[id.0].parent;
        }
        false
    }

    pub(crate) fn mark_unresolved(&mut self, scope: ScopeId, name: Identifier) {
        self.scopes[scope.0].not_yet_resolved.insert(name);
    }

    /// Scope-close procedure. `class` is the entity whose body this scope is,
    /// if any.
    pub(crate) fn close(&mut self, scope: ScopeId, class: Option<ClassId>) {
        let parent = self.scopes[scope.0].parent;

        // First give every orphan declared here a chance to find its parent,
        // now that the whole scope has been seen.
        let orphans = mem::take(&mut self.scopes[scope.0].not_yet_extended);
        for orphan in orphans {
            self.try_extend(scope, parent, orphan);
        }

        let Some(class) = class else {
            // Plain lexical scope: everything unresolved bubbles up.
            let unresolved = mem::take(&mut self.scopes[scope.0].not_yet_resolved);
            if let Some(parent) = parent {
                self.scopes[parent.0].not_yet_resolved.extend(unresolved);
            } else {
                self.scopes[scope.0].not_yet_resolved = unresolved;
            }
            return;
        };

        self.harvest(scope, class);

        if self.classes[class.0].is_child_class() {
            // The pending set stays with the entity until its superclass is
            // found; nothing bubbles out of an orphan's body.
            let pending = mem::take(&mut self.scopes[scope.0].not_yet_resolved);
            self.classes[class.0].not_yet_resolved = pending;
            return;
        }

        // Class bodies are order-independent, so members declared after a
        // reference are visible now: retry before bubbling.
        let unresolved = mem::take(&mut self.scopes[scope.0].not_yet_resolved);
        for id in unresolved {
            if self.resolve(scope, &id) {
                continue;
            }
            if let Some(parent) = parent {
                self.scopes[parent.0].not_yet_resolved.insert(id);
            } else {
                self.scopes[scope.0].not_yet_resolved.insert(id);
            }
        }
    }

    /// End-of-file: run the extension attempt for orphans deferred all the
    /// way to the top scope, then report what is left.
    pub(crate) fn finish(
        mut self,
        top: ScopeId,
    ) -> (HashSet<Identifier>, Vec<ClassEntity>, Vec<ClassEntity>) {
        let orphans = mem::take(&mut self.scopes[top.0].not_yet_extended);
        for orphan in orphans {
            self.try_extend(top, None, orphan);
        }

        let still_orphaned: Vec<ClassEntity> = self.scopes[top.0]
            .not_yet_extended
            .iter()
            .map(|id| self.classes[id.0].clone())
            .collect();

        let mut top_level: Vec<ClassEntity> = self.scopes[top.0]
            .bindings
            .values()
            .filter_map(|binding| match binding {
                Binding::Class(id) => Some(self.classes[id.0].clone()),
                _ => None,
            })
            .collect();
        top_level.sort_by(|a, b| a.name.cmp(&b.name));

        let unresolved = mem::take(&mut self.scopes[top.0].not_yet_resolved);
        (unresolved, still_orphaned, top_level)
    }

    /// Copy the closing scope's declarations into the class entity.
    fn harvest(&mut self, scope: ScopeId, class: ClassId) {
        let mut members = HashSet::new();
        let mut inner_classes = HashMap::new();
        for (name, binding) in &self.scopes[scope.0].bindings {
            members.insert(name.clone());
            if let Binding::Class(id) = binding {
                inner_classes.insert(name.clone(), self.classes[id.0].clone());
            }
        }
        self.classes[class.0].members = members;
        self.classes[class.0].inner_classes = inner_classes;
    }

    fn try_extend(&mut self, scope: ScopeId, parent: Option<ScopeId>, orphan: ClassId) {
        let path = self.classes[orphan.0]
            .superclass
            .clone()
            .expect("orphans always carry a superclass selector");
        let segments = path.segments();

        // Only the closing scope itself is consulted: an enclosing scope may
        // still introduce the name later, in which case the orphan is handed
        // up rather than resolved here.
        let first = match self.scopes[scope.0].bindings.get(&segments[0]) {
            None => {
                match parent {
                    Some(parent) => self.scopes[parent.0].not_yet_extended.push(orphan),
                    None => self.scopes[scope.0].not_yet_extended.push(orphan),
                }
                return;
            }
            Some(binding) => binding.clone(),
        };

        let Binding::Class(found) = first else {
            // Extending something that is not a class: the file will not
            // compile, so stop spending effort on this entity.
            self.abandon(orphan);
            return;
        };

        let parent_members = match self.classes[found.0].resolve_inner(&segments[1..]) {
            Some(entity) => entity.members.clone(),
            None => {
                self.abandon(orphan);
                return;
            }
        };

        let leftover = self.classes[orphan.0].extend_with(&parent_members);
        let bubble = parent.unwrap_or(scope);
        self.scopes[bubble.0].not_yet_resolved.extend(leftover);
    }

    fn abandon(&mut self, orphan: ClassId) {
        self.classes[orphan.0].superclass = None;
        self.classes[orphan.0].not_yet_resolved.clear();
    }
}
