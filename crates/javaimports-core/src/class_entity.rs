use std::collections::{HashMap, HashSet};

use crate::{Identifier, Selector};

/// A Java class as seen by the scope analyzer.
///
/// A class entity is *closed* when its superclass selector is `None`, or when
/// the superclass has been found and [`ClassEntity::extend_with`] has reduced
/// the pending set against the parent's members. Until then the entity is an
/// orphan and its `not_yet_resolved` identifiers cannot be bubbled anywhere.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassEntity {
    pub name: Identifier,
    pub superclass: Option<Selector>,
    /// Member identifiers declared directly in the class body.
    pub members: HashSet<Identifier>,
    /// Nested classes by simple name, used to walk `extends A.B.C` chains.
    pub inner_classes: HashMap<Identifier, ClassEntity>,
    /// Identifiers used inside the class body but not resolved against the
    /// class's own scope nor any ancestor scope yet observed.
    pub not_yet_resolved: HashSet<Identifier>,
}

impl ClassEntity {
    pub fn named(name: impl Into<Identifier>) -> Self {
        Self {
            name: name.into(),
            superclass: None,
            members: HashSet::new(),
            inner_classes: HashMap::new(),
            not_yet_resolved: HashSet::new(),
        }
    }

    pub fn named_and_extending(name: impl Into<Identifier>, superclass: Selector) -> Self {
        Self {
            superclass: Some(superclass),
            ..Self::named(name)
        }
    }

    pub fn is_child_class(&self) -> bool {
        self.superclass.is_some()
    }

    /// Follow `path` through the nested-class chain rooted at this entity.
    /// The first segment of `path` must already have matched `self`.
    pub fn resolve_inner(&self, path: &[Identifier]) -> Option<&ClassEntity> {
        let mut current = self;
        for segment in path {
            current = current.inner_classes.get(segment)?;
        }
        Some(current)
    }

    /// Reduce the pending set using the parent's members, returning the
    /// identifiers the parent could not provide. The entity is closed
    /// afterwards.
    pub fn extend_with(&mut self, parent_members: &HashSet<Identifier>) -> HashSet<Identifier> {
        let leftover: HashSet<Identifier> = self
            .not_yet_resolved
            .drain()
            .filter(|id| !parent_members.contains(id))
            .collect();
        self.superclass = None;
        leftover
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn identifiers(names: &[&str]) -> HashSet<Identifier> {
        names.iter().map(|n| Identifier::from(*n)).collect()
    }

    #[test]
    fn extend_with_subtracts_parent_members() {
        let mut parent = ClassEntity::named("Base");
        parent.members = identifiers(&["size", "capacity"]);

        let mut child =
            ClassEntity::named_and_extending("Derived", Selector::of(["Base"]));
        child.not_yet_resolved = identifiers(&["size", "unknown"]);

        let leftover = child.extend_with(&parent.members);
        assert_eq!(leftover, identifiers(&["unknown"]));
        assert!(!child.is_child_class());
        assert!(child.not_yet_resolved.is_empty());
    }

    #[test]
    fn resolve_inner_walks_nested_chain() {
        let mut inner = ClassEntity::named("Entry");
        inner.members = identifiers(&["key"]);
        let mut outer = ClassEntity::named("Map");
        outer
            .inner_classes
            .insert(Identifier::from("Entry"), inner);

        let found = outer.resolve_inner(&[Identifier::from("Entry")]).unwrap();
        assert_eq!(found.name.as_str(), "Entry");
        assert!(outer.resolve_inner(&[Identifier::from("Missing")]).is_none());
    }
}
