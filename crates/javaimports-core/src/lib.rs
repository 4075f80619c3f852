//! Shared data model for the import fixer.
//!
//! Everything here is plain value types: [`Identifier`] (a single Java
//! identifier token), [`Selector`] (a dotted identifier path), [`Import`]
//! (a selector plus the `static` flag) and [`ClassEntity`] (a class seen
//! during analysis, possibly still waiting for its superclass). The
//! [`ImportProvider`] trait is the uniform lookup contract implemented by the
//! stdlib index, the classpath index and the Maven environment.

mod class_entity;
mod name;

pub use class_entity::ClassEntity;
pub use name::{Identifier, Selector};

use std::collections::HashMap;
use std::fmt;

/// A single import statement, minus the surrounding syntax.
///
/// The selector's rightmost segment is the identifier the import introduces
/// into scope.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Import {
    pub selector: Selector,
    pub is_static: bool,
}

impl Import {
    pub fn new(selector: Selector) -> Self {
        Self {
            selector,
            is_static: false,
        }
    }

    pub fn new_static(selector: Selector) -> Self {
        Self {
            selector,
            is_static: true,
        }
    }

    /// The identifier this import introduces into scope.
    pub fn identifier(&self) -> &Identifier {
        self.selector.rightmost()
    }
}

impl fmt::Debug for Import {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_static {
            write!(f, "Import(static {})", self.selector)
        } else {
            write!(f, "Import({})", self.selector)
        }
    }
}

impl fmt::Display for Import {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_static {
            write!(f, "import static {};", self.selector)
        } else {
            write!(f, "import {};", self.selector)
        }
    }
}

/// Uniform candidate-lookup contract.
///
/// Implementations answer, for each requested identifier, the list of imports
/// that would bring that identifier into scope. Absent identifiers are simply
/// missing from the returned map. Calls must be safe from any thread and
/// idempotent; implementations backed by lazy indexes block until the index
/// is ready.
pub trait ImportProvider: Send + Sync {
    fn find(&self, identifiers: &[Identifier]) -> HashMap<Identifier, Vec<Import>>;
}
