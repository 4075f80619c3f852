//! Standard-library symbol index.
//!
//! A compile-time table maps JDK class simple names to the packages that
//! export them. `java.lang` is deliberately absent: it needs no import, so
//! offering candidates for `String` or `Override` would only add noise.
//!
//! The table is curated rather than generated; it covers the classes that
//! actually show up in day-to-day Java code. A simple name can map to several
//! packages (`List` lives in both `java.util` and `java.awt`), in which case
//! the selection strategy downstream picks one.

use std::collections::HashMap;

use javaimports_core::{Identifier, Import, ImportProvider, Selector};

mod table;

/// In-memory index over the bundled stdlib table.
#[derive(Debug)]
pub struct JdkIndex {
    by_identifier: HashMap<&'static str, Vec<Import>>,
}

impl JdkIndex {
    /// The index over the bundled table.
    pub fn bundled() -> JdkIndex {
        JdkIndex::from_entries(table::STDLIB)
    }

    fn from_entries(entries: &[(&'static str, &'static str, bool)]) -> Self {
        let mut by_identifier: HashMap<&'static str, Vec<Import>> = HashMap::new();
        for &(simple_name, package, is_static) in entries {
            let selector =
                Selector::from_dotted(package).combine(&Selector::single(simple_name.into()));
            let import = if is_static {
                Import::new_static(selector)
            } else {
                Import::new(selector)
            };
            by_identifier.entry(simple_name).or_default().push(import);
        }
        Self { by_identifier }
    }
}

impl ImportProvider for JdkIndex {
    fn find(&self, identifiers: &[Identifier]) -> HashMap<Identifier, Vec<Import>> {
        let mut found = HashMap::new();
        for identifier in identifiers {
            if let Some(imports) = self.by_identifier.get(identifier.as_str()) {
                found.insert(identifier.clone(), imports.clone());
            }
        }
        found
    }
}
