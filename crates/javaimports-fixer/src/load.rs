//! The load phase: reduce the file's unresolved set and orphan list with the
//! context gathered so far (package siblings).

use std::collections::{HashMap, HashSet};

use javaimports_core::{ClassEntity, Identifier};
use javaimports_parser::ParsedFile;

/// What is left for the fix phase after loading.
#[derive(Debug, Default)]
pub struct LoadResult {
    pub unresolved: HashSet<Identifier>,
    pub orphans: Vec<ClassEntity>,
}

impl LoadResult {
    pub fn is_empty(&self) -> bool {
        self.unresolved.is_empty() && self.orphans.is_empty()
    }
}

/// Try to close the file's orphans against sibling top-level classes. A
/// closed orphan trades its pending set for whatever the parent's members
/// could not cover, which joins the unresolved set.
///
/// Closing one orphan can make another closable, so the sweep repeats until
/// a full pass over the remaining orphans closes nothing.
pub(crate) fn load(file: &ParsedFile, siblings: &[ParsedFile]) -> LoadResult {
    let mut unresolved = file.unresolved.clone();

    let mut sibling_classes: HashMap<&Identifier, &ClassEntity> = HashMap::new();
    for sibling in siblings {
        for entity in &sibling.top_level {
            sibling_classes.insert(&entity.name, entity);
        }
    }

    let mut orphans = file.orphans.clone();
    loop {
        let mut remaining = Vec::new();
        let mut closed_any = false;

        for orphan in orphans {
            let path = orphan
                .superclass
                .as_ref()
                .expect("orphans always carry a superclass selector");
            let segments = path.segments();

            let parent_members = sibling_classes
                .get(&segments[0])
                .and_then(|entity| entity.resolve_inner(&segments[1..]))
                .map(|parent| parent.members.clone());
            match parent_members {
                Some(members) => {
                    let mut closed = orphan;
                    unresolved.extend(closed.extend_with(&members));
                    closed_any = true;
                }
                None => remaining.push(orphan),
            }
        }

        orphans = remaining;
        if !closed_any || orphans.is_empty() {
            break;
        }
    }

    LoadResult {
        unresolved,
        orphans,
    }
}
