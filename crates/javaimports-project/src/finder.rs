//! Parent-chain walk: from a module root to its effective dependency list.

use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use crate::{pom_loader, FlatPom, MavenDependency, PomError};

const POM: &str = "pom.xml";

/// Dependencies found for a module, plus every load error met along the way.
/// Errors never abort the walk; a missing parent simply leaves the POM as
/// defined as it managed to get.
#[derive(Debug, Default)]
pub struct FinderResult {
    pub dependencies: Vec<MavenDependency>,
    pub errors: Vec<PomError>,
}

/// Load `<module_root>/pom.xml` and merge parents until the POM is well
/// defined or the chain runs out.
pub fn find_all_dependencies(module_root: &Path) -> FinderResult {
    let loaded = pom_loader::load_pom(&module_root.join(POM));
    let mut pom = loaded.pom;
    let mut errors = loaded.errors;

    // Parent paths are declared relative to the POM that names them, so the
    // walk tracks the directory it is currently in. A visited set stops
    // self-referential chains.
    let mut current_dir = module_root.to_path_buf();
    let mut visited: HashSet<PathBuf> = HashSet::new();
    visited.insert(normalize(&current_dir.join(POM)));

    while pom.has_parent() && !pom.is_well_defined() {
        let parent_path = normalize(&current_dir.join(relative_parent_pom_path(&pom)));
        if !visited.insert(parent_path.clone()) {
            break;
        }

        tracing::debug!(path = %parent_path.display(), "loading parent pom");
        let loaded = pom_loader::load_pom(&parent_path);
        errors.extend(loaded.errors);

        if let Some(dir) = parent_path.parent() {
            current_dir = dir.to_path_buf();
        }
        pom.merge(loaded.pom);
    }

    FinderResult {
        dependencies: pom.dependencies().to_vec(),
        errors,
    }
}

/// The parent pointer may name a directory; in that case the POM inside it is
/// meant.
fn relative_parent_pom_path(pom: &FlatPom) -> PathBuf {
    let parent = pom.maybe_parent().expect("caller checked has_parent");
    if parent.ends_with(POM) {
        return parent.to_path_buf();
    }
    parent.join(POM)
}

/// Lexical normalization: fold `.` and `..` segments without touching the
/// filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push(Component::ParentDir);
                }
            }
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn normalize_folds_dot_segments() {
        assert_eq!(
            normalize(Path::new("/a/b/../pom.xml")),
            PathBuf::from("/a/pom.xml")
        );
        assert_eq!(
            normalize(Path::new("/a/./b/pom.xml")),
            PathBuf::from("/a/b/pom.xml")
        );
    }
}
