//! The Maven implementation of the external environment contract.
//!
//! Given the directory of the file being fixed, the environment discovers the
//! enclosing Maven module, resolves its dependency list through the parent
//! POM chain, maps each resolved coordinate to a jar in the local repository
//! and indexes those jars by class simple name.
//!
//! The index is built eagerly on a background thread the moment the
//! environment is created; `find` blocks on the first call until the build is
//! done and is idempotent afterwards. If the environment is dropped before
//! anyone called `find`, the partial index is discarded with it.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};
use std::thread::JoinHandle;

use javaimports_classpath::ClassIndex;
use javaimports_core::{Identifier, Import, ImportProvider};
use javaimports_project::find_all_dependencies;

pub struct MavenEnvironment {
    index: OnceLock<ClassIndex>,
    pending: Mutex<Option<JoinHandle<ClassIndex>>>,
}

impl MavenEnvironment {
    /// Start indexing the module enclosing `file_dir`. `repository` overrides
    /// the local repository location (`~/.m2/repository` by default).
    pub fn new(file_dir: &Path, repository: Option<PathBuf>) -> Self {
        let module_root = find_module_root(file_dir);
        let repository = repository.or_else(default_repository);

        let handle = std::thread::spawn(move || build_index(module_root, repository));
        Self {
            index: OnceLock::new(),
            pending: Mutex::new(Some(handle)),
        }
    }

    fn index(&self) -> &ClassIndex {
        self.index.get_or_init(|| {
            let handle = self
                .pending
                .lock()
                .expect("environment lock is never poisoned")
                .take();
            match handle {
                Some(handle) => handle.join().unwrap_or_default(),
                None => ClassIndex::default(),
            }
        })
    }
}

impl ImportProvider for MavenEnvironment {
    fn find(&self, identifiers: &[Identifier]) -> HashMap<Identifier, Vec<Import>> {
        self.index().find(identifiers)
    }
}

fn build_index(module_root: Option<PathBuf>, repository: Option<PathBuf>) -> ClassIndex {
    let (Some(module_root), Some(repository)) = (module_root, repository) else {
        return ClassIndex::default();
    };

    let found = find_all_dependencies(&module_root);
    for error in &found.errors {
        tracing::debug!(error = %error, "pom load error");
    }

    let jars: Vec<PathBuf> = found
        .dependencies
        .iter()
        .filter_map(|dep| dep.jar_path_in(&repository))
        .filter(|jar| jar.is_file())
        .collect();
    tracing::debug!(
        module = %module_root.display(),
        dependencies = found.dependencies.len(),
        jars = jars.len(),
        "indexing maven dependencies"
    );

    let (index, errors) = ClassIndex::build(&jars);
    for error in errors {
        tracing::debug!(error = %error, "jar index error");
    }
    index
}

/// Walk up from the file's directory to the closest directory holding a
/// `pom.xml`.
fn find_module_root(file_dir: &Path) -> Option<PathBuf> {
    let mut current = Some(file_dir);
    while let Some(dir) = current {
        if dir.join("pom.xml").is_file() {
            return Some(dir.to_path_buf());
        }
        current = dir.parent();
    }
    None
}

fn default_repository() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".m2").join("repository"))
}
