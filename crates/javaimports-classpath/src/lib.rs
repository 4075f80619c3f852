//! Class-name index over a set of jar archives.
//!
//! Only entry names are read, never bytecode: `com/example/Foo.class` is all
//! it takes to know that `com.example.Foo` is importable. Nested classes
//! (`Foo$Inner`) are skipped; they are reachable through their outer class
//! and never imported by simple name.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::thread;

use thiserror::Error;

use javaimports_core::{Identifier, Import, Selector};

#[derive(Debug, Error)]
pub enum ClasspathError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read archive {path}: {source}")]
    Zip {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },
}

/// Importable classes keyed by simple name.
#[derive(Debug, Default)]
pub struct ClassIndex {
    by_simple_name: HashMap<Identifier, Vec<Import>>,
}

impl ClassIndex {
    /// Scan `jars` (in parallel, one thread per archive) and build the index.
    /// Unreadable archives are reported but do not fail the build; lookups
    /// simply cover less.
    pub fn build(jars: &[PathBuf]) -> (ClassIndex, Vec<ClasspathError>) {
        let mut results: Vec<Result<Vec<Import>, ClasspathError>> = Vec::new();
        thread::scope(|scope| {
            let handles: Vec<_> = jars
                .iter()
                .map(|jar| scope.spawn(move || list_jar_classes(jar)))
                .collect();
            for handle in handles {
                results.push(handle.join().expect("jar scan never panics"));
            }
        });

        let mut index = ClassIndex::default();
        let mut errors = Vec::new();
        for result in results {
            match result {
                Ok(imports) => {
                    for import in imports {
                        index
                            .by_simple_name
                            .entry(import.identifier().clone())
                            .or_default()
                            .push(import);
                    }
                }
                Err(error) => errors.push(error),
            }
        }

        // Lookup order must not depend on scan order.
        for imports in index.by_simple_name.values_mut() {
            imports.sort();
            imports.dedup();
        }

        tracing::debug!(
            classes = index.by_simple_name.len(),
            jars = jars.len(),
            errors = errors.len(),
            "classpath index built"
        );
        (index, errors)
    }

    pub fn is_empty(&self) -> bool {
        self.by_simple_name.is_empty()
    }

    pub fn find(&self, identifiers: &[Identifier]) -> HashMap<Identifier, Vec<Import>> {
        let mut found = HashMap::new();
        for identifier in identifiers {
            if let Some(imports) = self.by_simple_name.get(identifier) {
                found.insert(identifier.clone(), imports.clone());
            }
        }
        found
    }
}

fn list_jar_classes(jar: &Path) -> Result<Vec<Import>, ClasspathError> {
    let file = std::fs::File::open(jar).map_err(|source| ClasspathError::Io {
        path: jar.to_path_buf(),
        source,
    })?;
    let mut archive = zip::ZipArchive::new(file).map_err(|source| ClasspathError::Zip {
        path: jar.to_path_buf(),
        source,
    })?;

    let mut out = Vec::new();
    for i in 0..archive.len() {
        let entry = archive.by_index(i).map_err(|source| ClasspathError::Zip {
            path: jar.to_path_buf(),
            source,
        })?;
        if let Some(import) = entry_to_import(entry.name()) {
            out.push(import);
        }
    }
    Ok(out)
}

/// `com/example/Foo.class` -> `import com.example.Foo`.
fn entry_to_import(entry_name: &str) -> Option<Import> {
    let path = entry_name.strip_suffix(".class")?;
    if path.starts_with("META-INF/") {
        return None;
    }

    let binary_name = path.replace('/', ".");
    let simple_name = binary_name.rsplit('.').next()?;
    if simple_name.contains('$')
        || simple_name == "module-info"
        || simple_name == "package-info"
    {
        return None;
    }

    Some(Import::new(Selector::from_dotted(&binary_name)))
}
