//! End-to-end run: parse the file, gather context incrementally, fix, and
//! rewrite the import region.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use javaimports_environment::MavenEnvironment;
use javaimports_fixer::Fixer;
use javaimports_jdk::JdkIndex;
use javaimports_parser::{insert_imports, parse, ParsedFile};

pub use javaimports_parser::{ParseDiagnostic, ParseError};

/// Read `path` and return its rewritten source.
///
/// This is the outermost error layer: everything below speaks typed errors,
/// here they gain the file context the user sees. Parser diagnostics keep
/// their own [`ParseError::Syntax`] shape so the caller can render them one
/// per line.
pub fn fix_file(path: &Path) -> Result<String> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("{}: could not read file", path.display()))?;
    let fixed = fix_imports(path, &source)?;
    Ok(fixed)
}

/// Compute the imports `path` should contain and return the rewritten
/// source. Sources are consulted from cheapest to most expensive, stopping
/// as soon as every unresolved identifier has an import:
///
/// 1. the file alone (nothing unresolved means nothing to do);
/// 2. sibling files from the same directory;
/// 3. the bundled stdlib index;
/// 4. the Maven environment, whose class index has been warming up on a
///    background thread since the run started.
pub fn fix_imports(path: &Path, source: &str) -> Result<String, ParseError> {
    let file = parse(source)?;

    // Kick the environment off first so its jar scan overlaps the cheaper
    // attempts below.
    let environment = MavenEnvironment::new(containing_dir(path), None);

    let mut fixer = Fixer::new(file.clone());
    let mut result = fixer.try_to_fix();

    if !result.done {
        fixer.add_siblings(parse_siblings(path));
        result = fixer.try_to_fix();
    }

    if !result.done {
        fixer.add_stdlib_provider(Arc::new(JdkIndex::bundled()));
        result = fixer.try_to_fix();
    }

    if !result.done {
        fixer.add_environment(Arc::new(environment));
        result = fixer.last_try_to_fix();
    }

    tracing::debug!(fixes = result.fixes.len(), done = result.done, "fix finished");
    Ok(insert_imports(source, &file, &result.fixes))
}

fn containing_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    }
}

/// Every other parseable `.java` file next to `path`. Files that fail to
/// parse are skipped; a broken sibling just contributes nothing.
fn parse_siblings(path: &Path) -> Vec<ParsedFile> {
    let dir = containing_dir(path);
    let mut out = Vec::new();
    for entry in walkdir::WalkDir::new(dir)
        .max_depth(1)
        .follow_links(false)
        .into_iter()
        .filter_map(Result::ok)
    {
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.path().extension().and_then(|e| e.to_str()) != Some("java") {
            continue;
        }
        if entry.path().file_name() == path.file_name() {
            continue;
        }

        let Ok(source) = std::fs::read_to_string(entry.path()) else {
            continue;
        };
        match parse(&source) {
            Ok(parsed) => out.push(parsed),
            Err(error) => {
                tracing::debug!(path = %entry.path().display(), error = %error, "skipping sibling");
            }
        }
    }
    out
}
