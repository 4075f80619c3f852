//! The load/fix driver.

use std::collections::HashMap;
use std::sync::Arc;

use javaimports_core::{Identifier, Import, ImportProvider, Selector};
use javaimports_parser::ParsedFile;

use crate::candidates::{CandidateFinder, CandidateSource, Candidates};
use crate::load::{self, LoadResult};
use crate::strategy::BasicSelectionStrategy;

/// A fixing attempt: `done` says whether every unresolved identifier found a
/// winning import.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixResult {
    pub done: bool,
    pub fixes: Vec<Import>,
}

impl FixResult {
    pub fn complete(fixes: Vec<Import>) -> Self {
        Self { done: true, fixes }
    }

    pub fn incomplete(fixes: Vec<Import>) -> Self {
        Self { done: false, fixes }
    }
}

/// Decides which identifiers need an import, and which import each one gets.
///
/// Sources are added incrementally: a caller typically tries with nothing,
/// then adds siblings, the stdlib and finally a (slow to warm up) external
/// environment, retrying in between. [`Fixer::try_to_fix`] gives up early
/// while orphans remain, because more context may still close them;
/// [`Fixer::last_try_to_fix`] settles for the best incomplete answer.
pub struct Fixer {
    file: ParsedFile,
    siblings: Vec<ParsedFile>,
    finder: CandidateFinder,
}

impl Fixer {
    pub fn new(file: ParsedFile) -> Self {
        Self {
            file,
            siblings: Vec::new(),
            finder: CandidateFinder::default(),
        }
    }

    /// Register sibling files. Only those sharing the file's package
    /// participate; the rest are dropped here so callers can pass a whole
    /// directory.
    pub fn add_siblings(&mut self, siblings: Vec<ParsedFile>) {
        let same_package: Vec<ParsedFile> = siblings
            .into_iter()
            .filter(|sibling| sibling.same_package(&self.file))
            .collect();
        if same_package.is_empty() {
            return;
        }

        let provider = SiblingProvider::new(self.file.package.clone(), &same_package);
        self.finder
            .add(CandidateSource::Sibling, Arc::new(provider));
        self.siblings.extend(same_package);
    }

    pub fn add_stdlib_provider(&mut self, provider: Arc<dyn ImportProvider>) {
        self.finder.add(CandidateSource::Stdlib, provider);
    }

    pub fn add_environment(&mut self, environment: Arc<dyn ImportProvider>) {
        self.finder.add(CandidateSource::External, environment);
    }

    /// Either a complete result with fixes, or an incomplete result without
    /// any: the caller is expected to add context and retry.
    pub fn try_to_fix(&self) -> FixResult {
        self.load_and_try_to_fix(false)
    }

    /// Like [`Fixer::try_to_fix`], but an incomplete result carries every fix
    /// that could be found.
    pub fn last_try_to_fix(&self) -> FixResult {
        self.load_and_try_to_fix(true)
    }

    fn load_and_try_to_fix(&self, last_try: bool) -> FixResult {
        let loaded = load::load(&self.file, &self.siblings);
        tracing::debug!(
            unresolved = loaded.unresolved.len(),
            orphans = loaded.orphans.len(),
            last_try,
            "load completed"
        );

        if loaded.is_empty() {
            return FixResult::complete(Vec::new());
        }
        self.fix(loaded, last_try)
    }

    fn fix(&self, loaded: LoadResult, last_try: bool) -> FixResult {
        if !loaded.orphans.is_empty() && !last_try {
            // More context (another sibling, a warmed environment) may still
            // close these; do not guess yet.
            return FixResult::incomplete(Vec::new());
        }

        let mut all_unresolved = loaded.unresolved;
        for orphan in &loaded.orphans {
            all_unresolved.extend(orphan.not_yet_resolved.iter().cloned());
        }

        let mut selectors: Vec<Selector> = all_unresolved
            .into_iter()
            .map(Selector::single)
            .collect();
        selectors.sort();

        let candidates = selectors
            .iter()
            .map(|selector| self.finder.find(selector))
            .fold(Candidates::default(), Candidates::merge);
        let best = BasicSelectionStrategy::new(self.file.package.clone()).select_best(&candidates);

        let fixes: Vec<Import> = selectors
            .iter()
            .filter_map(|selector| best.for_selector(selector).cloned())
            .collect();

        if fixes.len() == selectors.len() {
            FixResult::complete(fixes)
        } else {
            FixResult::incomplete(fixes)
        }
    }
}

/// Adapts same-package siblings to the provider contract: every top-level
/// declaration offers `package ⊕ name`.
struct SiblingProvider {
    by_identifier: HashMap<Identifier, Vec<Import>>,
}

impl SiblingProvider {
    fn new(package: Option<Selector>, siblings: &[ParsedFile]) -> Self {
        let mut by_identifier: HashMap<Identifier, Vec<Import>> = HashMap::new();
        for sibling in siblings {
            for entity in &sibling.top_level {
                let selector = match &package {
                    Some(package) => {
                        package.combine(&Selector::single(entity.name.clone()))
                    }
                    None => Selector::single(entity.name.clone()),
                };
                let imports = by_identifier.entry(entity.name.clone()).or_default();
                let import = Import::new(selector);
                if !imports.contains(&import) {
                    imports.push(import);
                }
            }
        }
        Self { by_identifier }
    }
}

impl ImportProvider for SiblingProvider {
    fn find(&self, identifiers: &[Identifier]) -> HashMap<Identifier, Vec<Import>> {
        let mut found = HashMap::new();
        for identifier in identifiers {
            if let Some(imports) = self.by_identifier.get(identifier) {
                found.insert(identifier.clone(), imports.clone());
            }
        }
        found
    }
}
