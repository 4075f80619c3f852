//! Candidate accumulation: who can provide which import.

use std::collections::HashMap;
use std::sync::Arc;

use javaimports_core::{Import, ImportProvider, Selector};

/// Where a candidate came from. The variant order is the relevance order:
/// a sibling of the same package beats the stdlib, which beats an external
/// dependency.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CandidateSource {
    Sibling,
    Stdlib,
    External,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub import: Import,
    pub source: CandidateSource,
}

/// Per-selector candidate lists. Insertion order is preserved within each
/// source; nothing is promised across sources (selection imposes its own
/// total order).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Candidates {
    by_selector: HashMap<Selector, Vec<Candidate>>,
}

impl Candidates {
    pub fn for_selector(selector: Selector, candidates: Vec<Candidate>) -> Self {
        let mut by_selector = HashMap::new();
        if !candidates.is_empty() {
            by_selector.insert(selector, candidates);
        }
        Self { by_selector }
    }

    pub fn merge(mut self, other: Candidates) -> Candidates {
        for (selector, candidates) in other.by_selector {
            self.by_selector
                .entry(selector)
                .or_default()
                .extend(candidates);
        }
        self
    }

    pub fn selectors(&self) -> impl Iterator<Item = &Selector> {
        self.by_selector.keys()
    }

    pub fn get(&self, selector: &Selector) -> &[Candidate] {
        self.by_selector
            .get(selector)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.by_selector.is_empty()
    }
}

/// The selection output: one winning import per selector that had any
/// candidate at all.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BestCandidates {
    by_selector: HashMap<Selector, Import>,
}

impl BestCandidates {
    pub(crate) fn insert(&mut self, selector: Selector, import: Import) {
        self.by_selector.insert(selector, import);
    }

    pub fn for_selector(&self, selector: &Selector) -> Option<&Import> {
        self.by_selector.get(selector)
    }

    pub fn len(&self) -> usize {
        self.by_selector.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_selector.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Selector, &Import)> {
        self.by_selector.iter()
    }
}

/// The registry: providers tagged with the source class they speak for,
/// queried in registration order.
#[derive(Default)]
pub struct CandidateFinder {
    providers: Vec<(CandidateSource, Arc<dyn ImportProvider>)>,
}

impl CandidateFinder {
    pub fn add(&mut self, source: CandidateSource, provider: Arc<dyn ImportProvider>) {
        self.providers.push((source, provider));
    }

    /// Candidates able to provide `selector`'s rightmost identifier.
    pub fn find(&self, selector: &Selector) -> Candidates {
        let identifier = selector.rightmost().clone();
        let mut list = Vec::new();
        for (source, provider) in &self.providers {
            let mut found = provider.find(std::slice::from_ref(&identifier));
            if let Some(imports) = found.remove(&identifier) {
                list.extend(imports.into_iter().map(|import| Candidate {
                    import,
                    source: *source,
                }));
            }
        }
        Candidates::for_selector(selector.clone(), list)
    }
}
