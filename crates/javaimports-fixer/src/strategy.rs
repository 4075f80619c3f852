//! Candidate ranking.

use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};

use javaimports_core::Selector;

use crate::candidates::{BestCandidates, Candidate, CandidateSource, Candidates};

/// The basic relevance order, highest priority first:
///
/// 1. source class (sibling, then stdlib, then external);
/// 2. sharing a package with another selector's winner in the same batch;
/// 3. among stdlib candidates, `java.util` first, then fewer segments;
/// 4. among external candidates, the deepest common prefix with the file's
///    own package;
/// 5. lexicographic order of the full selector, so the outcome never depends
///    on discovery order.
///
/// Rule 2 couples selectors, so selection runs twice: the first pass ranks
/// each selector on its own, the second re-ranks it against the other
/// selectors' first-pass winners.
#[derive(Debug)]
pub struct BasicSelectionStrategy {
    package: Option<Selector>,
}

impl BasicSelectionStrategy {
    pub fn new(package: Option<Selector>) -> Self {
        Self { package }
    }

    pub fn select_best(&self, candidates: &Candidates) -> BestCandidates {
        let no_context = HashSet::new();
        let mut first_pass: HashMap<&Selector, &Candidate> = HashMap::new();
        for selector in candidates.selectors() {
            if let Some(winner) = self.best(candidates.get(selector), &no_context) {
                first_pass.insert(selector, winner);
            }
        }

        let mut best = BestCandidates::default();
        for selector in candidates.selectors() {
            let other_packages: HashSet<Selector> = first_pass
                .iter()
                .filter(|(other, _)| ***other != *selector)
                .filter_map(|(_, winner)| winner.import.selector.qualifier())
                .collect();
            if let Some(winner) = self.best(candidates.get(selector), &other_packages) {
                best.insert(selector.clone(), winner.import.clone());
            }
        }
        best
    }

    fn best<'c>(
        &self,
        candidates: &'c [Candidate],
        other_packages: &HashSet<Selector>,
    ) -> Option<&'c Candidate> {
        candidates
            .iter()
            .min_by_key(|candidate| self.rank(candidate, other_packages))
    }

    fn rank(
        &self,
        candidate: &Candidate,
        other_packages: &HashSet<Selector>,
    ) -> (u8, bool, u8, usize, Reverse<usize>, String) {
        let selector = &candidate.import.selector;

        let source_rank = match candidate.source {
            CandidateSource::Sibling => 0,
            CandidateSource::Stdlib => 1,
            CandidateSource::External => 2,
        };

        let outside_shared_package = !selector
            .qualifier()
            .is_some_and(|q| other_packages.contains(&q));

        let (not_java_util, stdlib_size) = match candidate.source {
            CandidateSource::Stdlib => {
                let in_java_util = selector
                    .qualifier()
                    .is_some_and(|q| q == java_util());
                (u8::from(!in_java_util), selector.size())
            }
            _ => (0, 0),
        };

        let package_affinity = match (candidate.source, &self.package) {
            (CandidateSource::External, Some(package)) => selector.common_prefix_len(package),
            _ => 0,
        };

        (
            source_rank,
            outside_shared_package,
            not_java_util,
            stdlib_size,
            Reverse(package_affinity),
            selector.to_dotted(),
        )
    }
}

fn java_util() -> Selector {
    Selector::from_dotted("java.util")
}
