//! The fixer: candidate gathering, selection and the load/fix driver.
//!
//! Given a parsed file with unresolved identifiers and orphan classes, the
//! [`Fixer`] pulls candidates from whatever sources have been registered
//! (package siblings, the stdlib index, an external environment), ranks them
//! and returns the winning imports. Callers add sources incrementally and
//! retry; the last try settles for the best incomplete answer.

mod candidates;
mod fixer;
mod load;
mod strategy;

pub use candidates::{BestCandidates, Candidate, CandidateFinder, CandidateSource, Candidates};
pub use fixer::{FixResult, Fixer};
pub use load::LoadResult;
pub use strategy::BasicSelectionStrategy;
