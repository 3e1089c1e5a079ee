//! Candidate scoring: how many still-uncovered cities a tower would serve.

use crate::coverage::Coverage;
use crate::instance::Instance;
use crate::location::*;

/// Count the uncovered cities within the service radius of `candidate`.
///
/// The candidate need not be a city. The search is bounded by the
/// candidate's box of side `2 * R_s + 1`, clipped to the grid (see
/// `Coverage::uncovered_in_disc`). `coverage` is not modified.
pub fn score_candidate(instance: &Instance, candidate: Point, coverage: &Coverage) -> usize {
    coverage.uncovered_in_disc(instance, candidate).count()
}
