//! Greedy covering: each round places a tower at the candidate that serves
//! the most still-uncovered cities, until every city is served.
//!
//! `GreedyEngine` drives the round loop as an explicit state machine
//! (`Selecting` -> `Updating` -> `Selecting` ... -> `Done`) that owns the
//! coverage set and the tower list. Which points are considered each round
//! (`CandidateUniverse`) and how ties between equally good points are broken
//! (`TieBreak`) are configured on `GreedySolver`.

use crate::coverage::Coverage;
use crate::error::ConfigError;
use crate::grid::grid_cells;
use crate::instance::Instance;
use crate::location::*;
use crate::scoring::score_candidate;
use crate::solution::Solution;
use crate::solver::Solver;
use itertools::Either;
use log::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The set of points scored in each selection round.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidateUniverse {
    /// Only city locations. Cheaper, but never places a tower between cities.
    Cities,
    /// Every cell of the grid.
    Grid,
}

/// How one point is picked among several with the same best score.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TieBreak {
    /// The first best point in candidate order (cities in instance order,
    /// grid cells x-major).
    First,
    /// A uniformly random best point, drawn from the solver's random source.
    Random,
}

impl FromStr for CandidateUniverse {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cities" => Ok(CandidateUniverse::Cities),
            "grid" => Ok(CandidateUniverse::Grid),
            other => Err(ConfigError::UnknownCandidates(other.to_string())),
        }
    }
}

impl FromStr for TieBreak {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first" => Ok(TieBreak::First),
            "random" => Ok(TieBreak::Random),
            other => Err(ConfigError::UnknownTieBreak(other.to_string())),
        }
    }
}

/// Where the round loop currently is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GreedyPhase {
    /// Score every candidate.
    Selecting,
    /// Place one of these equally best points.
    Updating(Vec<Point>),
    /// No uncovered city is left.
    Done,
}

/// Outcome of one completed round.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Round {
    pub tower: Point,
    pub newly_covered: usize,
    pub remaining: usize,
}

/// Runs the greedy round loop for one instance.
pub struct GreedyEngine<'a> {
    instance: &'a Instance,
    universe: CandidateUniverse,
    tie_break: TieBreak,
    coverage: Coverage,
    towers: Vec<Point>,
    phase: GreedyPhase,
}

impl<'a> GreedyEngine<'a> {
    pub fn new(instance: &'a Instance, universe: CandidateUniverse, tie_break: TieBreak) -> Self {
        let coverage = Coverage::new(instance);
        let phase = if coverage.is_empty() {
            GreedyPhase::Done
        } else {
            GreedyPhase::Selecting
        };

        GreedyEngine {
            instance,
            universe,
            tie_break,
            coverage,
            towers: Vec::new(),
            phase,
        }
    }

    pub fn phase(&self) -> &GreedyPhase {
        &self.phase
    }

    pub fn coverage(&self) -> &Coverage {
        &self.coverage
    }

    pub fn towers(&self) -> &[Point] {
        &self.towers
    }

    /// Advance the state machine by one transition. Returns the finished
    /// round when the transition placed a tower.
    ///
    /// # Panics
    ///
    /// Panics if no candidate serves any uncovered city while cities remain
    /// uncovered. Validated instances never reach that state.
    pub fn step<R: Rng>(&mut self, rng: &mut R) -> Option<Round> {
        match std::mem::replace(&mut self.phase, GreedyPhase::Done) {
            GreedyPhase::Selecting => {
                let best = self.select();
                if best.is_empty() {
                    panic!(
                        "no candidate serves any of the {} uncovered cities",
                        self.coverage.remaining()
                    );
                }
                self.phase = GreedyPhase::Updating(best);
                None
            }
            GreedyPhase::Updating(best) => {
                let round = self.update(&best, rng);
                if !self.coverage.is_empty() {
                    self.phase = GreedyPhase::Selecting;
                }
                Some(round)
            }
            GreedyPhase::Done => None,
        }
    }

    /// Run a full round (select then place). Returns `None` once done.
    pub fn next_round<R: Rng>(&mut self, rng: &mut R) -> Option<Round> {
        loop {
            if self.phase == GreedyPhase::Done {
                return None;
            }
            if let Some(round) = self.step(rng) {
                return Some(round);
            }
        }
    }

    /// Run until every city is covered.
    pub fn run<R: Rng>(mut self, rng: &mut R) -> Vec<Point> {
        while let Some(round) = self.next_round(rng) {
            trace!(
                "Placed tower at ({}): covered={}, remaining={}",
                round.tower,
                round.newly_covered,
                round.remaining
            );
        }

        self.towers
    }

    /// The points scored this round, generated lazily.
    fn candidates(&self) -> impl Iterator<Item = Point> + 'a {
        match self.universe {
            CandidateUniverse::Cities => Either::Left(self.instance.cities().iter().copied()),
            CandidateUniverse::Grid => Either::Right(grid_cells(self.instance.grid_side_length())),
        }
    }

    /// Every candidate achieving the best positive score, in candidate order.
    fn select(&self) -> Vec<Point> {
        let mut best_score = 0;
        let mut best = Vec::new();

        for candidate in self.candidates() {
            let score = score_candidate(self.instance, candidate, &self.coverage);
            if score == 0 || score < best_score {
                continue;
            }
            if score > best_score {
                best_score = score;
                best.clear();
            }
            best.push(candidate);
        }

        best
    }

    fn update<R: Rng>(&mut self, best: &[Point], rng: &mut R) -> Round {
        let tower = match self.tie_break {
            TieBreak::First => best[0],
            TieBreak::Random => best[rng.random_range(0..best.len())],
        };

        let newly_covered = self.coverage.cover(self.instance, tower);
        self.towers.push(tower);

        Round {
            tower,
            newly_covered,
            remaining: self.coverage.remaining(),
        }
    }
}

/// Greedy covering solver.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreedySolver {
    pub candidates: CandidateUniverse,
    pub tie_break: TieBreak,
    /// Seed for the random source used by `Solver::solve`.
    pub seed: u64,
}

impl GreedySolver {
    pub fn new(candidates: CandidateUniverse, tie_break: TieBreak, seed: u64) -> Self {
        GreedySolver {
            candidates,
            tie_break,
            seed,
        }
    }

    /// Solve with an explicit random source.
    pub fn solve_with_rng<R: Rng>(&self, instance: &Instance, rng: &mut R) -> Solution {
        let engine = GreedyEngine::new(instance, self.candidates, self.tie_break);
        let towers = engine.run(rng);

        debug!(
            "Greedy ({:?}, {:?}) placed {} towers for {} cities",
            self.candidates,
            self.tie_break,
            towers.len(),
            instance.cities().len()
        );

        Solution::new(instance.clone(), towers)
    }
}

impl Default for GreedySolver {
    /// City candidates, first best point.
    fn default() -> Self {
        GreedySolver::new(CandidateUniverse::Cities, TieBreak::First, 0)
    }
}

impl Solver for GreedySolver {
    fn name(&self) -> &str {
        "greedy"
    }

    fn solve(&self, instance: &Instance) -> Solution {
        let mut rng = StdRng::seed_from_u64(self.seed);
        self.solve_with_rng(instance, &mut rng)
    }
}
