//! Public API for selecting and running a solver.
//!
//! The `SolverBuilder` provides a fluent API for configuring the greedy
//! strategy and produces the solver registered under a given name.

use crate::error::ConfigError;
use crate::greedy::{CandidateUniverse, GreedySolver, TieBreak};
use crate::instance::Instance;
use crate::solution::Solution;
use crate::solver::{NaiveSolver, Solver};

pub use crate::greedy::{GreedyEngine, GreedyPhase, Round};

/// Registry keys accepted by `SolverBuilder::build`.
pub const SOLVER_NAMES: [&str; 2] = ["naive", "greedy"];

/// Builder for configuring the solvers.
#[derive(Clone, Debug)]
pub struct SolverBuilder {
    greedy: GreedySolver,
}

impl SolverBuilder {
    /// City candidates, first best point, seed 0.
    pub fn new() -> Self {
        SolverBuilder {
            greedy: GreedySolver::default(),
        }
    }

    /// Set the points the greedy solver scores each round.
    pub fn candidates(mut self, candidates: CandidateUniverse) -> Self {
        self.greedy.candidates = candidates;
        self
    }

    /// Set how the greedy solver picks among equally good points.
    pub fn tie_break(mut self, tie_break: TieBreak) -> Self {
        self.greedy.tie_break = tie_break;
        self
    }

    /// Seed for the greedy solver's random tie-break.
    pub fn seed(mut self, seed: u64) -> Self {
        self.greedy.seed = seed;
        self
    }

    /// Build the solver registered under `name`.
    pub fn build(self, name: &str) -> Result<Box<dyn Solver>, ConfigError> {
        match name {
            "naive" => Ok(Box::new(NaiveSolver)),
            "greedy" => Ok(Box::new(self.greedy)),
            other => Err(ConfigError::UnknownSolver(other.to_string())),
        }
    }

    /// Every registered solver, in `SOLVER_NAMES` order.
    pub fn build_all(self) -> Vec<Box<dyn Solver>> {
        vec![Box::new(NaiveSolver), Box::new(self.greedy)]
    }
}

impl Default for SolverBuilder {
    fn default() -> Self {
        SolverBuilder::new()
    }
}

/// Solve `instance` with the default configuration of solver `name`.
pub fn solve(name: &str, instance: &Instance) -> Result<Solution, ConfigError> {
    let solver = SolverBuilder::default().build(name)?;
    Ok(solver.solve(instance))
}
