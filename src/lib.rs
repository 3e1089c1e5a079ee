pub mod constants;
pub mod coverage;
pub mod error;
pub mod greedy;
pub mod grid;
pub mod instance;
pub mod location;
pub mod planner;
pub mod scoring;
pub mod solution;
pub mod solver;

pub use error::*;
pub use greedy::{CandidateUniverse, GreedySolver, TieBreak};
pub use instance::Instance;
pub use location::Point;
pub use planner::*;
pub use solution::Solution;
pub use solver::{NaiveSolver, Solver};
