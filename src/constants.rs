/// Base cost of every tower in the penalty function.
pub const PENALTY_BASE: f64 = 170.0;

/// Exponential growth rate applied per neighbouring tower inside the penalty radius.
pub const PENALTY_GROWTH: f64 = 0.17;

/// Seed used by the command line tool when no seed is given.
pub const DEFAULT_SEED: u64 = 170;
