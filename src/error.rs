use crate::location::Point;
use std::error;
use std::fmt;
use std::io;

/// Problems found while reading or validating an instance.
#[derive(Debug)]
pub enum InstanceError {
    MissingField(&'static str),
    InvalidNumber { line: usize, token: String },
    MalformedLine(usize),
    TrailingData(usize),
    EmptyGrid,
    NegativeRadius(&'static str),
    CityCountMismatch { expected: usize, found: usize },
    CityOutOfBounds(Point),
    DuplicateCity(Point),
    IOError(io::Error),
}

impl fmt::Display for InstanceError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "invalid instance: ")?;

        match self {
            Self::MissingField(field) => write!(fmt, "missing {}", field),
            Self::InvalidNumber { line, token } => {
                write!(fmt, "line {}: '{}' is not an integer", line, token)
            }
            Self::MalformedLine(line) => write!(fmt, "line {}: expected 'x y'", line),
            Self::TrailingData(line) => write!(fmt, "line {}: unexpected trailing data", line),
            Self::EmptyGrid => write!(fmt, "grid side length must be positive"),
            Self::NegativeRadius(field) => write!(fmt, "{} must not be negative", field),
            Self::CityCountMismatch { expected, found } => {
                write!(fmt, "expected {} cities, found {}", expected, found)
            }
            Self::CityOutOfBounds(city) => write!(fmt, "city ({}) lies outside the grid", city),
            Self::DuplicateCity(city) => write!(fmt, "city ({}) is listed twice", city),
            Self::IOError(err) => err.fmt(fmt),
        }
    }
}

impl error::Error for InstanceError {}

impl From<io::Error> for InstanceError {
    fn from(err: io::Error) -> Self {
        Self::IOError(err)
    }
}

/// Reasons a tower placement is not an acceptable answer for its instance.
#[derive(Debug)]
pub enum SolutionError {
    TowerOutOfBounds(Point),
    DuplicateTower(Point),
    UncoveredCity(Point),
    TowerCountMismatch { expected: usize, found: usize },
    Parse(InstanceError),
}

impl fmt::Display for SolutionError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "invalid solution: ")?;

        match self {
            Self::TowerOutOfBounds(tower) => {
                write!(fmt, "tower ({}) lies outside the grid", tower)
            }
            Self::DuplicateTower(tower) => write!(fmt, "tower ({}) is placed twice", tower),
            Self::UncoveredCity(city) => write!(fmt, "city ({}) is not covered", city),
            Self::TowerCountMismatch { expected, found } => {
                write!(fmt, "expected {} towers, found {}", expected, found)
            }
            Self::Parse(err) => err.fmt(fmt),
        }
    }
}

impl error::Error for SolutionError {}

impl From<InstanceError> for SolutionError {
    fn from(err: InstanceError) -> Self {
        Self::Parse(err)
    }
}

/// Unknown names passed to the solver configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnknownSolver(String),
    UnknownCandidates(String),
    UnknownTieBreak(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::UnknownSolver(name) => write!(fmt, "unknown solver '{}'", name),
            Self::UnknownCandidates(name) => write!(fmt, "unknown candidate set '{}'", name),
            Self::UnknownTieBreak(name) => write!(fmt, "unknown tie-break policy '{}'", name),
        }
    }
}

impl error::Error for ConfigError {}
