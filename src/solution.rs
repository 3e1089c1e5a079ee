//! A finished tower placement, with its validity check, penalty and text form.

use crate::constants::*;
use crate::error::SolutionError;
use crate::instance::{DataLines, Instance};
use crate::location::*;
use fnv::FnvHashSet;
use itertools::Itertools;
use serde::Serialize;
use std::io::{self, Write};

/// An instance paired with the towers placed for it, in placement order.
#[derive(Clone, Debug, Serialize)]
pub struct Solution {
    instance: Instance,
    towers: Vec<Point>,
}

impl Solution {
    pub fn new(instance: Instance, towers: Vec<Point>) -> Self {
        Solution { instance, towers }
    }

    /// Parse the text form written by `write_text`: a tower count followed
    /// by one `x y` line per tower. Comment lines (the penalty header) are
    /// skipped.
    pub fn parse(text: &str, instance: Instance) -> Result<Self, SolutionError> {
        let mut lines = DataLines::new(text);

        let num_towers: usize = lines.read_value("tower count")?;
        let mut towers = Vec::new();
        while let Some(tower) = lines.try_read_point()? {
            towers.push(tower);
        }
        if towers.len() != num_towers {
            return Err(SolutionError::TowerCountMismatch {
                expected: num_towers,
                found: towers.len(),
            });
        }

        Ok(Solution::new(instance, towers))
    }

    #[inline]
    pub fn instance(&self) -> &Instance {
        &self.instance
    }

    #[inline]
    pub fn towers(&self) -> &[Point] {
        &self.towers
    }

    /// Check that every tower is inside the grid and placed once, and that
    /// every city is served by at least one tower.
    pub fn validate(&self) -> Result<(), SolutionError> {
        let side = self.instance.grid_side_length();

        let mut seen = FnvHashSet::default();
        for &tower in &self.towers {
            if !tower.in_grid(side) {
                return Err(SolutionError::TowerOutOfBounds(tower));
            }
            if !seen.insert(tower) {
                return Err(SolutionError::DuplicateTower(tower));
            }
        }

        for &city in self.instance.cities() {
            if !self
                .towers
                .iter()
                .any(|&tower| self.instance.covers(tower, city))
            {
                return Err(SolutionError::UncoveredCity(city));
            }
        }

        Ok(())
    }

    pub fn valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Sum over towers of `PENALTY_BASE * exp(PENALTY_GROWTH * w)`, where `w`
    /// is the number of other towers within the penalty radius.
    pub fn penalty(&self) -> f64 {
        let r = self.instance.penalty_radius() as u64;
        let radius_sq = r * r;

        let mut neighbours = vec![0u32; self.towers.len()];
        for (i, j) in (0..self.towers.len()).tuple_combinations() {
            if self.towers[i].distance_sq(self.towers[j]) <= radius_sq {
                neighbours[i] += 1;
                neighbours[j] += 1;
            }
        }

        neighbours
            .iter()
            .map(|&w| PENALTY_BASE * (PENALTY_GROWTH * w as f64).exp())
            .sum()
    }

    /// Write the penalty header, the tower count and one `x y` line per tower.
    pub fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "# Penalty: {:.3}", self.penalty())?;
        writeln!(out, "{}", self.towers.len())?;
        for tower in &self.towers {
            writeln!(out, "{}", tower)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instance() -> Instance {
        Instance::new(10, 2, 3, vec![Point::new(1, 1), Point::new(8, 8)]).unwrap()
    }

    #[test]
    fn isolated_towers_cost_the_base_penalty() {
        let solution = Solution::new(instance(), vec![Point::new(1, 1), Point::new(8, 8)]);

        assert!(solution.valid());
        assert!((solution.penalty() - 2.0 * PENALTY_BASE).abs() < 1e-9);
    }

    #[test]
    fn neighbouring_towers_raise_the_penalty() {
        let solution = Solution::new(
            instance(),
            vec![Point::new(1, 1), Point::new(1, 3), Point::new(8, 8)],
        );
        let expected = 2.0 * PENALTY_BASE * PENALTY_GROWTH.exp() + PENALTY_BASE;

        assert!((solution.penalty() - expected).abs() < 1e-9);
    }

    #[test]
    fn validate_reports_first_violation() {
        let uncovered = Solution::new(instance(), vec![Point::new(1, 1)]);
        assert!(matches!(
            uncovered.validate(),
            Err(SolutionError::UncoveredCity(p)) if p == Point::new(8, 8)
        ));

        let outside = Solution::new(instance(), vec![Point::new(10, 1)]);
        assert!(matches!(
            outside.validate(),
            Err(SolutionError::TowerOutOfBounds(_))
        ));

        let twice = Solution::new(
            instance(),
            vec![Point::new(1, 1), Point::new(1, 1), Point::new(8, 8)],
        );
        assert!(matches!(
            twice.validate(),
            Err(SolutionError::DuplicateTower(_))
        ));
    }

    #[test]
    fn text_form_parses_back() {
        let solution = Solution::new(instance(), vec![Point::new(2, 1), Point::new(7, 8)]);
        let mut out = Vec::new();
        solution.write_text(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("# Penalty: 340.000\n2\n"));

        let parsed = Solution::parse(&text, instance()).unwrap();
        assert_eq!(parsed.towers(), solution.towers());
        assert!(parsed.valid());
    }

    #[test]
    fn parse_rejects_oversized_tower_count() {
        let err = Solution::parse("4000000000000000000\n0 0\n", instance()).unwrap_err();
        assert!(matches!(
            err,
            SolutionError::TowerCountMismatch {
                expected: 4_000_000_000_000_000_000,
                found: 1
            }
        ));
    }

    #[test]
    fn penalty_handles_extreme_coordinates() {
        let solution = Solution::parse("2\n-2147483648 0\n2147483647 0\n", instance()).unwrap();

        assert!((solution.penalty() - 2.0 * PENALTY_BASE).abs() < 1e-9);
        assert!(matches!(
            solution.validate(),
            Err(SolutionError::TowerOutOfBounds(_))
        ));
    }

    #[test]
    fn parse_rejects_missing_towers() {
        let err = Solution::parse("3\n1 1\n", instance()).unwrap_err();
        assert!(matches!(
            err,
            SolutionError::TowerCountMismatch {
                expected: 3,
                found: 1
            }
        ));
    }
}
