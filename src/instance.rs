//! The problem instance: grid size, radii and the cities to cover.
//!
//! Instances are validated once on construction (`Instance::new`,
//! `Instance::parse` or deserialization) and are immutable afterwards, so the
//! solvers can rely on every city being unique and inside the grid.

use crate::error::InstanceError;
use crate::location::*;
use fnv::FnvHashSet;
use serde::{Deserialize, Serialize};
use std::io::{self, Read, Write};
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawInstance")]
pub struct Instance {
    grid_side_length: i32,
    coverage_radius: i32,
    penalty_radius: i32,
    cities: Vec<Point>,
}

/// Unvalidated instance fields, used as the deserialization target.
#[derive(Deserialize)]
struct RawInstance {
    grid_side_length: i32,
    coverage_radius: i32,
    penalty_radius: i32,
    cities: Vec<Point>,
}

impl TryFrom<RawInstance> for Instance {
    type Error = InstanceError;

    fn try_from(raw: RawInstance) -> Result<Self, Self::Error> {
        Instance::new(
            raw.grid_side_length,
            raw.coverage_radius,
            raw.penalty_radius,
            raw.cities,
        )
    }
}

impl Instance {
    pub fn new(
        grid_side_length: i32,
        coverage_radius: i32,
        penalty_radius: i32,
        cities: Vec<Point>,
    ) -> Result<Self, InstanceError> {
        if grid_side_length <= 0 {
            return Err(InstanceError::EmptyGrid);
        }
        if coverage_radius < 0 {
            return Err(InstanceError::NegativeRadius("service radius"));
        }
        if penalty_radius < 0 {
            return Err(InstanceError::NegativeRadius("penalty radius"));
        }

        let mut seen = FnvHashSet::default();
        for &city in &cities {
            if !city.in_grid(grid_side_length) {
                return Err(InstanceError::CityOutOfBounds(city));
            }
            if !seen.insert(city) {
                return Err(InstanceError::DuplicateCity(city));
            }
        }

        Ok(Instance {
            grid_side_length,
            coverage_radius,
            penalty_radius,
            cities,
        })
    }

    /// Parse the text format: city count, grid side length, service radius,
    /// penalty radius, then one `x y` line per city. `#` starts a comment.
    pub fn parse(text: &str) -> Result<Self, InstanceError> {
        let mut lines = DataLines::new(text);

        let num_cities: usize = lines.read_value("city count")?;
        let grid_side_length = lines.read_value("grid side length")?;
        let coverage_radius = lines.read_value("service radius")?;
        let penalty_radius = lines.read_value("penalty radius")?;

        let mut cities = Vec::new();
        while let Some(city) = lines.try_read_point()? {
            cities.push(city);
        }
        if cities.len() != num_cities {
            return Err(InstanceError::CityCountMismatch {
                expected: num_cities,
                found: cities.len(),
            });
        }

        Instance::new(grid_side_length, coverage_radius, penalty_radius, cities)
    }

    pub fn read<R: Read>(mut reader: R) -> Result<Self, InstanceError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Instance::parse(&text)
    }

    /// Write the instance in the same text format `parse` accepts.
    pub fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.cities.len())?;
        writeln!(out, "{}", self.grid_side_length)?;
        writeln!(out, "{}", self.coverage_radius)?;
        writeln!(out, "{}", self.penalty_radius)?;
        for city in &self.cities {
            writeln!(out, "{}", city)?;
        }
        Ok(())
    }

    /// Grid side length `D`; the grid is `[0, D) x [0, D)`.
    #[inline]
    pub fn grid_side_length(&self) -> i32 {
        self.grid_side_length
    }

    /// Service radius `R_s`.
    #[inline]
    pub fn coverage_radius(&self) -> i32 {
        self.coverage_radius
    }

    /// Penalty radius `R_p`.
    #[inline]
    pub fn penalty_radius(&self) -> i32 {
        self.penalty_radius
    }

    #[inline]
    pub fn cities(&self) -> &[Point] {
        &self.cities
    }

    /// True if a tower at `tower` serves `city`.
    #[inline]
    pub fn covers(&self, tower: Point, city: Point) -> bool {
        let r = self.coverage_radius as u64;
        tower.distance_sq(city) <= r * r
    }
}

/// Non-empty, comment-stripped lines of a text file, with 1-based line numbers.
pub(crate) struct DataLines<'a> {
    lines: std::vec::IntoIter<(usize, &'a str)>,
}

impl<'a> DataLines<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        let lines: Vec<_> = text
            .lines()
            .enumerate()
            .filter_map(|(index, line)| {
                let data = line.split('#').next().unwrap_or("").trim();
                if data.is_empty() {
                    None
                } else {
                    Some((index + 1, data))
                }
            })
            .collect();

        DataLines {
            lines: lines.into_iter(),
        }
    }

    /// Read a line holding exactly one value.
    pub(crate) fn read_value<T: FromStr>(&mut self, field: &'static str) -> Result<T, InstanceError> {
        let (line, data) = self
            .lines
            .next()
            .ok_or(InstanceError::MissingField(field))?;

        let mut tokens = data.split_whitespace();
        let token = tokens.next().ok_or(InstanceError::MissingField(field))?;
        if tokens.next().is_some() {
            return Err(InstanceError::TrailingData(line));
        }

        parse_token(line, token)
    }

    /// Read the next `x y` line, or `None` once the input is exhausted.
    pub(crate) fn try_read_point(&mut self) -> Result<Option<Point>, InstanceError> {
        let (line, data) = match self.lines.next() {
            Some(entry) => entry,
            None => return Ok(None),
        };

        let tokens: Vec<&str> = data.split_whitespace().collect();
        match tokens.as_slice() {
            [x, y] => Ok(Some(Point::new(parse_token(line, x)?, parse_token(line, y)?))),
            _ => Err(InstanceError::MalformedLine(line)),
        }
    }
}

fn parse_token<T: FromStr>(line: usize, token: &str) -> Result<T, InstanceError> {
    token.parse().map_err(|_| InstanceError::InvalidNumber {
        line,
        token: token.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = "# Small instance.
3
10
3
8
5 5
5 6 # inline comment
6 5
";

    #[test]
    fn parses_text_format() {
        let instance = Instance::parse(SMALL).unwrap();

        assert_eq!(instance.grid_side_length(), 10);
        assert_eq!(instance.coverage_radius(), 3);
        assert_eq!(instance.penalty_radius(), 8);
        assert_eq!(
            instance.cities(),
            &[Point::new(5, 5), Point::new(5, 6), Point::new(6, 5)]
        );
    }

    #[test]
    fn written_text_parses_back() {
        let instance = Instance::parse(SMALL).unwrap();
        let mut out = Vec::new();
        instance.write_text(&mut out).unwrap();

        let reparsed = Instance::parse(std::str::from_utf8(&out).unwrap()).unwrap();
        assert_eq!(reparsed, instance);
    }

    #[test]
    fn rejects_count_mismatch() {
        let err = Instance::parse("2\n10\n3\n8\n1 1\n").unwrap_err();
        assert!(matches!(
            err,
            InstanceError::CityCountMismatch {
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn rejects_out_of_bounds_and_duplicates() {
        let err = Instance::parse("1\n10\n3\n8\n10 0\n").unwrap_err();
        assert!(matches!(err, InstanceError::CityOutOfBounds(p) if p == Point::new(10, 0)));

        let err = Instance::new(10, 3, 8, vec![Point::new(1, 1), Point::new(1, 1)]).unwrap_err();
        assert!(matches!(err, InstanceError::DuplicateCity(_)));
    }

    #[test]
    fn oversized_city_count_is_a_mismatch() {
        let err = Instance::parse("18446744073709551615\n10\n1\n1\n0 0\n").unwrap_err();
        assert!(matches!(
            err,
            InstanceError::CityCountMismatch {
                expected: usize::MAX,
                found: 1
            }
        ));
    }

    #[test]
    fn accepts_extreme_grid_and_radius() {
        let instance = Instance::parse(&format!(
            "2\n{}\n{}\n{}\n0 0\n{} {}\n",
            i32::MAX,
            i32::MAX,
            i32::MAX,
            i32::MAX - 1,
            i32::MAX - 1
        ))
        .unwrap();

        assert!(instance.covers(Point::new(0, 0), Point::new(i32::MAX - 1, 0)));
        assert!(!instance.covers(Point::new(0, 0), Point::new(i32::MAX - 1, i32::MAX - 1)));
    }

    #[test]
    fn rejects_bad_header() {
        assert!(matches!(
            Instance::parse("1\n0\n3\n8\n0 0\n").unwrap_err(),
            InstanceError::EmptyGrid
        ));
        assert!(matches!(
            Instance::parse("1\n10\n-1\n8\n0 0\n").unwrap_err(),
            InstanceError::NegativeRadius(_)
        ));
        assert!(matches!(
            Instance::parse("1\n10\nthree\n8\n0 0\n").unwrap_err(),
            InstanceError::InvalidNumber { line: 3, .. }
        ));
        assert!(matches!(
            Instance::parse("1\n10 4\n3\n8\n0 0\n").unwrap_err(),
            InstanceError::TrailingData(2)
        ));
        assert!(matches!(
            Instance::parse("1\n10\n3\n").unwrap_err(),
            InstanceError::MissingField("penalty radius")
        ));
        assert!(matches!(
            Instance::parse("1\n10\n3\n8\n0 0 0\n").unwrap_err(),
            InstanceError::MalformedLine(5)
        ));
    }

    #[test]
    fn covers_uses_squared_radius() {
        let instance = Instance::new(10, 3, 8, vec![Point::new(5, 5)]).unwrap();

        assert!(instance.covers(Point::new(5, 5), Point::new(5, 8)));
        assert!(!instance.covers(Point::new(5, 5), Point::new(7, 8)));
    }
}
