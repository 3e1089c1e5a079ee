use serde::{Deserialize, Serialize};
use std::fmt;

/// An integer grid coordinate. Used both for city and tower positions.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    /// Squared euclidean distance between two points, saturating at
    /// `u64::MAX` (only reachable when both axes span nearly all of `i32`).
    #[inline]
    pub fn distance_sq(self, other: Self) -> u64 {
        let dx = (self.x as i64 - other.x as i64).unsigned_abs();
        let dy = (self.y as i64 - other.y as i64).unsigned_abs();

        (dx * dx).saturating_add(dy * dy)
    }

    /// True if the point lies inside `[0, side) x [0, side)`.
    #[inline]
    pub fn in_grid(self, side: i32) -> bool {
        (0..side).contains(&self.x) && (0..side).contains(&self.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_squared_and_symmetric() {
        let a = Point::new(0, 0);
        let b = Point::new(9, 9);

        assert_eq!(a.distance_sq(b), 162);
        assert_eq!(b.distance_sq(a), 162);
        assert_eq!(a.distance_sq(a), 0);
        assert_eq!(Point::new(5, 5).distance_sq(Point::new(6, 5)), 1);
    }

    #[test]
    fn distance_spans_full_coordinate_range() {
        let left = Point::new(i32::MIN, 0);
        let right = Point::new(i32::MAX, 0);
        let span = u32::MAX as u64;

        assert_eq!(left.distance_sq(right), span * span);
        assert_eq!(right.distance_sq(left), span * span);

        let far = Point::new(i32::MIN, i32::MIN).distance_sq(Point::new(i32::MAX, i32::MAX));
        assert_eq!(far, u64::MAX);
    }

    #[test]
    fn in_grid_is_half_open() {
        assert!(Point::new(0, 0).in_grid(5));
        assert!(Point::new(4, 4).in_grid(5));
        assert!(!Point::new(5, 0).in_grid(5));
        assert!(!Point::new(0, -1).in_grid(5));
    }

    #[test]
    fn points_hash_by_value() {
        let mut set = fnv::FnvHashSet::default();
        set.insert(Point::new(2, 3));

        assert!(set.contains(&Point::from((2, 3))));
        assert!(!set.contains(&Point::new(3, 2)));
    }
}
