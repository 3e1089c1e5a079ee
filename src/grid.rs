//! Grid iteration and the clipped disc bounds shared by the scorer and the
//! coverage tracker.

use crate::location::*;
use itertools::iproduct;

/// Every cell of a `side x side` grid, x-major then y.
pub fn grid_cells(side: i32) -> impl Iterator<Item = Point> {
    iproduct!(0..side, 0..side).map(|(x, y)| Point::new(x, y))
}

/// The square box of side `2 * radius + 1` around a disc center, clipped to
/// `[0, side)` on both axes. Bounds are kept in `i64` so no radius overflows.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DiscBounds {
    center: Point,
    radius_sq: u64,
    min_x: i64,
    max_x: i64,
    min_y: i64,
    max_y: i64,
}

pub fn disc_bounds(center: Point, radius: i32, side: i32) -> DiscBounds {
    let radius = radius as i64;
    let last = side as i64 - 1;

    DiscBounds {
        center,
        radius_sq: (radius * radius) as u64,
        min_x: (center.x as i64 - radius).max(0),
        max_x: (center.x as i64 + radius).min(last),
        min_y: (center.y as i64 - radius).max(0),
        max_y: (center.y as i64 + radius).min(last),
    }
}

impl DiscBounds {
    /// Number of cells in the clipped box.
    pub fn area(&self) -> u64 {
        let width = (self.max_x - self.min_x + 1).max(0) as u64;
        let height = (self.max_y - self.min_y + 1).max(0) as u64;

        width * height
    }

    /// True if `point` is inside the clipped box and within the radius.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        let (x, y) = (point.x as i64, point.y as i64);

        (self.min_x..=self.max_x).contains(&x)
            && (self.min_y..=self.max_y).contains(&y)
            && point.distance_sq(self.center) <= self.radius_sq
    }

    /// Cells of the box that lie within the radius, x-major.
    pub fn cells(self) -> impl Iterator<Item = Point> {
        iproduct!(self.min_x..=self.max_x, self.min_y..=self.max_y)
            .map(|(x, y)| Point::new(x as i32, y as i32))
            .filter(move |&cell| cell.distance_sq(self.center) <= self.radius_sq)
    }
}
