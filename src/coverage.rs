//! Coverage tracker: the set of cities that no placed tower serves yet.

use crate::grid::*;
use crate::instance::Instance;
use crate::location::*;
use fnv::FnvHashSet;
use itertools::Either;

/// Uncovered cities. Starts with every city of the instance and only ever
/// shrinks. Memory is proportional to the number of cities, not the grid.
#[derive(Clone, Debug)]
pub struct Coverage {
    uncovered: FnvHashSet<Point>,
}

impl Coverage {
    /// All cities of `instance` start uncovered.
    pub fn new(instance: &Instance) -> Self {
        Coverage {
            uncovered: instance.cities().iter().copied().collect(),
        }
    }

    #[inline]
    pub fn is_uncovered(&self, point: Point) -> bool {
        self.uncovered.contains(&point)
    }

    /// Number of cities still uncovered.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.uncovered.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.uncovered.is_empty()
    }

    /// Uncovered cities within the service radius of `center`.
    ///
    /// Scans the cells of the clipped `(2 * R_s + 1)` box, unless the box
    /// holds more cells than there are uncovered cities, in which case the
    /// uncovered cities are tested against the box instead.
    pub fn uncovered_in_disc<'s>(
        &'s self,
        instance: &Instance,
        center: Point,
    ) -> impl Iterator<Item = Point> + 's {
        let bounds = disc_bounds(
            center,
            instance.coverage_radius(),
            instance.grid_side_length(),
        );

        if bounds.area() <= self.uncovered.len() as u64 {
            Either::Left(
                bounds
                    .cells()
                    .filter(move |cell| self.uncovered.contains(cell)),
            )
        } else {
            Either::Right(
                self.uncovered
                    .iter()
                    .copied()
                    .filter(move |&city| bounds.contains(city)),
            )
        }
    }

    /// Mark every uncovered city within the service radius of `tower` as
    /// covered. Returns how many cities were removed.
    pub fn cover(&mut self, instance: &Instance, tower: Point) -> usize {
        let covered: Vec<Point> = self.uncovered_in_disc(instance, tower).collect();
        for city in &covered {
            self.uncovered.remove(city);
        }

        covered.len()
    }

    /// Iterate the uncovered cities, in no particular order.
    pub fn uncovered_cities(&self) -> impl Iterator<Item = Point> + '_ {
        self.uncovered.iter().copied()
    }
}
