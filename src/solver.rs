//! The `Solver` trait every placement strategy implements, and the naive
//! baseline.

use crate::instance::Instance;
use crate::solution::Solution;
use log::*;

/// A tower placement strategy.
pub trait Solver {
    /// Registry key used to select the strategy.
    fn name(&self) -> &str;

    fn solve(&self, instance: &Instance) -> Solution;
}

/// Places one tower on every city.
pub struct NaiveSolver;

impl Solver for NaiveSolver {
    fn name(&self) -> &str {
        "naive"
    }

    fn solve(&self, instance: &Instance) -> Solution {
        debug!("Naive placed {} towers", instance.cities().len());

        Solution::new(instance.clone(), instance.cities().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::Point;

    #[test]
    fn naive_places_tower_on_every_city() {
        let cities = vec![Point::new(0, 0), Point::new(9, 9), Point::new(4, 7)];
        let instance = Instance::new(10, 0, 3, cities.clone()).unwrap();

        let solution = NaiveSolver.solve(&instance);

        assert_eq!(solution.towers(), cities.as_slice());
        assert!(solution.valid());
    }

    #[test]
    fn naive_single_city() {
        let instance = Instance::new(5, 0, 0, vec![Point::new(2, 2)]).unwrap();

        assert_eq!(NaiveSolver.solve(&instance).towers(), &[Point::new(2, 2)]);
    }
}
