//! # Weights
//!
//! Working values of the cells of the padded square matrix.
//!
//! An infeasible cell behaves as if its cost were an arbitrarily large constant `M`. Instead of
//! choosing a concrete value for `M`, a weight stores how many times `M` it contains next to its
//! finite part, and weights are ordered lexicographically. Reductions and shifts are then exact:
//! no infeasible cell is ever made cheaper than a feasible alternative by rounding or overflow,
//! and the optimum first minimizes the number of infeasible cells used and only then the cost.
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::fmt;
use std::ops::{Add, Sub};

use crate::data::number_types::traits::Cost;

/// A cost with a symbolic multiple of an infeasibility penalty.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct Weight<F> {
    /// Number of times the infeasibility penalty is contained in this value.
    ///
    /// Can be negative after reductions, but never for a cell of a reduced matrix.
    infeasible: i64,
    /// Finite part.
    cost: F,
}

impl<F: Cost> Weight<F> {
    /// Weight of a cell that may be selected.
    pub fn feasible(cost: F) -> Self {
        Self { infeasible: 0, cost, }
    }

    /// Weight of a cell that may never be selected at a finite cost.
    pub fn infeasible() -> Self {
        Self { infeasible: 1, cost: F::zero(), }
    }

    /// Whether this weight counts as zero in the zero graph.
    ///
    /// The finite part uses the tolerance of the cost type relative to `scale`, the penalty
    /// count is exact.
    pub fn is_negligible(&self, scale: &F) -> bool {
        self.infeasible == 0 && self.cost.is_negligible(scale)
    }

    /// Multiple of the penalty contained in this value.
    pub fn nr_penalties(&self) -> i64 {
        self.infeasible
    }

    /// The finite part of this value.
    pub fn cost(&self) -> &F {
        &self.cost
    }
}

impl<F: Cost> Add for Weight<F> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            infeasible: self.infeasible + rhs.infeasible,
            cost: self.cost + rhs.cost,
        }
    }
}

impl<F: Cost> Sub for Weight<F> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            infeasible: self.infeasible - rhs.infeasible,
            cost: self.cost - rhs.cost,
        }
    }
}

impl<F: Cost> PartialOrd for Weight<F> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.infeasible.cmp(&other.infeasible) {
            Ordering::Equal => self.cost.partial_cmp(&other.cost),
            ordering => Some(ordering),
        }
    }
}

impl<F: Cost> Display for Weight<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.infeasible {
            0 => write!(f, "{}", self.cost),
            penalties => write!(f, "{} + {}M", self.cost, penalties),
        }
    }
}

#[cfg(test)]
mod test {
    use relp_num::{R64, Rational64};

    use crate::data::number_types::weight::Weight;

    #[test]
    fn lexicographic_order() {
        let cheap = Weight::feasible(R64!(1_000_000));
        let blocked = Weight::<Rational64>::infeasible();
        assert!(cheap < blocked);

        // Reducing by a feasible row minimum leaves the penalty in place
        let reduced = blocked.clone() - Weight::feasible(R64!(5));
        assert!(reduced > cheap);
        assert_eq!(reduced.nr_penalties(), 1);
        assert_eq!(reduced.cost(), &R64!(-5));

        // Only a penalty can cancel a penalty
        let cancelled = reduced.clone() - reduced;
        assert_eq!(cancelled, Weight::feasible(R64!(0)));
        assert!(cancelled.is_negligible(&R64!(5)));
    }

    #[test]
    fn negligible_uses_cost_tolerance() {
        let almost = Weight::feasible(0.1_f64 + 0.2) - Weight::feasible(0.3);
        assert!(almost.is_negligible(&0.3));
        assert_ne!(almost.cost(), &0_f64);

        let penalty = Weight::<f64>::infeasible() - Weight::feasible(0.0);
        assert!(!penalty.is_negligible(&1_f64));
    }

    #[test]
    fn display() {
        assert_eq!(Weight::feasible(3_i64).to_string(), "3");
        assert_eq!((Weight::<i64>::infeasible() - Weight::feasible(2)).to_string(), "-2 + 1M");
    }
}
