//! # Traits
//!
//! The solver is written once for all number types it supports. Exact types (integers and
//! rationals) compare reduced costs with zero exactly; floating point types use a tolerance
//! relative to the magnitude of the input costs, because the reduction and shift steps
//! accumulate rounding errors and an entry that should be zero might otherwise never enter the
//! zero graph.
use std::fmt::{Debug, Display};
use std::ops::{Add, Sub};

use num_traits::Zero;
use relp_num::{Rational64, RationalBig};

/// A cost value that the assignment solver can compute with.
///
/// The solver only adds, subtracts and compares costs. It needs subtraction to be closed, i.e.
/// intermediate values may become negative, which is why unsigned types are not implemented.
pub trait Cost:
    Zero +
    Add<Output=Self> +
    Sub<Output=Self> +
    PartialOrd +
    Clone +
    Display +
    Debug
{
    /// Whether a reduced cost should be treated as zero.
    ///
    /// Exact types return `self.is_zero()`; inexact types allow an error of a few hundred units
    /// in the last place of `scale`.
    ///
    /// # Arguments
    ///
    /// * `scale`: Largest magnitude of the costs this value was derived from.
    fn is_negligible(&self, scale: &Self) -> bool {
        let _ = scale;
        self.is_zero()
    }
}

macro_rules! impl_exact_cost {
    ($($t:ty),*) => {
        $(impl Cost for $t {})*
    }
}
impl_exact_cost!(i32, i64, Rational64, RationalBig);

/// Relative tolerance of floating point costs, in multiples of the machine epsilon.
const FLOAT_TOLERANCE_ULPS: u16 = 256;

macro_rules! impl_float_cost {
    ($t:ty) => {
        impl Cost for $t {
            fn is_negligible(&self, scale: &Self) -> bool {
                self.abs() <= FLOAT_TOLERANCE_ULPS as $t * <$t>::EPSILON * scale.abs()
            }
        }
    }
}
impl_float_cost!(f32);
impl_float_cost!(f64);
