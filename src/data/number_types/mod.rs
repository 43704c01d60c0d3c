//! # Number types
//!
//! The solver is generic over the number type of the costs. A benefit of this approach is that
//! the algorithm can be tested for correctness using exact rational numbers, while the same code
//! is used without adaptation with floating point numbers.
pub mod traits;
pub mod weight;
