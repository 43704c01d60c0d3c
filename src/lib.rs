//! # An exact assignment solver
//!
//! Recipients (rows) are assigned donors (columns) at minimum total cost, where some pairs may
//! never be assigned. Problems are solved with a variant of the Hungarian method that maintains a
//! maximum matching on the zeros of the reduced matrix using Hopcroft-Karp, and derives minimum
//! line covers from it using König's theorem.
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod io;
