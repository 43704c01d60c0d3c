//! # Storing of assignment problems in memory
//!
//! This module provides the data structures used to represent assignment problems and their
//! solutions. Algorithms may introduce their specific data structures in
//! `algorithm::my_algorithm`.
pub mod assignment;
pub mod cost_matrix;
pub mod number_types;
pub mod similarity;
