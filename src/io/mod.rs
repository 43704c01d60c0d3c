//! # Reading of assignment problems
//!
//! This module reads cost or similarity matrices from delimited text files.
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use num_traits::One;
use tracing::debug;

use crate::algorithm::hungarian::SolverConfig;
use crate::data::cost_matrix::CostMatrix;
use crate::data::number_types::traits::Cost;
use crate::data::similarity::Conversion;
use crate::io::delimited::Delimiter;
use crate::io::error::{Import, ParseError};

pub mod delimited;
pub mod error;

/// Read a file into memory.
///
/// # Errors
///
/// When the file cannot be found or read.
pub fn read(file_path: &Path) -> Result<String, Import> {
    let mut contents = String::new();
    File::open(file_path)
        .map_err(Import::IO)?
        .read_to_string(&mut contents)
        .map_err(Import::IO)?;

    debug!(path = %file_path.display(), bytes = contents.len(), "Read matrix file");

    Ok(contents)
}

/// Import a cost matrix from a file.
///
/// See `costs_from_str`.
pub fn import_costs<F>(
    file_path: &Path,
    delimiter: Delimiter,
    infeasible: Option<F>,
) -> Result<(CostMatrix<F>, SolverConfig<F>), Import>
where
    F: Cost + One + FromStr,
{
    costs_from_str(&read(file_path)?, delimiter, infeasible)
}

/// Import a similarity matrix from a file and convert it to costs.
///
/// See `similarities_from_str`.
pub fn import_similarities(
    file_path: &Path,
    delimiter: Delimiter,
    conversion: &Conversion,
) -> Result<(CostMatrix<f64>, SolverConfig<f64>), Import> {
    similarities_from_str(&read(file_path)?, delimiter, conversion)
}

/// Parse a cost matrix.
///
/// # Arguments
///
/// * `text`: Rows of costs, infeasible pairs marked with a token or a value of at least the
/// sentinel.
/// * `delimiter`: Separator of values on a line.
/// * `infeasible`: The sentinel. If not provided, one more than the sum of all values that are
/// not marked infeasible is used.
///
/// # Return value
///
/// The matrix, in which marked pairs hold the sentinel, and a configuration using that sentinel.
pub fn costs_from_str<F>(
    text: &str,
    delimiter: Delimiter,
    infeasible: Option<F>,
) -> Result<(CostMatrix<F>, SolverConfig<F>), Import>
where
    F: Cost + One + FromStr,
{
    let rows = delimited::parse::<F>(text, delimiter, true).map_err(Import::Parse)?;

    let sentinel = match infeasible {
        Some(sentinel) => sentinel,
        None => rows.iter()
            .flatten()
            .flatten()
            .fold(F::one(), |total, value| total + value.clone()),
    };
    debug!(%sentinel, "Infeasibility sentinel");

    let data = rows.into_iter()
        .map(|row| row.into_iter()
            .map(|value| value.unwrap_or_else(|| sentinel.clone()))
            .collect())
        .collect();
    let matrix = CostMatrix::new(data).map_err(Import::Matrix)?;

    Ok((matrix, SolverConfig::new(sentinel)))
}

/// Parse a similarity matrix and convert it to costs.
///
/// # Arguments
///
/// * `text`: Rows of similarity scores in `[0, 1]`.
/// * `delimiter`: Separator of values on a line.
/// * `conversion`: Rounding and threshold to apply.
pub fn similarities_from_str(
    text: &str,
    delimiter: Delimiter,
    conversion: &Conversion,
) -> Result<(CostMatrix<f64>, SolverConfig<f64>), Import> {
    let rows = delimited::parse::<f64>(text, delimiter, false).map_err(Import::Parse)?;
    // Tokens are rejected by the parser in this mode
    let similarities = rows.into_iter()
        .map(|row| row.into_iter().collect::<Option<Vec<_>>>())
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| Import::Parse(ParseError::new("Infeasibility markers in similarity file")))?;

    conversion.convert(similarities).map_err(Import::Similarity)
}
