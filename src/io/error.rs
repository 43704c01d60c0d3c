//! # Error reporting for reading of matrix files
//!
//! A collection of enums and structures describing any problems encountered during reading and
//! parsing.
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fmt;
use std::io;

use crate::data::cost_matrix::MatrixError;
use crate::data::similarity::ConversionError;

/// An `Import` error is created when an error was encountered during IO or parsing.
///
/// It is the highest error in the io error hierarchy.
#[derive(Debug)]
pub enum Import {
    /// The file to read isn't found, or the reading of file couldn't start or was interrupted.
    IO(io::Error),
    /// Contents of the file could not be parsed into rows of values.
    Parse(ParseError),
    /// The values were read, but they don't form a valid cost matrix.
    Matrix(MatrixError),
    /// The values were read as similarity scores, but they can't be converted to costs.
    Similarity(ConversionError),
}

impl Display for Import {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Import::IO(error) => error.fmt(f),
            Import::Parse(error) => error.fmt(f),
            Import::Matrix(error) => error.fmt(f),
            Import::Similarity(error) => error.fmt(f),
        }
    }
}

impl Error for Import {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Import::IO(error) => Some(error),
            Import::Parse(error) => Some(error),
            Import::Matrix(error) => Some(error),
            Import::Similarity(error) => Some(error),
        }
    }
}

/// A `ParseError` represents all errors encountered during parsing.
///
/// It may hold the line at which the error was caused.
#[derive(Debug, Eq, PartialEq)]
pub struct ParseError {
    description: String,
    location: Option<(u64, String)>,
}

impl ParseError {
    /// Create a new `ParseError` with only a description.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    pub fn new(description: impl Into<String>) -> Self {
        Self { description: description.into(), location: None, }
    }

    /// Create a new `ParseError` instance with a `FileLocation` as a cause.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    /// * `file_location`: A reference to a line number and line that caused the error.
    pub fn with_file_location(
        description: impl Into<String>,
        file_location: FileLocation,
    ) -> Self {
        let (line_number, line) = file_location;
        Self {
            description: description.into(),
            location: Some((line_number, line.to_string())),
        }
    }

    /// Line number at which the error was caused, if known.
    pub fn line_number(&self) -> Option<u64> {
        self.location.as_ref().map(|&(line_number, _)| line_number)
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ParseError: {}", self.description)?;
        if let Some((line_number, line)) = &self.location {
            write!(f, "\n\tCaused at line\t{}:\t{}", line_number, line)?;
        }

        Ok(())
    }
}

impl Error for ParseError {}

/// A `FileLocation` references a line in the file by the line number of the file as originally
/// read from the disk. It contains a reference to the line itself.
pub(super) type FileLocation<'a> = (u64, &'a str);
