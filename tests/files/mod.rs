//! # Matrix files
//!
//! Small problems stored the way the command line tool reads them.
use std::path::{Path, PathBuf};

/// # Reading and solving
#[allow(missing_docs)]
mod test;

/// Folder in which the matrix files are stored.
///
/// The path is relative to the project root folder.
fn problem_file_directory() -> PathBuf {
    Path::new(file!()).parent().unwrap().to_path_buf()
}

/// Compute the path of a problem file.
///
/// # Arguments
///
/// * `name`: File name, including extension.
///
/// # Return value
///
/// File path relative to the project root folder.
pub(crate) fn get_test_file_path(name: &str) -> PathBuf {
    problem_file_directory().join(name)
}
