//! # Command line tool
//!
//! Runs the binary on the matrix files of the `files` tests.
use std::process::{Command, Output};

use crate::files::get_test_file_path;

/// # Output and exit status
#[allow(missing_docs)]
mod test;

/// Run the binary on a matrix file.
///
/// # Arguments
///
/// * `name`: File name in the matrix file folder.
/// * `arguments`: Options following the file name.
fn run(name: &str, arguments: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_donor-assign"))
        .arg(get_test_file_path(name))
        .args(arguments)
        .env("RUST_LOG", "off")
        .output()
        .unwrap()
}

/// Standard output as text, without the trailing newline.
fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap().trim_end().to_string()
}
