//! # Delimited text matrices
//!
//! One row per line, values separated by a delimiter. Blank lines and lines starting with `#`
//! are skipped. When allowed, the tokens `inf`, `x` and `-` mark an infeasible pair.
use std::str::FromStr;

use crate::io::error::ParseError;

/// Tokens that stand for an infeasible pair, compared case insensitively.
const INFEASIBLE_TOKENS: [&str; 3] = ["inf", "x", "-"];

/// How the values of a line are separated.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Delimiter {
    /// Any amount of whitespace.
    Whitespace,
    /// A single character, with surrounding whitespace ignored.
    Character(char),
}

impl Default for Delimiter {
    fn default() -> Self {
        Delimiter::Character(',')
    }
}

impl From<char> for Delimiter {
    fn from(character: char) -> Self {
        if character.is_whitespace() {
            Delimiter::Whitespace
        } else {
            Delimiter::Character(character)
        }
    }
}

/// Parse the rows of a matrix.
///
/// # Arguments
///
/// * `text`: Contents of the file.
/// * `delimiter`: Separator of values on a line.
/// * `allow_infeasible`: Whether the infeasibility tokens are accepted.
///
/// # Return value
///
/// The values per row, with `None` for the infeasibility tokens. Row lengths are not checked.
///
/// # Errors
///
/// If a token can't be parsed into a value.
pub fn parse<F: FromStr>(
    text: &str,
    delimiter: Delimiter,
    allow_infeasible: bool,
) -> Result<Vec<Vec<Option<F>>>, ParseError> {
    text.lines()
        .enumerate()
        .map(|(index, line)| (index as u64 + 1, line))
        .filter(|(_, line)| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
        .map(|(line_number, line)| parse_line(line, delimiter, allow_infeasible)
            .map_err(|description| ParseError::with_file_location(description, (line_number, line))))
        .collect()
}

fn parse_line<F: FromStr>(
    line: &str,
    delimiter: Delimiter,
    allow_infeasible: bool,
) -> Result<Vec<Option<F>>, String> {
    let tokens: Box<dyn Iterator<Item=&str>> = match delimiter {
        Delimiter::Whitespace => Box::new(line.split_whitespace()),
        Delimiter::Character(character) => Box::new(line.split(character).map(str::trim)),
    };

    tokens
        .map(|token| {
            if allow_infeasible && is_infeasible_token(token) {
                Ok(None)
            } else {
                token.parse().map(Some)
                    .map_err(|_| format!("Could not parse value \"{}\"", token))
            }
        })
        .collect()
}

fn is_infeasible_token(token: &str) -> bool {
    INFEASIBLE_TOKENS.iter().any(|candidate| candidate.eq_ignore_ascii_case(token))
}
