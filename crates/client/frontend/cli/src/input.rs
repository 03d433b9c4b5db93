//! Parsing of numbered menu selections.

use thiserror::Error;

/// Why a typed line is not a valid menu choice.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChoiceError {
    #[error("Please enter a number.")]
    NotANumber,

    #[error("Please enter a number between {min} and {max}.")]
    OutOfRange { min: usize, max: usize },
}

/// Parses a 1-based menu choice within `min..=max`.
pub fn parse_choice(line: &str, min: usize, max: usize) -> Result<usize, ChoiceError> {
    let value: usize = line.trim().parse().map_err(|_| ChoiceError::NotANumber)?;
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(ChoiceError::OutOfRange { min, max })
    }
}
