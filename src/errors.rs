//! Error types for input parsing and playback
//!
//! Step generation itself never fails. Errors only arise at the edges:
//! turning user text into an [`Algorithm`](crate::algorithms::Algorithm) or a
//! value list ([`InputError`]), and moving the playback cursor past either end
//! of a sequence ([`PlaybackError`]).

use thiserror::Error;

use crate::algorithms::MAX_INPUT_LEN;

/// Invalid algorithm name or value list
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("Unknown algorithm '{0}' (expected bubbleSort, quickSort or binarySearch)")]
    UnknownAlgorithm(String),

    #[error("'{token}' is not a number")]
    InvalidValue { token: String },

    #[error("'{token}' is not a finite number")]
    NonFiniteValue { token: String },

    #[error("No values given")]
    EmptyValues,

    #[error("{len} values given, at most {max} are supported")]
    TooManyValues { len: usize, max: usize },

    #[error("'{token}' is not a valid length")]
    InvalidLength { token: String },
}

/// Cursor movement that would leave the step sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlaybackError {
    #[error("Step sequence is empty")]
    EmptySequence,

    #[error("Already at the first step")]
    AtStart,

    #[error("Already at the last step")]
    AtEnd,

    #[error("Step {index} is out of range (sequence has {len} steps)")]
    OutOfRange { index: usize, len: usize },
}

/// Parse a single finite number
pub fn parse_value(token: &str) -> Result<f64, InputError> {
    let value: f64 = token.trim().parse().map_err(|_| InputError::InvalidValue {
        token: token.to_string(),
    })?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InputError::NonFiniteValue {
            token: token.to_string(),
        })
    }
}

/// Parse a comma and/or whitespace separated list of numbers.
///
/// Rejects anything that is not a finite number; an input with no tokens at
/// all is [`InputError::EmptyValues`], and one longer than
/// [`MAX_INPUT_LEN`] is [`InputError::TooManyValues`].
pub fn parse_values(text: &str) -> Result<Vec<f64>, InputError> {
    let values = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(parse_value)
        .collect::<Result<Vec<f64>, InputError>>()?;

    if values.is_empty() {
        return Err(InputError::EmptyValues);
    }
    check_len(values.len())?;
    Ok(values)
}

/// Parse a random-input length, bounded by [`MAX_INPUT_LEN`]
pub fn parse_len(token: &str) -> Result<usize, InputError> {
    let len: usize = token.trim().parse().map_err(|_| InputError::InvalidLength {
        token: token.to_string(),
    })?;
    check_len(len)?;
    Ok(len)
}

fn check_len(len: usize) -> Result<(), InputError> {
    if len > MAX_INPUT_LEN {
        return Err(InputError::TooManyValues {
            len,
            max: MAX_INPUT_LEN,
        });
    }
    Ok(())
}
