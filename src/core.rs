use thiserror::Error;

/// Precondition violations reported instead of computing an arbitrary answer.
///
/// None of the scans in this crate clamp or guess: a range query with
/// inverted or out-of-range bounds, an empty input where at least one
/// element is assumed, or a malformed matrix fails up front with one of
/// these variants.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("{0} requires a non-empty input")]
    EmptyInput(&'static str),

    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("inverted range: lo {lo} > hi {hi}")]
    InvertedRange { lo: usize, hi: usize },

    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedMatrix {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("matrix is {rows}x{cols}, expected square")]
    NotSquare { rows: usize, cols: usize },

    #[error("buffer holds {found} elements, need {needed}")]
    BufferTooSmall { needed: usize, found: usize },

    #[error("value at index {index} is outside the documented domain")]
    ValueOutOfDomain { index: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Validate an inclusive index range `lo..=hi` against a length.
pub(crate) fn check_range(lo: usize, hi: usize, len: usize) -> Result<()> {
    if lo > hi {
        return Err(Error::InvertedRange { lo, hi });
    }
    if hi >= len {
        return Err(Error::IndexOutOfBounds { index: hi, len });
    }
    Ok(())
}
