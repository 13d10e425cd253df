use thiserror::Error;

/// Caller-input errors raised by [`crate::SizeIndex`] queries.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum Error {
    #[error("requested index {index} is outside of range 0..{count}")]
    OutOfRange { index: usize, count: usize },

    /// The size source returned a negative, non-finite, or missing (`None`) value.
    #[error("invalid size returned for index {index}: {size:?}")]
    InvalidSize { index: usize, size: Option<f64> },

    #[error("invalid offset {offset} specified")]
    InvalidOffset { offset: f64 },
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
