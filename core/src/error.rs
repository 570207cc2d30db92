//! Validation failures of the coordinate model and the layout.

/// An invalid argument to one of the constructors or lookups.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Error {
    /// The cube components do not sum to zero.
    #[error("invalid cube coordinates ({q}, {r}, {s}): q + r + s must equal 0")]
    InvalidCoordinate { q: f64, r: f64, s: f64 },

    /// A direction index outside of `0..=5`.
    #[error("invalid direction {0}: must be in the range 0 to 5")]
    InvalidDirection(i32),

    /// A corner index outside of `0..=5`.
    #[error("invalid corner {0}: must be in the range 0 to 5")]
    InvalidCorner(i32),
}

pub type Result<T> = std::result::Result<T, Error>;
