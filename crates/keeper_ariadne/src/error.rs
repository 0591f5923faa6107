//! # Ariadne Error Types
//!
//! All errors that can occur while managing path-planning geometry.

use thiserror::Error;

use crate::points::PointId;

/// Errors that can occur in the Ariadne point pool.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AriadneError {
    /// No free slot left for a new point.
    #[error("point pool exhausted: all {capacity} points in use")]
    PointsExhausted {
        /// Number of client-usable slots in the pool.
        capacity: usize,
    },

    /// A batch allocation was refused before any point was taken.
    #[error("not enough free points: requested {requested}, available {available}")]
    InsufficientPoints {
        /// Points asked for.
        requested: usize,
        /// Points free at the time of the request.
        available: usize,
    },

    /// The identifier is the sentinel or lies outside the slot table.
    #[error("invalid point id: {0}")]
    InvalidPoint(PointId),

    /// The identifier names a slot that is currently free.
    #[error("point {0} is not allocated")]
    PointNotAllocated(PointId),

    /// Invalid configuration file.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for Ariadne operations.
pub type AriadneResult<T> = Result<T, AriadneError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = AriadneError::PointsExhausted { capacity: 4499 };
        assert_eq!(err.to_string(), "point pool exhausted: all 4499 points in use");

        let err = AriadneError::InvalidPoint(PointId::INVALID);
        assert_eq!(err.to_string(), "invalid point id: 0");

        let err = AriadneError::InsufficientPoints {
            requested: 8,
            available: 3,
        };
        assert_eq!(
            err.to_string(),
            "not enough free points: requested 8, available 3"
        );
    }
}
