//! Errors produced when reading a carrier channel that is not occupied.

use thiserror::Error;

use crate::Occupancy;

/// A checked read found the requested channel empty.
///
/// This is a contract violation on the consumer's side, reported as data
/// rather than a panic. Domain failures never surface here; they travel in
/// the status channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum AccessError {
    /// The value channel was read but holds nothing.
    #[error("value channel is empty (occupancy: {occupancy})")]
    MissingValue {
        /// Occupancy of the carrier at the time of the read.
        occupancy: Occupancy,
    },

    /// The status channel was read but holds nothing.
    #[error("status channel is empty (occupancy: {occupancy})")]
    MissingStatus {
        /// Occupancy of the carrier at the time of the read.
        occupancy: Occupancy,
    },
}

impl AccessError {
    /// Occupancy of the carrier that rejected the read.
    #[must_use]
    pub const fn occupancy(&self) -> Occupancy {
        match self {
            Self::MissingValue { occupancy } | Self::MissingStatus { occupancy } => *occupancy,
        }
    }
}
