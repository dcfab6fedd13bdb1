//! Strict four-variant view of a carrier.
//!
//! [`Valstat`] is the lenient baseline: two independent optionals. Call sites
//! that want the compiler to check they handled every occupancy state can
//! convert into [`Metastate`] and `match` on it.

use crate::{Occupancy, Valstat};

/// A carrier's contents with the occupancy state as the discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metastate<V, S> {
    /// Only the value channel was occupied.
    ValueOnly(V),
    /// Only the status channel was occupied.
    StatusOnly(S),
    /// Both channels were occupied.
    Both(V, S),
    /// Neither channel was occupied.
    Empty,
}

impl<V, S> Metastate<V, S> {
    /// Occupancy state this variant represents.
    #[must_use]
    pub const fn occupancy(&self) -> Occupancy {
        match self {
            Self::ValueOnly(_) => Occupancy::Ok,
            Self::StatusOnly(_) => Occupancy::Error,
            Self::Both(..) => Occupancy::Info,
            Self::Empty => Occupancy::Empty,
        }
    }
}

impl<V, S> From<Valstat<V, S>> for Metastate<V, S> {
    fn from(carrier: Valstat<V, S>) -> Self {
        match carrier.into_parts() {
            (Some(value), None) => Self::ValueOnly(value),
            (None, Some(status)) => Self::StatusOnly(status),
            (Some(value), Some(status)) => Self::Both(value, status),
            (None, None) => Self::Empty,
        }
    }
}

impl<V, S> From<Metastate<V, S>> for Valstat<V, S> {
    fn from(state: Metastate<V, S>) -> Self {
        match state {
            Metastate::ValueOnly(value) => Self::ok(value),
            Metastate::StatusOnly(status) => Self::error(status),
            Metastate::Both(value, status) => Self::info(value, status),
            Metastate::Empty => Self::empty(),
        }
    }
}
