//! Field-less classification of which carrier channels hold data.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Occupancy of a [`Valstat`](crate::Valstat) carrier.
///
/// The four states are the whole space of reachable carriers. None of them
/// is illegal; `Empty` and `Info` simply require the consumer to decide what
/// they mean at the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Occupancy {
    /// Value present, status absent.
    Ok,
    /// Value absent, status present.
    Error,
    /// Value and status both present.
    Info,
    /// Neither channel occupied.
    Empty,
}

impl Occupancy {
    /// Classify a pair of channel flags.
    #[must_use]
    pub const fn from_flags(has_value: bool, has_status: bool) -> Self {
        match (has_value, has_status) {
            (true, false) => Self::Ok,
            (false, true) => Self::Error,
            (true, true) => Self::Info,
            (false, false) => Self::Empty,
        }
    }

    /// Whether this state carries a value.
    #[must_use]
    pub const fn has_value(self) -> bool {
        matches!(self, Self::Ok | Self::Info)
    }

    /// Whether this state carries a status.
    #[must_use]
    pub const fn has_status(self) -> bool {
        matches!(self, Self::Error | Self::Info)
    }

    /// Lowercase name used in logs and error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Error => "error",
            Self::Info => "info",
            Self::Empty => "empty",
        }
    }
}

impl fmt::Display for Occupancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
