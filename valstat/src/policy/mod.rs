//! Resolving a four-state carrier into a two-state [`Result`].
//!
//! A carrier can be `Info` (value and status) or `Empty` (neither), and
//! neither state has an obvious success/failure reading. Callers that want
//! to use `?` must therefore say, through a [`ConsumptionPolicy`], how the
//! `Info` state resolves. `Empty` is always rejected: there is no value to
//! hand back.
//!
//! The policy is plain serde data so applications can load it from their
//! own configuration layer:
//!
//! ```toml
//! info = "reject"
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Metastate, Occupancy, Valstat};

/// How to classify a carrier whose channels are both occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InfoPolicy {
    /// Treat the status as a notice and hand back the value.
    #[default]
    Accept,
    /// Treat the status as a failure, keeping the value in the rejection.
    Reject,
}

/// Consumer-side rules for resolving ambiguous carriers.
///
/// The default accepts `Info` carriers: the producer did hand back a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConsumptionPolicy {
    /// Classification applied to `Info` carriers.
    pub info: InfoPolicy,
}

impl ConsumptionPolicy {
    /// Policy that accepts `Info` carriers as successes.
    pub const ACCEPT_INFO: Self = Self {
        info: InfoPolicy::Accept,
    };

    /// Policy that rejects `Info` carriers as failures.
    pub const REJECT_INFO: Self = Self {
        info: InfoPolicy::Reject,
    };
}

/// A value the policy accepted, with any status that rode along with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Accepted<V, S> {
    value: V,
    notice: Option<S>,
}

impl<V, S> Accepted<V, S> {
    /// The accepted value.
    #[must_use]
    pub const fn value(&self) -> &V {
        &self.value
    }

    /// Status carried alongside the value, present only for `Info` carriers.
    #[must_use]
    pub const fn notice(&self) -> Option<&S> {
        self.notice.as_ref()
    }

    /// Discard the notice and keep the value.
    #[must_use]
    pub fn into_value(self) -> V {
        self.value
    }

    /// Split into the value and the optional notice.
    #[must_use]
    pub fn into_parts(self) -> (V, Option<S>) {
        (self.value, self.notice)
    }
}

/// A carrier the policy refused to treat as a success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Rejection<V, S> {
    /// The carrier held neither a value nor a status.
    #[error("carrier holds neither a value nor a status")]
    Empty,

    /// The carrier held a status and no value.
    #[error("operation failed: {0}")]
    Status(S),

    /// The carrier held both channels and the policy rejects `Info`.
    #[error("operation returned a value with a rejected status: {status}")]
    Diagnosed {
        /// Value the producer returned.
        value: V,
        /// Status that caused the rejection.
        status: S,
    },
}

impl<V, S> Rejection<V, S> {
    /// The status behind the rejection, if there was one.
    #[must_use]
    pub const fn status(&self) -> Option<&S> {
        match self {
            Self::Empty => None,
            Self::Status(status) | Self::Diagnosed { status, .. } => Some(status),
        }
    }

    /// Occupancy of the carrier that was rejected.
    #[must_use]
    pub const fn occupancy(&self) -> Occupancy {
        match self {
            Self::Empty => Occupancy::Empty,
            Self::Status(_) => Occupancy::Error,
            Self::Diagnosed { .. } => Occupancy::Info,
        }
    }

    /// Rebuild the carrier that was rejected.
    pub fn into_valstat(self) -> Valstat<V, S> {
        match self {
            Self::Empty => Valstat::empty(),
            Self::Status(status) => Valstat::error(status),
            Self::Diagnosed { value, status } => Valstat::info(value, status),
        }
    }
}

impl<V, S> Valstat<V, S> {
    /// Resolve the carrier into a [`Result`] under `policy`.
    ///
    /// | occupancy | outcome                                              |
    /// |-----------|------------------------------------------------------|
    /// | `Ok`      | `Ok(Accepted)` with no notice                        |
    /// | `Error`   | `Err(Rejection::Status)`                             |
    /// | `Info`    | `Ok(Accepted)` with a notice, or `Err(Diagnosed)`    |
    /// | `Empty`   | `Err(Rejection::Empty)`                              |
    ///
    /// No payload is dropped in any branch.
    ///
    /// # Errors
    ///
    /// Returns a [`Rejection`] for `Error` and `Empty` carriers, and for
    /// `Info` carriers when the policy rejects them.
    ///
    /// # Examples
    ///
    /// ```
    /// use valstat::{ConsumptionPolicy, HttpStatus, HttpValstat, Rejection};
    ///
    /// let partial: HttpValstat<&str> = HttpValstat::info("abc", HttpStatus::PartialContent);
    ///
    /// let accepted = partial.consume(&ConsumptionPolicy::ACCEPT_INFO);
    /// assert_eq!(accepted.map(|a| a.into_parts()), Ok(("abc", Some(HttpStatus::PartialContent))));
    ///
    /// let rejected = partial.consume(&ConsumptionPolicy::REJECT_INFO);
    /// assert!(matches!(rejected, Err(Rejection::Diagnosed { value: "abc", .. })));
    /// ```
    pub fn consume(self, policy: &ConsumptionPolicy) -> Result<Accepted<V, S>, Rejection<V, S>> {
        let occupancy = self.occupancy();
        tracing::debug!(%occupancy, info_policy = ?policy.info, "consuming carrier");
        match self.into_metastate() {
            Metastate::ValueOnly(value) => Ok(Accepted {
                value,
                notice: None,
            }),
            Metastate::StatusOnly(status) => Err(Rejection::Status(status)),
            Metastate::Both(value, status) => match policy.info {
                InfoPolicy::Accept => {
                    tracing::debug!("accepting value with informational status");
                    Ok(Accepted {
                        value,
                        notice: Some(status),
                    })
                }
                InfoPolicy::Reject => Err(Rejection::Diagnosed { value, status }),
            },
            Metastate::Empty => {
                tracing::trace!("rejecting empty carrier");
                Err(Rejection::Empty)
            }
        }
    }
}
