//! The generic metastate carrier.

use serde::{Deserialize, Serialize};

use crate::{AccessError, Metastate, Occupancy};

/// An optional value travelling alongside an optional status.
///
/// Both channels are independent: the carrier does not enforce that exactly
/// one of them is set, and every combination is a legal [`Occupancy`].
/// Producers conventionally fill exactly one channel; consumers must test
/// occupancy before reading either side.
///
/// There is deliberately no way to use a carrier as a boolean or to reach
/// the value without checking:
///
/// ```compile_fail
/// use valstat::Valstat;
///
/// let carrier: Valstat<u32, ()> = Valstat::ok(1);
/// if carrier {}
/// ```
///
/// ```compile_fail
/// use valstat::Valstat;
///
/// let carrier: Valstat<u32, ()> = Valstat::ok(1);
/// let n: u32 = *carrier;
/// ```
///
/// # Examples
///
/// ```
/// use valstat::{Occupancy, Valstat};
///
/// fn parse(raw: &str) -> Valstat<u16, &'static str> {
///     match raw.parse() {
///         Ok(port) if port != 0 => Valstat::ok(port),
///         Ok(_) => Valstat::info(0, "port 0 asks the OS to pick one"),
///         Err(_) => Valstat::error("not a number"),
///     }
/// }
///
/// let carrier = parse("8080");
/// assert_eq!(carrier.occupancy(), Occupancy::Ok);
/// assert_eq!(carrier.value(), Some(&8080));
/// assert!(!carrier.has_status());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[must_use = "a carrier may hold a failure status that should be inspected"]
pub struct Valstat<V, S> {
    value: Option<V>,
    status: Option<S>,
}

impl<V, S> Valstat<V, S> {
    /// Build a carrier from two independent optional channels.
    ///
    /// No validation is performed; all four occupancy states are reachable.
    pub const fn new(value: Option<V>, status: Option<S>) -> Self {
        Self { value, status }
    }

    /// Success with a result and no diagnostic.
    pub const fn ok(value: V) -> Self {
        Self::new(Some(value), None)
    }

    /// Failure described by `status`.
    pub const fn error(status: S) -> Self {
        Self::new(None, Some(status))
    }

    /// A result accompanied by a non-fatal diagnostic.
    pub const fn info(value: V, status: S) -> Self {
        Self::new(Some(value), Some(status))
    }

    /// Neither a result nor a diagnostic.
    pub const fn empty() -> Self {
        Self::new(None, None)
    }

    /// Returns `true` when the value channel is occupied.
    #[must_use]
    pub const fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// Returns `true` when the status channel is occupied.
    #[must_use]
    pub const fn has_status(&self) -> bool {
        self.status.is_some()
    }

    /// Classify the carrier into one of the four occupancy states.
    #[must_use]
    pub const fn occupancy(&self) -> Occupancy {
        Occupancy::from_flags(self.has_value(), self.has_status())
    }

    /// Value present, status absent.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self.occupancy(), Occupancy::Ok)
    }

    /// Value absent, status present.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.occupancy(), Occupancy::Error)
    }

    /// Both channels present.
    #[must_use]
    pub const fn is_info(&self) -> bool {
        matches!(self.occupancy(), Occupancy::Info)
    }

    /// Neither channel present.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self.occupancy(), Occupancy::Empty)
    }

    /// Borrow the value, or `None` when the value channel is empty.
    #[must_use]
    pub const fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    /// Borrow the status, or `None` when the status channel is empty.
    #[must_use]
    pub const fn status(&self) -> Option<&S> {
        self.status.as_ref()
    }

    /// Borrow the value, reporting an empty channel as an [`AccessError`].
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::MissingValue`] when the value channel is empty.
    pub fn try_value(&self) -> Result<&V, AccessError> {
        self.value.as_ref().ok_or_else(|| AccessError::MissingValue {
            occupancy: self.occupancy(),
        })
    }

    /// Borrow the status, reporting an empty channel as an [`AccessError`].
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::MissingStatus`] when the status channel is empty.
    pub fn try_status(&self) -> Result<&S, AccessError> {
        self.status.as_ref().ok_or_else(|| AccessError::MissingStatus {
            occupancy: self.occupancy(),
        })
    }

    /// Take the value out of the carrier, discarding any status.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::MissingValue`] when the value channel is empty.
    pub fn into_value(self) -> Result<V, AccessError> {
        let occupancy = self.occupancy();
        self.value.ok_or(AccessError::MissingValue { occupancy })
    }

    /// Take the status out of the carrier, discarding any value.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::MissingStatus`] when the status channel is empty.
    pub fn into_status(self) -> Result<S, AccessError> {
        let occupancy = self.occupancy();
        self.status.ok_or(AccessError::MissingStatus { occupancy })
    }

    /// Split the carrier into its two channels.
    #[must_use]
    pub fn into_parts(self) -> (Option<V>, Option<S>) {
        let Self { value, status } = self;
        (value, status)
    }

    /// Convert into the strict four-variant form.
    pub fn into_metastate(self) -> Metastate<V, S> {
        Metastate::from(self)
    }

    /// Borrow both channels without moving them.
    pub const fn as_ref(&self) -> Valstat<&V, &S> {
        Valstat::new(self.value.as_ref(), self.status.as_ref())
    }

    /// Transform the value channel. The status channel passes through.
    pub fn map_value<U, F>(self, f: F) -> Valstat<U, S>
    where
        F: FnOnce(V) -> U,
    {
        Valstat::new(self.value.map(f), self.status)
    }

    /// Transform the status channel. The value channel passes through.
    ///
    /// This is how a consumer propagates a failure under its own status
    /// vocabulary.
    ///
    /// ```
    /// use valstat::{Errc, HttpStatus, Valstat};
    ///
    /// let os: Valstat<String, Errc> = Valstat::error(Errc::PermissionDenied);
    /// let http = os.map_status(|errc| match errc {
    ///     Errc::PermissionDenied => HttpStatus::Forbidden,
    ///     _ => HttpStatus::InternalServerError,
    /// });
    /// assert_eq!(http.status(), Some(&HttpStatus::Forbidden));
    /// ```
    pub fn map_status<T, F>(self, f: F) -> Valstat<V, T>
    where
        F: FnOnce(S) -> T,
    {
        Valstat::new(self.value, self.status.map(f))
    }
}

impl<V, S> Default for Valstat<V, S> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<V, S> From<(Option<V>, Option<S>)> for Valstat<V, S> {
    fn from((value, status): (Option<V>, Option<S>)) -> Self {
        Self::new(value, status)
    }
}

impl<V, S> From<Valstat<V, S>> for (Option<V>, Option<S>) {
    fn from(carrier: Valstat<V, S>) -> Self {
        carrier.into_parts()
    }
}
