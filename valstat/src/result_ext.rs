//! Extensions for lifting `Result` and `Option` into a carrier.
//!
//! - Use [`ValstatResultExt::into_valstat`] at the boundary with code that
//!   already returns `Result<V, S>`; the error becomes the status.
//! - Use [`ValstatOptionExt::into_valstat_or`] when absence has a known
//!   status, or [`ValstatOptionExt::into_valstat_or_empty`] when absence
//!   should stay an explicit `Empty` carrier.
//!
//! # Examples
//!
//! ```
//! use valstat::{Errc, Occupancy, PosixValstat, ValstatOptionExt, ValstatResultExt};
//!
//! let parsed: Result<u8, Errc> = "300".parse::<u8>().map_err(|_| Errc::ResultOutOfRange);
//! let carrier = parsed.into_valstat();
//! assert_eq!(carrier.occupancy(), Occupancy::Error);
//!
//! let lookup: PosixValstat<&str> = None.into_valstat_or(Errc::NoSuchFileOrDirectory);
//! assert_eq!(lookup.status(), Some(&Errc::NoSuchFileOrDirectory));
//! ```

use crate::Valstat;

/// Lift a `Result<V, S>` into a carrier holding exactly one channel.
pub trait ValstatResultExt<V, S> {
    /// `Ok(v)` becomes an `Ok` carrier and `Err(s)` an `Error` carrier.
    fn into_valstat(self) -> Valstat<V, S>;
}

impl<V, S> ValstatResultExt<V, S> for Result<V, S> {
    fn into_valstat(self) -> Valstat<V, S> {
        match self {
            Ok(value) => Valstat::ok(value),
            Err(status) => Valstat::error(status),
        }
    }
}

/// Lift an `Option<V>` into a carrier.
pub trait ValstatOptionExt<V> {
    /// `Some(v)` becomes an `Ok` carrier; `None` becomes an `Error` carrier
    /// holding `status`.
    fn into_valstat_or<S>(self, status: S) -> Valstat<V, S>;

    /// `Some(v)` becomes an `Ok` carrier; `None` becomes an `Empty` carrier.
    fn into_valstat_or_empty<S>(self) -> Valstat<V, S>;
}

impl<V> ValstatOptionExt<V> for Option<V> {
    fn into_valstat_or<S>(self, status: S) -> Valstat<V, S> {
        self.map_or_else(|| Valstat::error(status), Valstat::ok)
    }

    fn into_valstat_or_empty<S>(self) -> Valstat<V, S> {
        Valstat::new(self, None)
    }
}

#[cfg(test)]
mod tests {
    use super::{ValstatOptionExt, ValstatResultExt};
    use crate::{HttpStatus, HttpValstat, Occupancy, Valstat};

    #[test]
    fn results_fill_exactly_one_channel() {
        let ok: Result<u8, HttpStatus> = Ok(1);
        assert_eq!(ok.into_valstat(), Valstat::ok(1));

        let err: Result<u8, HttpStatus> = Err(HttpStatus::BadGateway);
        assert_eq!(err.into_valstat(), Valstat::error(HttpStatus::BadGateway));
    }

    #[test]
    fn options_choose_between_status_and_empty() {
        let hit: HttpValstat<&str> = Some("body").into_valstat_or(HttpStatus::NotFound);
        assert_eq!(hit.occupancy(), Occupancy::Ok);

        let miss: HttpValstat<&str> = None.into_valstat_or(HttpStatus::NotFound);
        assert_eq!(miss.status(), Some(&HttpStatus::NotFound));

        let silent: HttpValstat<&str> = None.into_valstat_or_empty();
        assert!(silent.is_empty());
    }
}
