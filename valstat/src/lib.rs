//! A metastate carrier: an optional value travelling alongside an optional
//! status.
//!
//! [`Valstat`] is returned by operations that want to report partial or
//! degraded outcomes without panicking or reaching for sentinel values. The
//! two channels are independent, giving four [`Occupancy`] states:
//!
//! | value | status | occupancy | usual reading                      |
//! |-------|--------|-----------|------------------------------------|
//! | yes   | no     | `Ok`      | success                            |
//! | no    | yes    | `Error`   | failure with a diagnostic          |
//! | yes   | yes    | `Info`    | success with a non-fatal notice    |
//! | no    | no     | `Empty`   | nothing to report                  |
//!
//! The carrier never decides which states count as success. Consumers either
//! inspect it directly, `match` on its strict [`Metastate`] form, or resolve
//! it with an explicit [`ConsumptionPolicy`].
//!
//! Two specializations bind the status channel to a concrete vocabulary:
//! [`PosixValstat`] uses [`Errc`] and [`HttpValstat`] uses [`HttpStatus`].
//!
//! ```
//! use valstat::{Errc, Metastate, PosixValstat};
//!
//! fn read_header(bytes: &[u8]) -> PosixValstat<u8> {
//!     match bytes {
//!         [] => PosixValstat::empty(),
//!         [first] => PosixValstat::info(*first, Errc::Interrupted),
//!         [first, ..] => PosixValstat::ok(*first),
//!     }
//! }
//!
//! match read_header(&[7]).into_metastate() {
//!     Metastate::ValueOnly(byte) => assert_eq!(byte, 7),
//!     Metastate::Both(byte, notice) => {
//!         assert_eq!(byte, 7);
//!         assert_eq!(notice, Errc::Interrupted);
//!     }
//!     Metastate::StatusOnly(_) | Metastate::Empty => unreachable!(),
//! }
//! ```

mod carrier;
mod error;
mod metastate;
mod occupancy;
mod policy;
mod result_ext;
mod vocab;

pub use carrier::Valstat;
pub use error::AccessError;
pub use metastate::Metastate;
pub use occupancy::Occupancy;
pub use policy::{Accepted, ConsumptionPolicy, InfoPolicy, Rejection};
pub use result_ext::{ValstatOptionExt, ValstatResultExt};
pub use vocab::{Errc, HttpStatus, HttpValstat, PosixValstat, StatusClass, UnknownStatusCode};
