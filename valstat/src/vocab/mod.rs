//! Status vocabularies and the carrier specializations bound to them.

mod errc;
mod http;

pub use errc::{Errc, PosixValstat};
pub use http::{HttpStatus, HttpValstat, StatusClass, UnknownStatusCode};
