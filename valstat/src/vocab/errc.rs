//! Portable POSIX condition codes for the OS-flavoured carrier.

use std::{fmt, io};

use serde::{Deserialize, Serialize};

use crate::Valstat;

/// Carrier whose status channel reports OS-level conditions.
///
/// Producers put the failure in the status channel and leave the value
/// empty. An `Info` carrier here usually means a partial result, such as a
/// short read that was interrupted.
///
/// ```
/// use valstat::{Errc, PosixValstat};
///
/// fn open_config(exists: bool) -> PosixValstat<&'static str> {
///     if exists {
///         PosixValstat::ok("port = 8080")
///     } else {
///         PosixValstat::error(Errc::NoSuchFileOrDirectory)
///     }
/// }
///
/// let carrier = open_config(false);
/// assert!(!carrier.has_value());
/// assert_eq!(carrier.status().map(|e| e.as_str()), Some("ENOENT"));
/// ```
pub type PosixValstat<T> = Valstat<T, Errc>;

macro_rules! errc_table {
    ($($variant:ident => $name:literal, $text:literal;)+) => {
        /// A POSIX error condition, identified by its symbolic name.
        ///
        /// Numeric `errno` values differ between platforms, so the
        /// vocabulary is symbolic only.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        #[non_exhaustive]
        pub enum Errc {
            $(
                #[doc = concat!("`", $name, "`: ", $text, ".")]
                $variant,
            )+
        }

        impl Errc {
            /// Every condition in the vocabulary, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Symbolic POSIX name, for example `"ENOENT"`.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }

            /// Short human-readable description.
            #[must_use]
            pub const fn description(self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }
    };
}

errc_table! {
    ArgumentListTooLong => "E2BIG", "argument list too long";
    PermissionDenied => "EACCES", "permission denied";
    AddressInUse => "EADDRINUSE", "address in use";
    AddressNotAvailable => "EADDRNOTAVAIL", "address not available";
    BadFileDescriptor => "EBADF", "bad file descriptor";
    Busy => "EBUSY", "device or resource busy";
    ConnectionAborted => "ECONNABORTED", "connection aborted";
    ConnectionRefused => "ECONNREFUSED", "connection refused";
    ConnectionReset => "ECONNRESET", "connection reset";
    ResourceDeadlockWouldOccur => "EDEADLK", "resource deadlock would occur";
    FileExists => "EEXIST", "file exists";
    FileTooLarge => "EFBIG", "file too large";
    HostUnreachable => "EHOSTUNREACH", "host unreachable";
    Interrupted => "EINTR", "interrupted";
    InvalidArgument => "EINVAL", "invalid argument";
    Io => "EIO", "i/o error";
    IsADirectory => "EISDIR", "is a directory";
    TooManyFilesOpen => "EMFILE", "too many files open";
    TooManyLinks => "EMLINK", "too many links";
    FilenameTooLong => "ENAMETOOLONG", "filename too long";
    NetworkDown => "ENETDOWN", "network down";
    NetworkUnreachable => "ENETUNREACH", "network unreachable";
    NoSuchFileOrDirectory => "ENOENT", "no such file or directory";
    NotEnoughMemory => "ENOMEM", "not enough memory";
    NoSpaceOnDevice => "ENOSPC", "no space on device";
    NotConnected => "ENOTCONN", "not connected";
    NotADirectory => "ENOTDIR", "not a directory";
    DirectoryNotEmpty => "ENOTEMPTY", "directory not empty";
    NotSupported => "ENOTSUP", "not supported";
    OperationNotPermitted => "EPERM", "operation not permitted";
    BrokenPipe => "EPIPE", "broken pipe";
    ResultOutOfRange => "ERANGE", "result out of range";
    ReadOnlyFileSystem => "EROFS", "read-only file system";
    InvalidSeek => "ESPIPE", "invalid seek";
    StaleFileHandle => "ESTALE", "stale file handle";
    TimedOut => "ETIMEDOUT", "timed out";
    TextFileBusy => "ETXTBSY", "text file busy";
    WouldBlock => "EWOULDBLOCK", "operation would block";
    CrossDeviceLink => "EXDEV", "cross-device link";
}

impl Errc {
    /// Map an I/O error kind onto the closest condition.
    ///
    /// Kinds without a POSIX counterpart collapse to [`Errc::Io`].
    #[must_use]
    pub const fn from_io_kind(kind: io::ErrorKind) -> Self {
        use io::ErrorKind as K;
        match kind {
            K::NotFound => Self::NoSuchFileOrDirectory,
            K::PermissionDenied => Self::PermissionDenied,
            K::ConnectionRefused => Self::ConnectionRefused,
            K::ConnectionReset => Self::ConnectionReset,
            K::HostUnreachable => Self::HostUnreachable,
            K::NetworkUnreachable => Self::NetworkUnreachable,
            K::ConnectionAborted => Self::ConnectionAborted,
            K::NotConnected => Self::NotConnected,
            K::AddrInUse => Self::AddressInUse,
            K::AddrNotAvailable => Self::AddressNotAvailable,
            K::NetworkDown => Self::NetworkDown,
            K::BrokenPipe => Self::BrokenPipe,
            K::AlreadyExists => Self::FileExists,
            K::WouldBlock => Self::WouldBlock,
            K::NotADirectory => Self::NotADirectory,
            K::IsADirectory => Self::IsADirectory,
            K::DirectoryNotEmpty => Self::DirectoryNotEmpty,
            K::ReadOnlyFilesystem => Self::ReadOnlyFileSystem,
            K::StaleNetworkFileHandle => Self::StaleFileHandle,
            K::InvalidInput => Self::InvalidArgument,
            K::TimedOut => Self::TimedOut,
            K::StorageFull => Self::NoSpaceOnDevice,
            K::NotSeekable => Self::InvalidSeek,
            K::FileTooLarge => Self::FileTooLarge,
            K::ResourceBusy => Self::Busy,
            K::ExecutableFileBusy => Self::TextFileBusy,
            K::Deadlock => Self::ResourceDeadlockWouldOccur,
            K::CrossesDevices => Self::CrossDeviceLink,
            K::TooManyLinks => Self::TooManyLinks,
            K::ArgumentListTooLong => Self::ArgumentListTooLong,
            K::Interrupted => Self::Interrupted,
            K::Unsupported => Self::NotSupported,
            K::OutOfMemory => Self::NotEnoughMemory,
            _ => Self::Io,
        }
    }
}

impl fmt::Display for Errc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.description(), self.as_str())
    }
}

impl From<io::ErrorKind> for Errc {
    fn from(kind: io::ErrorKind) -> Self {
        Self::from_io_kind(kind)
    }
}

impl From<&io::Error> for Errc {
    fn from(err: &io::Error) -> Self {
        Self::from_io_kind(err.kind())
    }
}

impl From<io::Error> for Errc {
    fn from(err: io::Error) -> Self {
        Self::from(&err)
    }
}

impl<T> From<io::Result<T>> for PosixValstat<T> {
    fn from(result: io::Result<T>) -> Self {
        match result {
            Ok(value) => Self::ok(value),
            Err(err) => Self::error(Errc::from(&err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::io;

    use rstest::rstest;

    use super::{Errc, PosixValstat};
    use crate::Occupancy;

    #[rstest]
    #[case(io::ErrorKind::NotFound, Errc::NoSuchFileOrDirectory)]
    #[case(io::ErrorKind::PermissionDenied, Errc::PermissionDenied)]
    #[case(io::ErrorKind::TimedOut, Errc::TimedOut)]
    #[case(io::ErrorKind::AlreadyExists, Errc::FileExists)]
    #[case(io::ErrorKind::WouldBlock, Errc::WouldBlock)]
    #[case(io::ErrorKind::UnexpectedEof, Errc::Io)]
    #[case(io::ErrorKind::Other, Errc::Io)]
    fn maps_io_kinds(#[case] kind: io::ErrorKind, #[case] expected: Errc) {
        assert_eq!(Errc::from(kind), expected);
    }

    #[test]
    fn symbolic_names_are_unique() {
        let names: HashSet<_> = Errc::ALL.iter().map(|errc| errc.as_str()).collect();
        assert_eq!(names.len(), Errc::ALL.len());
        assert!(names.iter().all(|name| name.starts_with('E')));
    }

    #[test]
    fn display_pairs_description_with_name() {
        assert_eq!(
            Errc::NoSuchFileOrDirectory.to_string(),
            "no such file or directory (ENOENT)"
        );
    }

    #[test]
    fn io_results_become_carriers() {
        let ok: PosixValstat<u8> = Ok::<u8, io::Error>(1).into();
        assert_eq!(ok.occupancy(), Occupancy::Ok);

        let err: PosixValstat<u8> =
            Err::<u8, _>(io::Error::new(io::ErrorKind::TimedOut, "slow disk")).into();
        assert_eq!(err.occupancy(), Occupancy::Error);
        assert_eq!(err.status(), Some(&Errc::TimedOut));
    }
}
