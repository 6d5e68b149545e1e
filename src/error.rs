use std::io;

use thiserror::Error;

/// A specialized `Result` type for timestamp updates.
pub type Result<T> = std::result::Result<T, Error>;

/// The ways a timestamp update can fail.
///
/// Native error codes with a cross-platform meaning are normalized into
/// dedicated variants; everything else is carried as [`Error::Os`] with the
/// raw code and the system-rendered message preserved. Failures are always
/// reported to the caller; nothing is retried or downgraded.
#[derive(Debug, Error)]
pub enum Error {
    /// The request is malformed, for example a timestamp outside the range
    /// the platform can represent.
    #[error("invalid argument: {0}")]
    InvalidArguments(&'static str),

    /// The path can't be converted to the platform's native encoding.
    #[error("path can't be converted to the platform encoding")]
    PathEncoding,

    /// The operating system reported an allocation failure.
    #[error("out of memory")]
    OutOfMemory,

    /// The filesystem object doesn't exist.
    #[error("no such file or directory")]
    NotFound,

    /// Permission to modify the object's timestamps was denied.
    #[error("permission denied")]
    AccessDenied,

    /// The operation isn't supported by this platform or filesystem.
    #[error("operation not supported")]
    Unsupported,

    /// Any other operating system error, carrying the native code and
    /// message.
    #[error("{0}")]
    Os(#[source] io::Error),

    /// This build targets a platform with no timestamp-setting support.
    #[error("unsupported platform")]
    PlatformUnsupported,
}

impl Error {
    /// The raw OS error code behind this error, if there is one.
    pub fn raw_os_error(&self) -> Option<i32> {
        match self {
            Self::Os(err) => err.raw_os_error(),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound,
            io::ErrorKind::PermissionDenied => Self::AccessDenied,
            io::ErrorKind::Unsupported => Self::Unsupported,
            io::ErrorKind::OutOfMemory => Self::OutOfMemory,
            _ => Self::Os(err),
        }
    }
}

#[cfg(all(unix, not(target_vendor = "apple")))]
impl From<rustix::io::Errno> for Error {
    fn from(errno: rustix::io::Errno) -> Self {
        io::Error::from(errno).into()
    }
}
