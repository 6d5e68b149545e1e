//! `fs-utimes` provides functions to selectively set the creation, last
//! modification, and last access timestamps of files, directories, and other
//! filesystem objects, expressed in milliseconds since the Unix epoch.
//!
//! Timestamps an update leaves unset keep their current values, including on
//! platforms where the underlying interface writes more than the requested
//! fields. Creation times can be set on Apple platforms and Windows; where
//! the kernel interface has no slot for them they're accepted and ignored.
//! On Windows, modifying a file's timestamps requires attribute-write access
//! to the file.

#![deny(missing_docs)]

mod codec;
mod error;
mod set_times;
mod times;

#[cfg(target_vendor = "apple")]
#[path = "sys/darwin.rs"]
mod sys;
#[cfg(all(unix, not(target_vendor = "apple")))]
#[path = "sys/posix.rs"]
mod sys;
#[cfg(windows)]
#[path = "sys/windows.rs"]
mod sys;
#[cfg(not(any(unix, windows)))]
#[path = "sys/unsupported.rs"]
mod sys;

pub use error::{Error, Result};
pub use set_times::{
    set_atime, set_btime, set_mtime, set_symlink_times, set_symlink_times_async, set_times,
    set_times_async,
};
pub use times::{TimeFields, Utimes};
