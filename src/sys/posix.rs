//! Timestamp updates on POSIX platforms, via `utimensat`.
//!
//! `utimensat` takes a per-field omission sentinel, so a partial update is a
//! single call with no read step. The interface has no creation-time slot;
//! a requested creation time is accepted and has no effect.

use std::ffi::CString;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use rustix::fs::{utimensat, AtFlags, Timespec, Timestamps, CWD, UTIME_OMIT};
use tracing::debug;

use crate::codec;
use crate::error::{Error, Result};
use crate::times::Utimes;

pub(crate) fn set_times(path: &Path, times: Utimes, resolve_links: bool) -> Result<()> {
    let path = CString::new(path.as_os_str().as_bytes()).map_err(|_| Error::PathEncoding)?;

    if times.btime().is_some() {
        debug!("creation times can't be set through utimensat; btime field ignored");
    }

    let flags = if resolve_links {
        AtFlags::empty()
    } else {
        AtFlags::SYMLINK_NOFOLLOW
    };
    let timestamps = Timestamps {
        last_access: to_timespec(times.atime()),
        last_modification: to_timespec(times.mtime()),
    };
    utimensat(CWD, path.as_c_str(), &timestamps, flags)?;
    Ok(())
}

fn to_timespec(millis: Option<i64>) -> Timespec {
    match millis {
        Some(millis) => {
            let (tv_sec, tv_nsec) = codec::millis_to_sec_nsec(millis);
            Timespec {
                tv_sec,
                tv_nsec: tv_nsec as _,
            }
        }
        None => Timespec {
            tv_sec: 0,
            tv_nsec: UTIME_OMIT as _,
        },
    }
}
