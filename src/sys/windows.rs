//! Timestamp updates on Windows, via an open handle and `SetFileTime`.
//!
//! `SetFileTime` skips any timestamp passed as null, so a partial update is
//! a single call with no read step.

use std::fs;
use std::io;
use std::os::windows::fs::OpenOptionsExt;
use std::os::windows::io::AsRawHandle;
use std::path::Path;
use std::ptr;

use windows_sys::Win32::Foundation::{FILETIME, HANDLE};
use windows_sys::Win32::Storage::FileSystem::{
    SetFileTime, FILE_FLAG_BACKUP_SEMANTICS, FILE_FLAG_OPEN_REPARSE_POINT, FILE_SHARE_DELETE,
    FILE_SHARE_READ, FILE_SHARE_WRITE, FILE_WRITE_ATTRIBUTES,
};

use crate::codec;
use crate::error::{Error, Result};
use crate::times::Utimes;

pub(crate) fn set_times(path: &Path, times: Utimes, resolve_links: bool) -> Result<()> {
    // Attribute-write access is all SetFileTime needs. Backup semantics
    // permits opening directories, and opening the reparse point itself
    // updates a symlink rather than its target.
    let mut custom_flags = FILE_FLAG_BACKUP_SEMANTICS;
    if !resolve_links {
        custom_flags |= FILE_FLAG_OPEN_REPARSE_POINT;
    }
    let file = fs::OpenOptions::new()
        .access_mode(FILE_WRITE_ATTRIBUTES)
        .share_mode(FILE_SHARE_READ | FILE_SHARE_WRITE | FILE_SHARE_DELETE)
        .custom_flags(custom_flags)
        .open(path)
        .map_err(open_error)?;

    let btime = times.btime().map(to_filetime).transpose()?;
    let mtime = times.mtime().map(to_filetime).transpose()?;
    let atime = times.atime().map(to_filetime).transpose()?;

    let rc = unsafe {
        SetFileTime(
            file.as_raw_handle() as HANDLE,
            opt_ptr(&btime),
            opt_ptr(&atime),
            opt_ptr(&mtime),
        )
    };
    if rc == 0 {
        // Capture the failure before the handle drop can disturb it.
        return Err(io::Error::last_os_error().into());
    }
    Ok(())
}

// `OpenOptions::open` reports a path it can't convert to UTF-16 as
// `InvalidInput`.
fn open_error(err: io::Error) -> Error {
    if err.kind() == io::ErrorKind::InvalidInput {
        Error::PathEncoding
    } else {
        err.into()
    }
}

fn opt_ptr(time: &Option<FILETIME>) -> *const FILETIME {
    time.as_ref()
        .map(|time| time as *const FILETIME)
        .unwrap_or(ptr::null())
}

fn to_filetime(millis: i64) -> Result<FILETIME> {
    let ticks = codec::millis_to_filetime_ticks(millis)?;
    Ok(FILETIME {
        dwLowDateTime: ticks as u32,
        dwHighDateTime: (ticks >> 32) as u32,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filetimes_split_the_tick_count() {
        let ft = to_filetime(0).unwrap();
        let ticks = (u64::from(ft.dwHighDateTime) << 32) | u64::from(ft.dwLowDateTime);
        assert_eq!(ticks, 116_444_736_000_000_000);
    }

    #[test]
    fn out_of_range_times_are_rejected() {
        assert!(matches!(
            to_filetime(i64::MAX),
            Err(Error::InvalidArguments(_))
        ));
    }
}
