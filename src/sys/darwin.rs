//! Timestamp updates on Apple platforms, via `getattrlist`/`setattrlist`.
//!
//! `setattrlist` is the only interface that can write the creation time, and
//! it writes every requested attribute slot as one unit. An update which
//! leaves any of the three timestamps alone therefore reads the current
//! values first and merges.

use std::ffi::{CStr, CString};
use std::io;
use std::mem;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use libc::{c_char, c_int, c_void, size_t, timespec};

use crate::codec;
use crate::error::{Error, Result};
use crate::times::Utimes;

// From <sys/attr.h>; libc doesn't bind the attrlist interface.
const ATTR_BIT_MAP_COUNT: u16 = 5;
const ATTR_CMN_CRTIME: u32 = 0x0000_0200;
const ATTR_CMN_MODTIME: u32 = 0x0000_0400;
const ATTR_CMN_ACCTIME: u32 = 0x0000_1000;
const FSOPT_NOFOLLOW: u32 = 0x0000_0001;

extern "C" {
    fn getattrlist(
        path: *const c_char,
        attr_list: *const c_void,
        attr_buf: *mut c_void,
        attr_buf_size: size_t,
        options: u32,
    ) -> c_int;
    fn setattrlist(
        path: *const c_char,
        attr_list: *const c_void,
        attr_buf: *const c_void,
        attr_buf_size: size_t,
        options: u32,
    ) -> c_int;
}

#[repr(C)]
struct AttrList {
    bitmap_count: u16,
    reserved: u16,
    common_attr: u32,
    vol_attr: u32,
    dir_attr: u32,
    file_attr: u32,
    fork_attr: u32,
}

// The buffer getattrlist fills for the three common timestamps: a length
// word followed by the values in attribute order.
#[repr(C, packed)]
struct TimesBuf {
    length: u32,
    crtime: timespec,
    modtime: timespec,
    acctime: timespec,
}

const ZERO_TIMESPEC: timespec = timespec {
    tv_sec: 0,
    tv_nsec: 0,
};

pub(crate) fn set_times(path: &Path, times: Utimes, resolve_links: bool) -> Result<()> {
    let path = CString::new(path.as_os_str().as_bytes()).map_err(|_| Error::PathEncoding)?;
    let options = if resolve_links { 0 } else { FSOPT_NOFOLLOW };

    let attrs = AttrList {
        bitmap_count: ATTR_BIT_MAP_COUNT,
        reserved: 0,
        common_attr: ATTR_CMN_CRTIME | ATTR_CMN_MODTIME | ATTR_CMN_ACCTIME,
        vol_attr: 0,
        dir_attr: 0,
        file_attr: 0,
        fork_attr: 0,
    };

    // When all three timestamps are being replaced there is nothing to
    // preserve, so the read step is skipped.
    let mut slots = if times.fields().is_all() {
        [ZERO_TIMESPEC; 3]
    } else {
        read_times(&path, &attrs, options)?
    };

    if let Some(millis) = times.btime() {
        slots[0] = to_timespec(millis);
    }
    if let Some(millis) = times.mtime() {
        slots[1] = to_timespec(millis);
    }
    if let Some(millis) = times.atime() {
        slots[2] = to_timespec(millis);
    }

    let rc = unsafe {
        setattrlist(
            path.as_ptr(),
            &attrs as *const AttrList as *const c_void,
            slots.as_ptr() as *const c_void,
            mem::size_of_val(&slots),
            options,
        )
    };
    if rc != 0 {
        return Err(io::Error::last_os_error().into());
    }
    Ok(())
}

fn read_times(path: &CStr, attrs: &AttrList, options: u32) -> Result<[timespec; 3]> {
    let mut buf = TimesBuf {
        length: 0,
        crtime: ZERO_TIMESPEC,
        modtime: ZERO_TIMESPEC,
        acctime: ZERO_TIMESPEC,
    };
    let rc = unsafe {
        getattrlist(
            path.as_ptr(),
            attrs as *const AttrList as *const c_void,
            &mut buf as *mut TimesBuf as *mut c_void,
            mem::size_of::<TimesBuf>(),
            options,
        )
    };
    if rc != 0 {
        return Err(io::Error::last_os_error().into());
    }
    // The kernel reports how much of the buffer it filled; anything short
    // means the volume doesn't expose all three timestamps.
    if buf.length as usize != mem::size_of::<TimesBuf>() {
        return Err(Error::Unsupported);
    }
    Ok([buf.crtime, buf.modtime, buf.acctime])
}

fn to_timespec(millis: i64) -> timespec {
    let (sec, nsec) = codec::millis_to_sec_nsec(millis);
    timespec {
        tv_sec: sec as _,
        tv_nsec: nsec as _,
    }
}
