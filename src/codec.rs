//! Conversions from millisecond Unix timestamps to native time units.
//!
//! These are plain arithmetic and compiled on every target, so the math for
//! each platform can be tested anywhere.

use crate::error::{Error, Result};

/// 100-nanosecond intervals between the Windows epoch (1601-01-01) and the
/// Unix epoch (1970-01-01).
const WINDOWS_EPOCH_OFFSET: i64 = 11_644_473_600 * 10_000_000;

/// 100-nanosecond intervals per millisecond.
const TICKS_PER_MILLI: i64 = 10_000;

/// Split a millisecond Unix timestamp into whole seconds and nanoseconds.
///
/// The Euclidean split keeps the nanosecond part in `[0, 1e9)` for times
/// before the epoch, which is the normalized form `timespec` requires. The
/// nanosecond part is always a whole number of milliseconds, so it can never
/// collide with the reserved `UTIME_OMIT`/`UTIME_NOW` values.
#[cfg_attr(windows, allow(dead_code))]
pub(crate) fn millis_to_sec_nsec(millis: i64) -> (i64, i64) {
    (millis.div_euclid(1_000), millis.rem_euclid(1_000) * 1_000_000)
}

/// Convert a millisecond Unix timestamp to a Windows `FILETIME` tick count,
/// the number of 100-nanosecond intervals since 1601-01-01.
///
/// Times before 1601 aren't representable and are reported as errors rather
/// than clamped. A zero tick count is silently ignored by `SetFileTime`, so
/// issue an error for that as well.
#[cfg_attr(not(windows), allow(dead_code))]
pub(crate) fn millis_to_filetime_ticks(millis: i64) -> Result<u64> {
    let ticks = millis
        .checked_mul(TICKS_PER_MILLI)
        .and_then(|ticks| ticks.checked_add(WINDOWS_EPOCH_OFFSET))
        .ok_or(Error::InvalidArguments("timestamp out of FILETIME range"))?;
    if ticks < 0 {
        return Err(Error::InvalidArguments("timestamp precedes 1601-01-01"));
    }
    if ticks == 0 {
        return Err(Error::Unsupported);
    }
    Ok(ticks as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sec_nsec_to_millis(sec: i64, nsec: i64) -> i64 {
        sec * 1_000 + nsec / 1_000_000
    }

    #[test]
    fn splits_positive_times() {
        assert_eq!(millis_to_sec_nsec(1_234_567_890_123), (1_234_567_890, 123_000_000));
        assert_eq!(millis_to_sec_nsec(5_000), (5, 0));
        assert_eq!(millis_to_sec_nsec(999), (0, 999_000_000));
        assert_eq!(millis_to_sec_nsec(0), (0, 0));
    }

    #[test]
    fn splits_pre_epoch_times_with_non_negative_nanoseconds() {
        assert_eq!(millis_to_sec_nsec(-1), (-1, 999_000_000));
        assert_eq!(millis_to_sec_nsec(-1_000), (-1, 0));
        assert_eq!(millis_to_sec_nsec(-1_500), (-2, 500_000_000));
    }

    #[test]
    fn split_round_trips() {
        for millis in [0, 1, -1, 999, -999, 5_000, -1_500, 1_234_567_890_123, -447_775_200_000] {
            let (sec, nsec) = millis_to_sec_nsec(millis);
            assert!((0..1_000_000_000).contains(&nsec));
            assert_eq!(sec_nsec_to_millis(sec, nsec), millis);
        }
    }

    #[test]
    fn converts_the_epoch_to_the_windows_offset() {
        assert_eq!(millis_to_filetime_ticks(0).unwrap(), 116_444_736_000_000_000);
        assert_eq!(millis_to_filetime_ticks(1).unwrap(), 116_444_736_000_010_000);
        assert_eq!(millis_to_filetime_ticks(-1).unwrap(), 116_444_735_999_990_000);
    }

    #[test]
    fn rejects_times_before_1601() {
        let one_milli_before_1601 = -11_644_473_600_001;
        assert!(matches!(
            millis_to_filetime_ticks(one_milli_before_1601),
            Err(Error::InvalidArguments(_))
        ));
        assert!(matches!(
            millis_to_filetime_ticks(i64::MIN),
            Err(Error::InvalidArguments(_))
        ));
    }

    #[test]
    fn rejects_the_zero_tick_sentinel() {
        let exactly_1601 = -11_644_473_600_000;
        assert!(matches!(
            millis_to_filetime_ticks(exactly_1601),
            Err(Error::Unsupported)
        ));
        assert_eq!(millis_to_filetime_ticks(exactly_1601 + 1).unwrap(), 10_000);
    }

    #[test]
    fn rejects_overflowing_times() {
        assert!(matches!(
            millis_to_filetime_ticks(i64::MAX),
            Err(Error::InvalidArguments(_))
        ));
    }
}
