//! Conversion between Unix time and the Win32 epoch.
//!
//! The Win32 epoch counts 100-nanosecond ticks since 1601-01-01T00:00:00Z,
//! as used by directory services to encode timestamps.

use crate::{time, Error};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// The Unix epoch (1970-01-01T00:00:00Z) expressed as Win32 epoch ticks.
pub const UNIX_EPOCH_AS_WIN32_EPOCH: u64 = 116_444_736_000_000_000;

/// Number of Win32 epoch ticks in one second.
pub const WIN32_TICKS_PER_SECOND: u64 = 10_000_000;

const NANOS_PER_WIN32_TICK: i64 = 100;

/// Converts a Unix timestamp in nanoseconds into Win32 epoch ticks.
///
/// Nanoseconds below one tick are truncated. Any time at or after 1601
/// converts exactly.
///
/// ```
/// use authn_time::{unix_nano_to_win32_epoch, UNIX_EPOCH_AS_WIN32_EPOCH};
///
/// assert_eq!(UNIX_EPOCH_AS_WIN32_EPOCH, unix_nano_to_win32_epoch(0));
/// assert_eq!(
///     132_707_080_110_000_000,
///     unix_nano_to_win32_epoch(1_626_234_411_000_000_000),
/// );
/// ```
#[must_use]
#[allow(clippy::cast_sign_loss)]
pub const fn unix_nano_to_win32_epoch(nanos: i64) -> u64 {
    ((nanos / NANOS_PER_WIN32_TICK) as u64).wrapping_add(UNIX_EPOCH_AS_WIN32_EPOCH)
}

/// Converts a native time into Win32 epoch ticks.
#[must_use]
pub fn system_time_to_win32_epoch(time: SystemTime) -> u64 {
    unix_nano_to_win32_epoch(time::to_unix_nanos(time))
}

/// Converts Win32 epoch ticks into native time, truncated to whole seconds.
///
/// ```
/// use authn_time::win32_epoch_to_time;
/// use std::time::{Duration, UNIX_EPOCH};
///
/// let time = win32_epoch_to_time(132_707_080_110_000_000)?;
/// assert_eq!(UNIX_EPOCH + Duration::from_secs(1_626_234_411), time);
/// #
/// # Ok::<(), authn_time::Error>(())
/// ```
///
/// # Errors
///
/// Returns [`Error::BeforeUnixEpoch`] if the ticks lie before the Unix epoch.
pub fn win32_epoch_to_time(ticks: u64) -> crate::Result<SystemTime> {
    let Some(since_unix_epoch) = ticks.checked_sub(UNIX_EPOCH_AS_WIN32_EPOCH) else {
        log::debug!("Win32 epoch {ticks} lies before the unix epoch");
        return Err(Error::BeforeUnixEpoch);
    };

    let secs = since_unix_epoch / WIN32_TICKS_PER_SECOND;

    Ok(UNIX_EPOCH + Duration::from_secs(secs))
}
