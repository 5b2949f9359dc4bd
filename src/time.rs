use crate::Timestamp;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Returns the current timestamp in nanoseconds.
#[must_use]
pub fn timestamp() -> Timestamp {
    let start = SystemTime::now();

    // NOTE: A clock set before 1970 is reported as the Unix epoch
    start
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos()
}

/// Converts Unix seconds into native time, `None` if the platform cannot represent it.
pub(crate) fn from_unix_secs(secs: i64) -> Option<SystemTime> {
    let offset = Duration::from_secs(secs.unsigned_abs());

    if secs < 0 {
        UNIX_EPOCH.checked_sub(offset)
    } else {
        UNIX_EPOCH.checked_add(offset)
    }
}

/// Returns the whole Unix seconds of a time, rounding towards negative infinity.
///
/// Saturates at the `i64` range.
pub(crate) fn to_unix_secs(time: SystemTime) -> i64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(after) => i64::try_from(after.as_secs()).unwrap_or(i64::MAX),
        Err(e) => {
            let before = e.duration();

            let secs = if before.subsec_nanos() == 0 {
                before.as_secs()
            } else {
                before.as_secs().saturating_add(1)
            };

            0_i64.checked_sub_unsigned(secs).unwrap_or(i64::MIN)
        }
    }
}

/// Returns the signed Unix nanoseconds of a time, saturating at the `i64` range.
pub(crate) fn to_unix_nanos(time: SystemTime) -> i64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(after) => i64::try_from(after.as_nanos()).unwrap_or(i64::MAX),
        Err(e) => i64::try_from(e.duration().as_nanos()).map_or(i64::MIN, |nanos| -nanos),
    }
}
