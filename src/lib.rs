//! Time utilities for authentication services.
//!
//! - Parses human-written duration strings such as `"1h"` or `"30d"`, as used in
//!   configuration files.
//! - Converts between Unix time and the Win32 epoch (100-nanosecond ticks since
//!   1601-01-01), as used by directory service protocols.
//! - Stores times as whole Unix seconds in relational stores ([`DbTime`]).
//!
//! Duration strings consist of a non-negative integer without leading zeros and
//! at most one unit symbol:
//!
//! | symbol | unit |
//! |---|---|
//! | (none), `s` | seconds |
//! | `h` | hours |
//! | `d` | days |
//! | `w` | weeks (7 days) |
//! | `M` | months (a twelfth of a year) |
//! | `y` | years (365 days) |
//!
//! ```
//! use authn_time::{parse_duration_string, unix_nano_to_win32_epoch, win32_epoch_to_time, DAY};
//!
//! let expiration = parse_duration_string("30d")?;
//! assert_eq!(DAY * 30, expiration);
//!
//! let ticks = unix_nano_to_win32_epoch(1_626_234_411_000_000_000);
//! let time = win32_epoch_to_time(ticks)?;
//! assert_eq!(ticks, authn_time::system_time_to_win32_epoch(time));
//! #
//! # Ok::<(), authn_time::Error>(())
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all, missing_docs, clippy::cargo)]
#![deny(clippy::unwrap_used)]
#![warn(clippy::indexing_slicing)]
#![warn(clippy::pedantic, clippy::nursery)]
#![warn(clippy::expect_used)]
#![allow(clippy::missing_const_for_fn)]
#![warn(clippy::multiple_crate_versions)]
#![warn(clippy::result_unit_err)]

mod db_time;
mod duration;
mod epoch;
mod error;
mod models;
mod parse;
mod time;

pub use db_time::{DbTime, StoredValue};
pub use duration::{Unit, DAY, HOUR, MINUTE, MONTH, WEEK, YEAR};
pub use epoch::{
    system_time_to_win32_epoch, unix_nano_to_win32_epoch, win32_epoch_to_time,
    UNIX_EPOCH_AS_WIN32_EPOCH, WIN32_TICKS_PER_SECOND,
};
pub use error::{Error, Result};
pub use models::{AuthenticationAttempt, U2fDevice};
pub use parse::parse_duration_string;
pub use time::timestamp;

/// Unix timestamp in nanoseconds
pub type Timestamp = u128;
