use std::time::Duration;

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = SECONDS_PER_MINUTE * 60;
const SECONDS_PER_DAY: u64 = SECONDS_PER_HOUR * 24;
const SECONDS_PER_WEEK: u64 = SECONDS_PER_DAY * 7;
const SECONDS_PER_YEAR: u64 = SECONDS_PER_DAY * 365;
const SECONDS_PER_MONTH: u64 = SECONDS_PER_YEAR / 12;

/// One minute.
///
/// There is no unit symbol for minutes, use seconds or hours instead.
pub const MINUTE: Duration = Duration::from_secs(SECONDS_PER_MINUTE);

/// One hour (60 minutes).
pub const HOUR: Duration = Duration::from_secs(SECONDS_PER_HOUR);

/// One day (24 hours).
pub const DAY: Duration = Duration::from_secs(SECONDS_PER_DAY);

/// One week (7 days).
pub const WEEK: Duration = Duration::from_secs(SECONDS_PER_WEEK);

/// One year (365 days, not calendar aware).
pub const YEAR: Duration = Duration::from_secs(SECONDS_PER_YEAR);

/// One month (a twelfth of [`YEAR`]).
pub const MONTH: Duration = Duration::from_secs(SECONDS_PER_MONTH);

/// Unit of a duration string
///
/// ```
/// use authn_time::{Unit, DAY};
///
/// let unit = Unit::try_from('d').unwrap();
/// assert_eq!(Unit::Day, unit);
/// assert_eq!(DAY, unit.duration());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Unit {
    /// `s`, also used when no unit is given
    Second,

    /// `h`
    Hour,

    /// `d`
    Day,

    /// `w`
    Week,

    /// `M`
    Month,

    /// `y`
    Year,
}

impl Unit {
    /// All unit symbols accepted in a duration string.
    pub const SYMBOLS: &'static str = "shdwMy";

    /// Returns the symbol used for this unit in a duration string.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Second => 's',
            Self::Hour => 'h',
            Self::Day => 'd',
            Self::Week => 'w',
            Self::Month => 'M',
            Self::Year => 'y',
        }
    }

    /// Returns the length of one of this unit.
    #[must_use]
    pub const fn duration(self) -> Duration {
        Duration::from_secs(self.seconds())
    }

    pub(crate) const fn seconds(self) -> u64 {
        match self {
            Self::Second => 1,
            Self::Hour => SECONDS_PER_HOUR,
            Self::Day => SECONDS_PER_DAY,
            Self::Week => SECONDS_PER_WEEK,
            Self::Month => SECONDS_PER_MONTH,
            Self::Year => SECONDS_PER_YEAR,
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for Unit {
    type Error = ();

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            's' => Ok(Self::Second),
            'h' => Ok(Self::Hour),
            'd' => Ok(Self::Day),
            'w' => Ok(Self::Week),
            'M' => Ok(Self::Month),
            'y' => Ok(Self::Year),
            _ => Err(()),
        }
    }
}
