use crate::{time, Error};
use std::time::{SystemTime, UNIX_EPOCH};

/// A column value as handed over by a relational store
#[derive(Clone, Debug, PartialEq)]
pub enum StoredValue {
    /// SQL `NULL`
    Null,

    /// Signed 64-bit integer
    Integer(i64),

    /// Floating point number
    Real(f64),

    /// Text
    Text(String),

    /// Raw bytes
    Blob(Vec<u8>),

    /// Boolean
    Bool(bool),
}

impl StoredValue {
    /// Returns the name of the value's type.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Integer(_) => "integer",
            Self::Real(_) => "real",
            Self::Text(_) => "text",
            Self::Blob(_) => "blob",
            Self::Bool(_) => "bool",
        }
    }
}

/// A point in time, stored as whole Unix seconds
///
/// ```
/// use authn_time::{DbTime, StoredValue};
///
/// let time = DbTime::scan(StoredValue::Integer(1_626_234_411))?;
/// assert_eq!(StoredValue::Integer(1_626_234_411), time.value());
///
/// // NULL reads back as the Unix epoch
/// assert_eq!(DbTime::default(), DbTime::scan(StoredValue::Null)?);
/// #
/// # Ok::<(), authn_time::Error>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DbTime(SystemTime);

impl DbTime {
    /// Returns the value to store, the Unix seconds of this time.
    ///
    /// Sub-second precision is dropped.
    #[must_use]
    pub fn value(&self) -> StoredValue {
        StoredValue::Integer(time::to_unix_secs(self.0))
    }

    /// Reconstructs a time from a stored value.
    ///
    /// Integers are read as Unix seconds, `NULL` as the Unix epoch.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStoredType`] for any other kind of value, and
    /// [`Error::TimestampOutOfRange`] if the seconds cannot be represented.
    pub fn scan(src: StoredValue) -> crate::Result<Self> {
        let secs = match src {
            StoredValue::Integer(secs) => secs,
            StoredValue::Null => 0,
            other => {
                log::debug!("Cannot read {other:?} as DBTime");
                return Err(Error::InvalidStoredType(other.type_name()));
            }
        };

        time::from_unix_secs(secs)
            .map(Self)
            .ok_or(Error::TimestampOutOfRange(secs))
    }

    /// Returns the wrapped time.
    #[must_use]
    pub fn into_inner(self) -> SystemTime {
        self.0
    }
}

impl Default for DbTime {
    fn default() -> Self {
        Self(UNIX_EPOCH)
    }
}

impl From<SystemTime> for DbTime {
    fn from(value: SystemTime) -> Self {
        Self(value)
    }
}

impl From<DbTime> for StoredValue {
    fn from(value: DbTime) -> Self {
        value.value()
    }
}

impl TryFrom<StoredValue> for DbTime {
    type Error = Error;

    fn try_from(value: StoredValue) -> Result<Self, Self::Error> {
        Self::scan(value)
    }
}

impl std::ops::Deref for DbTime {
    type Target = SystemTime;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
