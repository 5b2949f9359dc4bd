/// Error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input string is not a valid duration.
    ///
    /// Holds the offending input verbatim.
    InvalidDuration(String),

    /// A Win32 epoch value lies before the Unix epoch.
    BeforeUnixEpoch,

    /// A stored time value had an unexpected type.
    InvalidStoredType(&'static str),

    /// A stored Unix timestamp cannot be represented as native time.
    TimestampOutOfRange(i64),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDuration(input) => {
                write!(
                    f,
                    "could not convert the input string of {input} into a duration",
                )
            }
            Self::BeforeUnixEpoch => {
                write!(
                    f,
                    "can't convert that epoch to native time as it is before the unix epoch",
                )
            }
            Self::InvalidStoredType(name) => {
                write!(f, "invalid type {name} for DBTime",)
            }
            Self::TimestampOutOfRange(secs) => {
                write!(f, "unix timestamp {secs} is out of range for native time",)
            }
        }
    }
}

impl std::error::Error for Error {}

/// Result helper type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn display_invalid_duration() {
        assert_eq!(
            "could not convert the input string of 10x into a duration",
            Error::InvalidDuration("10x".into()).to_string(),
        );
    }

    #[test]
    fn display_stored_type() {
        assert_eq!(
            "invalid type real for DBTime",
            Error::InvalidStoredType("real").to_string(),
        );
    }
}
