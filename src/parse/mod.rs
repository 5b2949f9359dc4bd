use crate::{Error, Unit};
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{anychar, digit0, satisfy},
    combinator::{eof, map_opt, opt, recognize},
    sequence::pair,
    IResult,
};
use nom_locate::LocatedSpan;
use std::time::Duration;

type RawSpan<'a> = LocatedSpan<&'a str>;

type ParseResult<'a, T> = IResult<RawSpan<'a>, T>;

/// A duration string split into its quantity and unit
#[derive(Debug, Eq, PartialEq)]
struct ParsedDuration<'a> {
    quantity: &'a str,
    unit: Unit,
}

impl ParsedDuration<'_> {
    /// Multiplies the quantity by its unit, `None` on overflow.
    fn to_duration(&self) -> Option<Duration> {
        let quantity = self.quantity.parse::<u64>().ok()?;
        quantity
            .checked_mul(self.unit.seconds())
            .map(Duration::from_secs)
    }
}

// "0", or a number without leading zeros
fn parse_quantity(input: RawSpan<'_>) -> ParseResult<'_, &str> {
    let (input, digits) = alt((
        recognize(pair(satisfy(|c| matches!(c, '1'..='9')), digit0)),
        tag("0"),
    ))(input)?;

    Ok((input, *digits.fragment()))
}

fn parse_unit(input: RawSpan<'_>) -> ParseResult<'_, Unit> {
    map_opt(anychar, |c| Unit::try_from(c).ok())(input)
}

// The whole input must be consumed, a missing unit means seconds
fn parse_duration(input: &str) -> ParseResult<'_, ParsedDuration<'_>> {
    let (input, quantity) = parse_quantity(LocatedSpan::new(input))?;
    let (input, unit) = opt(parse_unit)(input)?;
    let (input, _) = eof(input)?;

    Ok((
        input,
        ParsedDuration {
            quantity,
            unit: unit.unwrap_or(Unit::Second),
        },
    ))
}

/// Parses a duration string such as `"1h"` or `"30d"`.
///
/// The input is a non-negative integer without leading zeros, optionally
/// followed by exactly one unit symbol (see [`Unit`]). Without a unit, the
/// number is taken as seconds.
///
/// ```
/// use authn_time::{parse_duration_string, HOUR};
/// use std::time::Duration;
///
/// assert_eq!(HOUR * 12, parse_duration_string("12h")?);
/// assert_eq!(Duration::from_secs(100), parse_duration_string("100")?);
/// assert!(parse_duration_string("005h").is_err());
/// #
/// # Ok::<(), authn_time::Error>(())
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidDuration`] if the input does not match the
/// grammar, or if the result does not fit in a [`Duration`].
pub fn parse_duration_string(input: &str) -> crate::Result<Duration> {
    let duration = parse_duration(input)
        .ok()
        .and_then(|(_, parsed)| parsed.to_duration());

    if let Some(duration) = duration {
        log::trace!("Parsed duration string {input:?} as {duration:?}");
        Ok(duration)
    } else {
        log::debug!("Rejected duration string {input:?}");
        Err(Error::InvalidDuration(input.to_owned()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::{DAY, HOUR, MINUTE, MONTH, WEEK, YEAR};
    use test_log::test;

    fn assert_rejected(input: &str) {
        let result = parse_duration_string(input);

        assert_eq!(
            format!("could not convert the input string of {input} into a duration"),
            result.clone().unwrap_err().to_string(),
        );
        assert_eq!(Duration::ZERO, result.unwrap_or_default());
    }

    #[test]
    fn parse_hour() {
        assert_eq!(MINUTE * 60, parse_duration_string("1h").unwrap());
    }

    #[test]
    fn parse_all_units() {
        assert_eq!(YEAR, parse_duration_string("1y").unwrap());
        assert_eq!(MONTH, parse_duration_string("1M").unwrap());
        assert_eq!(WEEK, parse_duration_string("1w").unwrap());
        assert_eq!(DAY, parse_duration_string("1d").unwrap());
        assert_eq!(HOUR, parse_duration_string("1h").unwrap());
        assert_eq!(Duration::from_secs(1), parse_duration_string("1s").unwrap());
    }

    #[test]
    fn parse_seconds_without_unit() {
        assert_eq!(
            Duration::from_secs(100),
            parse_duration_string("100").unwrap()
        );
    }

    #[test]
    fn parse_multi_digit() {
        assert_eq!(DAY * 30, parse_duration_string("30d").unwrap());
        assert_eq!(WEEK * 104, parse_duration_string("104w").unwrap());
    }

    #[test]
    fn parse_zero() {
        assert_eq!(Duration::ZERO, parse_duration_string("0").unwrap());
        assert_eq!(Duration::ZERO, parse_duration_string("0h").unwrap());
    }

    #[test]
    fn reject_out_of_order() {
        assert_rejected("h1");
    }

    #[test]
    fn reject_unknown_unit() {
        assert_rejected("10x");
    }

    #[test]
    fn reject_multi_char_unit() {
        assert_rejected("10ms");
    }

    #[test]
    fn reject_leading_zero() {
        assert_rejected("005h");
        assert_rejected("01");
    }

    #[test]
    fn reject_missing_quantity() {
        assert_rejected("");
        assert_rejected("h");
    }

    #[test]
    fn reject_case_mismatch() {
        assert_rejected("1H");
        assert_rejected("1m");
    }

    #[test]
    fn reject_whitespace() {
        assert_rejected(" 1h");
        assert_rejected("1h ");
        assert_rejected("1 h");
    }

    #[test]
    fn reject_sign() {
        assert_rejected("-1h");
        assert_rejected("+1h");
    }

    #[test]
    fn reject_overflow() {
        assert_rejected("99999999999999999999");
        assert_rejected("18446744073709551615y");
    }

    #[test]
    fn parsed_duration_parts() {
        let (_, parsed) = parse_duration("42w").unwrap();
        assert_eq!(
            ParsedDuration {
                quantity: "42",
                unit: Unit::Week,
            },
            parsed
        );

        let (rest, parsed) = parse_duration("7").unwrap();
        assert_eq!(Unit::Second, parsed.unit);
        assert!(rest.fragment().is_empty());

        assert!(parse_duration("005h").is_err());
        assert!(parse_duration("1hh").is_err());
    }
}
