//! Mail timestamps.

use std::fmt::Write as _;

use chrono::TimeZone;
use chrono::format::{Item, StrftimeItems};
use chrono_tz::Tz;

use crate::mail::MailId;
use crate::{Error, Result};

/// Formats the creation time of a mail.
///
/// The id is floored to epoch milliseconds, converted to the IANA time zone
/// `zone` and rendered with the `chrono` strftime `pattern`. The result
/// depends only on the arguments, never on the current time.
///
/// # Errors
///
/// Returns [`Error::InvalidTimeZone`] for an unknown zone,
/// [`Error::InvalidTimestampFormat`] for a pattern with unsupported
/// specifiers and [`Error::TimestampOutOfRange`] if the id is not a
/// representable instant.
pub fn format_timestamp(id: MailId, zone: &str, pattern: &str) -> Result<String> {
    let tz = parse_zone(zone)?;
    let items = parse_pattern(pattern)?;

    let millis = id.millis();
    let instant = tz
        .timestamp_millis_opt(millis)
        .single()
        .ok_or(Error::TimestampOutOfRange(millis))?;

    let mut formatted = String::new();
    write!(formatted, "{}", instant.format_with_items(items.iter()))
        .map_err(|_| Error::InvalidTimestampFormat(pattern.to_string()))?;
    Ok(formatted)
}

/// Parses an IANA time zone name such as `Europe/Rome` or `UTC`.
pub(crate) fn parse_zone(zone: &str) -> Result<Tz> {
    zone.parse::<Tz>()
        .map_err(|_| Error::InvalidTimeZone(zone.to_string()))
}

/// Parses a strftime pattern, rejecting unknown specifiers up front.
pub(crate) fn parse_pattern(pattern: &str) -> Result<Vec<Item<'_>>> {
    let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(Error::InvalidTimestampFormat(pattern.to_string()));
    }
    Ok(items)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const NOV_14_2023: f64 = 1_700_000_000_000.0;

    #[test]
    fn test_epoch_utc() {
        let formatted = format_timestamp(MailId::new(0.0), "UTC", "%Y-%m-%d %H:%M:%S").unwrap();
        assert_eq!(formatted, "1970-01-01 00:00:00");
    }

    #[test]
    fn test_zone_applied() {
        let id = MailId::new(NOV_14_2023);
        assert_eq!(
            format_timestamp(id, "UTC", "%d/%m/%Y %H:%M").unwrap(),
            "14/11/2023 22:13"
        );
        assert_eq!(
            format_timestamp(id, "Europe/Rome", "%d/%m/%Y %H:%M").unwrap(),
            "14/11/2023 23:13"
        );
        assert_eq!(
            format_timestamp(id, "America/New_York", "%H:%M").unwrap(),
            "17:13"
        );
    }

    #[test]
    fn test_jitter_is_floored() {
        let id = MailId::new(NOV_14_2023 + 999.99);
        assert_eq!(format_timestamp(id, "UTC", "%S%.3f").unwrap(), "20.999");
    }

    #[test]
    fn test_invalid_zone() {
        let err = format_timestamp(MailId::new(0.0), "Mars/Olympus", "%Y").unwrap_err();
        assert!(matches!(err, Error::InvalidTimeZone(ref zone) if zone == "Mars/Olympus"));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = format_timestamp(MailId::new(0.0), "UTC", "%J").unwrap_err();
        assert!(matches!(err, Error::InvalidTimestampFormat(_)));
    }
}
