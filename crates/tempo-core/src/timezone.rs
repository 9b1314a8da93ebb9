//! Timezone specifier resolution.
//!
//! A specifier is either a fixed numeric offset (`+HHMM` / `-HHMM`) or
//! an IANA region/location name resolved through the timezone database.

use jiff::tz::{Offset, TimeZone};

use crate::error::{ConvertError, Result};

/// True when the spec looks like a fixed offset rather than a region
/// name: exactly five characters, a leading sign, and no `/`.
pub fn is_fixed_offset(spec: &str) -> bool {
    spec.len() == 5 && !spec.contains('/') && (spec.starts_with('+') || spec.starts_with('-'))
}

/// Resolves a user-supplied timezone spec to a [`TimeZone`].
pub fn resolve(spec: &str) -> Result<TimeZone> {
    if is_fixed_offset(spec) {
        return fixed_offset(spec);
    }

    TimeZone::get(spec).map_err(|err| ConvertError::timezone(spec, err.to_string()))
}

/// Parses a `+HHMM` / `-HHMM` offset into a fixed zone.
///
/// Hours must be 00-23 and minutes 00-59. Whole hours and minutes only;
/// seconds offsets are not supported.
fn fixed_offset(spec: &str) -> Result<TimeZone> {
    let bytes = spec.as_bytes();
    if bytes.len() != 5 {
        return Err(ConvertError::timezone(spec, "expected the form +HHMM"));
    }

    let sign = match bytes[0] {
        b'+' => 1,
        b'-' => -1,
        other => {
            return Err(ConvertError::timezone(
                spec,
                format!("incorrect sign indicator '{}', expected '+' or '-'", char::from(other)),
            ))
        }
    };

    let hours = two_digits(&bytes[1..3])
        .ok_or_else(|| ConvertError::timezone(spec, "hours is not a two digit integer"))?;
    if hours > 23 {
        return Err(ConvertError::timezone(
            spec,
            format!("hours is out of range: {hours}, must be between 00 and 23"),
        ));
    }

    let minutes = two_digits(&bytes[3..5])
        .ok_or_else(|| ConvertError::timezone(spec, "minutes is not a two digit integer"))?;
    if minutes > 59 {
        return Err(ConvertError::timezone(
            spec,
            format!("minutes is out of range: {minutes}, must be between 00 and 59"),
        ));
    }

    let seconds = sign * (hours * 3600 + minutes * 60);
    let offset = Offset::from_seconds(seconds)
        .map_err(|err| ConvertError::timezone(spec, err.to_string()))?;

    Ok(TimeZone::fixed(offset))
}

fn two_digits(bytes: &[u8]) -> Option<i32> {
    match bytes {
        [tens, ones] if tens.is_ascii_digit() && ones.is_ascii_digit() => {
            Some(i32::from(tens - b'0') * 10 + i32::from(ones - b'0'))
        }
        _ => None,
    }
}

/// Disambiguation table for common zone abbreviations, used when
/// parsing layouts that carry an abbreviation field. Abbreviations are
/// ambiguous by nature (CST, IST, ...), so this follows the usual
/// GNU-compatible preferences for the contested ones.
static ZONE_ABBREVIATIONS: &[(&str, &str)] = &[
    ("UTC", "UTC"),
    ("GMT", "UTC"),
    ("PST", "America/Los_Angeles"),
    ("PDT", "America/Los_Angeles"),
    ("MST", "America/Denver"),
    ("MDT", "America/Denver"),
    ("CST", "America/Chicago"),
    ("CDT", "America/Chicago"),
    ("EST", "America/New_York"),
    ("EDT", "America/New_York"),
    ("IST", "Asia/Kolkata"),
    ("JST", "Asia/Tokyo"),
    ("BST", "Europe/London"),
    ("CET", "Europe/Paris"),
    ("CEST", "Europe/Paris"),
    ("AWST", "Australia/Perth"),
    ("ACST", "Australia/Adelaide"),
    ("AEST", "Australia/Sydney"),
];

/// The zone behind a recognized abbreviation, if any.
pub(crate) fn abbreviation_zone(abbrev: &str) -> Option<TimeZone> {
    ZONE_ABBREVIATIONS
        .iter()
        .find(|(name, _)| *name == abbrev)
        .and_then(|(_, iana)| TimeZone::get(iana).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::Timestamp;

    fn offset_seconds(tz: &TimeZone) -> i32 {
        tz.to_offset(Timestamp::UNIX_EPOCH).seconds()
    }

    #[test]
    fn classifies_fixed_offsets() {
        assert!(is_fixed_offset("-0500"));
        assert!(is_fixed_offset("+0000"));
        assert!(!is_fixed_offset("America/Chicago"));
        assert!(!is_fixed_offset("12345"));
        assert!(!is_fixed_offset("-050"));
        assert!(!is_fixed_offset("-05000"));
    }

    #[test]
    fn resolves_negative_offset() {
        let tz = resolve("-0500").unwrap();
        assert_eq!(offset_seconds(&tz), -18000);
    }

    #[test]
    fn resolves_zero_offset() {
        let tz = resolve("+0000").unwrap();
        assert_eq!(offset_seconds(&tz), 0);
    }

    #[test]
    fn resolves_half_hour_offset() {
        let tz = resolve("+0530").unwrap();
        assert_eq!(offset_seconds(&tz), 19800);
    }

    #[test]
    fn minutes_up_to_59_are_accepted() {
        // The 24-59 range is valid; only 60 and above is out of range.
        let tz = resolve("+0059").unwrap();
        assert_eq!(offset_seconds(&tz), 3540);
        assert!(resolve("+0060").is_err());
    }

    #[test]
    fn hours_above_23_are_rejected() {
        let err = resolve("+2400").unwrap_err();
        assert!(err.to_string().contains("hours is out of range"));
    }

    #[test]
    fn non_digit_fields_are_rejected() {
        assert!(resolve("+ab00").is_err());
        assert!(resolve("-05x0").is_err());
    }

    #[test]
    fn resolves_region_names() {
        assert!(resolve("America/New_York").is_ok());
        assert!(resolve("UTC").is_ok());
    }

    #[test]
    fn unresolvable_region_name_is_an_error() {
        let err = resolve("Not/AZone").unwrap_err();
        assert!(err.to_string().contains("Not/AZone"));
    }

    #[test]
    fn abbreviation_lookup_is_exact() {
        assert!(abbreviation_zone("CDT").is_some());
        assert!(abbreviation_zone("cdt").is_none());
        assert!(abbreviation_zone("XYZ").is_none());
    }
}
