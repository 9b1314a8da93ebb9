//! The conversion pipeline: parse, adjust, format.
//!
//! A conversion is one linear pass: resolve the input format, obtain a
//! zoned value (the `now` sentinel, an epoch integer, or a layout
//! parse), optionally re-display it in a requested timezone, then emit
//! it through the output format. Any stage failure aborts the whole
//! conversion.

use std::borrow::Cow;

use jiff::civil::DateTime;
use jiff::fmt::strtime::{self, BrokenDownTime};
use jiff::tz::TimeZone;
use jiff::{Timestamp, Zoned};

use crate::catalog::{FormatKind, LayoutSource, UnixUnit};
use crate::error::{ConvertError, Result};
use crate::layout;
use crate::timezone;

/// A single conversion request. Invocation-scoped: build one, convert
/// once, discard.
#[derive(Debug, Default, Clone)]
pub struct ConvertRequest {
    /// The value to convert, or the literal `now` (case-insensitive).
    pub value: String,
    /// Input format name; empty means the catalog default.
    pub input_format: String,
    /// Layout text when the input format is Custom or Strftime.
    pub input_layout: String,
    /// Output format name; empty means the catalog default.
    pub output_format: String,
    /// Layout text when the output format is Custom or Strftime.
    pub output_layout: String,
    /// Optional display timezone for the result: an IANA name or a
    /// fixed offset like `-0500`.
    pub output_timezone: String,
}

/// Executes the conversion described by `request`.
pub fn convert(request: &ConvertRequest) -> Result<String> {
    if request.value.is_empty() {
        return Err(ConvertError::EmptyInput);
    }

    let input_kind = FormatKind::resolve(&request.input_format)?;
    let output_kind = FormatKind::resolve(&request.output_format)?;

    let mut value = parse_input(&request.value, input_kind, &request.input_layout)?;

    if !request.output_timezone.is_empty() {
        let tz = timezone::resolve(&request.output_timezone)?;
        // Display-zone semantics: the instant is reinterpreted in the
        // target zone, never shifted.
        value = value.timestamp().to_zoned(tz);
    }

    format_output(&value, output_kind, &request.output_layout)
}

/// Turns the input text into a zoned value according to the input kind.
fn parse_input(value: &str, kind: FormatKind, custom_layout: &str) -> Result<Zoned> {
    if value.eq_ignore_ascii_case("now") {
        return Ok(Zoned::now());
    }

    if let LayoutSource::Epoch(unit) = kind.source() {
        let ticks: i64 = value.parse().map_err(|_| {
            ConvertError::parse(
                value,
                describe_format(kind, custom_layout),
                "not a valid integer",
            )
        })?;
        let timestamp = epoch_timestamp(unit, ticks).map_err(|err| {
            ConvertError::parse(value, describe_format(kind, custom_layout), err.to_string())
        })?;
        return Ok(timestamp.to_zoned(TimeZone::UTC));
    }

    let layout_text = resolve_layout(kind, custom_layout)?;
    parse_with_layout(&layout_text, value).map_err(|reason| {
        ConvertError::parse(value, describe_format(kind, custom_layout), reason)
    })
}

/// Renders the zoned value according to the output kind.
fn format_output(value: &Zoned, kind: FormatKind, custom_layout: &str) -> Result<String> {
    if let LayoutSource::Epoch(unit) = kind.source() {
        return Ok(epoch_ticks(unit, &value.timestamp()));
    }

    let layout_text = resolve_layout(kind, custom_layout)?;
    strtime::format(&*layout_text, value).map_err(|err| ConvertError::Format {
        format: describe_format(kind, custom_layout),
        reason: err.to_string(),
    })
}

/// Layout resolution shared by the input and output paths: catalog
/// layouts pass through, Custom patterns are translated, Strftime text
/// is taken verbatim.
fn resolve_layout(kind: FormatKind, custom_layout: &str) -> Result<Cow<'static, str>> {
    match kind.source() {
        LayoutSource::Native(native) => Ok(Cow::Borrowed(native)),
        LayoutSource::Custom => Ok(Cow::Owned(layout::build_layout(custom_layout)?)),
        LayoutSource::Strftime => Ok(Cow::Owned(custom_layout.to_string())),
        LayoutSource::Epoch(_) => Err(ConvertError::Format {
            format: kind.name().to_string(),
            reason: "epoch formats are integer-valued and have no layout".to_string(),
        }),
    }
}

/// Format description used in error messages; the custom kinds include
/// their layout text for diagnosis.
fn describe_format(kind: FormatKind, custom_layout: &str) -> String {
    match kind {
        FormatKind::Custom | FormatKind::Strftime => {
            format!("{}[\"{custom_layout}\"]", kind.name())
        }
        _ => kind.name().to_string(),
    }
}

fn epoch_timestamp(unit: UnixUnit, ticks: i64) -> std::result::Result<Timestamp, jiff::Error> {
    match unit {
        UnixUnit::Seconds => Timestamp::from_second(ticks),
        UnixUnit::Milliseconds => Timestamp::from_millisecond(ticks),
        UnixUnit::Microseconds => Timestamp::from_microsecond(ticks),
        UnixUnit::Nanoseconds => Timestamp::from_nanosecond(i128::from(ticks)),
    }
}

fn epoch_ticks(unit: UnixUnit, timestamp: &Timestamp) -> String {
    match unit {
        UnixUnit::Seconds => timestamp.as_second().to_string(),
        UnixUnit::Milliseconds => timestamp.as_millisecond().to_string(),
        UnixUnit::Microseconds => timestamp.as_microsecond().to_string(),
        UnixUnit::Nanoseconds => timestamp.as_nanosecond().to_string(),
    }
}

/// Parses input text against a strftime layout.
///
/// Values that carry zone information keep it; zoneless values are
/// interpreted as UTC wall-clock, with missing date/time components
/// defaulting to the epoch date and midnight.
fn parse_with_layout(layout_text: &str, value: &str) -> std::result::Result<Zoned, String> {
    // strftime cannot parse a zone abbreviation field, so layouts that
    // carry one take a substitution path.
    if layout_text.contains("%Z") {
        return parse_with_abbreviation(layout_text, value);
    }

    let mut tm = strtime::parse(layout_text, value).map_err(|err| err.to_string())?;

    // Complete values with zone information parse directly.
    if let Ok(zoned) = tm.to_zoned() {
        return Ok(zoned);
    }

    let offset = tm.offset();
    let datetime = civil_with_defaults(&mut tm).map_err(|err| err.to_string())?;
    let tz = match offset {
        Some(offset) => TimeZone::fixed(offset),
        None => TimeZone::UTC,
    };
    datetime.to_zoned(tz).map_err(|err| err.to_string())
}

/// Parses a layout containing `%Z` by resolving the abbreviation in the
/// input through the fixed abbreviation table, substituting it into the
/// layout as a literal, and localizing the parsed wall-clock to the
/// abbreviation's zone.
fn parse_with_abbreviation(
    layout_text: &str,
    value: &str,
) -> std::result::Result<Zoned, String> {
    let Some((abbrev, tz)) = value
        .split_whitespace()
        .filter(|word| {
            (2..=5).contains(&word.len()) && word.chars().all(|c| c.is_ascii_uppercase())
        })
        .find_map(|word| timezone::abbreviation_zone(word).map(|tz| (word, tz)))
    else {
        return Err("no recognizable timezone abbreviation in input".to_string());
    };

    let literal_layout = layout_text.replace("%Z", abbrev);
    let mut tm = strtime::parse(&literal_layout, value).map_err(|err| err.to_string())?;
    let datetime = civil_with_defaults(&mut tm).map_err(|err| err.to_string())?;
    datetime.to_zoned(tz).map_err(|err| err.to_string())
}

/// Fills unparsed date/time fields with their defaults (1970-01-01
/// midnight) and extracts the civil datetime.
fn civil_with_defaults(tm: &mut BrokenDownTime) -> std::result::Result<DateTime, jiff::Error> {
    if tm.year().is_none() {
        tm.set_year(Some(1970))?;
    }
    if tm.month().is_none() {
        tm.set_month(Some(1))?;
    }
    if tm.day().is_none() {
        tm.set_day(Some(1))?;
    }
    if tm.hour().is_none() {
        tm.set_hour(Some(0))?;
    }
    if tm.minute().is_none() {
        tm.set_minute(Some(0))?;
    }
    if tm.second().is_none() {
        tm.set_second(Some(0))?;
    }
    if tm.subsec_nanosecond().is_none() {
        tm.set_subsec_nanosecond(Some(0))?;
    }
    tm.to_datetime()
}
