//! Static catalog of named time formats.
//!
//! Every format the converter understands is one variant of
//! [`FormatKind`]. Names, layouts, and descriptions are exhaustive
//! matches over the enum, so adding a kind without wiring it up is a
//! compile error rather than a fall-through to a wrong default.

use crate::error::{ConvertError, Result};

/// The closed set of formats the converter understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatKind {
    Ansic,
    UnixDate,
    RubyDate,
    Rfc822,
    Rfc822Z,
    Rfc850,
    Rfc1123,
    Rfc1123Z,
    Rfc3339,
    Rfc3339Nano,
    Kitchen,
    Stamp,
    StampMilli,
    StampMicro,
    StampNano,
    UsDateTime,
    UsDateTimeZ,
    UsDateTimeMilliZ,
    UsDateTimeMicroZ,
    UsDateTimeNanoZ,
    UsDateShort,
    UsDate,
    EuDateTime,
    EuDateTimeZ,
    EuDateTimeMilliZ,
    EuDateTimeMicroZ,
    EuDateTimeNanoZ,
    EuDateShort,
    EuDate,
    DateOnly,
    TimeOnly,
    /// Layout supplied in the alphabetic pattern language.
    Custom,
    /// Layout supplied directly as strftime text.
    Strftime,
    UnixSecs,
    UnixMilli,
    UnixMicro,
    UnixNano,
}

/// How a format obtains its text representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutSource {
    /// An immutable catalog layout.
    Native(&'static str),
    /// Built from the user's alphabetic pattern.
    Custom,
    /// User-supplied strftime text, passed through verbatim.
    Strftime,
    /// An integer tick count since the Unix epoch.
    Epoch(UnixUnit),
}

/// Tick resolution for the Unix-epoch format kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnixUnit {
    Seconds,
    Milliseconds,
    Microseconds,
    Nanoseconds,
}

/// The format applied when the caller names none.
pub const DEFAULT_FORMAT: FormatKind = FormatKind::UsDateTimeZ;

impl FormatKind {
    /// Every kind, in catalog listing order.
    pub const ALL: &'static [FormatKind] = &[
        FormatKind::Ansic,
        FormatKind::UnixDate,
        FormatKind::RubyDate,
        FormatKind::Rfc822,
        FormatKind::Rfc822Z,
        FormatKind::Rfc850,
        FormatKind::Rfc1123,
        FormatKind::Rfc1123Z,
        FormatKind::Rfc3339,
        FormatKind::Rfc3339Nano,
        FormatKind::Kitchen,
        FormatKind::Stamp,
        FormatKind::StampMilli,
        FormatKind::StampMicro,
        FormatKind::StampNano,
        FormatKind::UsDateTime,
        FormatKind::UsDateTimeZ,
        FormatKind::UsDateTimeMilliZ,
        FormatKind::UsDateTimeMicroZ,
        FormatKind::UsDateTimeNanoZ,
        FormatKind::UsDateShort,
        FormatKind::UsDate,
        FormatKind::EuDateTime,
        FormatKind::EuDateTimeZ,
        FormatKind::EuDateTimeMilliZ,
        FormatKind::EuDateTimeMicroZ,
        FormatKind::EuDateTimeNanoZ,
        FormatKind::EuDateShort,
        FormatKind::EuDate,
        FormatKind::DateOnly,
        FormatKind::TimeOnly,
        FormatKind::UnixSecs,
        FormatKind::UnixMilli,
        FormatKind::UnixMicro,
        FormatKind::UnixNano,
        FormatKind::Custom,
        FormatKind::Strftime,
    ];

    /// Case-insensitive name lookup. An empty name resolves to
    /// [`DEFAULT_FORMAT`]; an unrecognized one is an error naming the
    /// offending input.
    pub fn resolve(name: &str) -> Result<FormatKind> {
        if name.is_empty() {
            return Ok(DEFAULT_FORMAT);
        }
        FormatKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ConvertError::UnknownFormat {
                name: name.to_string(),
            })
    }

    /// The canonical catalog name.
    pub fn name(self) -> &'static str {
        match self {
            FormatKind::Ansic => "ANSIC",
            FormatKind::UnixDate => "UnixDate",
            FormatKind::RubyDate => "RubyDate",
            FormatKind::Rfc822 => "RFC822",
            FormatKind::Rfc822Z => "RFC822Z",
            FormatKind::Rfc850 => "RFC850",
            FormatKind::Rfc1123 => "RFC1123",
            FormatKind::Rfc1123Z => "RFC1123Z",
            FormatKind::Rfc3339 => "RFC3339",
            FormatKind::Rfc3339Nano => "RFC3339Nano",
            FormatKind::Kitchen => "Kitchen",
            FormatKind::Stamp => "Stamp",
            FormatKind::StampMilli => "StampMilli",
            FormatKind::StampMicro => "StampMicro",
            FormatKind::StampNano => "StampNano",
            FormatKind::UsDateTime => "USDateTime",
            FormatKind::UsDateTimeZ => "USDateTimeZ",
            FormatKind::UsDateTimeMilliZ => "USDateTimeMilliZ",
            FormatKind::UsDateTimeMicroZ => "USDateTimeMicroZ",
            FormatKind::UsDateTimeNanoZ => "USDateTimeNanoZ",
            FormatKind::UsDateShort => "USDateShort",
            FormatKind::UsDate => "USDate",
            FormatKind::EuDateTime => "EUDateTime",
            FormatKind::EuDateTimeZ => "EUDateTimeZ",
            FormatKind::EuDateTimeMilliZ => "EUDateTimeMilliZ",
            FormatKind::EuDateTimeMicroZ => "EUDateTimeMicroZ",
            FormatKind::EuDateTimeNanoZ => "EUDateTimeNanoZ",
            FormatKind::EuDateShort => "EUDateShort",
            FormatKind::EuDate => "EUDate",
            FormatKind::DateOnly => "DateOnly",
            FormatKind::TimeOnly => "TimeOnly",
            FormatKind::Custom => "Custom",
            FormatKind::Strftime => "Strftime",
            FormatKind::UnixSecs => "UnixSecs",
            FormatKind::UnixMilli => "UnixMilli",
            FormatKind::UnixMicro => "UnixMicro",
            FormatKind::UnixNano => "UnixNano",
        }
    }

    /// The native layout for the named kinds. The custom and epoch
    /// kinds have none.
    pub fn layout(self) -> Option<&'static str> {
        match self.source() {
            LayoutSource::Native(layout) => Some(layout),
            _ => None,
        }
    }

    /// Where this kind's text representation comes from.
    pub fn source(self) -> LayoutSource {
        match self {
            FormatKind::Ansic => LayoutSource::Native("%a %b %e %H:%M:%S %Y"),
            FormatKind::UnixDate => LayoutSource::Native("%a %b %e %H:%M:%S %Z %Y"),
            FormatKind::RubyDate => LayoutSource::Native("%a %b %d %H:%M:%S %z %Y"),
            FormatKind::Rfc822 => LayoutSource::Native("%d %b %y %H:%M %Z"),
            FormatKind::Rfc822Z => LayoutSource::Native("%d %b %y %H:%M %z"),
            FormatKind::Rfc850 => LayoutSource::Native("%A, %d-%b-%y %H:%M:%S %Z"),
            FormatKind::Rfc1123 => LayoutSource::Native("%a, %d %b %Y %H:%M:%S %Z"),
            FormatKind::Rfc1123Z => LayoutSource::Native("%a, %d %b %Y %H:%M:%S %z"),
            FormatKind::Rfc3339 => LayoutSource::Native("%Y-%m-%dT%H:%M:%S%:z"),
            FormatKind::Rfc3339Nano => LayoutSource::Native("%Y-%m-%dT%H:%M:%S%.f%:z"),
            FormatKind::Kitchen => LayoutSource::Native("%-I:%M%p"),
            FormatKind::Stamp => LayoutSource::Native("%b %e %H:%M:%S"),
            FormatKind::StampMilli => LayoutSource::Native("%b %e %H:%M:%S%.3f"),
            FormatKind::StampMicro => LayoutSource::Native("%b %e %H:%M:%S%.6f"),
            FormatKind::StampNano => LayoutSource::Native("%b %e %H:%M:%S%.9f"),
            FormatKind::UsDateTime => LayoutSource::Native("%Y-%m-%d %H:%M:%S"),
            FormatKind::UsDateTimeZ => LayoutSource::Native("%Y-%m-%d %H:%M:%S %z"),
            FormatKind::UsDateTimeMilliZ => LayoutSource::Native("%Y-%m-%d %H:%M:%S%.3f %z"),
            FormatKind::UsDateTimeMicroZ => LayoutSource::Native("%Y-%m-%d %H:%M:%S%.6f %z"),
            FormatKind::UsDateTimeNanoZ => LayoutSource::Native("%Y-%m-%d %H:%M:%S%.9f %z"),
            FormatKind::UsDateShort => LayoutSource::Native("%-m/%-d/%y"),
            FormatKind::UsDate => LayoutSource::Native("%m/%d/%Y"),
            // The EU variants keep the original catalog's year-day-month
            // ordering in the year-first forms.
            FormatKind::EuDateTime => LayoutSource::Native("%Y-%d-%m %H:%M:%S"),
            FormatKind::EuDateTimeZ => LayoutSource::Native("%Y-%d-%m %H:%M:%S %z"),
            FormatKind::EuDateTimeMilliZ => LayoutSource::Native("%Y-%d-%m %H:%M:%S%.3f %z"),
            FormatKind::EuDateTimeMicroZ => LayoutSource::Native("%Y-%d-%m %H:%M:%S%.6f %z"),
            FormatKind::EuDateTimeNanoZ => LayoutSource::Native("%Y-%d-%m %H:%M:%S%.9f %z"),
            FormatKind::EuDateShort => LayoutSource::Native("%-d/%-m/%y"),
            FormatKind::EuDate => LayoutSource::Native("%d/%m/%Y"),
            FormatKind::DateOnly => LayoutSource::Native("%Y-%m-%d"),
            FormatKind::TimeOnly => LayoutSource::Native("%H:%M:%S"),
            FormatKind::Custom => LayoutSource::Custom,
            FormatKind::Strftime => LayoutSource::Strftime,
            FormatKind::UnixSecs => LayoutSource::Epoch(UnixUnit::Seconds),
            FormatKind::UnixMilli => LayoutSource::Epoch(UnixUnit::Milliseconds),
            FormatKind::UnixMicro => LayoutSource::Epoch(UnixUnit::Microseconds),
            FormatKind::UnixNano => LayoutSource::Epoch(UnixUnit::Nanoseconds),
        }
    }

    /// A one-line description for the catalog listing. Named kinds show
    /// their layout; the rest describe how the value is interpreted.
    pub fn describe(self) -> String {
        match self.source() {
            LayoutSource::Native(layout) => format!("\"{layout}\""),
            LayoutSource::Custom => {
                "Layout text in the entity syntax, via --input-layout / --output-layout".to_string()
            }
            LayoutSource::Strftime => {
                "Layout text in strftime syntax, via --input-layout / --output-layout".to_string()
            }
            LayoutSource::Epoch(unit) => format!("Unix time in {}", unit.noun()),
        }
    }
}

impl UnixUnit {
    fn noun(self) -> &'static str {
        match self {
            UnixUnit::Seconds => "seconds",
            UnixUnit::Milliseconds => "milliseconds",
            UnixUnit::Microseconds => "microseconds",
            UnixUnit::Nanoseconds => "nanoseconds",
        }
    }
}
