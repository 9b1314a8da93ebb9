//! End-to-end conversion scenarios across the format catalog.
//!
//! The fixture instant is May 7, 2011 14:15:16, optionally at -0500,
//! matching the shapes users actually feed the tool.

use tempo_core::{convert, ConvertError, ConvertRequest};

struct Case {
    name: &'static str,
    value: &'static str,
    input_format: &'static str,
    input_layout: &'static str,
    output_format: &'static str,
    output_layout: &'static str,
    output_timezone: &'static str,
    want: &'static str,
}

impl Case {
    fn run(&self) -> Result<String, ConvertError> {
        convert(&ConvertRequest {
            value: self.value.to_string(),
            input_format: self.input_format.to_string(),
            input_layout: self.input_layout.to_string(),
            output_format: self.output_format.to_string(),
            output_layout: self.output_layout.to_string(),
            output_timezone: self.output_timezone.to_string(),
        })
    }

    fn check(&self) {
        match self.run() {
            Ok(got) => assert_eq!(got, self.want, "case {}", self.name),
            Err(err) => panic!("case {}: unexpected error: {err}", self.name),
        }
    }
}

macro_rules! case {
    ($name:literal, $value:literal, $inf:literal, $inl:literal, $outf:literal, $outl:literal, $tz:literal => $want:literal) => {
        Case {
            name: $name,
            value: $value,
            input_format: $inf,
            input_layout: $inl,
            output_format: $outf,
            output_layout: $outl,
            output_timezone: $tz,
            want: $want,
        }
    };
}

#[test]
fn input_formats_parse_correctly() {
    let cases = [
        case!("ANSIC", "Sat May  7 14:15:16 2011", "ANSIC", "", "USDateTime", "", ""
            => "2011-05-07 14:15:16"),
        case!("UnixDate", "Sat May  7 14:15:16 CDT 2011", "UnixDate", "", "USDateTimeZ", "", "-0500"
            => "2011-05-07 14:15:16 -0500"),
        case!("RubyDate", "Sat May 07 14:15:16 -0500 2011", "RubyDate", "", "USDateTimeZ", "", "-0500"
            => "2011-05-07 14:15:16 -0500"),
        case!("RFC822", "07 May 11 14:15 UTC", "RFC822", "", "USDateTime", "", ""
            => "2011-05-07 14:15:00"),
        case!("RFC822Z", "07 May 11 14:15 -0500", "RFC822Z", "", "USDateTimeZ", "", "-0500"
            => "2011-05-07 14:15:00 -0500"),
        case!("RFC850", "Saturday, 07-May-11 14:15:16 UTC", "RFC850", "", "USDateTime", "", ""
            => "2011-05-07 14:15:16"),
        case!("RFC1123", "Sat, 07 May 2011 14:15:16 UTC", "RFC1123", "", "USDateTime", "", ""
            => "2011-05-07 14:15:16"),
        case!("RFC1123Z", "Sat, 07 May 2011 14:15:16 -0500", "RFC1123Z", "", "USDateTimeZ", "", "-0500"
            => "2011-05-07 14:15:16 -0500"),
        case!("RFC3339", "2011-05-07T14:15:16-05:00", "RFC3339", "", "USDateTimeZ", "", "-0500"
            => "2011-05-07 14:15:16 -0500"),
        case!("RFC3339Nano", "2011-05-07T14:15:16.123456789-05:00", "RFC3339Nano", "", "USDateTimeNanoZ", "", "-0500"
            => "2011-05-07 14:15:16.123456789 -0500"),
        case!("Kitchen", "2:15PM", "Kitchen", "", "TimeOnly", "", ""
            => "14:15:00"),
        case!("Stamp", "May  7 14:15:16", "Stamp", "", "USDateTime", "", ""
            => "1970-05-07 14:15:16"),
        case!("StampMilli", "May  7 14:15:16.123", "StampMilli", "", "Custom", "mmm d hhh:nn:ss.zzz", ""
            => "May 7 14:15:16.123"),
        case!("StampMicro", "May  7 14:15:16.123456", "StampMicro", "", "Custom", "mmm d hhh:nn:ss.zzzzzz", ""
            => "May 7 14:15:16.123456"),
        case!("StampNano", "May  7 14:15:16.123456789", "StampNano", "", "Custom", "mmm d hhh:nn:ss.zzzzzzzzz", ""
            => "May 7 14:15:16.123456789"),
        case!("USDateTime", "2011-05-07 14:15:16", "USDateTime", "", "USDateTime", "", ""
            => "2011-05-07 14:15:16"),
        case!("USDateTimeZ", "2011-05-07 14:15:16 -0500", "USDateTimeZ", "", "USDateTimeZ", "", "-0500"
            => "2011-05-07 14:15:16 -0500"),
        case!("USDateTimeMilliZ", "2011-05-07 14:15:16.123 -0500", "USDateTimeMilliZ", "", "USDateTimeMilliZ", "", "-0500"
            => "2011-05-07 14:15:16.123 -0500"),
        case!("USDateTimeMicroZ", "2011-05-07 14:15:16.123456 -0500", "USDateTimeMicroZ", "", "USDateTimeMicroZ", "", "-0500"
            => "2011-05-07 14:15:16.123456 -0500"),
        case!("USDateTimeNanoZ", "2011-05-07 14:15:16.123456789 -0500", "USDateTimeNanoZ", "", "USDateTimeNanoZ", "", "-0500"
            => "2011-05-07 14:15:16.123456789 -0500"),
        case!("USDateShort", "5/7/11", "USDateShort", "", "USDate", "", ""
            => "05/07/2011"),
        case!("USDate", "05/07/2011", "USDate", "", "USDateTime", "", ""
            => "2011-05-07 00:00:00"),
        case!("EUDateTime", "2011-07-05 14:15:16", "EUDateTime", "", "USDateTime", "", ""
            => "2011-05-07 14:15:16"),
        case!("EUDateTimeZ", "2011-07-05 14:15:16 -0500", "EUDateTimeZ", "", "USDateTimeZ", "", "-0500"
            => "2011-05-07 14:15:16 -0500"),
        case!("EUDateShort", "7/5/11", "EUDateShort", "", "USDateTime", "", ""
            => "2011-05-07 00:00:00"),
        case!("EUDate", "07/05/2011", "EUDate", "", "USDate", "", ""
            => "05/07/2011"),
        case!("DateOnly", "2011-05-07", "DateOnly", "", "USDateTime", "", ""
            => "2011-05-07 00:00:00"),
        case!("TimeOnly", "14:15:16", "TimeOnly", "", "Strftime", "%H:%M:%S", ""
            => "14:15:16"),
        case!("DefaultInputFormat", "2011-05-07 14:15:16 -0500", "", "", "USDateTimeZ", "", "-0500"
            => "2011-05-07 14:15:16 -0500"),
    ];

    for case in &cases {
        case.check();
    }
}

#[test]
fn output_formats_render_correctly() {
    let cases = [
        case!("ANSIC", "2011-05-07 14:15:16", "USDateTime", "", "ANSIC", "", ""
            => "Sat May  7 14:15:16 2011"),
        case!("UnixDate", "2011-05-07 14:15:16 -0500", "USDateTimeZ", "", "UnixDate", "", "America/Chicago"
            => "Sat May  7 14:15:16 CDT 2011"),
        case!("RubyDate", "2011-05-07 14:15:16 -0500", "USDateTimeZ", "", "RubyDate", "", "-0500"
            => "Sat May 07 14:15:16 -0500 2011"),
        case!("RFC822Z", "2011-05-07 14:15:00 -0500", "USDateTimeZ", "", "RFC822Z", "", "-0500"
            => "07 May 11 14:15 -0500"),
        case!("RFC1123Z", "2011-05-07 14:15:16 -0500", "USDateTimeZ", "", "RFC1123Z", "", "-0500"
            => "Sat, 07 May 2011 14:15:16 -0500"),
        case!("RFC3339", "2011-05-07 14:15:16 -0500", "USDateTimeZ", "", "RFC3339", "", "-0500"
            => "2011-05-07T14:15:16-05:00"),
        case!("RFC3339Nano", "2011-05-07 14:15:16.123456789 -0500", "USDateTimeNanoZ", "", "RFC3339Nano", "", "-0500"
            => "2011-05-07T14:15:16.123456789-05:00"),
        case!("Kitchen", "14:15:00", "TimeOnly", "", "Kitchen", "", ""
            => "2:15PM"),
        case!("Stamp", "May 7 14:15:16", "Custom", "mmm d hhh:nn:ss", "Stamp", "", ""
            => "May  7 14:15:16"),
        case!("StampMilli", "May 7 14:15:16.123", "Custom", "mmm d hhh:nn:ss.zzz", "StampMilli", "", ""
            => "May  7 14:15:16.123"),
        case!("USDateShort", "05/07/2011", "USDate", "", "USDateShort", "", ""
            => "5/7/11"),
        case!("EUDateTime", "2011-05-07 14:15:16", "USDateTime", "", "EUDateTime", "", ""
            => "2011-07-05 14:15:16"),
        case!("EUDateShort", "2011-05-07 00:00:00", "USDateTime", "", "EUDateShort", "", ""
            => "7/5/11"),
        case!("DateOnly", "2011-05-07 14:15:16", "USDateTime", "", "DateOnly", "", ""
            => "2011-05-07"),
        case!("TimeOnly", "14:15:16", "Strftime", "%H:%M:%S", "TimeOnly", "", ""
            => "14:15:16"),
        case!("DefaultOutputFormat", "2011-05-07 14:15:16 -0500", "USDateTimeZ", "", "", "", "-0500"
            => "2011-05-07 14:15:16 -0500"),
    ];

    for case in &cases {
        case.check();
    }
}

#[test]
fn epoch_formats_convert_in_both_directions() {
    let cases = [
        case!("SecsToUSDateTime", "1620404116", "UnixSecs", "", "USDateTime", "", ""
            => "2021-05-07 15:35:16"),
        case!("SecsToMilli", "1620404116", "UnixSecs", "", "UnixMilli", "", ""
            => "1620404116000"),
        case!("MilliToNano", "1620404116123", "UnixMilli", "", "UnixNano", "", ""
            => "1620404116123000000"),
        case!("MilliToLayout", "1620404116123", "UnixMilli", "", "USDateTimeMilliZ", "", "+0000"
            => "2021-05-07 15:35:16.123 +0000"),
        case!("MicroToLayout", "1620404116123456", "UnixMicro", "", "USDateTimeMicroZ", "", "+0000"
            => "2021-05-07 15:35:16.123456 +0000"),
        case!("NanoToLayout", "1620404116123456789", "UnixNano", "", "USDateTimeNanoZ", "", "+0000"
            => "2021-05-07 15:35:16.123456789 +0000"),
        case!("LayoutToSecs", "2021-05-07 10:35:16 -0500", "USDateTimeZ", "", "UnixSecs", "", ""
            => "1620404116"),
        case!("RFC3339ToSecs", "2021-05-07T15:35:16+00:00", "RFC3339", "", "UnixSecs", "", ""
            => "1620404116"),
    ];

    for case in &cases {
        case.check();
    }
}

#[test]
fn epoch_round_trip_matches_direct_conversion() {
    let direct = case!("direct", "1620404116", "UnixSecs", "", "USDateTime", "", ""
        => "2021-05-07 15:35:16");
    let through_epoch = case!("through", "1620404116", "UnixSecs", "", "UnixSecs", "", ""
        => "1620404116");

    let epoch_text = through_epoch.run().unwrap();
    let reparsed = convert(&ConvertRequest {
        value: epoch_text,
        input_format: "UnixSecs".to_string(),
        output_format: "USDateTime".to_string(),
        ..Default::default()
    })
    .unwrap();

    assert_eq!(reparsed, direct.run().unwrap());
}

#[test]
fn named_formats_round_trip_through_their_own_layout() {
    // Two-digit-year formats are lossy by design and excluded.
    let fixtures = [
        ("RFC3339", "2011-05-07T14:15:16-05:00"),
        ("USDateTimeZ", "2011-05-07 14:15:16 -0500"),
        ("USDate", "05/07/2011"),
        ("EUDate", "07/05/2011"),
        ("DateOnly", "2011-05-07"),
        ("TimeOnly", "14:15:16"),
        ("Kitchen", "2:15PM"),
        ("RubyDate", "Sat May 07 14:15:16 -0500 2011"),
    ];

    for (format, text) in fixtures {
        let case = Case {
            name: format,
            value: text,
            input_format: format,
            input_layout: "",
            output_format: format,
            output_layout: "",
            output_timezone: "",
            want: text,
        };
        case.check();
    }
}

#[test]
fn timezone_adjustment_reinterprets_the_instant() {
    // A zoneless parse is UTC wall-clock; the display zone changes the
    // clock reading, not the instant.
    case!("FixedOffset", "2011-05-07 14:15:16", "USDateTime", "", "USDateTimeZ", "", "-0500"
        => "2011-05-07 09:15:16 -0500")
    .check();
    case!("IanaZone", "2011-05-07 14:15:16", "USDateTime", "", "USDateTimeZ", "", "America/New_York"
        => "2011-05-07 10:15:16 -0400")
    .check();
    case!("HalfHourZone", "2011-05-07 14:15:16", "USDateTime", "", "USDateTimeZ", "", "+0530"
        => "2011-05-07 19:45:16 +0530")
    .check();
}

#[test]
fn custom_patterns_match_their_native_equivalents() {
    let through_custom = case!("custom", "2011-05-07 14:15:16", "Custom", "yyyy-mm-dd hhh:nn:ss", "Custom", "yyyy-mm-dd hhh:nn:ss", ""
        => "2011-05-07 14:15:16");
    let through_named = case!("named", "2011-05-07 14:15:16", "USDateTime", "", "USDateTime", "", ""
        => "2011-05-07 14:15:16");

    assert_eq!(through_custom.run().unwrap(), through_named.run().unwrap());
}

#[test]
fn full_custom_pattern_with_offset_and_millis() {
    case!("CustomFull", "May 2011-05-07 14:15:16.123 -0500", "Custom", "mmm yyyy-mm-dd hhh:nn:ss.000 zthhmm", "USDateTimeMilliZ", "", "-0500"
        => "2011-05-07 14:15:16.123 -0500")
    .check();
}

#[test]
fn unknown_custom_entity_fails_the_conversion() {
    let case = case!("UnknownEntity", "whatever", "Custom", "qq yyyy", "USDateTime", "", ""
        => "");
    match case.run() {
        Err(ConvertError::UnknownEntity { entity }) => assert_eq!(entity, "qq"),
        other => panic!("expected an unknown entity error, got {other:?}"),
    }
}
