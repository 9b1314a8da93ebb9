//! The custom layout pattern language.
//!
//! Patterns like `mmm yyyy-mm-dd hhh:nn:ss.000 zthhmm` are split into
//! alternating separator and entity runs, and each entity run is
//! translated to its strftime directive. Separators are copied into the
//! layout verbatim, in their original positions, so the output layout
//! covers the pattern with no gaps and no reordering.

use crate::error::{ConvertError, Result};

/// One fragment of a custom pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Literal text, copied into the layout unchanged.
    Separator(&'a str),
    /// A pattern symbol to translate (lowercased at lookup time).
    Entity(&'a str),
}

impl Token<'_> {
    /// The fragment's original text.
    pub fn text(&self) -> &str {
        match self {
            Token::Separator(text) | Token::Entity(text) => text,
        }
    }
}

/// Entity runs are ASCII letters plus `0` (for the numeric sub-second
/// aliases) and `%` (for the offset spellings with separators).
fn is_entity_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '0' || c == '%'
}

/// Splits a pattern into separator and entity runs.
///
/// A single left-to-right pass with two states: the run closes whenever
/// the character class flips. Total and infallible; an empty pattern
/// yields no tokens.
pub fn tokenize(pattern: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut run_start = 0;
    let mut run_is_entity = false;

    for (idx, ch) in pattern.char_indices() {
        let entity = is_entity_char(ch);
        if idx == 0 {
            run_is_entity = entity;
            continue;
        }
        if entity != run_is_entity {
            tokens.push(make_token(run_is_entity, &pattern[run_start..idx]));
            run_start = idx;
            run_is_entity = entity;
        }
    }

    if !pattern.is_empty() {
        tokens.push(make_token(run_is_entity, &pattern[run_start..]));
    }

    tokens
}

fn make_token(is_entity: bool, text: &str) -> Token<'_> {
    if is_entity {
        Token::Entity(text)
    } else {
        Token::Separator(text)
    }
}

/// Translates one lowercased entity spelling to its strftime directive.
///
/// A pure fixed table: the same spelling always yields the same
/// directive, and anything else is a miss. The `am`/`pm` pair and the
/// `000`-style spellings are intentional aliases, and the offset family
/// collapses onto the two offset directives strftime provides (`%z`
/// and `%:z`, each accepting optional seconds).
fn entity_directive(entity: &str) -> Option<&'static str> {
    Some(match entity {
        "yy" => "%y",
        "yyyy" => "%Y",
        "m" => "%-m",
        "mm" => "%m",
        "mmm" => "%b",
        "mmmm" => "%B",
        "d" => "%-d",
        "dd" => "%d",
        "ddd" => "%a",
        "dddd" => "%A",
        "h" => "%-I",
        "hh" => "%I",
        "hhh" => "%H",
        "n" => "%-M",
        "nn" => "%M",
        "s" => "%-S",
        "ss" => "%S",
        "zzz" | "000" => "%3f",
        "zzzzzz" | "000000" => "%6f",
        "zzzzzzzzz" | "000000000" => "%9f",
        "am" | "pm" => "%p",
        "thh" | "thhmm" | "zthh" | "zthhmm" => "%z",
        "thh%mm" | "zthh%mm" => "%:z",
        "thhmmss" | "thh%mm%ss" | "zthhmmss" | "zthh%mm%ss" => "%:z",
        _ => return None,
    })
}

/// Builds a strftime layout from a custom pattern.
///
/// Separator tokens pass through verbatim; an entity with no
/// translation aborts the whole build, surfacing the entity exactly as
/// the user spelled it.
pub fn build_layout(pattern: &str) -> Result<String> {
    let mut layout = String::with_capacity(pattern.len() * 2);
    for token in tokenize(pattern) {
        match token {
            Token::Separator(text) => layout.push_str(text),
            Token::Entity(text) => match entity_directive(&text.to_ascii_lowercase()) {
                Some(directive) => layout.push_str(directive),
                None => {
                    return Err(ConvertError::UnknownEntity {
                        entity: text.to_string(),
                    })
                }
            },
        }
    }
    Ok(layout)
}

/// Entity reference for the CLI listing: spelling and description.
pub static ENTITY_HELP: &[(&str, &str)] = &[
    ("yy", "Two digit year"),
    ("yyyy", "Four digit year"),
    ("m", "Month number without padding"),
    ("mm", "Two digit month number"),
    ("mmm", "Three letter month abbreviation: Jan, Feb, etc"),
    ("mmmm", "Full month name"),
    ("d", "Day of month without padding"),
    ("dd", "Two digit day of month"),
    ("ddd", "Three letter day abbreviation: Mon, Tue, etc"),
    ("dddd", "Full day name"),
    ("h", "Hour on the 12 hour clock, without padding"),
    ("hh", "Two digit hour on the 12 hour clock"),
    ("hhh", "Two digit hour on the 24 hour clock"),
    ("n", "Minute without padding"),
    ("nn", "Two digit minute"),
    ("s", "Second without padding"),
    ("ss", "Two digit second"),
    ("zzz", "Milliseconds"),
    ("zzzzzz", "Microseconds"),
    ("zzzzzzzzz", "Nanoseconds"),
    ("am", "Shows AM or PM as appropriate"),
    ("pm", "Shows AM or PM as appropriate"),
    ("000", "Milliseconds"),
    ("000000", "Microseconds"),
    ("000000000", "Nanoseconds"),
    ("thh", "Offset from UTC, e.g. -0500"),
    ("thhmm", "Offset from UTC with hours and minutes, e.g. -0500"),
    ("thh%mm", "Offset from UTC with a separator, e.g. -05:00"),
    ("thhmmss", "Offset from UTC including seconds when present, e.g. -05:00"),
    ("thh%mm%ss", "Offset from UTC including seconds when present, e.g. -05:00"),
    ("zthh", "ISO 8601 offset, e.g. -0500"),
    ("zthhmm", "ISO 8601 offset with hours and minutes, e.g. -0500"),
    ("zthh%mm", "ISO 8601 offset with a separator, e.g. -05:00"),
    ("zthhmmss", "ISO 8601 offset including seconds when present, e.g. -05:00"),
    ("zthh%mm%ss", "ISO 8601 offset including seconds when present, e.g. -05:00"),
];
