/// First code point of every run of ten Unicode `Nd` (decimal digit)
/// characters. Each run holds the digits zero to nine in order.
const DECIMAL_ZEROS: [u32; 68] = [
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6,
    0x0C66, 0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0,
    0x1810, 0x1946, 0x19D0, 0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620,
    0xA8D0, 0xA900, 0xA9D0, 0xA9F0, 0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x10D30, 0x11066,
    0x110F0, 0x11136, 0x111D0, 0x112F0, 0x11450, 0x114D0, 0x11650, 0x116C0, 0x11730, 0x118E0,
    0x11950, 0x11C50, 0x11D50, 0x11DA0, 0x11F50, 0x16A60, 0x16AC0, 0x16B50, 0x1D7CE, 0x1D7D8,
    0x1D7E2, 0x1D7EC, 0x1D7F6, 0x1E140, 0x1E2F0, 0x1E4F0, 0x1E950, 0x1FBF0,
];

/// Maps any Unicode decimal digit (full-width, Arabic-Indic, ...) to its
/// ASCII counterpart.
fn ascii_digit(c: char) -> Option<char> {
    if c.is_ascii_digit() {
        return Some(c);
    }
    let cp = c as u32;
    let run = DECIMAL_ZEROS.partition_point(|&zero| zero <= cp).checked_sub(1)?;
    let offset = cp - DECIMAL_ZEROS[run];
    if offset < 10 {
        char::from_digit(offset, 10)
    } else {
        None
    }
}

/// Parses a raw form value as a 64-bit integer.
///
/// Surrounding whitespace and one leading sign are accepted. Digits may be
/// any Unicode decimal digits, and single underscores may separate them
/// (`1_000`). Values outside the `i64` range are rejected.
pub fn parse_int(raw: &str) -> Option<i64> {
    let s = raw.trim();
    let (negative, body) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };

    let mut normalized = String::with_capacity(body.len() + 1);
    if negative {
        normalized.push('-');
    }
    let mut after_digit = false;
    for c in body.chars() {
        if c == '_' {
            // no leading, trailing or doubled separators
            if !after_digit {
                return None;
            }
            after_digit = false;
            continue;
        }
        normalized.push(ascii_digit(c)?);
        after_digit = true;
    }
    if !after_digit {
        return None;
    }
    normalized.parse::<i64>().ok()
}

/// True if `s` contains any character of the Unicode `Cc` category.
pub fn has_control_character(s: &str) -> bool {
    s.chars().any(char::is_control)
}
