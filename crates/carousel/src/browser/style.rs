//! Conversions between pixel offsets and CSS / attribute strings.
//!
//! Only the DOM bindings touch strings; the core works in integer pixels.

/// Parse the leading integer of a CSS length such as `"-600px"`.
///
/// Follows `parseInt` semantics: leading whitespace and a sign are accepted,
/// parsing stops at the first non-digit, and fractional parts are dropped.
#[must_use]
pub fn parse_px(value: &str) -> Option<i32> {
    let trimmed = value.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let magnitude: i64 = rest[..digits].parse().ok()?;
    let signed = if negative { -magnitude } else { magnitude };
    i32::try_from(signed).ok()
}

/// Format a pixel offset as a CSS length.
#[must_use]
pub fn format_px(px: i32) -> String {
    format!("{px}px")
}

/// Parse an indicator's 1-based index attribute.
#[must_use]
pub fn parse_index(value: &str) -> Option<usize> {
    value
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|index| *index >= 1)
}
