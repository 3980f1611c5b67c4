/// Parse a `row` form value into a position.
///
/// Reads a leading integer: leading whitespace is skipped, one optional sign
/// is allowed, then digits are consumed until the first non-digit. Anything
/// after that is ignored, so `"2abc"` and `"1.5"` yield 2 and 1. Returns
/// `None` when no digits are found, when the value is negative (`-0` is
/// zero), or when it does not fit in a `usize`.
pub fn parse_row(raw: &str) -> Option<usize> {
    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = unsigned
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits_len == 0 {
        return None;
    }

    let value: usize = unsigned[..digits_len].parse().ok()?;
    if negative && value != 0 {
        return None;
    }
    Some(value)
}
