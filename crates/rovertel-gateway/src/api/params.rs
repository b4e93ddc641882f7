//! Query parameter parsing.

/// Parse the leading decimal integer of `s`, the way the device firmware
/// read numeric query strings.
///
/// Leading whitespace and a single sign are accepted; parsing stops at the
/// first non-digit. Yields 0 when no digits are present and saturates on
/// overflow.
pub fn lenient_int(s: &str) -> i64 {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        let d = i64::from(b - b'0');
        value = value.saturating_mul(10).saturating_add(d);
    }
    if negative {
        -value
    } else {
        value
    }
}

/// Truncate to a byte, keeping the low eight bits.
pub fn wrap_to_byte(v: i64) -> u8 {
    (v & 0xff) as u8
}
