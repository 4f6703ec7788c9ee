//! Numeric helpers for rating cells and averages.

/// Parses the leading integer of `value`, the way roster exports are read.
///
/// Leading whitespace and a single sign are accepted, a `0x`/`0X` prefix
/// switches to hexadecimal, and parsing stops at the first non-digit. Returns
/// `None` when no digit is found. Out-of-range values saturate.
pub fn parse_int_lenient(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let (radix, digits) = match unsigned.get(..2) {
        Some("0x" | "0X") => (16, &unsigned[2..]),
        _ => (10, unsigned),
    };
    let mut magnitude: i64 = 0;
    let mut seen = false;
    for ch in digits.chars() {
        let Some(digit) = ch.to_digit(radix) else {
            break;
        };
        seen = true;
        magnitude = magnitude
            .saturating_mul(i64::from(radix))
            .saturating_add(i64::from(digit));
    }
    if !seen {
        return None;
    }
    Some(if negative { -magnitude } else { magnitude })
}

/// [`parse_int_lenient`] with absent or unparsable values treated as zero.
pub fn int_or_zero(value: Option<&str>) -> i64 {
    value.and_then(parse_int_lenient).unwrap_or(0)
}

/// Formats `value` with one decimal place.
///
/// Exact ties (`x.x5`) round away from zero; everything else rounds to the
/// nearest representable tenth.
pub fn format_fixed_1(value: f64) -> String {
    let quarters = value * 4.0;
    let is_tie = quarters.fract() == 0.0 && (quarters % 2.0) != 0.0;
    if is_tie {
        format!("{:.1}", (value * 10.0).round() / 10.0)
    } else {
        format!("{value:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int_lenient_plain() {
        assert_eq!(parse_int_lenient("45"), Some(45));
        assert_eq!(parse_int_lenient("  -7"), Some(-7));
        assert_eq!(parse_int_lenient("+12"), Some(12));
    }

    #[test]
    fn test_parse_int_lenient_stops_at_non_digit() {
        assert_eq!(parse_int_lenient("45.9"), Some(45));
        assert_eq!(parse_int_lenient("12abc"), Some(12));
        assert_eq!(parse_int_lenient("1e5"), Some(1));
    }

    #[test]
    fn test_parse_int_lenient_hex_prefix() {
        assert_eq!(parse_int_lenient("0x1A"), Some(26));
        assert_eq!(parse_int_lenient("0x"), None);
    }

    #[test]
    fn test_parse_int_lenient_rejects_non_numeric() {
        assert_eq!(parse_int_lenient(""), None);
        assert_eq!(parse_int_lenient("abc"), None);
        assert_eq!(parse_int_lenient("-"), None);
    }

    #[test]
    fn test_int_or_zero() {
        assert_eq!(int_or_zero(Some("30")), 30);
        assert_eq!(int_or_zero(Some("n/a")), 0);
        assert_eq!(int_or_zero(None), 0);
    }

    #[test]
    fn test_format_fixed_1() {
        assert_eq!(format_fixed_1(35.0), "35.0");
        assert_eq!(format_fixed_1(37.5), "37.5");
        assert_eq!(format_fixed_1(10.0 / 3.0), "3.3");
        assert_eq!(format_fixed_1(24.96), "25.0");
    }

    #[test]
    fn test_format_fixed_1_ties_round_away_from_zero() {
        assert_eq!(format_fixed_1(0.25), "0.3");
        assert_eq!(format_fixed_1(30.75), "30.8");
        assert_eq!(format_fixed_1(-0.25), "-0.3");
    }
}
