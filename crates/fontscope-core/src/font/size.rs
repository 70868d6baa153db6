//! Point-size text parsing

/// Parse a point size the way a permissive numeric field does
///
/// Leading whitespace is skipped and the longest numeric prefix is used
/// (`"12pt"` is 12). Text without a numeric prefix yields `0.0`.
pub fn parse_point_size(text: &str) -> f32 {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }

    if digits == 0 {
        return 0.0;
    }

    // Exponent only counts when digits follow it
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    text[..end].parse::<f32>().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_point_size("12"), 12.0);
        assert_eq!(parse_point_size("10.5"), 10.5);
        assert_eq!(parse_point_size("  72"), 72.0);
        assert_eq!(parse_point_size(".5"), 0.5);
        assert_eq!(parse_point_size("8."), 8.0);
    }

    #[test]
    fn test_trailing_garbage_is_ignored() {
        assert_eq!(parse_point_size("12abc"), 12.0);
        assert_eq!(parse_point_size("14 pt"), 14.0);
        assert_eq!(parse_point_size("1e1x"), 10.0);
        assert_eq!(parse_point_size("3e"), 3.0);
    }

    #[test]
    fn test_unparsable_is_zero() {
        assert_eq!(parse_point_size(""), 0.0);
        assert_eq!(parse_point_size("abc"), 0.0);
        assert_eq!(parse_point_size("-"), 0.0);
        assert_eq!(parse_point_size("."), 0.0);
    }

    #[test]
    fn test_sign_is_kept() {
        assert_eq!(parse_point_size("-4"), -4.0);
        assert_eq!(parse_point_size("+9"), 9.0);
    }
}
