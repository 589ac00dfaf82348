/// Formats a byte count with dot-separated thousands, as printed by the
/// request log.
///
/// ```text
/// format_number(1234567) == "1.234.567"
/// ```
pub fn format_number(n: usize) -> String {
    let digits = n.to_string();
    let lead = match digits.len() % 3 {
        0 => 3,
        rem => rem,
    };
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    result.push_str(&digits[..lead]);
    for group in digits.as_bytes()[lead..].chunks(3) {
        result.push('.');
        result.extend(group.iter().map(|&b| char::from(b)));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1.000");
        assert_eq!(format_number(48213), "48.213");
        assert_eq!(format_number(1234567), "1.234.567");
    }

    #[test]
    fn test_format_number_group_boundaries() {
        assert_eq!(format_number(7), "7");
        assert_eq!(format_number(10), "10");
        assert_eq!(format_number(100_000), "100.000");
        assert_eq!(format_number(999_999), "999.999");
        assert_eq!(format_number(1_000_000), "1.000.000");
        assert_eq!(format_number(12_345_678), "12.345.678");
    }
}
