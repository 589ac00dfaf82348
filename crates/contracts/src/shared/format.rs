/// 1-based, zero-padded card number for a zero-based index.
///
/// ```
/// use contracts::shared::format::two_digit_index;
/// assert_eq!(two_digit_index(0), "01");
/// assert_eq!(two_digit_index(11), "12");
/// ```
pub fn two_digit_index(index: usize) -> String {
    format!("{:02}", index + 1)
}

/// "Showing 5 species". The noun does not change with the count.
pub fn species_count_label(count: usize) -> String {
    format!("Showing {} species", count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_digit_index() {
        assert_eq!(two_digit_index(0), "01");
        assert_eq!(two_digit_index(8), "09");
        assert_eq!(two_digit_index(9), "10");
        assert_eq!(two_digit_index(99), "100");
    }

    #[test]
    fn test_species_count_label() {
        assert_eq!(species_count_label(0), "Showing 0 species");
        assert_eq!(species_count_label(1), "Showing 1 species");
        assert_eq!(species_count_label(23), "Showing 23 species");
    }
}
