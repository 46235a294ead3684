//! Value label text.

/// The zero-padding pattern for `min_digits`, e.g. `2` gives `"00"`.
pub fn digits_format(min_digits: usize) -> String {
    "0".repeat(min_digits)
}

/// Formats a bar value for its label.
///
/// Fractional values print in their shortest decimal form (`7.25`, `5`).
/// Whole-number values are rounded half to even and zero padded to `min_digits`, with the
/// sign in front of the padding (`-007`).
pub fn format_value(value: f32, whole_numbers: bool, min_digits: usize) -> String {
    if !whole_numbers || !value.is_finite() {
        return format!("{value}");
    }

    let rounded = value.round_ties_even() as i64;
    let digits = rounded.unsigned_abs();
    if rounded < 0 {
        format!("-{digits:0min_digits$}")
    } else {
        format!("{digits:0min_digits$}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_whole_numbers() {
        assert_eq!(format_value(7.0, true, 3), "007");
        assert_eq!(format_value(7.0, true, 0), "7");
        assert_eq!(format_value(1234.0, true, 2), "1234");
        assert_eq!(format_value(-7.0, true, 3), "-007");
        assert_eq!(format_value(6.6, true, 2), "07");
        assert_eq!(format_value(2.5, true, 2), "02");
        assert_eq!(format_value(3.5, true, 2), "04");
    }

    #[test]
    fn fractional_values_are_unpadded() {
        assert_eq!(format_value(7.25, false, 3), "7.25");
        assert_eq!(format_value(5.0, false, 3), "5");
        assert_eq!(format_value(0.1, false, 0), "0.1");
    }

    #[test]
    fn digits_pattern() {
        assert_eq!(digits_format(0), "");
        assert_eq!(digits_format(2), "00");
        assert_eq!(digits_format(5), "00000");
    }
}
