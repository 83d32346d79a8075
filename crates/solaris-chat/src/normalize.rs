//! Display normalization for raw catalog values.

/// Shown in place of a missing or empty value.
pub const PLACEHOLDER: &str = "Не найдено";

/// Convert a raw stored value into display form.
///
/// Absent, empty or whitespace-only values become [`PLACEHOLDER`]. Otherwise
/// the value is trimmed, decimal commas become points, embedded spaces are
/// removed and the `⋅` multiplication dot becomes `×`. Units are untouched.
pub fn normalize(raw: Option<&str>) -> String {
    let trimmed = match raw.map(str::trim) {
        Some(value) if !value.is_empty() => value,
        _ => return PLACEHOLDER.to_string(),
    };

    trimmed
        .chars()
        .filter(|c| *c != ' ')
        .map(|c| match c {
            ',' => '.',
            '\u{22C5}' => '×',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_scientific_notation() {
        assert_eq!(normalize(Some("1,5⋅10")), "1.5×10");
        assert_eq!(normalize(Some("5,9726⋅10^24")), "5.9726×10^24");
    }

    #[test]
    fn test_normalize_absent_or_blank() {
        assert_eq!(normalize(None), PLACEHOLDER);
        assert_eq!(normalize(Some("")), PLACEHOLDER);
        assert_eq!(normalize(Some("   ")), PLACEHOLDER);
    }

    #[test]
    fn test_normalize_removes_embedded_spaces() {
        assert_eq!(normalize(Some("  160 000 ")), "160000");
        assert_eq!(normalize(Some("1 132")), "1132");
    }

    #[test]
    fn test_normalize_zero_is_a_value() {
        assert_eq!(normalize(Some("0")), "0");
    }

    #[test]
    fn test_normalize_plain_text_untouched() {
        assert_eq!(normalize(Some("газовый гигант")), "газовыйгигант");
        assert_eq!(normalize(Some("95")), "95");
    }

    #[test]
    fn test_normalize_leaves_other_multiplication_signs() {
        assert_eq!(normalize(Some("2×10^3")), "2×10^3");
        assert_eq!(normalize(Some("2·10^3")), "2·10^3");
    }
}
