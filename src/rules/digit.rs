//! Digit rule.

pub(super) const LABEL: &str = "Contain at least 1 numerical character";

/// Returns `true` if `value` contains an ASCII digit.
pub fn has_digit(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_missing() {
        assert!(!has_digit("NoNumbers!"));
    }

    #[test]
    fn test_digit_present() {
        assert!(has_digit("abc7"));
    }
}
