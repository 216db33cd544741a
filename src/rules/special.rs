//! Special character rule.

pub(super) const LABEL: &str = "Contain at least 1 special character";

/// Characters accepted by the special character rule.
pub const SPECIAL_CHARACTERS: &str = "~`!@#$%^&*+=-[]\\';,/{}|\":<>?";

/// Returns `true` if `value` contains one of [`SPECIAL_CHARACTERS`].
pub fn has_special(value: &str) -> bool {
    value.chars().any(|c| SPECIAL_CHARACTERS.contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_missing() {
        assert!(!has_special("NoSpecial123"));
    }

    #[test]
    fn test_special_each_character() {
        for c in SPECIAL_CHARACTERS.chars() {
            assert!(has_special(&format!("abc{}", c)), "expected {:?} to count", c);
        }
    }

    #[test]
    fn test_special_excludes_other_punctuation() {
        // '.', '_', '(' and ')' are not in the set
        assert!(!has_special("a.b_c(d)"));
        assert!(!has_special("with space"));
    }
}
