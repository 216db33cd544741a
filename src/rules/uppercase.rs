//! Uppercase rule.

pub(super) const LABEL: &str = "Contain at least 1 uppercase character";

/// Returns `true` if `value` contains an ASCII uppercase letter.
pub fn has_uppercase(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_uppercase())
}
