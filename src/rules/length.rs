//! Length rule - checks password minimum length.

/// Minimum length used by the default rule set.
pub const MIN_LENGTH: usize = 8;

pub(super) fn label(min: usize) -> String {
    format!("Be at least {} characters", min)
}

/// Returns `true` if `value` has at least `min` characters.
///
/// Length is counted in Unicode scalar values (`char`s), not bytes or
/// UTF-16 code units. Characters outside the Basic Multilingual Plane count
/// once, so `"😀😀😀😀"` has length 4 here while a browser's
/// `String.length` reports 8.
pub fn has_min_length(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}
