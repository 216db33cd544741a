//! Checklist rules
//!
//! Each rule is a labelled predicate over the candidate password. The
//! default set checks length, uppercase, digits and special characters.

mod digit;
mod length;
mod special;
mod uppercase;

use std::fmt;
use std::rc::Rc;

pub use digit::has_digit;
pub use length::{MIN_LENGTH, has_min_length};
pub use special::{SPECIAL_CHARACTERS, has_special};
pub use uppercase::has_uppercase;

/// Predicate signature shared by all rules.
pub type Predicate = dyn Fn(&str) -> bool;

/// A labelled predicate rendered as one checklist item.
#[derive(Clone)]
pub struct Rule {
    label: String,
    test: Rc<Predicate>,
}

impl Rule {
    pub fn new<F>(label: impl Into<String>, test: F) -> Self
    where
        F: Fn(&str) -> bool + 'static,
    {
        Self {
            label: label.into(),
            test: Rc::new(test),
        }
    }

    /// Requires at least `min` characters.
    pub fn min_length(min: usize) -> Self {
        Self::new(length::label(min), move |value| has_min_length(value, min))
    }

    /// Requires at least one ASCII uppercase letter.
    pub fn uppercase() -> Self {
        Self::new(uppercase::LABEL, has_uppercase)
    }

    /// Requires at least one ASCII digit.
    pub fn digit() -> Self {
        Self::new(digit::LABEL, has_digit)
    }

    /// Requires at least one character from [`SPECIAL_CHARACTERS`].
    pub fn special() -> Self {
        Self::new(special::LABEL, has_special)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn test(&self, value: &str) -> bool {
        (self.test)(value)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").field("label", &self.label).finish_non_exhaustive()
    }
}

/// The four rules used when none are configured.
pub fn default_rules() -> Vec<Rule> {
    vec![
        Rule::min_length(MIN_LENGTH),
        Rule::uppercase(),
        Rule::digit(),
        Rule::special(),
    ]
}
