//! Checker settings.
//!
//! Every field has a default; override only what you need with struct
//! update syntax or the builder methods:
//!
//! ```rust
//! use pwd_checklist::{Rule, Settings};
//!
//! let settings = Settings {
//!     heading_text: "Your password needs:".to_string(),
//!     log_errors: true,
//!     ..Default::default()
//! }
//! .with_rules(vec![Rule::min_length(12), Rule::digit()])
//! .on_passing(|msg| println!("{msg}"));
//! ```

use std::fmt;

use crate::rules::{Rule, default_rules};
use crate::status::Status;

/// Callback invoked with the configured status message.
pub type Callback = Box<dyn FnMut(&str)>;

/// The three mutually exclusive status class names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusClasses {
    pub untested: String,
    pub passing: String,
    pub failing: String,
}

impl StatusClasses {
    pub fn get(&self, status: Status) -> &str {
        match status {
            Status::Untested => &self.untested,
            Status::Passing => &self.passing,
            Status::Failing => &self.failing,
        }
    }

    /// Class names of the two statuses other than `status`.
    pub fn others(&self, status: Status) -> [&str; 2] {
        match status {
            Status::Untested => [&self.passing, &self.failing],
            Status::Passing => [&self.untested, &self.failing],
            Status::Failing => [&self.untested, &self.passing],
        }
    }
}

impl Default for StatusClasses {
    fn default() -> Self {
        Self {
            untested: "is-untested".to_string(),
            passing: "is-passing".to_string(),
            failing: "is-failing".to_string(),
        }
    }
}

/// Messages passed to callbacks and carried by each [`Evaluation`](crate::Evaluation).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessages {
    pub untested: String,
    pub passing: String,
    pub failing: String,
}

impl StatusMessages {
    pub fn get(&self, status: Status) -> &str {
        match status {
            Status::Untested => &self.untested,
            Status::Passing => &self.passing,
            Status::Failing => &self.failing,
        }
    }
}

impl Default for StatusMessages {
    fn default() -> Self {
        Self {
            untested: "untested".to_string(),
            passing: "passing".to_string(),
            failing: "failing".to_string(),
        }
    }
}

/// Optional hooks fired synchronously whenever a status is reached.
#[derive(Default)]
pub struct Callbacks {
    pub on_untested: Option<Callback>,
    pub on_failing: Option<Callback>,
    pub on_passing: Option<Callback>,
}

impl Callbacks {
    pub(crate) fn fire(&mut self, status: Status, msg: &str) {
        let callback = match status {
            Status::Untested => &mut self.on_untested,
            Status::Passing => &mut self.on_passing,
            Status::Failing => &mut self.on_failing,
        };
        if let Some(callback) = callback {
            callback(msg);
        }
    }
}

impl fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("on_untested", &self.on_untested.is_some())
            .field("on_failing", &self.on_failing.is_some())
            .field("on_passing", &self.on_passing.is_some())
            .finish()
    }
}

/// Configuration of a [`StrengthChecker`](crate::StrengthChecker).
#[derive(Debug)]
pub struct Settings {
    /// Selector used by [`StrengthChecker::attach`](crate::StrengthChecker::attach).
    pub wrapper_selector: String,
    pub heading_class: String,
    pub heading_text: String,
    pub list_class: String,
    pub list_item_display_class: String,
    /// Marker class identifying generated checklist items.
    pub list_item_js_class: String,
    pub classes: StatusClasses,
    /// Input event that triggers re-evaluation.
    pub input_event: String,
    pub messages: StatusMessages,
    /// Enables diagnostics through [`log_error`](crate::log_error).
    pub log_errors: bool,
    pub callbacks: Callbacks,
    /// Ordered rule list. Item `i` of the checklist reflects `rules[i]`.
    pub rules: Vec<Rule>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            wrapper_selector: ".js-pwstrength".to_string(),
            heading_class: "password-strength__heading".to_string(),
            heading_text: "Password must:".to_string(),
            list_class: "password-strength__list".to_string(),
            list_item_display_class: "password-strength__list-item".to_string(),
            list_item_js_class: "js-pwstrength-list-item".to_string(),
            classes: StatusClasses::default(),
            input_event: "keyup".to_string(),
            messages: StatusMessages::default(),
            log_errors: false,
            callbacks: Callbacks::default(),
            rules: default_rules(),
        }
    }
}

impl Settings {
    pub fn with_rules(mut self, rules: Vec<Rule>) -> Self {
        self.rules = rules;
        self
    }

    pub fn on_untested(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.callbacks.on_untested = Some(Box::new(callback));
        self
    }

    pub fn on_failing(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.callbacks.on_failing = Some(Box::new(callback));
        self
    }

    pub fn on_passing(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.callbacks.on_passing = Some(Box::new(callback));
        self
    }

    pub(crate) fn rules_are_set(&self) -> bool {
        !self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.wrapper_selector, ".js-pwstrength");
        assert_eq!(settings.input_event, "keyup");
        assert_eq!(settings.classes.get(Status::Passing), "is-passing");
        assert_eq!(settings.messages.get(Status::Failing), "failing");
        assert!(!settings.log_errors);
        assert_eq!(settings.rules.len(), 4);
    }

    #[test]
    fn test_struct_update_overrides() {
        let settings = Settings {
            input_event: "input".to_string(),
            ..Default::default()
        };
        assert_eq!(settings.input_event, "input");
        assert_eq!(settings.heading_text, "Password must:");
    }

    #[test]
    fn test_other_classes() {
        let classes = StatusClasses::default();
        assert_eq!(classes.others(Status::Untested), ["is-passing", "is-failing"]);
        assert_eq!(classes.others(Status::Failing), ["is-untested", "is-passing"]);
    }

    #[test]
    fn test_fire_only_matching_callback() {
        let fired = Rc::new(RefCell::new(Vec::new()));
        let (a, b) = (fired.clone(), fired.clone());
        let mut settings = Settings::default()
            .on_passing(move |m| a.borrow_mut().push(format!("pass:{m}")))
            .on_failing(move |m| b.borrow_mut().push(format!("fail:{m}")));

        settings.callbacks.fire(Status::Failing, "failing");
        settings.callbacks.fire(Status::Untested, "untested");

        assert_eq!(*fired.borrow(), vec!["fail:failing".to_string()]);
    }

    #[test]
    fn test_empty_rules_not_set() {
        assert!(!Settings::default().with_rules(Vec::new()).rules_are_set());
    }
}
