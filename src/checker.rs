//! Strength checker - renders the checklist and projects rule status onto it.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::config::Settings;
use crate::diagnostics::{Severity, errors, log_error};
use crate::dom::{ChecklistView, Document, InputElement, ItemView, Mount, Target};
use crate::status::{Evaluation, Status};

#[cfg(feature = "async")]
use crate::deferred::Deferred;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckerError {
    #[error("No rules set")]
    NoRulesSet,
    #[error("Container not found")]
    ContainerMissing,
    #[error("Container is not empty")]
    ContainerNotEmpty,
    #[error("Checker is not mounted")]
    NotMounted,
    #[error("Deferred result was already taken")]
    AlreadyTaken,
}

#[derive(Debug)]
enum Phase {
    Inert(CheckerError),
    Mounted,
    Destroyed,
}

/// Password checklist bound to one container.
///
/// Construction never fails. If the container is missing or already has
/// content, or no rules are configured, the checker stays inert: nothing is
/// rendered, no listener is bound and [`test`](Self::test) returns
/// [`CheckerError::NotMounted`].
pub struct StrengthChecker<M: Mount> {
    settings: Settings,
    mount: Option<M>,
    input: Option<Box<dyn InputElement>>,
    bound: bool,
    phase: Phase,
    wrapper: Status,
    items: Vec<Status>,
}

impl<M: Mount> StrengthChecker<M> {
    /// Creates a checker rendering into `container`.
    ///
    /// # Arguments
    /// * `settings` - Configuration, see [`Settings::default`]
    /// * `container` - Mount point; must be present and empty
    /// * `input` - Optional input whose value is evaluated on `settings.input_event`
    pub fn new(
        settings: Settings,
        container: Option<M>,
        input: Option<Box<dyn InputElement>>,
    ) -> Self {
        let mut checker = Self {
            settings,
            mount: None,
            input: None,
            bound: false,
            phase: Phase::Inert(CheckerError::ContainerMissing),
            wrapper: Status::Untested,
            items: Vec::new(),
        };

        let Some(mount) = container else {
            return checker;
        };
        if !mount.is_empty() {
            checker.phase = Phase::Inert(CheckerError::ContainerNotEmpty);
            return checker;
        }
        if !checker.settings.rules_are_set() {
            log_error(checker.settings.log_errors, errors::NO_RULES_SET, Severity::Error);
            checker.phase = Phase::Inert(CheckerError::NoRulesSet);
            return checker;
        }

        checker.mount = Some(mount);
        checker.render();
        checker.phase = Phase::Mounted;

        if let Some(input) = input {
            checker.input = Some(input);
            checker.bind_events();
        }

        checker
    }

    /// Creates a checker on the container matching `settings.wrapper_selector`.
    pub fn attach<D>(settings: Settings, document: &D, input: Option<Box<dyn InputElement>>) -> Self
    where
        D: Document<Mount = M>,
    {
        let container = document.query_selector(&settings.wrapper_selector);
        Self::new(settings, container, input)
    }

    fn render(&mut self) {
        let s = &self.settings;
        let view = ChecklistView {
            heading_class: s.heading_class.clone(),
            heading_text: s.heading_text.clone(),
            list_class: s.list_class.clone(),
            items: s
                .rules
                .iter()
                .map(|rule| ItemView {
                    label: rule.label().to_string(),
                    classes: vec![
                        s.list_item_display_class.clone(),
                        s.list_item_js_class.clone(),
                        s.classes.untested.clone(),
                    ],
                })
                .collect(),
        };

        if let Some(mount) = self.mount.as_mut() {
            mount.render(&view);
        }
        self.items = vec![Status::Untested; self.settings.rules.len()];
        self.set_status(Target::Wrapper, Status::Untested);

        #[cfg(feature = "tracing")]
        tracing::debug!("Checklist rendered with {} rules", self.items.len());
    }

    fn bind_events(&mut self) {
        if let Some(input) = self.input.as_mut() {
            input.add_listener(&self.settings.input_event);
            self.bound = true;

            #[cfg(feature = "tracing")]
            tracing::debug!("Listening for '{}' events", self.settings.input_event);
        }
    }

    /// Updates the status model and its class projection on the container.
    fn set_status(&mut self, target: Target, status: Status) {
        match target {
            Target::Wrapper => self.wrapper = status,
            Target::Item(index) => self.items[index] = status,
        }
        if let Some(mount) = self.mount.as_mut() {
            let classes = &self.settings.classes;
            mount.set_status_class(target, classes.get(status), &classes.others(status));
        }
    }

    /// Evaluates `value` and updates the wrapper status.
    ///
    /// Same as [`test_with`](Self::test_with) with `update_wrapper = true`.
    pub fn test(&mut self, value: Option<&SecretString>) -> Result<Evaluation, CheckerError> {
        self.test_with(value, true)
    }

    /// Evaluates every rule against `value`.
    ///
    /// An empty or absent value resets every item to untested. Otherwise each
    /// item becomes passing or failing according to its rule. The matching
    /// callback fires with the configured message before returning. When
    /// `update_wrapper` is `false` the wrapper keeps its previous status.
    ///
    /// # Errors
    /// [`CheckerError::NotMounted`] if the checker is inert or destroyed.
    pub fn test_with(
        &mut self,
        value: Option<&SecretString>,
        update_wrapper: bool,
    ) -> Result<Evaluation, CheckerError> {
        if !matches!(self.phase, Phase::Mounted) {
            return Err(CheckerError::NotMounted);
        }

        let value = value.map(|v| v.expose_secret()).filter(|v| !v.is_empty());

        let status = match value {
            None => {
                for index in 0..self.items.len() {
                    self.set_status(Target::Item(index), Status::Untested);
                }
                Status::Untested
            }
            Some(value) => {
                let results: Vec<bool> = self.settings.rules.iter().map(|r| r.test(value)).collect();
                for (index, passed) in results.iter().enumerate() {
                    self.set_status(Target::Item(index), Status::from_pass(*passed));
                }
                Status::from_pass(results.iter().all(|passed| *passed))
            }
        };

        if update_wrapper {
            self.set_status(Target::Wrapper, status);
        }

        let message = self.settings.messages.get(status).to_string();
        self.settings.callbacks.fire(status, &message);

        #[cfg(feature = "tracing")]
        tracing::debug!("Evaluation finished: {:?}", status);

        Ok(Evaluation {
            status,
            message,
            rules: self.items.clone(),
        })
    }

    /// Evaluates `value` and returns an already-settled deferred result.
    ///
    /// The result settles on every path, including an empty value.
    #[cfg(feature = "async")]
    pub fn test_deferred(&mut self, value: Option<&SecretString>, update_wrapper: bool) -> Deferred {
        Deferred::settled(self.test_with(value, update_wrapper))
    }

    /// Handles an input event forwarded by the host.
    ///
    /// Returns `None` if no input is bound or `event` is not the configured
    /// input event.
    pub fn dispatch(&mut self, event: &str) -> Option<Evaluation> {
        if !self.bound || event != self.settings.input_event {
            return None;
        }
        let value = self.input.as_ref()?.value();
        self.test(Some(&value)).ok()
    }

    /// Unbinds the input listener and clears the container.
    ///
    /// Calling it again, or on an inert checker, does nothing.
    pub fn destroy(&mut self) {
        if !matches!(self.phase, Phase::Mounted) {
            return;
        }
        if self.bound {
            if let Some(input) = self.input.as_mut() {
                input.remove_listener(&self.settings.input_event);
            }
            self.bound = false;
        }
        if let Some(mount) = self.mount.as_mut() {
            mount.clear();
        }
        self.phase = Phase::Destroyed;

        #[cfg(feature = "tracing")]
        tracing::debug!("Checklist destroyed");
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn mount(&self) -> Option<&M> {
        self.mount.as_ref()
    }

    pub fn is_mounted(&self) -> bool {
        matches!(self.phase, Phase::Mounted)
    }

    pub fn is_bound(&self) -> bool {
        self.bound
    }

    /// Why construction left the checker inert, if it did.
    pub fn inert_reason(&self) -> Option<&CheckerError> {
        match &self.phase {
            Phase::Inert(reason) => Some(reason),
            _ => None,
        }
    }

    pub fn wrapper_status(&self) -> Status {
        self.wrapper
    }

    /// Per-rule status, indexed like the rule list.
    pub fn statuses(&self) -> &[Status] {
        &self.items
    }
}
