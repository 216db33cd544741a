//! Status model and evaluation result.

/// Status of the wrapper or of a single checklist item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    /// No value has been evaluated yet, or the value was empty.
    #[default]
    Untested,
    Passing,
    Failing,
}

impl Status {
    pub fn from_pass(passed: bool) -> Self {
        if passed { Status::Passing } else { Status::Failing }
    }
}

/// Result of one evaluation pass.
///
/// Unlike a resolve/reject pair, every evaluation settles: an empty value
/// yields `Status::Untested` with the untested message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// Aggregate status.
    pub status: Status,
    /// Configured message for `status`.
    pub message: String,
    /// Per-rule status, indexed like the rule list.
    pub rules: Vec<Status>,
}

impl Evaluation {
    pub fn is_passing(&self) -> bool {
        self.status == Status::Passing
    }

    pub fn is_failing(&self) -> bool {
        self.status == Status::Failing
    }

    /// Two-state view of the evaluation.
    ///
    /// - `Some(Ok(message))` when every rule passed
    /// - `Some(Err(message))` when at least one rule failed
    /// - `None` for an untested (empty) value
    pub fn settle(self) -> Option<Result<String, String>> {
        match self.status {
            Status::Untested => None,
            Status::Passing => Some(Ok(self.message)),
            Status::Failing => Some(Err(self.message)),
        }
    }
}
