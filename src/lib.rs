//! Password checklist widget
//!
//! Renders one checklist item per password rule into a host-provided
//! container and projects live pass/fail status onto it as the user types.
//!
//! # Features
//!
//! - `async` (default): Enables [`StrengthChecker::test_deferred`]
//! - `tracing` (default): Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_checklist::{MemoryInput, MemoryMount, Settings, Status, StrengthChecker};
//!
//! let mount = MemoryMount::new();
//! let input = MemoryInput::new();
//!
//! let settings = Settings::default().on_failing(|msg| println!("{msg}"));
//! let mut checker = StrengthChecker::new(settings, Some(mount.clone()), Some(Box::new(input.clone())));
//!
//! // Host forwards input events
//! input.set_value("password");
//! let evaluation = checker.dispatch("keyup").expect("input is bound");
//!
//! assert_eq!(evaluation.status, Status::Failing);
//! assert!(mount.item_has_class(0, "is-passing"));
//! assert!(mount.item_has_class(1, "is-failing"));
//!
//! checker.destroy();
//! ```

mod checker;
mod config;
#[cfg(feature = "async")]
mod deferred;
mod diagnostics;
mod dom;
mod memory;
mod rules;
mod status;

// Public API
pub use checker::{CheckerError, StrengthChecker};
pub use config::{Callback, Callbacks, Settings, StatusClasses, StatusMessages};
pub use diagnostics::{LOG_PREFIX, Severity, log_error};
pub use dom::{ChecklistView, Document, InputElement, ItemView, Mount, Target};
pub use memory::{MemoryDocument, MemoryInput, MemoryMount};
pub use rules::{
    MIN_LENGTH, Predicate, Rule, SPECIAL_CHARACTERS, default_rules, has_digit, has_min_length,
    has_special, has_uppercase,
};
pub use status::{Evaluation, Status};

#[cfg(feature = "async")]
pub use deferred::Deferred;
