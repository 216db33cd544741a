//! In-memory host implementation.
//!
//! Handles are cheap clones over shared state, so the host keeps one handle
//! for inspection while the checker owns another.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use secrecy::SecretString;

use crate::dom::{ChecklistView, Document, InputElement, Mount, Target};

/// Selector-keyed collection of mounts.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    mounts: HashMap<String, MemoryMount>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `mount` under `selector`, returning a handle to it.
    pub fn insert(&mut self, selector: impl Into<String>, mount: MemoryMount) -> MemoryMount {
        self.mounts.insert(selector.into(), mount.clone());
        mount
    }
}

impl Document for MemoryDocument {
    type Mount = MemoryMount;

    fn query_selector(&self, selector: &str) -> Option<MemoryMount> {
        self.mounts.get(selector).cloned()
    }
}

#[derive(Debug, Default)]
struct MountState {
    classes: Vec<String>,
    content: Option<String>,
    view: Option<ChecklistView>,
}

/// In-memory container.
#[derive(Debug, Clone, Default)]
pub struct MemoryMount {
    state: Rc<RefCell<MountState>>,
}

impl MemoryMount {
    pub fn new() -> Self {
        Self::default()
    }

    /// A container that already holds foreign markup.
    pub fn with_content(html: impl Into<String>) -> Self {
        let mount = Self::default();
        mount.state.borrow_mut().content = Some(html.into());
        mount
    }

    pub fn wrapper_classes(&self) -> Vec<String> {
        self.state.borrow().classes.clone()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.state.borrow().classes.iter().any(|c| c == class)
    }

    pub fn item_count(&self) -> usize {
        self.state.borrow().view.as_ref().map(|v| v.items.len()).unwrap_or(0)
    }

    pub fn item_labels(&self) -> Vec<String> {
        self.state
            .borrow()
            .view
            .as_ref()
            .map(|v| v.items.iter().map(|i| i.label.clone()).collect())
            .unwrap_or_default()
    }

    /// Classes of item `index`, or `None` if it does not exist.
    pub fn item_classes(&self, index: usize) -> Option<Vec<String>> {
        self.state
            .borrow()
            .view
            .as_ref()
            .and_then(|v| v.items.get(index))
            .map(|i| i.classes.clone())
    }

    pub fn item_has_class(&self, index: usize, class: &str) -> bool {
        self.item_classes(index)
            .is_some_and(|classes| classes.iter().any(|c| c == class))
    }

    /// Current markup of the container.
    pub fn html(&self) -> String {
        let state = self.state.borrow();
        let mut html = state.view.as_ref().map(ChecklistView::to_html).unwrap_or_default();
        if let Some(content) = &state.content {
            html.push_str(content);
        }
        html
    }
}

fn toggle(classes: &mut Vec<String>, add: &str, remove: &[&str]) {
    classes.retain(|c| !remove.contains(&c.as_str()));
    if !classes.iter().any(|c| c == add) {
        classes.push(add.to_string());
    }
}

impl Mount for MemoryMount {
    fn is_empty(&self) -> bool {
        let state = self.state.borrow();
        state.view.is_none() && state.content.as_deref().is_none_or(str::is_empty)
    }

    fn render(&mut self, view: &ChecklistView) {
        self.state.borrow_mut().view = Some(view.clone());
    }

    fn set_status_class(&mut self, target: Target, add: &str, remove: &[&str]) {
        let mut state = self.state.borrow_mut();
        match target {
            Target::Wrapper => toggle(&mut state.classes, add, remove),
            Target::Item(index) => {
                if let Some(item) = state.view.as_mut().and_then(|v| v.items.get_mut(index)) {
                    toggle(&mut item.classes, add, remove);
                }
            }
        }
    }

    fn clear(&mut self) {
        let mut state = self.state.borrow_mut();
        state.view = None;
        state.content = None;
    }
}

#[derive(Debug, Default)]
struct InputState {
    value: String,
    listeners: Vec<String>,
}

/// In-memory text input.
#[derive(Debug, Clone, Default)]
pub struct MemoryInput {
    state: Rc<RefCell<InputState>>,
}

impl MemoryInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_value(&self, value: impl Into<String>) {
        self.state.borrow_mut().value = value.into();
    }

    pub fn listeners(&self) -> Vec<String> {
        self.state.borrow().listeners.clone()
    }

    pub fn has_listener(&self, event: &str) -> bool {
        self.state.borrow().listeners.iter().any(|l| l == event)
    }
}

impl InputElement for MemoryInput {
    fn value(&self) -> SecretString {
        SecretString::new(self.state.borrow().value.clone().into())
    }

    fn add_listener(&mut self, event: &str) {
        self.state.borrow_mut().listeners.push(event.to_string());
    }

    fn remove_listener(&mut self, event: &str) {
        let mut state = self.state.borrow_mut();
        if let Some(pos) = state.listeners.iter().position(|l| l == event) {
            state.listeners.remove(pos);
        }
    }
}
