//! Host seam
//!
//! The checker never touches a document directly. The host hands it a
//! [`Mount`] for the container and, optionally, an [`InputElement`], and
//! forwards input events with [`StrengthChecker::dispatch`](crate::StrengthChecker::dispatch).
//!
//! Container exclusivity is the caller's responsibility: nothing prevents two
//! checkers from rendering into the same mount.

use std::fmt::Write;

use secrecy::SecretString;

/// Element whose status classes are toggled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// The container itself.
    Wrapper,
    /// The checklist item at this rule index.
    Item(usize),
}

/// Looks up mount points by selector.
pub trait Document {
    type Mount: Mount;

    fn query_selector(&self, selector: &str) -> Option<Self::Mount>;
}

/// Container the checklist is rendered into.
pub trait Mount {
    /// `true` if the container has no content.
    fn is_empty(&self) -> bool;

    /// Inserts the checklist markup at the start of the container.
    fn render(&mut self, view: &ChecklistView);

    /// Adds `add` to `target` and removes every class in `remove`.
    fn set_status_class(&mut self, target: Target, add: &str, remove: &[&str]);

    /// Removes all content from the container. Wrapper classes are kept.
    fn clear(&mut self);
}

/// Input whose value is evaluated on events.
pub trait InputElement {
    fn value(&self) -> SecretString;

    fn add_listener(&mut self, event: &str);

    fn remove_listener(&mut self, event: &str);
}

/// A rendered checklist entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    pub label: String,
    pub classes: Vec<String>,
}

/// Presentation-neutral description of the checklist markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistView {
    pub heading_class: String,
    pub heading_text: String,
    pub list_class: String,
    pub items: Vec<ItemView>,
}

impl ChecklistView {
    /// Serialises the view to HTML for hosts that inject markup.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        let _ = write!(
            out,
            "<h3 class=\"{}\">{}</h3><ul class=\"{}\">",
            escape(&self.heading_class),
            escape(&self.heading_text),
            escape(&self.list_class),
        );
        for item in &self.items {
            let _ = write!(
                out,
                "<li class=\"{}\">{}</li>",
                escape(&item.classes.join(" ")),
                escape(&item.label),
            );
        }
        out.push_str("</ul>");
        out
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> ChecklistView {
        ChecklistView {
            heading_class: "h".to_string(),
            heading_text: "Password must:".to_string(),
            list_class: "l".to_string(),
            items: vec![ItemView {
                label: "Use <b> & \"quotes\"".to_string(),
                classes: vec!["item".to_string(), "is-untested".to_string()],
            }],
        }
    }

    #[test]
    fn test_to_html_structure() {
        assert_eq!(
            view().to_html(),
            "<h3 class=\"h\">Password must:</h3><ul class=\"l\">\
             <li class=\"item is-untested\">Use &lt;b&gt; &amp; &quot;quotes&quot;</li></ul>"
        );
    }

    #[test]
    fn test_to_html_empty_list() {
        let mut v = view();
        v.items.clear();
        assert!(v.to_html().ends_with("<ul class=\"l\"></ul>"));
    }
}
