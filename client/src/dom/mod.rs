//! Headless element model mirroring the page's interactive elements.
//!
//! SYSTEM CONTEXT
//! ==============
//! Controls never touch browser nodes directly. They mutate this model
//! (classes, text, focus) and the Leptos view renders it, so every behavior
//! can be exercised natively in tests. Input values flow the other way: the
//! view writes them here on `input` events before dispatching handlers.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

mod class_list;
mod event;

pub use class_list::ClassList;
pub use event::{DomEvent, parse_event_list};

use std::collections::HashMap;

use crate::error::PageError;

/// Element tag, limited to what the page layout uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tag {
    Div,
    Span,
    Anchor,
    Button,
    Input,
    Select,
    Textarea,
}

impl Tag {
    /// `true` for elements carrying a user-editable value.
    pub fn is_form_control(self) -> bool {
        matches!(self, Self::Input | Self::Select | Self::Textarea)
    }
}

/// One element of the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    pub id: String,
    pub tag: Tag,
    pub parent: Option<String>,
    pub classes: ClassList,
    pub value: String,
    pub text: String,
}

impl Element {
    pub fn new(id: impl Into<String>, tag: Tag) -> Self {
        Self {
            id: id.into(),
            tag,
            parent: None,
            classes: ClassList::default(),
            value: String::new(),
            text: String::new(),
        }
    }

    #[must_use]
    pub fn child_of(mut self, parent: &str) -> Self {
        self.parent = Some(parent.to_owned());
        self
    }

    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.add(class);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        text.clone_into(&mut self.text);
        self
    }
}

/// Element store keyed by id, with insertion order as document order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Document {
    elements: HashMap<String, Element>,
    order: Vec<String>,
    focused: Option<String>,
    focus_seq: u64,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an element. Replacing keeps its document position.
    pub fn insert(&mut self, element: Element) {
        if !self.elements.contains_key(&element.id) {
            self.order.push(element.id.clone());
        }
        self.elements.insert(element.id.clone(), element);
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.get_mut(id)
    }

    /// Like `get`, but a missing element is an error.
    ///
    /// # Errors
    ///
    /// Returns `PageError::MissingElement` when `id` is not in the document.
    pub fn require(&self, id: &str) -> Result<&Element, PageError> {
        self.get(id).ok_or_else(|| PageError::MissingElement(id.to_owned()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    /// `true` when `id` sits anywhere below `ancestor`.
    pub fn is_descendant(&self, id: &str, ancestor: &str) -> bool {
        let mut cursor = self.get(id).and_then(|e| e.parent.as_deref());
        while let Some(parent) = cursor {
            if parent == ancestor {
                return true;
            }
            cursor = self.get(parent).and_then(|e| e.parent.as_deref());
        }
        false
    }

    /// First descendant of `ancestor` (in document order) matching `pred`.
    pub fn find_descendant(&self, ancestor: &str, pred: impl Fn(&Element) -> bool) -> Option<&Element> {
        self.order
            .iter()
            .filter_map(|id| self.elements.get(id))
            .find(|e| self.is_descendant(&e.id, ancestor) && pred(*e))
    }

    /// Space-joined class attribute for rendering; empty for unknown ids.
    pub fn class_attr(&self, id: &str) -> String {
        self.get(id).map(|e| e.classes.to_string()).unwrap_or_default()
    }

    pub fn text(&self, id: &str) -> &str {
        self.get(id).map_or("", |e| e.text.as_str())
    }

    pub fn value(&self, id: &str) -> &str {
        self.get(id).map_or("", |e| e.value.as_str())
    }

    /// Set an element's value. Unknown ids are ignored.
    pub fn set_value(&mut self, id: &str, value: &str) {
        if let Some(element) = self.get_mut(id) {
            value.clone_into(&mut element.value);
        }
    }

    pub fn set_text(&mut self, id: &str, text: &str) {
        if let Some(element) = self.get_mut(id) {
            text.clone_into(&mut element.text);
        }
    }

    pub fn add_class(&mut self, id: &str, class: &str) {
        if let Some(element) = self.get_mut(id) {
            element.classes.add(class);
        }
    }

    pub fn remove_class(&mut self, id: &str, class: &str) {
        if let Some(element) = self.get_mut(id) {
            element.classes.remove(class);
        }
    }

    pub fn toggle_class(&mut self, id: &str, class: &str, force: bool) {
        if let Some(element) = self.get_mut(id) {
            element.classes.toggle(class, force);
        }
    }

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.get(id).is_some_and(|e| e.classes.contains(class))
    }

    /// Move focus to `id`. Unknown ids leave focus unchanged.
    ///
    /// Every call bumps `focus_seq`, so refocusing the same element is still
    /// observable by the view.
    pub fn focus(&mut self, id: &str) {
        if self.contains(id) {
            self.focused = Some(id.to_owned());
            self.focus_seq += 1;
        }
    }

    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    pub fn focus_seq(&self) -> u64 {
        self.focus_seq
    }
}
