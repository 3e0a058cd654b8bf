//! Button with a normal and a busy ("working") presentation.

#[cfg(test)]
#[path = "busy_button_test.rs"]
mod busy_button_test;

use crate::dom::Document;
use crate::error::PageError;

pub const DEFAULT_BUSY_TEXT: &str = "Waiting...";
pub const DEFAULT_BUSY_CLASS: &str = "button--active";

/// Label and optional class for one presentation mode.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ButtonMode {
    pub text: Option<String>,
    pub class: Option<String>,
}

impl ButtonMode {
    pub fn text(text: &str) -> Self {
        Self { text: Some(text.to_owned()), class: None }
    }
}

/// Busy-state wrapper around a clickable element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BusyButton {
    element: String,
    normal_text: String,
    normal_class: Option<String>,
    busy_text: String,
    busy_class: Option<String>,
    busy: bool,
}

impl BusyButton {
    /// Bind to `element`. Unset normal text falls back to the element's current
    /// label; unset busy text/class fall back to `"Waiting..."`/`button--active`.
    ///
    /// # Errors
    ///
    /// Returns `PageError::MissingElement` when `element` is not in the document.
    pub fn attach(doc: &Document, element: &str, normal: ButtonMode, busy: ButtonMode) -> Result<Self, PageError> {
        let current = doc.require(element)?;
        Ok(Self {
            element: element.to_owned(),
            normal_text: normal.text.unwrap_or_else(|| current.text.clone()),
            normal_class: normal.class.filter(|c| !c.is_empty()),
            busy_text: busy.text.unwrap_or_else(|| DEFAULT_BUSY_TEXT.to_owned()),
            busy_class: Some(busy.class.unwrap_or_else(|| DEFAULT_BUSY_CLASS.to_owned())).filter(|c| !c.is_empty()),
            busy: false,
        })
    }

    pub fn element_id(&self) -> &str {
        &self.element
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Switch presentation. Each mode's class is only touched if that mode has one.
    pub fn set_busy(&mut self, doc: &mut Document, busy: bool) {
        self.busy = busy;

        if let Some(class) = &self.busy_class {
            doc.toggle_class(&self.element, class, busy);
        }
        if let Some(class) = &self.normal_class {
            doc.toggle_class(&self.element, class, !busy);
        }

        let label = if busy { &self.busy_text } else { &self.normal_text };
        doc.set_text(&self.element, label);
    }
}
