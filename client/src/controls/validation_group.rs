//! Input validation group: one form control, its container and an optional
//! message slot.
//!
//! DESIGN
//! ======
//! Validation is tri-state. `validate` computes the state and, unless messages
//! are suppressed, swaps the container/control classes and message text to
//! match. The `set_*_state` methods force a decoration regardless of the
//! computed state, which is how server-driven feedback ("invalid username or
//! password") is shown after a submit.
//!
//! The group stores element ids and receives the `Document` on every call.
//! Auto-validation is expressed as `handle_event`: the page forwards each
//! event on the control and the group decides whether it is bound.

#[cfg(test)]
#[path = "validation_group_test.rs"]
mod validation_group_test;

use serde::{Deserialize, Serialize};

use crate::dom::{Document, DomEvent, Element, parse_event_list};
use crate::error::PageError;

/// Class that marks the element holding the message text inside a container.
pub const MESSAGE_CLASS: &str = "input-group__message";

pub const CONTAINER_NO_MESSAGE: &str = "input-group--validation-off";
pub const CONTAINER_SUCCESS: &str = "input-group--success";
pub const CONTAINER_WARNING: &str = "input-group--warning";
pub const CONTAINER_ERROR: &str = "input-group--error";

pub const ELEMENT_VALID: &str = "input-group__input--valid";
pub const ELEMENT_EMPTY: &str = "input-group__input--empty";
pub const ELEMENT_INVALID: &str = "input-group__input--invalid";

const CONTAINER_STATE_CLASSES: [&str; 3] = [CONTAINER_SUCCESS, CONTAINER_ERROR, CONTAINER_WARNING];
const ELEMENT_STATE_CLASSES: [&str; 3] = [ELEMENT_EMPTY, ELEMENT_INVALID, ELEMENT_VALID];

/// Validation predicate, applied to the control element.
pub type Predicate = fn(&Element) -> bool;

/// Result of evaluating a group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationState {
    /// The control has no value.
    Empty,
    /// The control has a value the predicate rejects.
    Invalid,
    /// The control has a value and the predicate accepts it (or there is none).
    Valid,
}

impl ValidationState {
    fn container_class(self) -> &'static str {
        match self {
            Self::Empty => CONTAINER_WARNING,
            Self::Invalid => CONTAINER_ERROR,
            Self::Valid => CONTAINER_SUCCESS,
        }
    }

    fn element_class(self) -> &'static str {
        match self {
            Self::Empty => ELEMENT_EMPTY,
            Self::Invalid => ELEMENT_INVALID,
            Self::Valid => ELEMENT_VALID,
        }
    }
}

/// Which computed states `validate` decorates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DecorationPolicy {
    /// Every state gets its classes and message, including VALID.
    #[default]
    EveryState,
    /// Only EMPTY and INVALID are decorated; a VALID control is left clean.
    FailuresOnly,
}

/// Message text per state. Missing text means "no message" for that state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Messages {
    pub empty: Option<String>,
    pub invalid: Option<String>,
    pub valid: Option<String>,
}

impl Messages {
    pub fn empty(text: &str) -> Self {
        Self { empty: Some(text.to_owned()), ..Self::default() }
    }

    #[must_use]
    pub fn with_invalid(mut self, text: &str) -> Self {
        self.invalid = Some(text.to_owned());
        self
    }

    #[must_use]
    pub fn with_valid(mut self, text: &str) -> Self {
        self.valid = Some(text.to_owned());
        self
    }

    fn for_state(&self, state: ValidationState) -> Option<&str> {
        match state {
            ValidationState::Empty => self.empty.as_deref(),
            ValidationState::Invalid => self.invalid.as_deref(),
            ValidationState::Valid => self.valid.as_deref(),
        }
    }
}

/// Construction options for a `ValidationGroup`.
#[derive(Clone, Debug, Default)]
pub struct GroupOptions {
    /// Comma-separated events that trigger auto-validation, e.g. `"keyup, change"`.
    pub events: String,
    pub messages: Messages,
    pub predicate: Option<Predicate>,
    pub decoration: DecorationPolicy,
}

/// Validation wrapper around a single form control.
#[derive(Clone, Debug)]
pub struct ValidationGroup {
    container: String,
    control: String,
    message: Option<String>,
    predicate: Option<Predicate>,
    messages: Messages,
    events: Vec<DomEvent>,
    paused: bool,
    decoration: DecorationPolicy,
}

impl ValidationGroup {
    /// Bind a group to `container`, locating its control and message slot.
    ///
    /// # Errors
    ///
    /// Fails when the container is missing, holds no input/select/textarea, or
    /// `options.events` names an unknown event.
    pub fn attach(doc: &Document, container: &str, options: GroupOptions) -> Result<Self, PageError> {
        doc.require(container)?;
        let control = doc
            .find_descendant(container, |e| e.tag.is_form_control())
            .ok_or_else(|| PageError::MissingControl(container.to_owned()))?
            .id
            .clone();
        let message = doc
            .find_descendant(container, |e| e.classes.contains(MESSAGE_CLASS))
            .map(|e| e.id.clone());
        let events = parse_event_list(&options.events)?;

        Ok(Self {
            container: container.to_owned(),
            control,
            message,
            predicate: options.predicate,
            messages: options.messages,
            events,
            paused: false,
            decoration: options.decoration,
        })
    }

    pub fn container_id(&self) -> &str {
        &self.container
    }

    pub fn control_id(&self) -> &str {
        &self.control
    }

    pub fn message_id(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// `true` when the control's value is empty.
    pub fn is_empty(&self, doc: &Document) -> bool {
        doc.value(&self.control).is_empty()
    }

    /// Apply the predicate to the control; `true` when none is configured.
    pub fn is_valid(&self, doc: &Document) -> bool {
        match (self.predicate, doc.get(&self.control)) {
            (Some(predicate), Some(element)) => predicate(element),
            _ => true,
        }
    }

    /// Compute the current state without touching any decoration.
    pub fn state(&self, doc: &Document) -> ValidationState {
        if self.is_empty(doc) {
            ValidationState::Empty
        } else if !self.is_valid(doc) {
            ValidationState::Invalid
        } else {
            ValidationState::Valid
        }
    }

    /// Evaluate the control and, unless `suppress_messages`, redecorate it.
    ///
    /// Returns `true` iff the state is VALID.
    pub fn validate(&self, doc: &mut Document, suppress_messages: bool) -> bool {
        let state = self.state(doc);
        let valid = state == ValidationState::Valid;

        if !suppress_messages {
            self.clear_classes(doc);
            if !valid || self.decoration == DecorationPolicy::EveryState {
                self.apply(
                    doc,
                    Some(state.container_class()),
                    Some(state.element_class()),
                    self.messages.for_state(state),
                );
            }
        }

        valid
    }

    /// Remove all state classes. Message text is left as it was.
    pub fn clear_state(&self, doc: &mut Document) {
        self.clear_classes(doc);
    }

    /// Force the error decoration with `message`.
    pub fn set_error_state(&self, doc: &mut Document, message: &str) {
        self.clear_classes(doc);
        self.apply(doc, Some(CONTAINER_ERROR), Some(ELEMENT_INVALID), Some(message));
    }

    /// Force the success decoration with `message`.
    pub fn set_success_state(&self, doc: &mut Document, message: &str) {
        self.clear_classes(doc);
        self.apply(doc, Some(CONTAINER_SUCCESS), Some(ELEMENT_VALID), Some(message));
    }

    /// Force the warning decoration with `message`; the control gets the
    /// empty class only when it actually is empty.
    pub fn set_warning_state(&self, doc: &mut Document, message: &str) {
        self.clear_classes(doc);
        let element_class = self.is_empty(doc).then_some(ELEMENT_EMPTY);
        self.apply(doc, Some(CONTAINER_WARNING), element_class, Some(message));
    }

    /// Pause or resume auto-validation. Clears the current decoration.
    pub fn pause_validation(&mut self, doc: &mut Document, pause: bool) {
        self.clear_classes(doc);
        self.paused = pause;
    }

    /// `true` when `event` triggers auto-validation for this group.
    pub fn is_bound(&self, event: DomEvent) -> bool {
        self.events.contains(&event)
    }

    /// Auto-validation hook for an event fired on the control.
    ///
    /// Returns `Some(valid)` when the event was bound and the group is not
    /// paused, `None` when nothing ran.
    pub fn handle_event(&self, doc: &mut Document, event: DomEvent) -> Option<bool> {
        (self.is_bound(event) && !self.is_paused()).then(|| self.validate(doc, false))
    }

    fn apply(
        &self,
        doc: &mut Document,
        container_class: Option<&str>,
        element_class: Option<&str>,
        message: Option<&str>,
    ) {
        if let Some(class) = container_class {
            doc.add_class(&self.container, class);
        }
        if let Some(class) = element_class {
            doc.add_class(&self.control, class);
        }

        let message = message.filter(|m| !m.is_empty());
        if let (Some(text), Some(slot)) = (message, self.message.as_deref()) {
            doc.set_text(slot, text);
        }
        doc.toggle_class(&self.container, CONTAINER_NO_MESSAGE, message.is_none());
    }

    fn clear_classes(&self, doc: &mut Document) {
        for class in CONTAINER_STATE_CLASSES {
            doc.remove_class(&self.container, class);
        }
        for class in ELEMENT_STATE_CLASSES {
            doc.remove_class(&self.control, class);
        }
    }
}
