use super::*;
use crate::dom::Tag;

fn has_at_sign(element: &Element) -> bool {
    element.value.contains('@')
}

fn layout(with_message: bool) -> Document {
    let mut doc = Document::new();
    doc.insert(Element::new("ctrl", Tag::Div));
    doc.insert(Element::new("field", Tag::Input).child_of("ctrl"));
    if with_message {
        doc.insert(Element::new("msg", Tag::Span).child_of("ctrl").with_class(MESSAGE_CLASS));
    }
    doc
}

fn options() -> GroupOptions {
    GroupOptions {
        events: "change".to_owned(),
        messages: Messages::empty("Required").with_invalid("Bad address"),
        predicate: Some(has_at_sign),
        decoration: DecorationPolicy::EveryState,
    }
}

fn group(doc: &Document) -> ValidationGroup {
    ValidationGroup::attach(doc, "ctrl", options()).unwrap()
}

fn decorated_states(doc: &Document) -> usize {
    [CONTAINER_SUCCESS, CONTAINER_WARNING, CONTAINER_ERROR]
        .iter()
        .filter(|c| doc.has_class("ctrl", c))
        .count()
}

// =============================================================
// attach
// =============================================================

#[test]
fn attach_finds_control_and_message() {
    let doc = layout(true);
    let group = group(&doc);
    assert_eq!(group.container_id(), "ctrl");
    assert_eq!(group.control_id(), "field");
    assert_eq!(group.message_id(), Some("msg"));
}

#[test]
fn attach_without_message_slot() {
    let doc = layout(false);
    assert_eq!(group(&doc).message_id(), None);
}

#[test]
fn attach_missing_container_fails() {
    let doc = Document::new();
    let err = ValidationGroup::attach(&doc, "ctrl", options()).unwrap_err();
    assert_eq!(err, PageError::MissingElement("ctrl".to_owned()));
}

#[test]
fn attach_container_without_control_fails() {
    let mut doc = Document::new();
    doc.insert(Element::new("ctrl", Tag::Div));
    let err = ValidationGroup::attach(&doc, "ctrl", options()).unwrap_err();
    assert_eq!(err, PageError::MissingControl("ctrl".to_owned()));
}

#[test]
fn attach_rejects_unknown_event() {
    let doc = layout(true);
    let opts = GroupOptions { events: "change, wiggle".to_owned(), ..options() };
    assert!(matches!(ValidationGroup::attach(&doc, "ctrl", opts), Err(PageError::UnknownEvent(_))));
}

// =============================================================
// is_empty / is_valid / state
// =============================================================

#[test]
fn no_predicate_is_valid_whenever_non_empty() {
    let mut doc = layout(true);
    let group = ValidationGroup::attach(&doc, "ctrl", GroupOptions::default()).unwrap();
    for value in ["x", " ", "anything at all"] {
        doc.set_value("field", value);
        assert!(!group.is_empty(&doc));
        assert!(group.is_valid(&doc));
        assert_eq!(group.state(&doc), ValidationState::Valid);
    }
}

#[test]
fn whitespace_is_not_empty() {
    let mut doc = layout(true);
    doc.set_value("field", "  ");
    assert!(!group(&doc).is_empty(&doc));
}

#[test]
fn state_is_tri_state() {
    let mut doc = layout(true);
    let group = group(&doc);
    assert_eq!(group.state(&doc), ValidationState::Empty);
    doc.set_value("field", "not-an-email");
    assert_eq!(group.state(&doc), ValidationState::Invalid);
    doc.set_value("field", "a@b");
    assert_eq!(group.state(&doc), ValidationState::Valid);
}

// =============================================================
// validate
// =============================================================

#[test]
fn validate_empty_shows_warning_and_empty_message() {
    let mut doc = layout(true);
    let group = group(&doc);
    assert!(!group.validate(&mut doc, false));
    assert!(doc.has_class("ctrl", CONTAINER_WARNING));
    assert!(doc.has_class("field", ELEMENT_EMPTY));
    assert!(!doc.has_class("ctrl", CONTAINER_NO_MESSAGE));
    assert_eq!(doc.text("msg"), "Required");
}

#[test]
fn validate_invalid_shows_error_and_invalid_message() {
    let mut doc = layout(true);
    let group = group(&doc);
    doc.set_value("field", "not-an-email");
    assert!(!group.validate(&mut doc, false));
    assert!(doc.has_class("ctrl", CONTAINER_ERROR));
    assert!(doc.has_class("field", ELEMENT_INVALID));
    assert_eq!(doc.text("msg"), "Bad address");
}

#[test]
fn validate_valid_without_message_hides_slot() {
    let mut doc = layout(true);
    let group = group(&doc);
    doc.set_value("field", "a@b");
    assert!(group.validate(&mut doc, false));
    assert!(doc.has_class("ctrl", CONTAINER_SUCCESS));
    assert!(doc.has_class("field", ELEMENT_VALID));
    assert!(doc.has_class("ctrl", CONTAINER_NO_MESSAGE));
}

#[test]
fn validate_always_leaves_exactly_one_state() {
    let mut doc = layout(true);
    let group = group(&doc);
    for value in ["", "nope", "a@b", "", "a@b", "nope"] {
        doc.set_value("field", value);
        group.validate(&mut doc, false);
        assert_eq!(decorated_states(&doc), 1, "value {value:?}");
    }
}

#[test]
fn validate_suppressed_leaves_decoration_alone() {
    let mut doc = layout(true);
    let group = group(&doc);
    group.validate(&mut doc, false);
    doc.set_value("field", "a@b");
    assert!(group.validate(&mut doc, true));
    assert!(doc.has_class("ctrl", CONTAINER_WARNING));
    assert_eq!(doc.text("msg"), "Required");
}

#[test]
fn failures_only_policy_leaves_valid_clean() {
    let mut doc = layout(true);
    let opts = GroupOptions { decoration: DecorationPolicy::FailuresOnly, ..options() };
    let group = ValidationGroup::attach(&doc, "ctrl", opts).unwrap();
    group.validate(&mut doc, false);
    assert!(doc.has_class("ctrl", CONTAINER_WARNING));

    doc.set_value("field", "a@b");
    assert!(group.validate(&mut doc, false));
    assert_eq!(decorated_states(&doc), 0);
    assert!(!doc.has_class("field", ELEMENT_VALID));
}

#[test]
fn missing_message_slot_is_skipped() {
    let mut doc = layout(false);
    let group = group(&doc);
    group.validate(&mut doc, false);
    assert!(doc.has_class("ctrl", CONTAINER_WARNING));
    assert!(!doc.has_class("ctrl", CONTAINER_NO_MESSAGE));
}

#[test]
fn valid_message_is_written_when_configured() {
    let mut doc = layout(true);
    let opts = GroupOptions { messages: Messages::empty("Required").with_valid("Looks good"), ..options() };
    let group = ValidationGroup::attach(&doc, "ctrl", opts).unwrap();
    doc.set_value("field", "a@b");
    group.validate(&mut doc, false);
    assert_eq!(doc.text("msg"), "Looks good");
    assert!(!doc.has_class("ctrl", CONTAINER_NO_MESSAGE));
}

// =============================================================
// forced states
// =============================================================

#[test]
fn set_error_state_overrides_valid_value() {
    let mut doc = layout(true);
    let group = group(&doc);
    doc.set_value("field", "a@b");
    group.validate(&mut doc, false);
    group.set_error_state(&mut doc, "Server said no");
    assert!(doc.has_class("ctrl", CONTAINER_ERROR));
    assert!(!doc.has_class("ctrl", CONTAINER_SUCCESS));
    assert!(doc.has_class("field", ELEMENT_INVALID));
    assert_eq!(doc.text("msg"), "Server said no");
}

#[test]
fn set_success_state_overrides_error() {
    let mut doc = layout(true);
    let group = group(&doc);
    group.set_error_state(&mut doc, "x");
    group.set_success_state(&mut doc, "Done");
    assert_eq!(decorated_states(&doc), 1);
    assert!(doc.has_class("ctrl", CONTAINER_SUCCESS));
    assert_eq!(doc.text("msg"), "Done");
}

#[test]
fn set_warning_state_marks_empty_only_when_empty() {
    let mut doc = layout(true);
    let group = group(&doc);
    group.set_warning_state(&mut doc, "Careful");
    assert!(doc.has_class("field", ELEMENT_EMPTY));

    doc.set_value("field", "a@b");
    group.set_warning_state(&mut doc, "Careful");
    assert!(doc.has_class("ctrl", CONTAINER_WARNING));
    assert!(!doc.has_class("field", ELEMENT_EMPTY));
}

#[test]
fn forced_empty_message_keeps_old_text_and_hides_slot() {
    let mut doc = layout(true);
    let group = group(&doc);
    group.set_error_state(&mut doc, "First");
    group.set_success_state(&mut doc, "");
    assert_eq!(doc.text("msg"), "First");
    assert!(doc.has_class("ctrl", CONTAINER_NO_MESSAGE));
}

// =============================================================
// clear_state / pause / events
// =============================================================

#[test]
fn clear_state_is_idempotent_and_keeps_message() {
    let mut doc = layout(true);
    let group = group(&doc);
    group.validate(&mut doc, false);

    group.clear_state(&mut doc);
    let once = (doc.class_attr("ctrl"), doc.class_attr("field"));
    group.clear_state(&mut doc);
    let twice = (doc.class_attr("ctrl"), doc.class_attr("field"));

    assert_eq!(once, twice);
    assert_eq!(decorated_states(&doc), 0);
    assert_eq!(doc.text("msg"), "Required");
}

#[test]
fn bound_event_triggers_validation() {
    let mut doc = layout(true);
    let group = group(&doc);
    assert_eq!(group.handle_event(&mut doc, DomEvent::Change), Some(false));
    assert!(doc.has_class("ctrl", CONTAINER_WARNING));
}

#[test]
fn unbound_event_is_ignored() {
    let mut doc = layout(true);
    let group = group(&doc);
    assert_eq!(group.handle_event(&mut doc, DomEvent::Keyup), None);
    assert_eq!(decorated_states(&doc), 0);
}

#[test]
fn paused_group_ignores_events_until_resumed() {
    let mut doc = layout(true);
    let mut group = group(&doc);
    group.validate(&mut doc, false);

    group.pause_validation(&mut doc, true);
    assert!(group.is_paused());
    assert_eq!(decorated_states(&doc), 0);
    assert_eq!(group.handle_event(&mut doc, DomEvent::Change), None);

    group.pause_validation(&mut doc, false);
    assert_eq!(group.handle_event(&mut doc, DomEvent::Change), Some(false));
}

#[test]
fn explicit_validate_still_runs_while_paused() {
    let mut doc = layout(true);
    let mut group = group(&doc);
    group.pause_validation(&mut doc, true);
    group.validate(&mut doc, false);
    assert!(doc.has_class("ctrl", CONTAINER_WARNING));
}
