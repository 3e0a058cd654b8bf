use super::*;

fn sample() -> Document {
    let mut doc = Document::new();
    doc.insert(Element::new("ctrl", Tag::Div).with_class("input-group"));
    doc.insert(Element::new("label", Tag::Span).child_of("ctrl"));
    doc.insert(Element::new("field", Tag::Input).child_of("ctrl"));
    doc.insert(Element::new("msg", Tag::Span).child_of("ctrl").with_class("input-group__message"));
    doc.insert(Element::new("other", Tag::Input));
    doc
}

// =============================================================
// ClassList
// =============================================================

#[test]
fn class_list_add_is_idempotent_and_ordered() {
    let mut classes = ClassList::default();
    classes.add("a");
    classes.add("b");
    classes.add("a");
    assert_eq!(classes.to_string(), "a b");
}

#[test]
fn class_list_ignores_empty_names() {
    let mut classes = ClassList::default();
    classes.add("");
    assert_eq!(classes.iter().count(), 0);
    assert_eq!(classes.to_string(), "");
}

#[test]
fn class_list_toggle_forces_state() {
    let mut classes = ClassList::default();
    classes.toggle("x", true);
    classes.toggle("x", true);
    assert!(classes.contains("x"));
    classes.toggle("x", false);
    assert!(!classes.contains("x"));
}

#[test]
fn class_list_remove_missing_is_noop() {
    let mut classes = ClassList::default();
    classes.add("keep");
    classes.remove("gone");
    assert_eq!(classes.iter().collect::<Vec<_>>(), vec!["keep"]);
}

// =============================================================
// DomEvent parsing
// =============================================================

#[test]
fn parse_event_list_strips_whitespace() {
    assert_eq!(
        parse_event_list("keyup, change ,\tblur").unwrap(),
        vec![DomEvent::Keyup, DomEvent::Change, DomEvent::Blur]
    );
}

#[test]
fn parse_event_list_empty_binds_nothing() {
    assert!(parse_event_list("").unwrap().is_empty());
    assert!(parse_event_list(" , ").unwrap().is_empty());
}

#[test]
fn parse_event_list_rejects_unknown_names() {
    assert_eq!(
        parse_event_list("change, hover"),
        Err(PageError::UnknownEvent("hover".to_owned()))
    );
}

// =============================================================
// Document
// =============================================================

#[test]
fn require_reports_missing_id() {
    let doc = sample();
    assert!(doc.require("field").is_ok());
    assert_eq!(doc.require("nope"), Err(PageError::MissingElement("nope".to_owned())));
}

#[test]
fn find_descendant_uses_document_order() {
    let doc = sample();
    let control = doc.find_descendant("ctrl", |e| e.tag.is_form_control()).unwrap();
    assert_eq!(control.id, "field");
    let message = doc.find_descendant("ctrl", |e| e.classes.contains("input-group__message")).unwrap();
    assert_eq!(message.id, "msg");
}

#[test]
fn find_descendant_stays_inside_ancestor() {
    let doc = sample();
    assert!(doc.find_descendant("label", |e| e.tag.is_form_control()).is_none());
    assert!(!doc.is_descendant("other", "ctrl"));
}

#[test]
fn insert_replacing_keeps_position() {
    let mut doc = sample();
    doc.insert(Element::new("label", Tag::Input).child_of("ctrl"));
    let control = doc.find_descendant("ctrl", |e| e.tag.is_form_control()).unwrap();
    assert_eq!(control.id, "label");
}

#[test]
fn class_helpers_mutate_known_elements_only() {
    let mut doc = sample();
    doc.add_class("field", "on");
    doc.add_class("ghost", "on");
    assert!(doc.has_class("field", "on"));
    assert_eq!(doc.class_attr("ghost"), "");
    doc.toggle_class("ctrl", "input-group", false);
    assert_eq!(doc.class_attr("ctrl"), "");
}

#[test]
fn focus_ignores_unknown_ids() {
    let mut doc = sample();
    doc.focus("field");
    doc.focus("ghost");
    assert_eq!(doc.focused(), Some("field"));
    assert_eq!(doc.focus_seq(), 1);
}

#[test]
fn refocusing_bumps_sequence() {
    let mut doc = sample();
    doc.focus("field");
    doc.focus("field");
    assert_eq!(doc.focus_seq(), 2);
}

#[test]
fn value_and_text_default_to_empty() {
    let mut doc = sample();
    assert_eq!(doc.value("field"), "");
    doc.set_value("field", "bob");
    doc.set_text("msg", "hello");
    assert_eq!(doc.value("field"), "bob");
    assert_eq!(doc.text("msg"), "hello");
    assert_eq!(doc.text("ghost"), "");
}
