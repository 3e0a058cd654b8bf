//! The fixed element tree of the login page.
//!
//! The Leptos view renders exactly these ids, so the controller and the view
//! agree on the HTML contract: each validated field is an `input-group`
//! container holding one form control and one message slot.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use crate::controls::validation_group::MESSAGE_CLASS;
use crate::dom::{Document, Element, Tag};

pub mod ids {
    pub const APP: &str = "app";

    pub const LOGIN_USERNAME: &str = "login--username";
    pub const LOGIN_USERNAME_CTRL: &str = "login--username-ctrl";
    pub const LOGIN_PASSWORD: &str = "login--password";
    pub const LOGIN_PASSWORD_CTRL: &str = "login--password-ctrl";
    pub const LOGIN_KEEP_IN: &str = "login--keep-in";
    pub const LOGIN_SEND_PASSWORD: &str = "login--send-password";
    pub const LOGIN_BUTTON: &str = "login--log-in";

    pub const PASSWORD_EMAIL: &str = "password--email";
    pub const PASSWORD_EMAIL_CTRL: &str = "password--email-ctrl";
    pub const PASSWORD_SEND: &str = "password--send";
    pub const PASSWORD_CANCEL: &str = "password--cancel";

    pub const SUPPORT: &str = "support";
    pub const SUPPORT_TRIGGER: &str = "support--trigger";
    pub const SUPPORT_SEND: &str = "support--send";
    pub const SUPPORT_CLOSE: &str = "support--close";
    pub const SUPPORT_NAME: &str = "support--name";
    pub const SUPPORT_NAME_CTRL: &str = "support--name-ctrl";
    pub const SUPPORT_EMAIL: &str = "support--email";
    pub const SUPPORT_EMAIL_CTRL: &str = "support--email-ctrl";
    pub const SUPPORT_TYPE: &str = "support--type";
    pub const SUPPORT_TYPE_CTRL: &str = "support--type-ctrl";
    pub const SUPPORT_DETAILS: &str = "support--details";
    pub const SUPPORT_DETAILS_CTRL: &str = "support--details-ctrl";

    /// Message slot id for a field container.
    pub fn message_of(container: &str) -> String {
        format!("{container}-message")
    }
}

/// Ids the controller touches directly besides the validated fields.
pub const REQUIRED_IDS: [&str; 11] = [
    ids::APP,
    ids::LOGIN_USERNAME,
    ids::LOGIN_BUTTON,
    ids::LOGIN_SEND_PASSWORD,
    ids::PASSWORD_EMAIL,
    ids::PASSWORD_SEND,
    ids::PASSWORD_CANCEL,
    ids::SUPPORT,
    ids::SUPPORT_TRIGGER,
    ids::SUPPORT_SEND,
    ids::SUPPORT_CLOSE,
];

pub const INPUT_GROUP_CLASS: &str = "input-group";
pub const BUTTON_CLASS: &str = "button";
pub const MODAL_CLASS: &str = "modal";
pub const FLIPPER_CLASS: &str = "flipper";

/// Build the page's element tree.
pub fn build_document() -> Document {
    let mut doc = Document::new();
    doc.insert(Element::new(ids::APP, Tag::Div).with_class(FLIPPER_CLASS));

    // Login view.
    field(&mut doc, ids::LOGIN_USERNAME_CTRL, ids::LOGIN_USERNAME, Tag::Input);
    field(&mut doc, ids::LOGIN_PASSWORD_CTRL, ids::LOGIN_PASSWORD, Tag::Input);
    doc.insert(Element::new(ids::LOGIN_KEEP_IN, Tag::Input).child_of(ids::APP));
    doc.insert(
        Element::new(ids::LOGIN_SEND_PASSWORD, Tag::Anchor)
            .child_of(ids::APP)
            .with_text("Forgot your password?"),
    );
    button(&mut doc, ids::LOGIN_BUTTON, ids::APP, "Log in");

    // Forgot-password view.
    field(&mut doc, ids::PASSWORD_EMAIL_CTRL, ids::PASSWORD_EMAIL, Tag::Input);
    button(&mut doc, ids::PASSWORD_SEND, ids::APP, "Send me a new password");
    doc.insert(Element::new(ids::PASSWORD_CANCEL, Tag::Anchor).child_of(ids::APP).with_text("Cancel"));

    // Support panel.
    doc.insert(Element::new(ids::SUPPORT_TRIGGER, Tag::Anchor).with_text("Need help?"));
    doc.insert(Element::new(ids::SUPPORT, Tag::Div).with_class(MODAL_CLASS));
    doc.insert(Element::new(ids::SUPPORT_CLOSE, Tag::Button).child_of(ids::SUPPORT).with_text("Close"));
    support_field(&mut doc, ids::SUPPORT_NAME_CTRL, ids::SUPPORT_NAME, Tag::Input);
    support_field(&mut doc, ids::SUPPORT_EMAIL_CTRL, ids::SUPPORT_EMAIL, Tag::Input);
    support_field(&mut doc, ids::SUPPORT_TYPE_CTRL, ids::SUPPORT_TYPE, Tag::Select);
    support_field(&mut doc, ids::SUPPORT_DETAILS_CTRL, ids::SUPPORT_DETAILS, Tag::Textarea);
    button(&mut doc, ids::SUPPORT_SEND, ids::SUPPORT, "Send request");

    doc
}

fn field(doc: &mut Document, container: &str, control: &str, tag: Tag) {
    group(doc, container, ids::APP, control, tag);
}

fn support_field(doc: &mut Document, container: &str, control: &str, tag: Tag) {
    group(doc, container, ids::SUPPORT, control, tag);
}

fn group(doc: &mut Document, container: &str, parent: &str, control: &str, tag: Tag) {
    doc.insert(Element::new(container, Tag::Div).child_of(parent).with_class(INPUT_GROUP_CLASS));
    doc.insert(Element::new(control, tag).child_of(container));
    doc.insert(
        Element::new(ids::message_of(container), Tag::Span)
            .child_of(container)
            .with_class(MESSAGE_CLASS),
    );
}

fn button(doc: &mut Document, id: &str, parent: &str, label: &str) {
    doc.insert(Element::new(id, Tag::Button).child_of(parent).with_class(BUTTON_CLASS).with_text(label));
}
