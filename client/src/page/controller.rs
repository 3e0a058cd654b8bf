//! Page controller: owns the element model and every control on the page.
//!
//! DESIGN
//! ======
//! Each flow runs IDLE -> VALIDATING -> SUBMITTING -> SUCCESS | FAILURE.
//! Submitting first forces a full validation pass with messages; an invalid
//! field aborts and leaves its decoration visible. A valid flow whose button
//! is not busy marks the button busy and hands back a `Submission`. The caller
//! performs it (timer or POST) and reports back through `complete`, which
//! clears busy and decorates the flow's outcome field.
//!
//! Every DOM binding is a named handler (`on_change`, `on_keyup`, `on_blur`,
//! `on_click`, `on_document_keyup`). Components are looked up through the
//! controller's own maps, never through the elements.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::collections::HashMap;

use serde_json::Value;

use crate::config::PageConfig;
use crate::controls::{BusyButton, ButtonMode, ValidationGroup};
use crate::dom::{Document, DomEvent, Tag};
use crate::error::PageError;
use crate::namespace::{DEFAULT_ROOT, Namespace};

use super::flows::{
    Field, Flow, LOGIN_FAILED, LOGIN_SUCCEEDED, PASSWORD_FAILED, PASSWORD_SENT, SUPPORT_FAILED, SUPPORT_SENT,
};
use super::keys::Key;
use super::layout::{self, REQUIRED_IDS, ids};
use super::submit::{Dispatch, LoginPayload, Outcome, PasswordPayload, Submission, SubmissionStrategy, SupportPayload};

pub const FLIPPER_ACTIVE: &str = "flipper--active";
pub const BUTTON_DISABLED: &str = "button--disabled";
pub const MODAL_VISIBLE: &str = "modal--visible";

/// Clickable elements with page-level behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    LogIn,
    ForgotPassword,
    CancelPasswordRecovery,
    SendPassword,
    SupportTrigger,
    SupportClose,
    SupportSend,
}

impl ClickTarget {
    pub fn element_id(self) -> &'static str {
        match self {
            Self::LogIn => ids::LOGIN_BUTTON,
            Self::ForgotPassword => ids::LOGIN_SEND_PASSWORD,
            Self::CancelPasswordRecovery => ids::PASSWORD_CANCEL,
            Self::SendPassword => ids::PASSWORD_SEND,
            Self::SupportTrigger => ids::SUPPORT_TRIGGER,
            Self::SupportClose => ids::SUPPORT_CLOSE,
            Self::SupportSend => ids::SUPPORT_SEND,
        }
    }
}

#[derive(Clone, Debug)]
pub struct PageController {
    doc: Document,
    config: PageConfig,
    groups: HashMap<Field, ValidationGroup>,
    buttons: HashMap<Flow, BusyButton>,
    by_element: HashMap<String, Field>,
    registry: Namespace<Field>,
}

impl PageController {
    /// Bind all controls to `doc`.
    ///
    /// # Errors
    ///
    /// Fails when any element the page needs is missing from `doc`.
    pub fn new(doc: Document, config: PageConfig) -> Result<Self, PageError> {
        for id in REQUIRED_IDS {
            doc.require(id)?;
        }

        let mut groups = HashMap::new();
        let mut by_element = HashMap::new();
        let mut registry = Namespace::new(DEFAULT_ROOT);
        for field in Field::ALL {
            let group = ValidationGroup::attach(&doc, field.container_id(), field.group_options(config.decoration))?;
            by_element.insert(group.container_id().to_owned(), field);
            by_element.insert(group.control_id().to_owned(), field);
            registry.extend(field.flow().registry_path()).insert(field.registry_key(), field);
            groups.insert(field, group);
        }

        let mut buttons = HashMap::new();
        for flow in Flow::ALL {
            let button = BusyButton::attach(&doc, flow.submit_id(), ButtonMode::default(), ButtonMode::text(flow.busy_text()))?;
            buttons.insert(flow, button);
        }

        log::debug!("page controller bound {} fields, {} buttons", groups.len(), buttons.len());
        Ok(Self { doc, config, groups, buttons, by_element, registry })
    }

    /// Controller over the standard page layout.
    ///
    /// # Errors
    ///
    /// Only fails if the built-in layout and the field tables disagree.
    pub fn with_default_layout(config: PageConfig) -> Result<Self, PageError> {
        Self::new(layout::build_document(), config)
    }

    /// Page-load setup: focus the login username.
    pub fn initialise(&mut self) {
        self.doc.focus(ids::LOGIN_USERNAME);
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn group(&self, field: Field) -> &ValidationGroup {
        &self.groups[&field]
    }

    pub fn button(&self, flow: Flow) -> &BusyButton {
        &self.buttons[&flow]
    }

    /// Field owning `element_id` (its container or its control).
    pub fn field_for_element(&self, element_id: &str) -> Option<Field> {
        self.by_element.get(element_id).copied()
    }

    /// Field registered at `path`, e.g. `Page.Login.username`.
    pub fn field_at(&self, path: &str) -> Option<Field> {
        self.registry.lookup(path).copied()
    }

    // =========================================================================
    // DOM event handlers
    // =========================================================================

    /// Mirror the browser's value for `field` into the element model.
    pub fn set_value(&mut self, field: Field, value: &str) {
        self.doc.set_value(field.control_id(), value);
    }

    pub fn on_change(&mut self, field: Field) -> Option<Submission> {
        self.auto_validate(field, DomEvent::Change);
        match field {
            Field::LoginUsername | Field::LoginPassword => {
                self.on_validate_login_details();
            }
            Field::SupportType => return self.on_support_validation(field, None),
            _ => {}
        }
        None
    }

    pub fn on_keyup(&mut self, field: Field, key: Key) -> Option<Submission> {
        self.auto_validate(field, DomEvent::Keyup);
        match field {
            Field::LoginUsername | Field::LoginPassword => {
                self.on_validate_login_details();
                if key == Key::Enter {
                    return self.attempt_login();
                }
                None
            }
            Field::RecoveryEmail => self.on_email_validation(key),
            Field::SupportEmail => {
                let submission = self.on_support_validation(field, Some(key));
                self.on_support_email_validation();
                submission
            }
            Field::SupportName | Field::SupportDetails => self.on_support_validation(field, Some(key)),
            Field::SupportType => None,
        }
    }

    pub fn on_blur(&mut self, field: Field) -> Option<Submission> {
        self.auto_validate(field, DomEvent::Blur);
        if field == Field::SupportDetails {
            return self.on_support_validation(field, None);
        }
        None
    }

    pub fn on_click(&mut self, target: ClickTarget) -> Option<Submission> {
        match target {
            ClickTarget::LogIn => return self.attempt_login(),
            ClickTarget::SendPassword => return self.request_new_password(),
            ClickTarget::SupportSend => return self.send_support_request(),
            ClickTarget::ForgotPassword => self.show_forgot_password_panel(true),
            ClickTarget::CancelPasswordRecovery => self.show_forgot_password_panel(false),
            ClickTarget::SupportTrigger => self.toggle_support_panel(true),
            ClickTarget::SupportClose => self.toggle_support_panel(false),
        }
        None
    }

    /// Document-level key handler: Escape closes an open support panel.
    pub fn on_document_keyup(&mut self, key: Key) {
        if key == Key::Escape && self.is_support_visible() {
            self.toggle_support_panel(false);
        }
    }

    fn auto_validate(&mut self, field: Field, event: DomEvent) {
        if let Some(group) = self.groups.get(&field) {
            group.handle_event(&mut self.doc, event);
        }
    }

    fn on_validate_login_details(&mut self) {
        self.live_validate(Flow::Login);
    }

    fn on_email_validation(&mut self, key: Key) -> Option<Submission> {
        if key == Key::Enter {
            return self.request_new_password();
        }
        self.live_validate(Flow::PasswordRecovery);
        None
    }

    fn on_support_validation(&mut self, field: Field, key: Option<Key>) -> Option<Submission> {
        let valid = self.validate_flow(Flow::Support, false);

        if key == Some(Key::Enter) && !self.is_multiline(field) {
            return self.send_support_request();
        }

        self.reflect_validity(Flow::Support, valid);
        None
    }

    fn on_support_email_validation(&mut self) {
        let group = &self.groups[&Field::SupportEmail];
        if group.validate(&mut self.doc, true) {
            group.clear_state(&mut self.doc);
        }
    }

    fn is_multiline(&self, field: Field) -> bool {
        self.doc.get(field.control_id()).is_some_and(|e| e.tag == Tag::Textarea)
    }

    // =========================================================================
    // Validation
    // =========================================================================

    /// Validate every field of `flow`; all fields run even after a failure.
    pub fn validate_flow(&mut self, flow: Flow, show_messages: bool) -> bool {
        let mut valid = true;
        for field in flow.fields() {
            valid &= self.groups[field].validate(&mut self.doc, !show_messages);
        }
        valid
    }

    /// Silent pass, submit button toggle, then a message pass when valid so
    /// stale errors disappear.
    fn live_validate(&mut self, flow: Flow) -> bool {
        let valid = self.validate_flow(flow, false);
        self.reflect_validity(flow, valid);
        valid
    }

    fn reflect_validity(&mut self, flow: Flow, valid: bool) {
        self.doc.toggle_class(flow.submit_id(), BUTTON_DISABLED, !valid);
        if valid {
            self.validate_flow(flow, true);
        }
    }

    // =========================================================================
    // Submission
    // =========================================================================

    pub fn attempt_login(&mut self) -> Option<Submission> {
        self.submit(Flow::Login)
    }

    pub fn request_new_password(&mut self) -> Option<Submission> {
        self.submit(Flow::PasswordRecovery)
    }

    pub fn send_support_request(&mut self) -> Option<Submission> {
        self.submit(Flow::Support)
    }

    fn submit(&mut self, flow: Flow) -> Option<Submission> {
        if !self.validate_flow(flow, true) {
            log::debug!("{flow:?} submit rejected: invalid fields");
            return None;
        }

        let button = self.buttons.get_mut(&flow)?;
        if button.is_busy() {
            log::debug!("{flow:?} submit ignored: already in flight");
            return None;
        }
        button.set_busy(&mut self.doc, true);

        let dispatch = match &self.config.submission {
            SubmissionStrategy::Simulated { delay_ms } => Dispatch::Delay { ms: *delay_ms },
            SubmissionStrategy::Live { endpoints } => {
                Dispatch::Post {
                    method: endpoints.http_method(),
                    url: endpoints.for_flow(flow).to_owned(),
                    payload: self.payload(flow),
                }
            }
        };
        log::info!("{flow:?} submitted");
        Some(Submission { flow, dispatch })
    }

    /// JSON body for `flow` built from the current field values.
    pub fn payload(&self, flow: Flow) -> Value {
        let value = |field: Field| self.doc.value(field.control_id()).to_owned();
        let encoded = match flow {
            Flow::Login => serde_json::to_value(LoginPayload {
                username: value(Field::LoginUsername),
                password: value(Field::LoginPassword),
            }),
            Flow::PasswordRecovery => serde_json::to_value(PasswordPayload { email: value(Field::RecoveryEmail) }),
            Flow::Support => serde_json::to_value(SupportPayload {
                name: value(Field::SupportName),
                email: value(Field::SupportEmail),
                kind: value(Field::SupportType),
                details: value(Field::SupportDetails),
            }),
        };
        encoded.unwrap_or(Value::Null)
    }

    /// Finish an in-flight submission: clear busy and decorate the outcome.
    pub fn complete(&mut self, flow: Flow, outcome: Outcome) {
        if let Some(button) = self.buttons.get_mut(&flow) {
            button.set_busy(&mut self.doc, false);
        }

        let group = &self.groups[&flow.outcome_field()];
        match (flow, &outcome) {
            (Flow::Login, Outcome::Success(body)) => {
                let message = body
                    .as_ref()
                    .and_then(|b| b.get("message"))
                    .and_then(Value::as_str)
                    .unwrap_or(LOGIN_SUCCEEDED);
                group.set_success_state(&mut self.doc, message);
            }
            (Flow::Login, Outcome::Failure) => {
                group.set_error_state(&mut self.doc, LOGIN_FAILED);
                self.doc.focus(ids::LOGIN_USERNAME);
            }
            (Flow::PasswordRecovery, Outcome::Success(_)) => group.set_success_state(&mut self.doc, PASSWORD_SENT),
            (Flow::PasswordRecovery, Outcome::Failure) => group.set_error_state(&mut self.doc, PASSWORD_FAILED),
            (Flow::Support, Outcome::Success(_)) => group.set_success_state(&mut self.doc, SUPPORT_SENT),
            (Flow::Support, Outcome::Failure) => group.set_error_state(&mut self.doc, SUPPORT_FAILED),
        }

        match outcome {
            Outcome::Success(_) => log::info!("{flow:?} succeeded"),
            Outcome::Failure => log::warn!("{flow:?} failed"),
        }
    }

    // =========================================================================
    // Panels
    // =========================================================================

    /// Flip between the login and forgot-password views.
    pub fn show_forgot_password_panel(&mut self, show: bool) {
        self.doc.toggle_class(ids::APP, FLIPPER_ACTIVE, show);
        self.doc.focus(if show { ids::PASSWORD_EMAIL } else { ids::LOGIN_USERNAME });
    }

    pub fn toggle_support_panel(&mut self, show: bool) {
        self.doc.toggle_class(ids::SUPPORT, MODAL_VISIBLE, show);
        self.doc.focus(if show { ids::SUPPORT_NAME } else { ids::LOGIN_USERNAME });
    }

    pub fn is_forgot_password_visible(&self) -> bool {
        self.doc.has_class(ids::APP, FLIPPER_ACTIVE)
    }

    pub fn is_support_visible(&self) -> bool {
        self.doc.has_class(ids::SUPPORT, MODAL_VISIBLE)
    }
}
