//! Flows, their fields, and the copy shown for each state.

#[cfg(test)]
#[path = "flows_test.rs"]
mod flows_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::controls::{DecorationPolicy, GroupOptions, Messages, Predicate};
use crate::dom::Element;

use super::layout::ids;

/// Browser whitespace: `\s` in the page's inline form checks. Differs from
/// Unicode `White_Space` (U+FEFF counts, U+0085 does not).
const BLANK: &str = r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

static USERNAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(?-u:\w)").expect("Invalid username regex"));

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^[^{BLANK}]+@[^{BLANK}]+$")).expect("Invalid e-mail regex"));

pub const LOGIN_FAILED: &str = "Invalid username or password, please try again.";
pub const LOGIN_SUCCEEDED: &str = "Welcome back!";
pub const PASSWORD_SENT: &str = "Thank you, please check your e-mail for further instructions.";
pub const PASSWORD_FAILED: &str = "Sorry, something went wrong. Please contact our support team...";
pub const SUPPORT_SENT: &str = "Thank you, one of our team members will contact you shortly.";
pub const SUPPORT_FAILED: &str = "Sorry, something went wrong. Please contact our support team..";

const EMAIL_EMPTY: &str = "Put your e-mail here, silly!";
const EMAIL_INVALID: &str = "That doesn't look like a valid e-mail address.";
const HELP_EMPTY: &str = "Please let us know how we can help.";

/// Events that auto-validate every field.
const AUTO_VALIDATE_EVENTS: &str = "change";

/// One of the three independent interactions on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Flow {
    Login,
    PasswordRecovery,
    Support,
}

impl Flow {
    pub const ALL: [Flow; 3] = [Flow::Login, Flow::PasswordRecovery, Flow::Support];

    /// Fields validated together when this flow submits.
    pub fn fields(self) -> &'static [Field] {
        match self {
            Self::Login => &[Field::LoginUsername, Field::LoginPassword],
            Self::PasswordRecovery => &[Field::RecoveryEmail],
            Self::Support => &[Field::SupportName, Field::SupportEmail, Field::SupportType, Field::SupportDetails],
        }
    }

    pub fn submit_id(self) -> &'static str {
        match self {
            Self::Login => ids::LOGIN_BUTTON,
            Self::PasswordRecovery => ids::PASSWORD_SEND,
            Self::Support => ids::SUPPORT_SEND,
        }
    }

    pub fn busy_text(self) -> &'static str {
        match self {
            Self::Login => "Logging in, please wait...",
            Self::PasswordRecovery => "Please wait...",
            Self::Support => "Sending, please wait...",
        }
    }

    /// Registry namespace holding this flow's fields.
    pub fn registry_path(self) -> &'static str {
        match self {
            Self::Login => "Page.Login",
            Self::PasswordRecovery => "Page.PasswordRecovery",
            Self::Support => "Page.Support",
        }
    }

    /// Field that shows the submission outcome.
    pub fn outcome_field(self) -> Field {
        match self {
            Self::Login => Field::LoginUsername,
            Self::PasswordRecovery => Field::RecoveryEmail,
            Self::Support => Field::SupportDetails,
        }
    }
}

/// A validated input on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    LoginUsername,
    LoginPassword,
    RecoveryEmail,
    SupportName,
    SupportEmail,
    SupportType,
    SupportDetails,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::LoginUsername,
        Field::LoginPassword,
        Field::RecoveryEmail,
        Field::SupportName,
        Field::SupportEmail,
        Field::SupportType,
        Field::SupportDetails,
    ];

    pub fn flow(self) -> Flow {
        match self {
            Self::LoginUsername | Self::LoginPassword => Flow::Login,
            Self::RecoveryEmail => Flow::PasswordRecovery,
            Self::SupportName | Self::SupportEmail | Self::SupportType | Self::SupportDetails => Flow::Support,
        }
    }

    pub fn container_id(self) -> &'static str {
        match self {
            Self::LoginUsername => ids::LOGIN_USERNAME_CTRL,
            Self::LoginPassword => ids::LOGIN_PASSWORD_CTRL,
            Self::RecoveryEmail => ids::PASSWORD_EMAIL_CTRL,
            Self::SupportName => ids::SUPPORT_NAME_CTRL,
            Self::SupportEmail => ids::SUPPORT_EMAIL_CTRL,
            Self::SupportType => ids::SUPPORT_TYPE_CTRL,
            Self::SupportDetails => ids::SUPPORT_DETAILS_CTRL,
        }
    }

    pub fn control_id(self) -> &'static str {
        match self {
            Self::LoginUsername => ids::LOGIN_USERNAME,
            Self::LoginPassword => ids::LOGIN_PASSWORD,
            Self::RecoveryEmail => ids::PASSWORD_EMAIL,
            Self::SupportName => ids::SUPPORT_NAME,
            Self::SupportEmail => ids::SUPPORT_EMAIL,
            Self::SupportType => ids::SUPPORT_TYPE,
            Self::SupportDetails => ids::SUPPORT_DETAILS,
        }
    }

    /// Entry name inside the flow's registry namespace.
    pub fn registry_key(self) -> &'static str {
        match self {
            Self::LoginUsername => "username",
            Self::LoginPassword => "password",
            Self::RecoveryEmail | Self::SupportEmail => "email",
            Self::SupportName => "name",
            Self::SupportType => "type",
            Self::SupportDetails => "details",
        }
    }

    pub fn messages(self) -> Messages {
        match self {
            Self::LoginUsername => {
                Messages::empty("Oi, get back here! We need you username!").with_invalid("This doesn't seem right...")
            }
            Self::LoginPassword => Messages::empty("You kind of need a password to log in... Duh!"),
            Self::RecoveryEmail | Self::SupportEmail => Messages::empty(EMAIL_EMPTY).with_invalid(EMAIL_INVALID),
            Self::SupportName => Messages::empty("Please tell us your name."),
            Self::SupportType | Self::SupportDetails => Messages::empty(HELP_EMPTY),
        }
    }

    pub fn predicate(self) -> Option<Predicate> {
        match self {
            Self::LoginUsername => Some(starts_with_word_char),
            Self::RecoveryEmail | Self::SupportEmail => Some(looks_like_email),
            _ => None,
        }
    }

    pub fn group_options(self, decoration: DecorationPolicy) -> GroupOptions {
        GroupOptions {
            events: AUTO_VALIDATE_EVENTS.to_owned(),
            messages: self.messages(),
            predicate: self.predicate(),
            decoration,
        }
    }
}

/// Usernames start with an ASCII letter, digit or underscore.
pub fn starts_with_word_char(element: &Element) -> bool {
    USERNAME.is_match(&element.value)
}

/// Loose e-mail shape: non-blank text on both sides of an `@`.
pub fn looks_like_email(element: &Element) -> bool {
    EMAIL.is_match(&element.value)
}
