use std::str::FromStr;

use crate::error::PageError;

/// Browser events the page reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DomEvent {
    Change,
    Keyup,
    Blur,
    Input,
    Click,
}

impl FromStr for DomEvent {
    type Err = PageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "change" => Ok(Self::Change),
            "keyup" => Ok(Self::Keyup),
            "blur" => Ok(Self::Blur),
            "input" => Ok(Self::Input),
            "click" => Ok(Self::Click),
            other => Err(PageError::UnknownEvent(other.to_owned())),
        }
    }
}

/// Parse a comma-separated event list such as `"keyup, change, blur"`.
///
/// Whitespace is ignored anywhere in the string; an empty string binds nothing.
///
/// # Errors
///
/// Returns `PageError::UnknownEvent` for a name that is not a `DomEvent`.
pub fn parse_event_list(raw: &str) -> Result<Vec<DomEvent>, PageError> {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    compact
        .split(',')
        .filter(|name| !name.is_empty())
        .map(str::parse)
        .collect()
}
