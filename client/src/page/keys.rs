//! Keyboard keys the page reacts to.

/// Legacy `keyCode` values.
pub const KEY_CODE_ENTER: u32 = 13;
pub const KEY_CODE_ESCAPE: u32 = 27;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Enter,
    Escape,
    Other,
}

impl Key {
    /// From a `KeyboardEvent.key` name.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Enter" => Self::Enter,
            "Escape" | "Esc" => Self::Escape,
            _ => Self::Other,
        }
    }

    /// From a legacy `KeyboardEvent.keyCode`.
    pub fn from_code(code: u32) -> Self {
        match code {
            KEY_CODE_ENTER => Self::Enter,
            KEY_CODE_ESCAPE => Self::Escape,
            _ => Self::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_from_name() {
        assert_eq!(Key::from_name("Enter"), Key::Enter);
        assert_eq!(Key::from_name("Escape"), Key::Escape);
        assert_eq!(Key::from_name("Esc"), Key::Escape);
        assert_eq!(Key::from_name("a"), Key::Other);
    }

    #[test]
    fn key_from_code() {
        assert_eq!(Key::from_code(13), Key::Enter);
        assert_eq!(Key::from_code(27), Key::Escape);
        assert_eq!(Key::from_code(65), Key::Other);
    }
}
