//! Page configuration handed from the host to the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host serializes a `PageConfig` into a JSON `<script>` tag in the page
//! shell. On hydrate the client reads it back so SSR and the browser agree on
//! the submission strategy and decoration policy. A missing or malformed tag
//! falls back to defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::controls::DecorationPolicy;
use crate::page::SubmissionStrategy;

/// Id of the `<script type="application/json">` element carrying the config.
pub const CONFIG_ELEMENT_ID: &str = "brandview-config";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub submission: SubmissionStrategy,
    pub decoration: DecorationPolicy,
}

impl PageConfig {
    /// Parse the embedded JSON form.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error for malformed input.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// JSON form for embedding in the shell. `<` is escaped so the payload
    /// can never close the surrounding `<script>` tag.
    pub fn to_embedded_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| "{}".to_owned())
            .replace('<', "\\u003c")
    }

    /// Read the config embedded in the current document.
    pub fn load() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let raw = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
                .and_then(|el| el.text_content());
            match raw.as_deref().map(Self::from_json) {
                Some(Ok(config)) => return config,
                Some(Err(e)) => log::warn!("ignoring malformed page config: {e}"),
                None => log::debug!("no page config embedded, using defaults"),
            }
        }
        Self::default()
    }
}
