//! Host configuration parsed from environment variables.
//!
//! SYSTEM CONTEXT
//! ==============
//! Besides the listen port, the host decides how the page submits its
//! forms and which validation states it decorates. Those settings become the
//! `PageConfig` embedded in every rendered page.

use client::config::PageConfig;
use client::controls::DecorationPolicy;
use client::page::SubmissionStrategy;
use client::page::submit::{DEFAULT_SIMULATED_DELAY_MS, Endpoints};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("unknown BRANDVIEW_SUBMIT_MODE '{0}' (expected 'simulated' or 'live')")]
    UnknownSubmitMode(String),
    #[error("invalid BRANDVIEW_SIMULATED_DELAY_MS: {0}")]
    InvalidDelay(String),
    #[error("unknown BRANDVIEW_DECORATION '{0}' (expected 'every-state' or 'failures-only')")]
    UnknownDecoration(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub page: PageConfig,
}

impl ServerConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BRANDVIEW_SUBMIT_MODE`: `simulated` (default) or `live`
    /// - `BRANDVIEW_SIMULATED_DELAY_MS`: default 3000, simulated mode only
    /// - `BRANDVIEW_DECORATION`: `every-state` (default) or `failures-only`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for any value that is set but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    ///
    /// # Errors
    ///
    /// See `from_env`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match non_empty(lookup("PORT")) {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let delay_ms = match non_empty(lookup("BRANDVIEW_SIMULATED_DELAY_MS")) {
            Some(raw) => raw.parse::<u32>().map_err(|_| ConfigError::InvalidDelay(raw))?,
            None => DEFAULT_SIMULATED_DELAY_MS,
        };
        let submission = parse_submit_mode(non_empty(lookup("BRANDVIEW_SUBMIT_MODE")).as_deref(), delay_ms)?;
        let decoration = parse_decoration(non_empty(lookup("BRANDVIEW_DECORATION")).as_deref())?;

        Ok(Self { port, page: PageConfig { submission, decoration } })
    }
}

fn non_empty(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

fn parse_submit_mode(raw: Option<&str>, delay_ms: u32) -> Result<SubmissionStrategy, ConfigError> {
    match raw.unwrap_or("simulated") {
        "simulated" => Ok(SubmissionStrategy::Simulated { delay_ms }),
        "live" => Ok(SubmissionStrategy::Live { endpoints: Endpoints::default() }),
        other => Err(ConfigError::UnknownSubmitMode(other.to_owned())),
    }
}

fn parse_decoration(raw: Option<&str>) -> Result<DecorationPolicy, ConfigError> {
    match raw.unwrap_or("every-state") {
        "every-state" => Ok(DecorationPolicy::EveryState),
        "failures-only" => Ok(DecorationPolicy::FailuresOnly),
        other => Err(ConfigError::UnknownDecoration(other.to_owned())),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
