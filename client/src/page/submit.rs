//! How a valid flow submission is carried out.
//!
//! TRADE-OFFS
//! ==========
//! The page has shipped both with a locally simulated outcome (fixed delay,
//! canned result) and with real POSTs to the backend. Both are kept as
//! strategies and the host picks one through `PageConfig`.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::net::request::Method;

use super::flows::Flow;

pub const DEFAULT_SIMULATED_DELAY_MS: u32 = 3000;

/// Simulated recovery/support requests succeed when the roll is below this.
const SIMULATED_SUCCESS_RATE: f64 = 0.5;

fn default_delay_ms() -> u32 {
    DEFAULT_SIMULATED_DELAY_MS
}

/// Submission strategy selected by the host.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum SubmissionStrategy {
    /// Wait `delay_ms`, then resolve locally.
    Simulated {
        #[serde(default = "default_delay_ms")]
        delay_ms: u32,
    },
    /// POST the flow's payload to its endpoint.
    Live {
        #[serde(default)]
        endpoints: Endpoints,
    },
}

impl Default for SubmissionStrategy {
    fn default() -> Self {
        Self::Simulated { delay_ms: DEFAULT_SIMULATED_DELAY_MS }
    }
}

/// Endpoint per flow, relative to the page, and the HTTP method used for all
/// of them. Unrecognized methods are sent as `POST`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub method: String,
    pub login: String,
    pub request_password: String,
    pub support: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            method: Method::Post.as_str().to_owned(),
            login: "/Login".to_owned(),
            request_password: "/RequestPassword".to_owned(),
            support: "/Support".to_owned(),
        }
    }
}

impl Endpoints {
    pub fn for_flow(&self, flow: Flow) -> &str {
        match flow {
            Flow::Login => &self.login,
            Flow::PasswordRecovery => &self.request_password,
            Flow::Support => &self.support,
        }
    }

    pub fn http_method(&self) -> Method {
        Method::parse(&self.method)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginPayload {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PasswordPayload {
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SupportPayload {
    pub name: String,
    pub email: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub details: String,
}

/// Asynchronous work the caller must perform for a submission.
#[derive(Clone, Debug, PartialEq)]
pub enum Dispatch {
    /// Sleep, then resolve with `simulated_outcome`.
    Delay { ms: u32 },
    /// Send `payload` as JSON to `url`.
    Post { method: Method, url: String, payload: Value },
}

/// A submission accepted by the controller; the flow's button is now busy.
#[derive(Clone, Debug, PartialEq)]
pub struct Submission {
    pub flow: Flow,
    pub dispatch: Dispatch,
}

/// How a submission ended.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// Carries the parsed response body for live submissions.
    Success(Option<Value>),
    Failure,
}

/// Canned result for a simulated submission. `roll` is uniform in `[0, 1)`.
///
/// Login always fails; the other flows succeed half of the time.
pub fn simulated_outcome(flow: Flow, roll: f64) -> Outcome {
    match flow {
        Flow::Login => Outcome::Failure,
        Flow::PasswordRecovery | Flow::Support if roll < SIMULATED_SUCCESS_RATE => Outcome::Success(None),
        Flow::PasswordRecovery | Flow::Support => Outcome::Failure,
    }
}
