//! Page-level wiring for the login, password-recovery and support flows.
//!
//! ARCHITECTURE
//! ============
//! `layout` describes the fixed element tree, `flows` the fields and messages
//! of each flow, `submit` how a valid submission is carried out, and
//! `controller` owns the controls and routes events between them. The
//! controller is synchronous: a submit returns a `Submission` describing the
//! asynchronous work, and the caller reports the result with
//! `PageController::complete`.

pub mod controller;
pub mod flows;
pub mod keys;
pub mod layout;
pub mod submit;

pub use controller::{ClickTarget, PageController};
pub use flows::{Field, Flow};
pub use keys::Key;
pub use submit::{Dispatch, Outcome, Submission, SubmissionStrategy};
