//! Networking for the login page.
//!
//! SYSTEM CONTEXT
//! ==============
//! `request` is the single JSON-over-HTTP helper the page controller's live
//! submission strategy goes through.

pub mod request;
