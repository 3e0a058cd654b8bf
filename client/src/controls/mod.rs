//! Reusable page controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! `validation_group` reflects a field's empty/invalid/valid state onto CSS
//! classes and message text; `busy_button` swaps a button between its normal
//! and working presentation. Both operate on the `dom` element model and hold
//! only element ids, never element references.

pub mod busy_button;
pub mod validation_group;

pub use busy_button::{BusyButton, ButtonMode};
pub use validation_group::{DecorationPolicy, GroupOptions, Messages, Predicate, ValidationGroup, ValidationState};
