//! Errors raised while wiring controls to the page layout.

/// Failure to bind a control or controller to the element model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
    #[error("element #{0} not found in page layout")]
    MissingElement(String),
    #[error("container #{0} has no input, select or textarea")]
    MissingControl(String),
    #[error("unknown event name: {0}")]
    UnknownEvent(String),
}
