//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages render controller state and forward browser events; the behavior
//! they drive lives in `page`.

pub mod login;
