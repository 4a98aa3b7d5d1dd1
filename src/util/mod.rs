//! Browser helpers shared by components.
//!
//! SYSTEM CONTEXT
//! ==============
//! These modules hold the web-sys glue so components and the controller stay
//! testable without a browser.

pub mod alert;
pub mod local_storage;
