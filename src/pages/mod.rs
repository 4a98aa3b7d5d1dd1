//! Page modules for route-level screens.

pub mod volunteer_log;
