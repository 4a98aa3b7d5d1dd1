//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read and mutate the shared `AppController` signal from Leptos
//! context; none of them touch storage directly.

pub mod hours_table;
pub mod total_hours;
pub mod volunteer_form;
