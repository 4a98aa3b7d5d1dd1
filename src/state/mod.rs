//! Client view state.
//!
//! DESIGN
//! ======
//! State structs are plain data mutated by the controller; components read
//! them through the controller signal provided in context.

pub mod log_view;
