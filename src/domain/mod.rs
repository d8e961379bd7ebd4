//! Domain - Pure Data Structures
//!
//! These types don't depend on GPUI rendering and describe what the screen shows.

pub mod config;
pub mod feature;
pub mod platform;
