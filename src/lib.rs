//! Showcase GUI Library
//!
//! A single GPUI screen built from stateless components (button, card,
//! header) around one stateful page that owns a counter and a dark-mode flag.

pub mod app;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod features;
pub mod state;
pub mod theme;
pub mod utils;
