//! Layout Components
//!
//! Header, footer and the window shell.

pub mod footer;
pub mod header;
pub mod shell;
