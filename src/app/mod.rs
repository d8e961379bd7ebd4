//! Application Layer
//!
//! App initialization, window management and logging setup.

pub mod application;
pub mod logging;
