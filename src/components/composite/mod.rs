//! Composite Components
//!
//! Containers and overlays built from primitives.

pub mod card;
pub mod modal;
