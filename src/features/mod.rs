//! Features - Vertical Feature Slices
//!
//! Each feature contains its page, controller, and presentation rules.

pub mod home;
