//! State - Screen-Owned State Modules
//!
//! Plain data mutated only through named operations. The home page owns
//! one of each and re-renders after every change.

pub mod notice_state;
pub mod screen_state;
