//! Home - The Showcase Screen

pub mod controller;
pub mod layout;
pub mod page;
