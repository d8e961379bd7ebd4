//! Theme - Colors, Typography and the light/dark palette

pub mod colors;
pub mod palette;
pub mod typography;
