//! UI Constants
//!
//! Centralized UI constants for consistent layout across the screen.

/// Viewport width above which the feature grid switches to two columns
pub const TWO_COLUMN_MIN_WIDTH: f32 = 600.0;

/// Feature card width as a fraction of the grid, per layout
pub const FEATURE_CARD_WIDTH_TWO_COLUMN: f32 = 0.48;
pub const FEATURE_CARD_WIDTH_SINGLE_COLUMN: f32 = 1.0;

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 900.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;
pub const MIN_WINDOW_WIDTH: f32 = 360.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Window title
pub const WINDOW_TITLE: &str = "Showcase";

/// Header top padding (the iOS status bar needs more room)
pub const HEADER_TOP_PADDING_IOS: f32 = 50.0;
pub const HEADER_TOP_PADDING_DEFAULT: f32 = 30.0;

/// Opacity applied to disabled buttons
pub const DISABLED_OPACITY: f32 = 0.6;
