//! Platform - Runtime Platform Identifier
//!
//! An opaque OS tag such as "macos", "ios" or "web". Detected from the
//! compile target unless the launch configuration overrides it.

use std::fmt;

/// Platform identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Platform(String);

impl Platform {
    pub const IOS: &'static str = "ios";
    pub const WEB: &'static str = "web";

    /// Create from an explicit identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Detect the platform this binary was built for
    pub fn detect() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::new(Self::WEB)
        } else {
            Self::new(std::env::consts::OS)
        }
    }

    /// Use the override when present and non-blank, otherwise detect
    pub fn resolve(override_id: Option<&str>) -> Self {
        match override_id.map(str::trim) {
            Some(id) if !id.is_empty() => Self::new(id),
            _ => Self::detect(),
        }
    }

    pub fn id(&self) -> &str {
        &self.0
    }

    pub fn is_ios(&self) -> bool {
        self.0 == Self::IOS
    }

    pub fn is_web(&self) -> bool {
        self.0 == Self::WEB
    }

    /// Glyph shown next to the platform name
    pub fn glyph(&self) -> &'static str {
        if self.is_web() { "🌐" } else { "📱" }
    }

    /// "Running on MACOS"
    pub fn running_label(&self) -> String {
        format!("Running on {}", self.0.to_uppercase())
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins_over_detection() {
        assert_eq!(Platform::resolve(Some("ios")).id(), "ios");
        assert!(Platform::resolve(Some(" web ")).is_web());
    }

    #[test]
    fn blank_override_falls_back_to_detection() {
        assert_eq!(Platform::resolve(Some("  ")), Platform::detect());
        assert_eq!(Platform::resolve(None), Platform::detect());
    }

    #[test]
    fn glyph_and_label() {
        let web = Platform::new("web");
        assert_eq!(web.glyph(), "🌐");
        assert_eq!(web.running_label(), "Running on WEB");

        let android = Platform::new("android");
        assert_eq!(android.glyph(), "📱");
        assert_eq!(android.running_label(), "Running on ANDROID");
        assert!(!android.is_ios());
    }
}
