//! Feature - Static Feature Grid Content

/// A feature card entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

/// Features shown in the "Cross-Platform Features" card, in display order
pub const FEATURES: [Feature; 4] = [
    Feature {
        title: "📱 Mobile First",
        description: "Optimized for touch interactions and mobile screens",
    },
    Feature {
        title: "🌐 Web Support",
        description: "Full web browser compatibility with responsive design",
    },
    Feature {
        title: "🎨 Adaptive UI",
        description: "Automatically adapts to different screen sizes and orientations",
    },
    Feature {
        title: "⚡ Performance",
        description: "Native performance on mobile, optimized for web",
    },
];
