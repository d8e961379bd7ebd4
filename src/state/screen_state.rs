//! ScreenState - Counter and Theme Flag

use crate::domain::platform::Platform;
use crate::theme::palette::Theme;

/// State owned by the home screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenState {
    /// Tap counter
    pub counter: u64,
    /// Whether the dark palette is active
    pub dark_mode: bool,
}

impl ScreenState {
    /// Add one to the counter
    pub fn increment(&mut self) {
        self.counter = self.counter.saturating_add(1);
    }

    /// Set the counter back to zero
    pub fn reset(&mut self) {
        self.counter = 0;
    }

    /// Flip between light and dark
    pub fn toggle_theme(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    /// Palette for the current mode
    pub fn theme(&self) -> Theme {
        Theme::derive(self.dark_mode)
    }

    /// Body of the "Platform Info" notice
    pub fn info_message(&self, platform: &Platform) -> String {
        format!(
            "You're using {platform} platform!\nCounter: {}",
            self.counter
        )
    }

    /// Label of the theme toggle button, naming the mode it switches to
    pub fn theme_toggle_label(&self) -> &'static str {
        if self.dark_mode {
            "☀️ Light Mode"
        } else {
            "🌙 Dark Mode"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state() {
        let state = ScreenState::default();
        assert_eq!(state.counter, 0);
        assert!(!state.dark_mode);
    }

    #[test]
    fn increments_count_up() {
        for n in [0u64, 1, 2, 17, 100] {
            let mut state = ScreenState::default();
            for _ in 0..n {
                state.increment();
            }
            assert_eq!(state.counter, n);
        }
    }

    #[test]
    fn increment_saturates() {
        let mut state = ScreenState {
            counter: u64::MAX,
            dark_mode: false,
        };
        state.increment();
        assert_eq!(state.counter, u64::MAX);
    }

    #[test]
    fn reset_clears_counter_only() {
        let mut state = ScreenState {
            counter: 42,
            dark_mode: true,
        };
        state.reset();
        assert_eq!(state.counter, 0);
        assert!(state.dark_mode);

        state.reset();
        assert_eq!(state.counter, 0);
    }

    #[test]
    fn toggle_parity() {
        let mut state = ScreenState::default();
        state.toggle_theme();
        assert!(state.dark_mode);
        state.toggle_theme();
        assert!(!state.dark_mode);

        for _ in 0..5 {
            state.toggle_theme();
        }
        assert!(state.dark_mode);
        assert_eq!(state.counter, 0);
    }

    #[test]
    fn theme_ignores_counter() {
        let low = ScreenState {
            counter: 0,
            dark_mode: true,
        };
        let high = ScreenState {
            counter: 9_999,
            dark_mode: true,
        };
        assert_eq!(low.theme(), high.theme());
        assert_eq!(low.theme(), Theme::derive(true));
    }

    #[test]
    fn scenario_increment_reset_toggle() {
        let mut state = ScreenState::default();
        state.increment();
        state.increment();
        state.increment();
        assert_eq!(state, ScreenState { counter: 3, dark_mode: false });

        state.reset();
        assert_eq!(state, ScreenState { counter: 0, dark_mode: false });

        state.toggle_theme();
        assert_eq!(state, ScreenState { counter: 0, dark_mode: true });

        state.toggle_theme();
        assert_eq!(state, ScreenState { counter: 0, dark_mode: false });
    }

    #[test]
    fn info_message_format() {
        let state = ScreenState {
            counter: 7,
            dark_mode: false,
        };
        assert_eq!(
            state.info_message(&Platform::new("linux")),
            "You're using linux platform!\nCounter: 7"
        );
    }

    #[test]
    fn toggle_label_names_target_mode() {
        let mut state = ScreenState::default();
        assert_eq!(state.theme_toggle_label(), "🌙 Dark Mode");
        state.toggle_theme();
        assert_eq!(state.theme_toggle_label(), "☀️ Light Mode");
    }
}
