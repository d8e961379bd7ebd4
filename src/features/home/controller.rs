//! Home Controller
//!
//! Named screen actions. The page calls these and re-renders afterwards.

use tracing::{debug, info};

use crate::domain::platform::Platform;
use crate::state::notice_state::{NoticeOption, Notifier};
use crate::state::screen_state::ScreenState;

/// Title of the platform info notice
pub const INFO_TITLE: &str = "Platform Info";

/// Home page controller
#[derive(Debug, Default)]
pub struct HomeController {
    state: ScreenState,
}

impl HomeController {
    /// Create a new controller in the initial state
    pub fn new() -> Self {
        Self::default()
    }

    /// Current screen state
    pub fn state(&self) -> ScreenState {
        self.state
    }

    /// "+1"
    pub fn increment(&mut self) {
        self.state.increment();
        debug!(counter = self.state.counter, "Counter incremented");
    }

    /// "Reset"
    pub fn reset(&mut self) {
        self.state.reset();
        debug!("Counter reset");
    }

    /// Light/dark toggle
    pub fn toggle_theme(&mut self) {
        self.state.toggle_theme();
        debug!(dark_mode = self.state.dark_mode, "Theme toggled");
    }

    /// Present platform and counter through the notifier
    pub fn show_info(&self, platform: &Platform, notifier: &mut impl Notifier) {
        info!(platform = %platform, counter = self.state.counter, "Showing platform info");
        notifier.notify(
            INFO_TITLE,
            &self.state.info_message(platform),
            vec![NoticeOption::new("OK")],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::notice_state::NoticeState;

    #[derive(Default)]
    struct RecordingNotifier {
        calls: Vec<(String, String, Vec<NoticeOption>)>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&mut self, title: &str, message: &str, options: Vec<NoticeOption>) {
            self.calls
                .push((title.to_string(), message.to_string(), options));
        }
    }

    #[test]
    fn show_info_notifies_once_without_state_change() {
        let mut controller = HomeController::new();
        controller.increment();
        controller.increment();
        controller.toggle_theme();
        let before = controller.state();

        let mut notifier = RecordingNotifier::default();
        controller.show_info(&Platform::new("web"), &mut notifier);

        assert_eq!(controller.state(), before);
        assert_eq!(notifier.calls.len(), 1);
        let (title, message, options) = &notifier.calls[0];
        assert_eq!(title, "Platform Info");
        assert_eq!(message, "You're using web platform!\nCounter: 2");
        assert_eq!(options, &vec![NoticeOption::new("OK")]);
    }

    #[test]
    fn show_info_reads_current_counter() {
        let mut controller = HomeController::new();
        let mut notices = NoticeState::default();

        controller.show_info(&Platform::new("linux"), &mut notices);
        assert_eq!(
            notices.current().map(|n| n.message.as_str()),
            Some("You're using linux platform!\nCounter: 0")
        );
        notices.acknowledge();

        controller.increment();
        controller.show_info(&Platform::new("linux"), &mut notices);
        assert_eq!(
            notices.current().map(|n| n.message.as_str()),
            Some("You're using linux platform!\nCounter: 1")
        );
    }

    #[test]
    fn actions_touch_only_their_field() {
        let mut controller = HomeController::new();
        controller.toggle_theme();
        controller.increment();
        assert_eq!(controller.state(), ScreenState { counter: 1, dark_mode: true });

        controller.reset();
        assert_eq!(controller.state(), ScreenState { counter: 0, dark_mode: true });

        controller.toggle_theme();
        assert_eq!(controller.state(), ScreenState { counter: 0, dark_mode: false });
    }
}
