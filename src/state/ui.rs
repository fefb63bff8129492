// UI state - presentation settings and transient messages
use crate::locale::Locale;
use crate::style::Theme;
use std::time::Instant;

pub struct UIState {
    pub theme: Theme,
    pub locale: Locale,
    pub error_message: Option<(String, Instant)>,
    pub info_message: Option<(String, Instant)>,
}

impl UIState {
    pub fn new(theme: Theme, locale: Locale) -> Self {
        Self {
            theme,
            locale,
            error_message: None,
            info_message: None,
        }
    }

    pub fn set_error(&mut self, message: String) {
        self.error_message = Some((message, Instant::now()));
    }

    pub fn set_info(&mut self, message: String) {
        self.info_message = Some((message, Instant::now()));
    }

    pub fn clear_expired_messages(&mut self, timeout_secs: u64) {
        if let Some((_, time)) = &self.error_message {
            if time.elapsed().as_secs() >= timeout_secs {
                self.error_message = None;
            }
        }
        if let Some((_, time)) = &self.info_message {
            if time.elapsed().as_secs() >= timeout_secs {
                self.info_message = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_expire() {
        let mut ui = UIState::new(Theme::Dark, Locale::English);
        ui.set_error("boom".to_string());
        ui.set_info("hello".to_string());
        ui.clear_expired_messages(60);
        assert!(ui.error_message.is_some());
        ui.clear_expired_messages(0);
        assert!(ui.error_message.is_none());
        assert!(ui.info_message.is_none());
    }
}
