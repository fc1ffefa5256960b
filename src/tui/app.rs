//! UI-local state: the token entry field on the settings tab and its
//! one-line feedback notice. Everything data-related lives in shared state.

pub struct AppState {
    pub token_input: String,
    pub settings_notice: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            token_input: String::new(),
            settings_notice: None,
        }
    }

    pub fn push_input(&mut self, c: char) {
        if !c.is_control() {
            self.token_input.push(c);
            self.settings_notice = None;
        }
    }

    pub fn pop_input(&mut self) {
        self.token_input.pop();
    }

    /// Take the entered token, clearing the field
    pub fn take_input(&mut self) -> String {
        std::mem::take(&mut self.token_input)
    }

    pub fn notify(&mut self, message: impl Into<String>) {
        self.settings_notice = Some(message.into());
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_editing() {
        let mut app = AppState::new();
        for c in "abc".chars() {
            app.push_input(c);
        }
        app.pop_input();
        assert_eq!(app.token_input, "ab");

        assert_eq!(app.take_input(), "ab");
        assert_eq!(app.token_input, "");
    }

    #[test]
    fn test_control_chars_are_ignored() {
        let mut app = AppState::new();
        app.push_input('\t');
        app.push_input('\u{7f}');
        assert_eq!(app.token_input, "");
    }

    #[test]
    fn test_typing_clears_stale_notice() {
        let mut app = AppState::new();
        app.notify("API token saved");
        app.push_input('x');
        assert_eq!(app.settings_notice, None);
    }
}
