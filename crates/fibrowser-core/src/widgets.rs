//! View state of the window chrome rendered by the toolkit.

use serde::Serialize;

/// Address bar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AddressBar {
    /// Input text.
    text: String,
    /// Cursor position, in characters.
    cursor: usize,
    /// Is focused.
    focused: bool,
    /// Whole text selected.
    all_selected: bool,
}

impl AddressBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text, cursor back at the start.
    pub fn show_url(&mut self, url: &str) {
        self.text = url.to_string();
        self.cursor = 0;
        self.all_selected = false;
    }

    /// Text typed by the user, cursor at the end.
    pub fn set_input(&mut self, input: &str) {
        self.text = input.to_string();
        self.cursor = self.text.chars().count();
        self.all_selected = false;
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
        self.all_selected = false;
    }

    pub fn select_all(&mut self) {
        self.all_selected = true;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_all_selected(&self) -> bool {
        self.all_selected
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

/// Page load progress bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProgressIndicator {
    visible: bool,
    value: u8,
}

impl ProgressIndicator {
    /// Shown while loading, hidden once the page reaches 100.
    pub fn set(&mut self, percent: u8) {
        let percent = percent.min(100);
        self.visible = percent < 100;
        self.value = percent;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn value(&self) -> u8 {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_url_resets_cursor() {
        let mut bar = AddressBar::new();
        bar.set_input("rust lang");
        assert_eq!(bar.cursor(), 9);

        bar.select_all();
        bar.show_url("https://www.rust-lang.org/");
        assert_eq!(bar.text(), "https://www.rust-lang.org/");
        assert_eq!(bar.cursor(), 0);
        assert!(!bar.is_all_selected());
    }

    #[test]
    fn test_progress_visibility() {
        let mut progress = ProgressIndicator::default();
        assert!(!progress.is_visible());

        progress.set(0);
        assert!(progress.is_visible());
        progress.set(99);
        assert!(progress.is_visible());
        progress.set(100);
        assert!(!progress.is_visible());
        assert_eq!(progress.value(), 100);

        progress.set(250);
        assert!(!progress.is_visible());
        assert_eq!(progress.value(), 100);
    }
}
