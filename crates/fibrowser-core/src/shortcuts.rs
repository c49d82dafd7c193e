//! Keyboard command surface
//!
//! - `Ctrl+T` / `Ctrl+W`: open / close tab
//! - `Ctrl+Tab` / `Ctrl+Shift+Tab`: next / previous tab
//! - `Ctrl+L`: focus address bar
//! - `F5` / `Ctrl+F5`: refresh / hard refresh
//! - `Ctrl+H`: history
//! - `F12`: developer console

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowCommand {
    NewTab,
    CloseTab,
    NextTab,
    PreviousTab,
    FocusAddressBar,
    Refresh,
    HardRefresh,
    ShowHistory,
    ToggleDevTools,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortcut {
    pub keys: &'static str,
    pub command: WindowCommand,
}

pub static SHORTCUTS: [Shortcut; 9] = [
    Shortcut { keys: "Ctrl+T", command: WindowCommand::NewTab },
    Shortcut { keys: "Ctrl+W", command: WindowCommand::CloseTab },
    Shortcut { keys: "Ctrl+Tab", command: WindowCommand::NextTab },
    Shortcut { keys: "Ctrl+Shift+Tab", command: WindowCommand::PreviousTab },
    Shortcut { keys: "Ctrl+L", command: WindowCommand::FocusAddressBar },
    Shortcut { keys: "F5", command: WindowCommand::Refresh },
    Shortcut { keys: "Ctrl+F5", command: WindowCommand::HardRefresh },
    Shortcut { keys: "Ctrl+H", command: WindowCommand::ShowHistory },
    Shortcut { keys: "F12", command: WindowCommand::ToggleDevTools },
];

impl WindowCommand {
    /// Look up a key sequence such as `ctrl+shift+tab` (case and spaces ignored)
    pub fn from_keys(keys: &str) -> Option<Self> {
        let wanted = normalize(keys);
        SHORTCUTS
            .iter()
            .find(|s| normalize(s.keys) == wanted)
            .map(|s| s.command)
    }

    /// Key sequence bound to this command
    pub fn keys(&self) -> &'static str {
        SHORTCUTS
            .iter()
            .find(|s| s.command == *self)
            .map(|s| s.keys)
            .unwrap_or_default()
    }
}

fn normalize(keys: &str) -> String {
    keys.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}
