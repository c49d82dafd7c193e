//! Theme registry and style rendering.

use serde::Serialize;

/// Theme applied when nothing else is configured or a name is unknown
pub const DEFAULT_THEME: &str = "Dark";

/// Highlight used for the selected tab border and the load progress bar
const ACCENT: Color = Color::rgb(0x1a, 0x73, 0xe8);

/// Color in RGB format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb`
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Named palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub foreground: Color,
    pub tab_background: Color,
    pub tab_active_background: Color,
    pub address_bar_background: Color,
}

pub static THEMES: [Theme; 3] = [
    Theme {
        name: "Light",
        background: Color::rgb(0xff, 0xff, 0xff),
        foreground: Color::rgb(0x00, 0x00, 0x00),
        tab_background: Color::rgb(0xf1, 0xf1, 0xf1),
        tab_active_background: Color::rgb(0xff, 0xff, 0xff),
        address_bar_background: Color::rgb(0xf1, 0xf3, 0xf4),
    },
    Theme {
        name: "Dark",
        background: Color::rgb(0x20, 0x21, 0x24),
        foreground: Color::rgb(0xe8, 0xea, 0xed),
        tab_background: Color::rgb(0x3c, 0x40, 0x43),
        tab_active_background: Color::rgb(0x20, 0x21, 0x24),
        address_bar_background: Color::rgb(0x52, 0x53, 0x55),
    },
    Theme {
        name: "Blue",
        background: Color::rgb(0xe3, 0xf2, 0xfd),
        foreground: Color::rgb(0x0d, 0x47, 0xa1),
        tab_background: Color::rgb(0xbb, 0xde, 0xfb),
        tab_active_background: Color::rgb(0xe3, 0xf2, 0xfd),
        address_bar_background: Color::rgb(0xbb, 0xde, 0xfb),
    },
];

impl Theme {
    pub fn all() -> &'static [Theme] {
        &THEMES
    }

    pub fn find(name: &str) -> Option<&'static Theme> {
        THEMES.iter().find(|theme| theme.name == name)
    }

    pub fn default_theme() -> &'static Theme {
        &THEMES[1]
    }

    pub fn find_or_default(name: &str) -> &'static Theme {
        Self::find(name).unwrap_or_else(|| {
            tracing::warn!(theme = %name, fallback = DEFAULT_THEME, "Unknown theme");
            Self::default_theme()
        })
    }

    /// Style description handed to the widget toolkit.
    pub fn stylesheet(&self) -> String {
        let bg = self.background.to_hex();
        let fg = self.foreground.to_hex();
        let tab_bg = self.tab_background.to_hex();
        let tab_active = self.tab_active_background.to_hex();
        let address_bg = self.address_bar_background.to_hex();
        let accent = ACCENT.to_hex();

        format!(
            "\
window, widget {{ background-color: {bg}; color: {fg}; }}
tab-pane {{ border: 0; }}
tab {{ background: {tab_bg}; color: {fg}; padding: 8px; border-top-left-radius: 4px; border-top-right-radius: 4px; margin-right: 2px; }}
tab:selected {{ background: {tab_active}; border-bottom: 2px solid {accent}; }}
address-bar {{ background: {address_bg}; border-radius: 16px; padding: 6px 12px; color: {fg}; }}
tool-button {{ background: transparent; border-radius: 4px; padding: 4px; }}
tool-button:hover {{ background: rgba(255, 255, 255, 0.1); }}
status-bar {{ background: {tab_bg}; }}
progress-bar {{ border: 0; background: transparent; }}
progress-bar::chunk {{ background: {accent}; }}
"
        )
    }
}
