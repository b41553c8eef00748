//! Portfolio OS Theme System
//!
//! The three desktop themes: Ubuntu (warm orange on aubergine), VS Code
//! Dark (cool blues on graphite), and Terminal Matrix (green on black).
//! The active theme is process-wide and persisted through the settings
//! file.

use colored::CustomColor;
use std::sync::atomic::{AtomicU8, Ordering};

/// Global theme selection (0 = Ubuntu, 1 = Vscode, 2 = Matrix)
static CURRENT_THEME: AtomicU8 = AtomicU8::new(0);

/// Theme identifier
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ThemeId {
    #[default]
    Ubuntu,
    Vscode,
    Matrix,
}

impl ThemeId {
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => ThemeId::Ubuntu,
            1 => ThemeId::Vscode,
            2 => ThemeId::Matrix,
            _ => ThemeId::Ubuntu,
        }
    }

    pub fn to_u8(self) -> u8 {
        match self {
            ThemeId::Ubuntu => 0,
            ThemeId::Vscode => 1,
            ThemeId::Matrix => 2,
        }
    }

    /// The token stored in the settings file under the `portfolio-theme`
    /// preference.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeId::Ubuntu => "ubuntu",
            ThemeId::Vscode => "vscode",
            ThemeId::Matrix => "matrix",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "ubuntu" => Some(ThemeId::Ubuntu),
            "vscode" => Some(ThemeId::Vscode),
            "matrix" => Some(ThemeId::Matrix),
            _ => None,
        }
    }

    /// Display name shown in the theme selector.
    pub fn display_name(self) -> &'static str {
        match self {
            ThemeId::Ubuntu => "Ubuntu",
            ThemeId::Vscode => "VS Code Dark",
            ThemeId::Matrix => "Terminal Matrix",
        }
    }

    /// Top-panel title under this theme.
    pub fn panel_title(self) -> &'static str {
        match self {
            ThemeId::Ubuntu => "Daniel's Portfolio OS",
            ThemeId::Vscode => "Daniel's Dev Environment",
            ThemeId::Matrix => "MATRIX_PORTFOLIO.EXE",
        }
    }

    /// Title of the API client window under this theme.
    pub fn api_window_title(self) -> &'static str {
        match self {
            ThemeId::Ubuntu => "Daniel's Portfolio API",
            ThemeId::Vscode => "Daniel's API Client",
            ThemeId::Matrix => "PORTFOLIO_API.EXE",
        }
    }
}

impl std::fmt::Display for ThemeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A complete color theme
#[derive(Debug, Clone, Copy)]
pub struct ThemeColors {
    /// Desktop wallpaper base
    pub wallpaper: CustomColor,
    /// Top panel and dock background
    pub panel: CustomColor,
    /// Primary accent (dock highlights, titles)
    pub accent: CustomColor,
    /// Window body background
    pub window: CustomColor,
    /// Regular text
    pub text: CustomColor,
    /// Secondary/muted text
    pub muted: CustomColor,
    /// Window and panel borders
    pub border: CustomColor,
    /// Terminal prompt and success markers
    pub prompt: CustomColor,
}

impl ThemeColors {
    /// Ubuntu theme (default): warm orange accents on deep aubergine
    pub const UBUNTU: ThemeColors = ThemeColors {
        wallpaper: CustomColor { r: 48, g: 10, b: 36 },   // #300A24 - Aubergine
        panel: CustomColor { r: 23, g: 20, b: 33 },       // #171421 - Panel gray
        accent: CustomColor { r: 249, g: 115, b: 22 },    // #F97316 - Ubuntu orange
        window: CustomColor { r: 36, g: 31, b: 49 },      // #241F31 - Window body
        text: CustomColor { r: 255, g: 255, b: 255 },     // #FFFFFF - White
        muted: CustomColor { r: 154, g: 153, b: 150 },    // #9A9996 - Stone
        border: CustomColor { r: 94, g: 92, b: 100 },     // #5E5C64 - Slate
        prompt: CustomColor { r: 38, g: 162, b: 105 },    // #26A269 - Terminal green
    };

    /// VS Code Dark theme: cool blues on graphite
    pub const VSCODE: ThemeColors = ThemeColors {
        wallpaper: CustomColor { r: 30, g: 30, b: 30 },   // #1E1E1E - Editor gray
        panel: CustomColor { r: 37, g: 37, b: 38 },       // #252526 - Side bar
        accent: CustomColor { r: 0, g: 122, b: 204 },     // #007ACC - Status blue
        window: CustomColor { r: 45, g: 45, b: 48 },      // #2D2D30 - Window body
        text: CustomColor { r: 212, g: 212, b: 212 },     // #D4D4D4 - Foreground
        muted: CustomColor { r: 133, g: 133, b: 133 },    // #858585 - Line numbers
        border: CustomColor { r: 70, g: 70, b: 71 },      // #464647 - Border
        prompt: CustomColor { r: 78, g: 201, b: 176 },    // #4EC9B0 - Teal
    };

    /// Terminal Matrix theme: phosphor green on black
    pub const MATRIX: ThemeColors = ThemeColors {
        wallpaper: CustomColor { r: 0, g: 0, b: 0 },      // #000000 - Black
        panel: CustomColor { r: 0, g: 10, b: 0 },         // #000A00 - Near black
        accent: CustomColor { r: 0, g: 255, b: 65 },      // #00FF41 - Matrix green
        window: CustomColor { r: 3, g: 17, b: 8 },        // #031108 - Dark green
        text: CustomColor { r: 0, g: 204, b: 0 },         // #00CC00 - Phosphor
        muted: CustomColor { r: 0, g: 102, b: 0 },        // #006600 - Dim green
        border: CustomColor { r: 0, g: 143, b: 17 },      // #008F11 - Deep green
        prompt: CustomColor { r: 0, g: 255, b: 65 },      // #00FF41 - Matrix green
    };
}

/// Set the global theme
pub fn set_theme(theme: ThemeId) {
    CURRENT_THEME.store(theme.to_u8(), Ordering::SeqCst);
}

/// Get the current theme ID
pub fn current_theme_id() -> ThemeId {
    ThemeId::from_u8(CURRENT_THEME.load(Ordering::SeqCst))
}

/// Get the current theme colors
pub fn current_theme() -> ThemeColors {
    theme_colors(current_theme_id())
}

/// Get theme colors by ID
pub fn theme_colors(id: ThemeId) -> ThemeColors {
    match id {
        ThemeId::Ubuntu => ThemeColors::UBUNTU,
        ThemeId::Vscode => ThemeColors::VSCODE,
        ThemeId::Matrix => ThemeColors::MATRIX,
    }
}
