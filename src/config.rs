//! Settings Management
//!
//! Loads and persists the user-facing preferences from a TOML file.
//! Settings include:
//! - Language (`es`/`en`) and theme (`ubuntu`/`vscode`/`matrix`)
//! - UI behavior (animations on/off, speed multiplier)
//! - Asset root for the offline cache
//!
//! The `language` and `portfolio-theme` preferences are written back to
//! the file whenever either changes at runtime; everything else is
//! load-only.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::i18n::{self, Language};
use crate::ui::theme::{self, ThemeId};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Interface language, `es` by default
    #[serde(default)]
    pub language: Language,

    /// Desktop theme, `ubuntu` by default
    #[serde(default)]
    pub theme: ThemeId,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub assets: AssetSettings,

    /// Where this settings file lives on disk (resolved at load time)
    #[serde(skip)]
    pub path: Option<PathBuf>,

    /// Client descriptor for shell routing (CLI/env only, never persisted)
    #[serde(skip)]
    pub user_agent: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: Language::default(),
            theme: ThemeId::default(),
            ui: UiSettings::default(),
            assets: AssetSettings::default(),
            path: None,
            user_agent: String::new(),
        }
    }
}

/// UI behavior knobs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiSettings {
    /// Enable decorative animations (boot typewriter, matrix rain, count-ups)
    #[serde(default = "default_true")]
    pub animations: bool,
    /// Animation speed multiplier (1.0 = stock timings, 2.0 = twice as fast)
    #[serde(default = "default_animation_speed")]
    pub animation_speed: f64,
    /// Tick rate for the TUI event loop, in milliseconds
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            animations: true,
            animation_speed: 1.0,
            tick_ms: default_tick_ms(),
        }
    }
}

/// Asset cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetSettings {
    /// Directory the asset loader reads from
    #[serde(default = "default_asset_root")]
    pub root: PathBuf,
}

impl Default for AssetSettings {
    fn default() -> Self {
        Self {
            root: default_asset_root(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_animation_speed() -> f64 {
    1.0
}
fn default_tick_ms() -> u64 {
    50
}
fn default_asset_root() -> PathBuf {
    PathBuf::from("assets")
}

/// Default location of the settings file.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("portfolio-os").join("config.toml"))
}

impl Settings {
    pub fn load(path: Option<&str>) -> Result<Self> {
        let mut settings = match path {
            Some(p) => {
                let content = std::fs::read_to_string(p)
                    .with_context(|| format!("Failed to read settings from {}", p))?;
                let mut s: Settings =
                    toml::from_str(&content).context("Failed to parse settings")?;
                s.path = Some(PathBuf::from(p));
                s
            }
            None => {
                let mut candidates: Vec<PathBuf> = vec![PathBuf::from("portfolio-os.toml")];
                if let Ok(env_path) = std::env::var("PORTFOLIO_OS_CONFIG") {
                    candidates.insert(0, PathBuf::from(env_path));
                }
                if let Some(home) = default_config_path() {
                    candidates.push(home);
                }

                let mut loaded = None;
                for candidate in &candidates {
                    if let Ok(content) = std::fs::read_to_string(candidate) {
                        let mut s: Settings =
                            toml::from_str(&content).context("Failed to parse settings")?;
                        s.path = Some(candidate.clone());
                        loaded = Some(s);
                        break;
                    }
                }
                loaded.unwrap_or_else(|| {
                    let mut s = Settings::default();
                    s.path = default_config_path();
                    s
                })
            }
        };

        // Override with environment variables
        if let Ok(lang) = std::env::var("PORTFOLIO_OS_LANG") {
            if let Some(l) = Language::parse(&lang) {
                settings.language = l;
            }
        }
        if let Ok(th) = std::env::var("PORTFOLIO_OS_THEME") {
            if let Some(t) = ThemeId::parse(&th) {
                settings.theme = t;
            }
        }
        if let Ok(root) = std::env::var("PORTFOLIO_OS_ASSETS") {
            settings.assets.root = PathBuf::from(root);
        }
        if let Ok(ua) = std::env::var("PORTFOLIO_OS_USER_AGENT") {
            settings.user_agent = ua;
        }

        Ok(settings)
    }

    /// Write the settings back to their file, creating parent directories.
    pub fn save(&self) -> Result<()> {
        let path = match &self.path {
            Some(p) => p.clone(),
            None => default_config_path().context("No config directory available")?,
        };
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize settings")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to save settings to {}", path.display()))?;
        Ok(())
    }

    /// Apply language and theme to the process-wide state.
    ///
    /// Call after loading and after any runtime change; CLI flags may
    /// override the file values before this runs.
    pub fn apply_ui_settings(&self) {
        theme::set_theme(self.theme);
        i18n::set_language(self.language);
    }

    /// Change the theme at runtime and persist the choice.
    pub fn set_theme(&mut self, theme: ThemeId) -> Result<()> {
        self.theme = theme;
        theme::set_theme(theme);
        self.save()
    }

    /// Change the language at runtime and persist the choice.
    pub fn set_language(&mut self, language: Language) -> Result<()> {
        self.language = language;
        i18n::set_language(language);
        self.save()
    }
}
