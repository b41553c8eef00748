//! Unit tests for the settings module
//!
//! Tests cover:
//! - Defaults and partial files
//! - TOML round trip and persistence across a reload
//! - Environment overrides
//! - apply_ui_settings propagation

use crate::GLOBAL_LOCK as ENV_LOCK;
use portfolio_os::config::Settings;
use portfolio_os::i18n::{self, Language};
use portfolio_os::ui::theme::{self, ThemeId};

mod persistence_tests {
    use super::*;

    #[test]
    fn test_language_and_theme_survive_reload() {
        let _guard = ENV_LOCK.lock().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut settings = Settings::default();
        settings.language = Language::En;
        settings.theme = ThemeId::Matrix;
        settings.save_to(&path).unwrap();

        let reloaded = Settings::load(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(reloaded.language, Language::En);
        assert_eq!(reloaded.theme, ThemeId::Matrix);
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let _guard = ENV_LOCK.lock().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("config.toml");

        Settings::default().save_to(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let _guard = ENV_LOCK.lock().unwrap();
        assert!(Settings::load(Some("/nonexistent/portfolio-os.toml")).is_err());
    }

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let _guard = ENV_LOCK.lock().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "theme = \"vscode\"\n").unwrap();

        let settings = Settings::load(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(settings.theme, ThemeId::Vscode);
        assert_eq!(settings.language, Language::Es);
        assert!(settings.ui.animations);
    }
}

mod env_tests {
    use super::*;

    #[test]
    fn test_env_overrides_file_values() {
        let _guard = ENV_LOCK.lock().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "language = \"es\"\ntheme = \"ubuntu\"\n").unwrap();

        std::env::set_var("PORTFOLIO_OS_LANG", "en");
        std::env::set_var("PORTFOLIO_OS_THEME", "matrix");
        std::env::set_var("PORTFOLIO_OS_USER_AGENT", "iPhone");
        let settings = Settings::load(Some(path.to_str().unwrap())).unwrap();
        std::env::remove_var("PORTFOLIO_OS_LANG");
        std::env::remove_var("PORTFOLIO_OS_THEME");
        std::env::remove_var("PORTFOLIO_OS_USER_AGENT");

        assert_eq!(settings.language, Language::En);
        assert_eq!(settings.theme, ThemeId::Matrix);
        assert_eq!(settings.user_agent, "iPhone");
    }

    #[test]
    fn test_invalid_env_values_are_ignored() {
        let _guard = ENV_LOCK.lock().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "language = \"es\"\n").unwrap();

        std::env::set_var("PORTFOLIO_OS_LANG", "klingon");
        let settings = Settings::load(Some(path.to_str().unwrap())).unwrap();
        std::env::remove_var("PORTFOLIO_OS_LANG");

        assert_eq!(settings.language, Language::Es);
    }
}

mod apply_tests {
    use super::*;

    #[test]
    fn test_apply_ui_settings_sets_globals() {
        let _guard = ENV_LOCK.lock().unwrap();
        let mut settings = Settings::default();
        settings.language = Language::En;
        settings.theme = ThemeId::Vscode;
        settings.apply_ui_settings();

        assert_eq!(i18n::current_language(), Language::En);
        assert_eq!(theme::current_theme_id(), ThemeId::Vscode);

        // Restore the defaults for other tests.
        Settings::default().apply_ui_settings();
    }
}
