use std::path::PathBuf;
use thiserror::Error;

/// The central error type for portfolio-os.
///
/// This hierarchy enables programmatic recovery and unified error handling
/// across the settings, session, asset, and terminal layers.
#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),

    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read settings from {path}: {message}")]
    Read { path: PathBuf, message: String },

    #[error("Failed to parse settings: {0}")]
    Parse(String),

    #[error("Failed to save settings to {path}: {message}")]
    Save { path: PathBuf, message: String },

    #[error("Unknown theme '{0}' (expected ubuntu, vscode, or matrix)")]
    UnknownTheme(String),

    #[error("Unknown language '{0}' (expected es or en)")]
    UnknownLanguage(String),
}

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Invalid state transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    #[error("Boot sequence already running")]
    AlreadyBooting,
}

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("Asset '{url}' not found in cache or asset root")]
    NotFound { url: String },

    #[error("Failed to load asset '{url}': {message}")]
    Load { url: String, message: String },

    #[error("Failed to write download to {path}: {message}")]
    Download { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, PortfolioError>;

/// Map an error to a process exit code.
///
/// Settings problems exit with 2 (configuration), everything else with 1.
pub fn get_exit_code(e: &anyhow::Error) -> u8 {
    if let Some(PortfolioError::Settings(_)) = e.downcast_ref::<PortfolioError>() {
        return 2;
    }
    if e.downcast_ref::<SettingsError>().is_some() {
        return 2;
    }
    1
}
