//! Portfolio OS — Daniel's portfolio as a terminal operating system.
//!
//! Boots a simulated desktop in your terminal: a dock of portfolio
//! sections served by a fake API client, a terminal emulator with its own
//! command set, three visual themes, two languages, and the full
//! boot/suspend/shutdown ritual. All content is literal; the only thing
//! that persists between runs is the language and theme preference.
//!
//! # Quick Start
//!
//! ```ignore
//! use portfolio_os::config::Settings;
//!
//! let settings = Settings::load(None)?;
//! settings.apply_ui_settings();
//! ```

use std::sync::atomic::{AtomicBool, Ordering};

// ─── Core modules ──────────────────────────────────────────────────
pub mod analytics;
pub mod api;
pub mod assets;
pub mod config;
pub mod content;
pub mod errors;
pub mod i18n;
pub mod router;
pub mod session;
pub mod term;

// ─── UI & CLI ──────────────────────────────────────────────────────
pub mod cli;
pub mod observability;
pub mod tui;
pub mod ui;

/// Global shutdown flag set by the signal handler.
static SHUTDOWN_REQUESTED: AtomicBool = AtomicBool::new(false);

/// Ask every loop to wind down.
pub fn request_shutdown() {
    SHUTDOWN_REQUESTED.store(true, Ordering::SeqCst);
}

/// True once a shutdown signal has landed.
pub fn is_shutdown_requested() -> bool {
    SHUTDOWN_REQUESTED.load(Ordering::SeqCst)
}
