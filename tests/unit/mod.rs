//! Unit tests for portfolio-os modules
//!
//! These tests cover individual components through the public API,
//! without a live terminal.

use std::sync::Mutex;

mod test_api;
mod test_assets;
mod test_config;
mod test_i18n;
mod test_router;
mod test_session;
mod test_terminal;

/// Serializes tests that touch process-wide state: environment variables
/// consulted by `Settings::load`, and the theme/language globals.
pub static GLOBAL_LOCK: Mutex<()> = Mutex::new(());
