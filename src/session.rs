//! Session state machine
//!
//! Page-level power and window state: `Booting → DesktopIdle →
//! AppOpen ⇄ AppMinimized`, with the orthogonal overlays `Suspended` and
//! `ShutdownConfirm`. Transitions are plain flips driven by clicks, keys,
//! and the boot timers; nothing survives a relaunch, so every run starts
//! at `Booting`.

use crate::api::Endpoint;
use crate::term::PowerEvent;

/// Windows the desktop can host, one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppId {
    ApiClient,
    Terminal,
}

/// Main phase of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Booting,
    DesktopIdle,
    AppOpen(AppId),
    AppMinimized(AppId),
}

/// Full-screen overlay riding on top of any phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    None,
    Suspended,
    ShutdownConfirm,
}

/// The session driving one run of the portfolio OS.
#[derive(Debug)]
pub struct Session {
    phase: Phase,
    overlay: Overlay,
    /// Section the API client shows, set from the dock.
    active_endpoint: Endpoint,
    /// Set once the post-boot auto-launch has fired.
    auto_launched: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            phase: Phase::Booting,
            overlay: Overlay::None,
            active_endpoint: Endpoint::About,
            auto_launched: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn overlay(&self) -> Overlay {
        self.overlay
    }

    pub fn active_endpoint(&self) -> Endpoint {
        self.active_endpoint
    }

    pub fn is_booting(&self) -> bool {
        self.phase == Phase::Booting
    }

    /// The window currently visible, if any.
    pub fn open_app(&self) -> Option<AppId> {
        match self.phase {
            Phase::AppOpen(app) => Some(app),
            _ => None,
        }
    }

    /// Boot animation finished; the desktop appears.
    pub fn boot_complete(&mut self) {
        if self.phase == Phase::Booting {
            self.phase = Phase::DesktopIdle;
        }
    }

    /// Fixed-delay auto-launch of the API client after the desktop loads.
    /// Fires at most once per boot.
    pub fn auto_launch(&mut self) {
        if self.phase == Phase::DesktopIdle && !self.auto_launched {
            self.auto_launched = true;
            self.phase = Phase::AppOpen(AppId::ApiClient);
        }
    }

    /// Dock or desktop-icon activation of a portfolio section.
    ///
    /// Restores a minimized client, launches it when closed, and always
    /// switches the active section. Opening the client closes the
    /// terminal (one window at a time).
    pub fn open_section(&mut self, endpoint: Endpoint) {
        self.active_endpoint = endpoint;
        self.phase = Phase::AppOpen(AppId::ApiClient);
    }

    /// Terminal icon activation; closes the API client.
    pub fn open_terminal(&mut self) {
        self.phase = Phase::AppOpen(AppId::Terminal);
    }

    /// Minimize the open window. The API client keeps its state in the
    /// dock; the terminal simply hides.
    pub fn minimize(&mut self) {
        match self.phase {
            Phase::AppOpen(AppId::ApiClient) => {
                self.phase = Phase::AppMinimized(AppId::ApiClient);
            }
            Phase::AppOpen(AppId::Terminal) => {
                self.phase = Phase::DesktopIdle;
            }
            _ => {}
        }
    }

    /// Restore a minimized window.
    pub fn restore(&mut self) {
        if let Phase::AppMinimized(app) = self.phase {
            self.phase = Phase::AppOpen(app);
        }
    }

    /// Close the open or minimized window.
    pub fn close_app(&mut self) {
        match self.phase {
            Phase::AppOpen(_) | Phase::AppMinimized(_) => {
                self.phase = Phase::DesktopIdle;
            }
            _ => {}
        }
    }

    /// Raise the suspend lock screen.
    pub fn suspend(&mut self) {
        self.overlay = Overlay::Suspended;
    }

    /// Dismiss the lock screen (click or Enter).
    pub fn resume(&mut self) {
        if self.overlay == Overlay::Suspended {
            self.overlay = Overlay::None;
        }
    }

    /// Ask for shutdown confirmation.
    pub fn request_shutdown(&mut self) {
        self.overlay = Overlay::ShutdownConfirm;
    }

    /// Confirm shutdown: the machine "powers off" and boots again.
    pub fn confirm_shutdown(&mut self) {
        if self.overlay == Overlay::ShutdownConfirm {
            self.overlay = Overlay::None;
            self.reboot();
        }
    }

    /// Keep running, drop the confirmation overlay.
    pub fn cancel_shutdown(&mut self) {
        if self.overlay == Overlay::ShutdownConfirm {
            self.overlay = Overlay::None;
        }
    }

    /// Restart the boot sequence and reset window state.
    pub fn reboot(&mut self) {
        self.phase = Phase::Booting;
        self.overlay = Overlay::None;
        self.active_endpoint = Endpoint::About;
        self.auto_launched = false;
    }

    /// Apply a power event raised by a terminal command.
    pub fn apply_power_event(&mut self, event: PowerEvent) {
        match event {
            PowerEvent::Reboot => self.reboot(),
            PowerEvent::Suspend => self.suspend(),
            PowerEvent::Shutdown => self.request_shutdown(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boot_to_desktop_to_autolaunch() {
        let mut session = Session::new();
        assert_eq!(session.phase(), Phase::Booting);

        session.boot_complete();
        assert_eq!(session.phase(), Phase::DesktopIdle);

        session.auto_launch();
        assert_eq!(session.phase(), Phase::AppOpen(AppId::ApiClient));

        // Auto-launch only fires once per boot.
        session.close_app();
        session.auto_launch();
        assert_eq!(session.phase(), Phase::DesktopIdle);
    }

    #[test]
    fn test_minimize_restore_cycle() {
        let mut session = Session::new();
        session.boot_complete();
        session.open_section(Endpoint::Projects);
        assert_eq!(session.active_endpoint(), Endpoint::Projects);

        session.minimize();
        assert_eq!(session.phase(), Phase::AppMinimized(AppId::ApiClient));

        session.restore();
        assert_eq!(session.phase(), Phase::AppOpen(AppId::ApiClient));
    }

    #[test]
    fn test_dock_click_restores_minimized_client() {
        let mut session = Session::new();
        session.boot_complete();
        session.open_section(Endpoint::About);
        session.minimize();

        session.open_section(Endpoint::Contact);
        assert_eq!(session.phase(), Phase::AppOpen(AppId::ApiClient));
        assert_eq!(session.active_endpoint(), Endpoint::Contact);
    }

    #[test]
    fn test_one_window_at_a_time() {
        let mut session = Session::new();
        session.boot_complete();
        session.open_section(Endpoint::About);

        session.open_terminal();
        assert_eq!(session.phase(), Phase::AppOpen(AppId::Terminal));

        session.open_section(Endpoint::About);
        assert_eq!(session.phase(), Phase::AppOpen(AppId::ApiClient));
    }

    #[test]
    fn test_terminal_minimize_hides() {
        let mut session = Session::new();
        session.boot_complete();
        session.open_terminal();
        session.minimize();
        assert_eq!(session.phase(), Phase::DesktopIdle);
    }

    #[test]
    fn test_suspend_resume_orthogonal_to_phase() {
        let mut session = Session::new();
        session.boot_complete();
        session.open_section(Endpoint::About);

        session.suspend();
        assert_eq!(session.overlay(), Overlay::Suspended);
        assert_eq!(session.phase(), Phase::AppOpen(AppId::ApiClient));

        session.resume();
        assert_eq!(session.overlay(), Overlay::None);
        assert_eq!(session.phase(), Phase::AppOpen(AppId::ApiClient));
    }

    #[test]
    fn test_shutdown_confirm_reboots() {
        let mut session = Session::new();
        session.boot_complete();
        session.open_section(Endpoint::Blog);

        session.request_shutdown();
        assert_eq!(session.overlay(), Overlay::ShutdownConfirm);

        session.confirm_shutdown();
        assert_eq!(session.phase(), Phase::Booting);
        assert_eq!(session.overlay(), Overlay::None);
        assert_eq!(session.active_endpoint(), Endpoint::About);
    }

    #[test]
    fn test_shutdown_cancel_keeps_state() {
        let mut session = Session::new();
        session.boot_complete();
        session.open_section(Endpoint::Blog);

        session.request_shutdown();
        session.cancel_shutdown();
        assert_eq!(session.overlay(), Overlay::None);
        assert_eq!(session.phase(), Phase::AppOpen(AppId::ApiClient));
        assert_eq!(session.active_endpoint(), Endpoint::Blog);
    }

    #[test]
    fn test_power_events_from_terminal() {
        let mut session = Session::new();
        session.boot_complete();
        session.open_terminal();

        session.apply_power_event(PowerEvent::Suspend);
        assert_eq!(session.overlay(), Overlay::Suspended);
        session.resume();

        session.apply_power_event(PowerEvent::Shutdown);
        assert_eq!(session.overlay(), Overlay::ShutdownConfirm);
        session.cancel_shutdown();

        session.apply_power_event(PowerEvent::Reboot);
        assert_eq!(session.phase(), Phase::Booting);
    }
}
