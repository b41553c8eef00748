//! Unit tests for the session state machine
//!
//! Tests cover:
//! - Boot → desktop → auto-launch sequence
//! - Window open/minimize/restore/close transitions
//! - Suspend and shutdown overlays
//! - Boot schedule timing

use portfolio_os::api::Endpoint;
use portfolio_os::session::{AppId, Overlay, Phase, Session};
use portfolio_os::term::PowerEvent;
use portfolio_os::ui::boot::{BootSequence, BOOT_STEPS};
use std::time::Duration;

mod transition_tests {
    use super::*;

    #[test]
    fn test_fresh_session_boots() {
        let session = Session::new();
        assert_eq!(session.phase(), Phase::Booting);
        assert_eq!(session.overlay(), Overlay::None);
        assert_eq!(session.active_endpoint(), Endpoint::About);
    }

    #[test]
    fn test_full_happy_path() {
        let mut session = Session::new();
        session.boot_complete();
        session.auto_launch();
        assert_eq!(session.open_app(), Some(AppId::ApiClient));

        session.minimize();
        assert_eq!(session.phase(), Phase::AppMinimized(AppId::ApiClient));
        session.restore();
        session.close_app();
        assert_eq!(session.phase(), Phase::DesktopIdle);
    }

    #[test]
    fn test_boot_complete_is_idempotent_from_desktop() {
        let mut session = Session::new();
        session.boot_complete();
        session.open_terminal();
        session.boot_complete();
        assert_eq!(session.open_app(), Some(AppId::Terminal));
    }

    #[test]
    fn test_terminal_and_client_are_exclusive() {
        let mut session = Session::new();
        session.boot_complete();
        session.open_terminal();
        session.open_section(Endpoint::Blog);
        assert_eq!(session.open_app(), Some(AppId::ApiClient));
        session.open_terminal();
        assert_eq!(session.open_app(), Some(AppId::Terminal));
    }

    #[test]
    fn test_reboot_resets_everything() {
        let mut session = Session::new();
        session.boot_complete();
        session.open_section(Endpoint::Analytics);
        session.suspend();

        session.reboot();
        assert_eq!(session.phase(), Phase::Booting);
        assert_eq!(session.overlay(), Overlay::None);
        assert_eq!(session.active_endpoint(), Endpoint::About);

        // The auto-launch re-arms after a reboot.
        session.boot_complete();
        session.auto_launch();
        assert_eq!(session.open_app(), Some(AppId::ApiClient));
    }
}

mod overlay_tests {
    use super::*;

    #[test]
    fn test_suspend_is_orthogonal() {
        let mut session = Session::new();
        session.boot_complete();
        session.open_section(Endpoint::Projects);

        session.suspend();
        assert_eq!(session.overlay(), Overlay::Suspended);
        assert_eq!(session.open_app(), Some(AppId::ApiClient));

        session.resume();
        assert_eq!(session.overlay(), Overlay::None);
    }

    #[test]
    fn test_resume_only_clears_suspension() {
        let mut session = Session::new();
        session.request_shutdown();
        session.resume();
        assert_eq!(session.overlay(), Overlay::ShutdownConfirm);
    }

    #[test]
    fn test_shutdown_confirm_cancel() {
        let mut session = Session::new();
        session.boot_complete();

        session.request_shutdown();
        session.cancel_shutdown();
        assert_eq!(session.overlay(), Overlay::None);
        assert_eq!(session.phase(), Phase::DesktopIdle);

        session.request_shutdown();
        session.confirm_shutdown();
        assert_eq!(session.phase(), Phase::Booting);
    }

    #[test]
    fn test_power_events_route_like_the_buttons() {
        let mut session = Session::new();
        session.boot_complete();

        session.apply_power_event(PowerEvent::Suspend);
        assert_eq!(session.overlay(), Overlay::Suspended);
        session.resume();

        session.apply_power_event(PowerEvent::Shutdown);
        assert_eq!(session.overlay(), Overlay::ShutdownConfirm);
        session.confirm_shutdown();
        assert_eq!(session.phase(), Phase::Booting);
    }
}

mod boot_schedule_tests {
    use super::*;

    #[test]
    fn test_seven_boot_lines() {
        assert_eq!(BOOT_STEPS.len(), 7);
        assert_eq!(BOOT_STEPS[0].text, "Inicializando sistema...");
        assert_eq!(BOOT_STEPS[6].text, "Sistema listo ✓");
    }

    #[test]
    fn test_schedule_advances_step_by_step() {
        let mut boot = BootSequence::new(1.0);
        boot.advance(Duration::from_millis(799));
        assert_eq!(boot.current_text(), None);

        boot.advance(Duration::from_millis(1));
        assert_eq!(boot.current_text(), Some(BOOT_STEPS[0].text));

        boot.advance(BOOT_STEPS[0].duration);
        assert_eq!(boot.current_text(), Some(BOOT_STEPS[1].text));
    }

    #[test]
    fn test_completion_holds_after_last_line() {
        let mut boot = BootSequence::new(1.0);
        // Sum of all delays plus the completion hold.
        boot.advance(Duration::from_secs(60));
        assert!(boot.is_complete());
        boot.advance(Duration::from_secs(60));
        assert!(boot.is_complete());
    }
}
