//! Application state and event handling
//!
//! One `App` owns the session machine, the boot splash, both windows, and
//! every decorative animation. Key handling is routed by overlay first
//! (lock screen and shutdown dialog swallow everything), then by the open
//! window, then by the desktop.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::analytics::RealTime;
use crate::api::{self, Endpoint, EndpointResponse, Latency};
use crate::assets::AssetStore;
use crate::config::Settings;
use crate::content;
use crate::i18n::{self, Language};
use crate::router::{self, Shell};
use crate::session::{AppId, Overlay, Session};
use crate::term::Interpreter;
use crate::ui::animations::MatrixRain;
use crate::ui::boot::BootSequence;
use crate::ui::theme::{self, ThemeId};

use super::{api_client, compact, desktop, terminal_win};

/// Delay between desktop mount and the API client auto-launch.
const AUTO_LAUNCH_DELAY: Duration = Duration::from_millis(2000);

/// How long a toast stays on the status line.
const TOAST_TTL: Duration = Duration::from_secs(3);

/// External profile links surfaced from the desktop icons.
pub const GITHUB_URL: &str = "https://github.com/danigpas";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/daniel-gonz%C3%A1lez-pascual-dev/";

/// API client window state.
pub struct ApiClientState {
    /// Sidebar selection index into `Endpoint::ALL`.
    pub selected: usize,
    /// Last resolved response.
    pub response: Option<(Endpoint, EndpointResponse)>,
    /// In-flight request and its resolve deadline.
    pub pending: Option<(Endpoint, Instant)>,
    /// Rendered-preview toggle (JSON body otherwise).
    pub show_preview: bool,
    /// Vertical scroll of the body pane.
    pub scroll: u16,
    /// Tick the current response resolved at, feeding the count-ups.
    pub resolved_at_tick: u64,
}

impl Default for ApiClientState {
    fn default() -> Self {
        Self {
            selected: 0,
            response: None,
            pending: None,
            show_preview: false,
            scroll: 0,
            resolved_at_tick: 0,
        }
    }
}

/// Compact (mobile) shell state.
#[derive(Default)]
pub struct CompactState {
    pub selected: usize,
    pub notifications_open: bool,
}

pub struct App {
    pub settings: Settings,
    pub assets: Arc<AssetStore>,
    pub shell: Shell,
    pub session: Session,
    pub boot: BootSequence,
    pub term: Interpreter,
    pub term_input: String,
    pub api: ApiClientState,
    pub compact: CompactState,
    pub rain: MatrixRain,
    pub tick: u64,
    pub real_time: RealTime,
    toast: Option<(String, Instant)>,
    /// Time on the idle desktop, armed after boot for the auto-launch.
    desktop_timer: Option<Duration>,
    should_quit: bool,
}

impl App {
    pub fn new(settings: Settings, assets: Arc<AssetStore>) -> Self {
        let shell = router::shell_for(&settings.user_agent);
        let mut session = Session::new();
        let boot = if shell == Shell::Compact || !settings.ui.animations {
            // The compact shell mounts without a boot animation.
            session.boot_complete();
            BootSequence::skipped()
        } else {
            BootSequence::new(settings.ui.animation_speed)
        };
        let desktop_timer = if session.is_booting() {
            None
        } else {
            Some(Duration::ZERO)
        };

        Self {
            settings,
            assets,
            shell,
            session,
            boot,
            term: Interpreter::new(),
            term_input: String::new(),
            api: ApiClientState::default(),
            compact: CompactState::default(),
            rain: MatrixRain::new(80, 24),
            tick: 0,
            real_time: RealTime::default(),
            toast: None,
            desktop_timer,
            should_quit: false,
        }
    }

    pub fn tick_ms(&self) -> u64 {
        self.settings.ui.tick_ms
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn language(&self) -> Language {
        self.settings.language
    }

    pub fn toast_text(&self) -> Option<&str> {
        self.toast.as_ref().map(|(text, _)| text.as_str())
    }

    pub fn show_toast(&mut self, text: impl Into<String>) {
        self.toast = Some((text.into(), Instant::now()));
    }

    /// Simulated request latency honoring the animations toggle.
    fn latency(&self) -> Latency {
        if self.settings.ui.animations {
            Latency::DEFAULT
        } else {
            Latency::none()
        }
    }

    // ------------------------------------------------------------------
    // Ticking
    // ------------------------------------------------------------------

    pub fn on_tick(&mut self, dt: Duration) {
        self.tick += 1;

        if self.session.is_booting() {
            self.boot.advance(dt);
            if self.boot.is_complete() {
                self.session.boot_complete();
                self.desktop_timer = Some(Duration::ZERO);
            }
        } else if let Some(elapsed) = self.desktop_timer.as_mut() {
            *elapsed += dt;
            if *elapsed >= AUTO_LAUNCH_DELAY.div_f64(self.settings.ui.animation_speed.max(0.01)) {
                self.session.auto_launch();
                self.desktop_timer = None;
            }
        }

        // Resolve an in-flight API request once its latency elapses.
        if let Some((endpoint, deadline)) = self.api.pending {
            if Instant::now() >= deadline {
                let response = api::respond(endpoint, self.language());
                self.api.response = Some((endpoint, response));
                self.api.pending = None;
                self.api.scroll = 0;
                self.api.resolved_at_tick = self.tick;
            }
        }

        // Real-time analytics drift about once a second.
        let ticks_per_second = (1000 / self.tick_ms().max(1)).max(1);
        if self.tick % ticks_per_second == 0 {
            if matches!(self.api.response, Some((Endpoint::Analytics, _))) {
                self.real_time.drift();
            }
        }

        if let Some((_, since)) = &self.toast {
            if since.elapsed() >= TOAST_TTL {
                self.toast = None;
            }
        }
    }

    pub fn on_resize(&mut self, width: u16, height: u16) {
        self.rain.resize(width, height);
    }

    // ------------------------------------------------------------------
    // Key routing
    // ------------------------------------------------------------------

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.session.overlay() {
            Overlay::Suspended => {
                // Any interaction unlocks the lock screen.
                self.session.resume();
            }
            Overlay::ShutdownConfirm => match key.code {
                KeyCode::Enter | KeyCode::Char('y') => {
                    self.session.confirm_shutdown();
                    self.restart_boot();
                }
                KeyCode::Esc | KeyCode::Char('n') => self.session.cancel_shutdown(),
                _ => {}
            },
            Overlay::None => {
                if self.session.is_booting() {
                    if key.code == KeyCode::Char('q') {
                        self.should_quit = true;
                    }
                    return;
                }
                match self.shell {
                    Shell::Compact => self.on_compact_key(key),
                    Shell::Desktop => self.on_desktop_key(key),
                }
            }
        }
    }

    fn on_desktop_key(&mut self, key: KeyEvent) {
        // The terminal window swallows printable input first.
        if self.session.open_app() == Some(AppId::Terminal) {
            self.on_terminal_key(key);
            return;
        }
        if self.session.open_app() == Some(AppId::ApiClient) {
            if self.on_api_client_key(key) {
                return;
            }
        }
        self.on_global_key(key);
    }

    /// Keys available whenever no window is capturing input.
    fn on_global_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char(c @ '1'..='5') => {
                let index = (c as u8 - b'1') as usize;
                self.open_dock_section(index);
            }
            KeyCode::Char('t') => self.session.open_terminal(),
            KeyCode::Char('c') => self.download_cv(),
            KeyCode::Char('g') => self.show_toast(format!("→ {GITHUB_URL}")),
            KeyCode::Char('i') => self.show_toast(format!("→ {LINKEDIN_URL}")),
            KeyCode::Char('y') => self.cycle_theme(),
            KeyCode::Char('e') => self.toggle_language(),
            KeyCode::Char('r') => self.reboot(),
            KeyCode::Char('s') => self.session.suspend(),
            KeyCode::Char('p') => self.session.request_shutdown(),
            _ => {}
        }
    }

    /// API client keys; returns true when the key was consumed.
    fn on_api_client_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up => {
                self.api.selected = self.api.selected.saturating_sub(1);
                true
            }
            KeyCode::Down => {
                self.api.selected = (self.api.selected + 1).min(Endpoint::ALL.len() - 1);
                true
            }
            KeyCode::Enter => {
                self.send_request(Endpoint::ALL[self.api.selected]);
                true
            }
            KeyCode::Char('v') => {
                self.api.show_preview = !self.api.show_preview;
                true
            }
            KeyCode::Char('m') => {
                self.session.minimize();
                true
            }
            KeyCode::Esc | KeyCode::Char('x') => {
                self.session.close_app();
                true
            }
            KeyCode::PageUp => {
                self.api.scroll = self.api.scroll.saturating_sub(5);
                true
            }
            KeyCode::PageDown => {
                self.api.scroll = self.api.scroll.saturating_add(5);
                true
            }
            _ => false,
        }
    }

    fn on_terminal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) => self.term_input.push(c),
            KeyCode::Backspace => {
                self.term_input.pop();
            }
            KeyCode::Enter => {
                let line = std::mem::take(&mut self.term_input);
                if let Some(event) = self.term.execute(&line) {
                    self.session.apply_power_event(event);
                    if self.session.is_booting() {
                        self.restart_boot();
                    }
                }
            }
            KeyCode::Up => {
                if let Some(line) = self.term.history_mut().recall_back() {
                    self.term_input = line.to_string();
                }
            }
            KeyCode::Down => {
                match self.term.history_mut().recall_forward() {
                    Some(line) => self.term_input = line.to_string(),
                    None => self.term_input.clear(),
                }
            }
            KeyCode::Esc => self.session.close_app(),
            _ => {}
        }
    }

    fn on_compact_key(&mut self, key: KeyEvent) {
        if self.compact.notifications_open {
            match key.code {
                KeyCode::Esc | KeyCode::Char('n') => self.compact.notifications_open = false,
                _ => {}
            }
            return;
        }
        if self.session.open_app() == Some(AppId::Terminal) {
            self.on_terminal_key(key);
            return;
        }
        if self.session.open_app() == Some(AppId::ApiClient) && self.on_api_client_key(key) {
            return;
        }
        match key.code {
            KeyCode::Char('n') => self.compact.notifications_open = true,
            KeyCode::Left | KeyCode::Up => {
                self.compact.selected = self.compact.selected.saturating_sub(1);
            }
            KeyCode::Right | KeyCode::Down => {
                self.compact.selected =
                    (self.compact.selected + 1).min(compact::LAUNCHER_APPS.len() - 1);
            }
            KeyCode::Enter => self.open_launcher_app(self.compact.selected),
            _ => self.on_global_key(key),
        }
    }

    // ------------------------------------------------------------------
    // Actions
    // ------------------------------------------------------------------

    /// Dock items, in order: the five portfolio sections.
    pub fn dock_endpoints() -> [Endpoint; 5] {
        [
            Endpoint::About,
            Endpoint::Experience,
            Endpoint::Education,
            Endpoint::Projects,
            Endpoint::Contact,
        ]
    }

    fn open_dock_section(&mut self, index: usize) {
        if let Some(endpoint) = Self::dock_endpoints().get(index) {
            self.session.open_section(*endpoint);
            if let Some(pos) = Endpoint::ALL.iter().position(|e| e == endpoint) {
                self.api.selected = pos;
            }
            self.api.show_preview = false;
            self.send_request(*endpoint);
        }
    }

    fn open_launcher_app(&mut self, index: usize) {
        match compact::LAUNCHER_APPS.get(index) {
            Some(compact::LauncherApp::ApiClient) => {
                self.session.open_section(Endpoint::About);
                self.send_request(Endpoint::About);
            }
            Some(compact::LauncherApp::Terminal) => self.session.open_terminal(),
            Some(compact::LauncherApp::Cv) => self.download_cv(),
            Some(compact::LauncherApp::GitHub) => self.show_toast(format!("→ {GITHUB_URL}")),
            Some(compact::LauncherApp::LinkedIn) => self.show_toast(format!("→ {LINKEDIN_URL}")),
            None => {}
        }
    }

    fn send_request(&mut self, endpoint: Endpoint) {
        let deadline = Instant::now() + self.latency().duration();
        self.api.pending = Some((endpoint, deadline));
        if endpoint == Endpoint::Analytics {
            self.real_time = RealTime::default();
        }
    }

    fn download_cv(&mut self) {
        let dest = std::env::current_dir().unwrap_or_else(|_| std::path::PathBuf::from("."));
        match self.assets.download_cv(&dest) {
            Ok(path) => self.show_toast(format!("{} → {}", i18n::t("hero.downloadCV"), path.display())),
            Err(e) => self.show_toast(format!("✗ {e}")),
        }
    }

    fn cycle_theme(&mut self) {
        let next = match theme::current_theme_id() {
            ThemeId::Ubuntu => ThemeId::Vscode,
            ThemeId::Vscode => ThemeId::Matrix,
            ThemeId::Matrix => ThemeId::Ubuntu,
        };
        if let Err(e) = self.settings.set_theme(next) {
            tracing::warn!(error = %e, "failed to persist theme");
        }
        self.show_toast(format!("{}: {}", i18n::t("desktop.choose_theme"), next.display_name()));
    }

    fn toggle_language(&mut self) {
        let next = match self.language() {
            Language::Es => Language::En,
            Language::En => Language::Es,
        };
        if let Err(e) = self.settings.set_language(next) {
            tracing::warn!(error = %e, "failed to persist language");
        }
        // Refresh a shown response so localized payloads follow the switch.
        if let Some((endpoint, _)) = self.api.response.as_ref() {
            let endpoint = *endpoint;
            self.api.response = Some((endpoint, api::respond(endpoint, next)));
        }
    }

    fn reboot(&mut self) {
        self.session.reboot();
        self.restart_boot();
    }

    /// Reset the splash state after any transition back to `Booting`.
    fn restart_boot(&mut self) {
        if self.shell == Shell::Compact || !self.settings.ui.animations {
            // The compact shell never shows the splash.
            self.session.boot_complete();
            self.boot = BootSequence::skipped();
            self.desktop_timer = Some(Duration::ZERO);
        } else {
            self.boot = BootSequence::new(self.settings.ui.animation_speed);
            self.desktop_timer = None;
        }
        self.api = ApiClientState::default();
        self.term_input.clear();
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    pub fn render(&mut self, frame: &mut Frame) {
        match self.shell {
            Shell::Compact => compact::render(self, frame),
            Shell::Desktop => {
                if self.session.is_booting() {
                    desktop::render_boot(self, frame);
                } else {
                    desktop::render(self, frame);
                    match self.session.open_app() {
                        Some(AppId::ApiClient) => api_client::render(self, frame),
                        Some(AppId::Terminal) => terminal_win::render(self, frame),
                        None => {}
                    }
                }
            }
        }
        desktop::render_overlays(self, frame);
    }

    /// Lock-screen identity lines.
    pub fn lock_screen_lines(&self) -> (String, &'static str, &'static str) {
        let profile = content::profile(self.language());
        (
            profile.name.to_string(),
            profile.role,
            i18n::translate(self.language(), "suspend.hint"),
        )
    }
}
