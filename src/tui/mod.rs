//! Portfolio OS terminal UI
//!
//! The ratatui shell hosting the whole experience: boot splash, desktop
//! with dock and windows, compact launcher for mobile-classified clients,
//! and the suspend/shutdown overlays. One tick-based event loop drives
//! every animation; there is no other concurrency.

mod api_client;
mod app;
mod compact;
mod desktop;
mod terminal_win;

pub use app::App;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    style::{Color, Modifier, Style},
    Terminal,
};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::assets::AssetStore;
use crate::config::Settings;
use crate::ui::theme::current_theme;

/// Theme-aware palette for the TUI.
///
/// Every color resolves against the process-wide theme at call time, so a
/// theme switch repaints on the next frame without replumbing.
pub struct Palette;

impl Palette {
    fn to_ratatui_color(c: colored::CustomColor) -> Color {
        Color::Rgb(c.r, c.g, c.b)
    }

    pub fn wallpaper() -> Color {
        Self::to_ratatui_color(current_theme().wallpaper)
    }

    pub fn panel() -> Color {
        Self::to_ratatui_color(current_theme().panel)
    }

    pub fn accent() -> Color {
        Self::to_ratatui_color(current_theme().accent)
    }

    pub fn window() -> Color {
        Self::to_ratatui_color(current_theme().window)
    }

    pub fn text() -> Color {
        Self::to_ratatui_color(current_theme().text)
    }

    pub fn muted() -> Color {
        Self::to_ratatui_color(current_theme().muted)
    }

    pub fn border() -> Color {
        Self::to_ratatui_color(current_theme().border)
    }

    pub fn prompt() -> Color {
        Self::to_ratatui_color(current_theme().prompt)
    }

    pub fn title_style() -> Style {
        Style::default()
            .fg(Self::accent())
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_style() -> Style {
        Style::default().fg(Self::border())
    }

    pub fn text_style() -> Style {
        Style::default().fg(Self::text())
    }

    pub fn muted_style() -> Style {
        Style::default().fg(Self::muted())
    }

    pub fn prompt_style() -> Style {
        Style::default().fg(Self::prompt())
    }

    pub fn selected_style() -> Style {
        Style::default()
            .bg(Self::accent())
            .fg(Self::panel())
            .add_modifier(Modifier::BOLD)
    }
}

/// Terminal wrapper for TUI operations
pub struct TuiTerminal {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TuiTerminal {
    /// Create and initialize the terminal
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;

        // Restore the terminal before the panic message prints; otherwise a
        // panic leaves raw mode active and the shell unusable. The Drop impl
        // may not run during an unwind.
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(panic_info);
        }));

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self { terminal })
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Restore terminal to normal state
    pub fn restore(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for TuiTerminal {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

/// Run the portfolio OS until the user quits or a signal lands.
pub async fn run(settings: Settings, assets: Arc<AssetStore>) -> Result<()> {
    let mut tui = TuiTerminal::new()?;
    let mut app = App::new(settings, assets);

    let tick = Duration::from_millis(app.tick_ms());
    let mut last_tick = Instant::now();

    loop {
        tui.terminal().draw(|frame| app.render(frame))?;

        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.on_key(key),
                Event::Resize(width, height) => app.on_resize(width, height),
                _ => {}
            }
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= tick {
            app.on_tick(elapsed);
            last_tick = Instant::now();
        }

        if app.should_quit() || crate::is_shutdown_requested() {
            break;
        }
    }

    tui.restore()?;
    Ok(())
}
