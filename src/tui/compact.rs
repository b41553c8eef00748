//! Compact (mobile) shell
//!
//! The alternate UI tree served to mobile-classified clients: Android-style
//! status bar, launcher grid over the same apps, pull-down notification
//! panel, and full-screen app views. No boot animation here — the compact
//! shell mounts straight on the launcher.

use chrono::Local;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::content;
use crate::i18n::t;
use crate::session::AppId;

use super::app::App;
use super::{api_client, terminal_win, Palette};

/// Apps on the launcher grid, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LauncherApp {
    ApiClient,
    Terminal,
    Cv,
    GitHub,
    LinkedIn,
}

pub const LAUNCHER_APPS: &[LauncherApp] = &[
    LauncherApp::ApiClient,
    LauncherApp::Terminal,
    LauncherApp::Cv,
    LauncherApp::GitHub,
    LauncherApp::LinkedIn,
];

impl LauncherApp {
    fn label(self) -> &'static str {
        match self {
            LauncherApp::ApiClient => "Portfolio API",
            LauncherApp::Terminal => "Terminal",
            LauncherApp::Cv => "CV",
            LauncherApp::GitHub => "GitHub",
            LauncherApp::LinkedIn => "LinkedIn",
        }
    }

    fn glyph(self) -> &'static str {
        match self {
            LauncherApp::ApiClient => "▤",
            LauncherApp::Terminal => ">_",
            LauncherApp::Cv => "⬇",
            LauncherApp::GitHub => "⌥",
            LauncherApp::LinkedIn => "in",
        }
    }
}

pub fn render(app: &mut App, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(Palette::wallpaper())),
        area,
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Status bar
            Constraint::Min(5),    // Content
            Constraint::Length(1), // Nav hint
        ])
        .split(area);

    render_status_bar(app, frame, rows[0]);

    match app.session.open_app() {
        Some(AppId::ApiClient) => api_client::render(app, frame),
        Some(AppId::Terminal) => terminal_win::render(app, frame),
        None => render_launcher(app, frame, rows[1]),
    }

    render_nav_hint(app, frame, rows[2]);

    if app.compact.notifications_open {
        render_notifications(frame, rows[1]);
    }
}

fn render_status_bar(app: &App, frame: &mut Frame, area: Rect) {
    let clock = Local::now().format("%H:%M").to_string();
    let line = Line::from(vec![
        Span::styled(format!(" {clock} "), Palette::text_style()),
        Span::styled("· n notifications ", Palette::muted_style()),
        Span::styled("▂▄▆█ ", Palette::text_style()),
        Span::styled("100% ▮", Palette::prompt_style()),
    ]);
    frame.render_widget(
        Paragraph::new(line)
            .alignment(Alignment::Right)
            .style(Style::default().bg(Palette::panel())),
        area,
    );
}

fn render_launcher(app: &App, frame: &mut Frame, area: Rect) {
    let mut lines: Vec<Line> = vec![Line::default()];
    let profile = content::profile(app.language());
    lines.push(Line::from(Span::styled(
        profile.name,
        Palette::title_style().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(profile.role, Palette::muted_style())));
    lines.push(Line::default());
    lines.push(Line::default());

    for (i, launcher_app) in LAUNCHER_APPS.iter().enumerate() {
        let selected = i == app.compact.selected;
        let style = if selected {
            Palette::selected_style()
        } else {
            Palette::text_style()
        };
        lines.push(Line::from(Span::styled(
            format!("  {:^4} {}  ", launcher_app.glyph(), launcher_app.label()),
            style,
        )));
        lines.push(Line::default());
    }

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        area,
    );
}

fn render_notifications(frame: &mut Frame, area: Rect) {
    let panel_area = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: area.height.min(3 * content::notifications().len() as u16 + 2),
    };
    frame.render_widget(Clear, panel_area);

    let mut lines: Vec<Line> = Vec::new();
    for notification in content::notifications() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", notification.app),
                Palette::title_style(),
            ),
            Span::styled(notification.time, Palette::muted_style()),
        ]));
        lines.push(Line::from(Span::styled(
            notification.title,
            Palette::text_style(),
        )));
        lines.push(Line::from(Span::styled(
            notification.message,
            Palette::muted_style(),
        )));
    }

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Palette::border_style())
            .title(Span::styled(" Notifications ", Palette::title_style()))
            .style(Style::default().bg(Palette::panel())),
    );
    frame.render_widget(panel, panel_area);
}

fn render_nav_hint(app: &App, frame: &mut Frame, area: Rect) {
    let text = match app.toast_text() {
        Some(toast) => toast.to_string(),
        None => format!(
            " ◁ Esc   ◯ Enter   ▢ n · {} ",
            t("desktop.choose_theme")
        ),
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(text, Palette::muted_style())))
            .alignment(Alignment::Center)
            .style(Style::default().bg(Palette::panel())),
        area,
    );
}
