//! Desktop shell rendering
//!
//! Wallpaper (matrix rain under the matrix theme), top panel with clock
//! and power controls, desktop icons, the dock, and the full-screen
//! overlays shared with the compact shell.

use chrono::Local;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::session::Overlay;
use crate::ui::animations::{Animation, Typewriter, PULSE_FRAMES};
use crate::ui::boot::BOOT_STEPS;
use crate::ui::theme::{current_theme_id, ThemeId};

use super::app::App;
use super::Palette;

/// Paint the wallpaper and, under the matrix theme, the rain.
fn render_wallpaper(app: &mut App, frame: &mut Frame, area: Rect) {
    frame.render_widget(
        Block::default().style(Style::default().bg(Palette::wallpaper())),
        area,
    );
    if current_theme_id() == ThemeId::Matrix {
        app.rain.resize(area.width, area.height);
        let cells = app.rain.advance(app.tick);
        let buf = frame.buffer_mut();
        for (x, y, glyph, is_head) in cells {
            let (x, y) = (area.x + x, area.y + y);
            if x < area.right() && y < area.bottom() {
                let cell = &mut buf[(x, y)];
                cell.set_char(glyph);
                cell.set_fg(if is_head {
                    Palette::accent()
                } else {
                    Palette::muted()
                });
            }
        }
    }
}

fn render_top_panel(app: &App, frame: &mut Frame, area: Rect) {
    let pulse = PULSE_FRAMES[(app.tick / 4) as usize % PULSE_FRAMES.len()];
    let clock = Local::now().format("%H:%M").to_string();
    let theme = current_theme_id();

    let line = Line::from(vec![
        Span::styled(format!(" {} ", theme.panel_title()), Palette::title_style()),
        Span::styled(
            format!("· {} [y] ", t("desktop.choose_theme")),
            Palette::muted_style(),
        ),
        Span::styled(format!("· {} ", theme.display_name()), Palette::text_style()),
        Span::styled(
            format!("· {} [r] · {} [p] ", t("desktop.reboot"), t("desktop.shutdown")),
            Palette::muted_style(),
        ),
        Span::styled(format!("· {clock} "), Palette::text_style()),
        Span::styled(pulse, Palette::prompt_style()),
    ]);

    frame.render_widget(
        Paragraph::new(line).style(Style::default().bg(Palette::panel())),
        area,
    );
}

fn render_desktop_icons(app: &App, frame: &mut Frame, area: Rect) {
    let lang = app.language();
    let mut left: Vec<Line> = Vec::new();
    for (i, endpoint) in App::dock_endpoints().iter().take(3).enumerate() {
        left.push(Line::from(vec![
            Span::styled(format!(" [{}] ", i + 1), Palette::title_style()),
            Span::styled(endpoint.name(lang), Palette::text_style()),
        ]));
        left.push(Line::default());
    }
    frame.render_widget(Paragraph::new(left), area);

    let right_items = [
        ("t", t("desktop.terminal")),
        ("c", t("desktop.download_cv")),
        ("g", "GitHub"),
        ("i", "LinkedIn"),
    ];
    let mut right: Vec<Line> = Vec::new();
    for (key, label) in right_items {
        right.push(
            Line::from(vec![
                Span::styled(label, Palette::text_style()),
                Span::styled(format!(" [{key}] "), Palette::title_style()),
            ])
            .alignment(Alignment::Right),
        );
        right.push(Line::default());
    }
    frame.render_widget(Paragraph::new(right), area);
}

fn render_dock(app: &App, frame: &mut Frame, area: Rect) {
    let lang = app.language();
    let mut spans = vec![Span::raw(" ")];
    for (i, endpoint) in App::dock_endpoints().iter().enumerate() {
        let active = app.session.active_endpoint() == *endpoint;
        let style = if active {
            Palette::selected_style()
        } else {
            Palette::text_style()
        };
        spans.push(Span::styled(
            format!(" {} {} ", i + 1, endpoint.name(lang)),
            style,
        ));
        spans.push(Span::styled("·", Palette::muted_style()));
    }
    spans.pop();
    spans.push(Span::raw(" "));

    let dock = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Palette::border_style())
                .style(Style::default().bg(Palette::panel())),
        );
    frame.render_widget(dock, area);
}

fn render_status_line(app: &App, frame: &mut Frame, area: Rect) {
    let text = match app.toast_text() {
        Some(toast) => Line::from(Span::styled(toast.to_string(), Palette::title_style())),
        None => Line::from(Span::styled(
            " q quit · e es/en · s suspend ",
            Palette::muted_style(),
        )),
    };
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}

/// Render the idle desktop (no window chrome; windows draw on top).
pub fn render(app: &mut App, frame: &mut Frame) {
    let area = frame.area();
    render_wallpaper(app, frame, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Top panel
            Constraint::Min(5),    // Desktop
            Constraint::Length(1), // Status line
            Constraint::Length(3), // Dock
        ])
        .split(area);

    render_top_panel(app, frame, chunks[0]);
    render_desktop_icons(app, frame, chunks[1]);
    render_status_line(app, frame, chunks[2]);
    render_dock(app, frame, chunks[3]);
}

/// Render the boot splash.
pub fn render_boot(app: &mut App, frame: &mut Frame) {
    let area = frame.area();
    render_wallpaper(app, frame, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(3), // Portrait mark
            Constraint::Length(2), // Boot line
            Constraint::Length(1), // Progress bar
            Constraint::Length(2), // Stage indicators
            Constraint::Min(3),
        ])
        .split(area);

    let mark = Paragraph::new(Line::from(Span::styled(
        "◢◤ DGP ◥◣",
        Palette::title_style(),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(mark, chunks[1]);

    // Each boot line types itself out as its step elapses.
    let text = app.boot.current_text().unwrap_or("");
    let reveal_ticks = (app.boot.elapsed_in_step().as_millis() / 60) as u64;
    let revealed = Typewriter::new(text).frame(reveal_ticks);
    let pulse = PULSE_FRAMES[(app.tick / 3) as usize % PULSE_FRAMES.len()];
    let boot_line = Paragraph::new(Line::from(vec![
        Span::styled(revealed, Palette::title_style()),
        Span::raw(" "),
        Span::styled(pulse, Palette::prompt_style()),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(boot_line, chunks[2]);

    let bar_area = centered_rect(chunks[3], 50, 1);
    let gauge = Gauge::default()
        .ratio(app.boot.progress())
        .label(format!(
            "{}/{}",
            (app.boot.progress() * BOOT_STEPS.len() as f64).round() as usize,
            BOOT_STEPS.len()
        ))
        .gauge_style(Style::default().fg(Palette::accent()).bg(Palette::panel()));
    frame.render_widget(gauge, bar_area);

    let mut spans = Vec::new();
    for (name, lit) in app.boot.lit_stages() {
        let style = if lit {
            Palette::prompt_style().add_modifier(Modifier::BOLD)
        } else {
            Palette::muted_style()
        };
        spans.push(Span::styled(format!("● {name}   "), style));
    }
    let stages = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(stages, chunks[4]);
}

/// Render the suspend and shutdown overlays on top of everything.
pub fn render_overlays(app: &App, frame: &mut Frame) {
    match app.session.overlay() {
        Overlay::None => {}
        Overlay::Suspended => {
            let area = frame.area();
            frame.render_widget(Clear, area);
            frame.render_widget(
                Block::default().style(Style::default().bg(Palette::wallpaper())),
                area,
            );

            let (name, role, hint) = app.lock_screen_lines();
            let lines = vec![
                Line::default(),
                Line::from(Span::styled("( ◉ )", Palette::title_style())),
                Line::default(),
                Line::from(Span::styled(
                    name,
                    Palette::title_style().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(role, Palette::text_style())),
                Line::default(),
                Line::default(),
                Line::from(Span::styled(hint, Palette::muted_style())),
            ];
            let block = Paragraph::new(lines).alignment(Alignment::Center);
            frame.render_widget(block, centered_rect(area, area.width.min(60), 10));
        }
        Overlay::ShutdownConfirm => {
            let area = centered_rect(frame.area(), 52, 8);
            frame.render_widget(Clear, area);
            let dialog = Paragraph::new(vec![
                Line::default(),
                Line::from(Span::styled(t("shutdown.body"), Palette::text_style())),
                Line::default(),
                Line::from(vec![
                    Span::styled(
                        format!("[Enter] {}  ", t("shutdown.confirm")),
                        Palette::title_style(),
                    ),
                    Span::styled(format!("[Esc] {}", t("shutdown.cancel")), Palette::muted_style()),
                ]),
            ])
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Palette::border_style())
                    .title(Span::styled(
                        format!(" {} ", t("shutdown.title")),
                        Palette::title_style(),
                    ))
                    .style(Style::default().bg(Palette::window())),
            );
            frame.render_widget(dialog, area);
        }
    }
}

/// A rect of the given size centered in `area`.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
