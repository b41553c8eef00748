//! Terminal window
//!
//! Renders the interpreter's line list and the live prompt. The view keeps
//! the newest lines in sight; recall and editing state live on the `App`.

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::term::{TermLine, PROMPT};

use super::app::App;
use super::desktop::centered_rect;
use super::Palette;

pub fn render(app: &App, frame: &mut Frame) {
    let screen = frame.area();
    let area = centered_rect(
        screen,
        (screen.width / 2).max(50).min(screen.width),
        (screen.height / 2).max(14).min(screen.height),
    );
    frame.render_widget(Clear, area);

    let window = Block::default()
        .borders(Borders::ALL)
        .border_style(Palette::border_style())
        .title(Span::styled(" daniel@portfolio: ~ ", Palette::title_style()))
        .title_bottom(
            Line::from(Span::styled(
                " ↑↓ history · Esc close ",
                Palette::muted_style(),
            ))
            .alignment(Alignment::Right),
        )
        .style(Style::default().bg(ratatui::style::Color::Black));
    let inner = window.inner(area);
    frame.render_widget(window, area);

    render_lines(app, frame, inner);
}

fn render_lines(app: &App, frame: &mut Frame, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();
    for line in app.term.lines() {
        match line {
            TermLine::Input(text) => lines.push(Line::from(vec![
                Span::styled(PROMPT, Palette::prompt_style()),
                Span::styled(format!(" {text}"), Palette::text_style()),
            ])),
            TermLine::Output(text) => {
                for part in text.lines() {
                    lines.push(Line::from(Span::styled(
                        part.to_string(),
                        Palette::text_style(),
                    )));
                }
            }
        }
    }

    // Live prompt with a block cursor.
    lines.push(Line::from(vec![
        Span::styled(PROMPT, Palette::prompt_style()),
        Span::styled(format!(" {}", app.term_input), Palette::text_style()),
        Span::styled("█", Palette::prompt_style()),
    ]));

    // Keep the newest lines visible; wrapped lines count extra rows, so
    // measure against the pane width.
    let width = area.width.max(1) as usize;
    let mut rows = 0usize;
    let mut start = lines.len();
    while start > 0 {
        let line_width: usize = lines[start - 1]
            .spans
            .iter()
            .map(|s| s.content.width())
            .sum::<usize>()
            .max(1);
        rows += line_width.div_ceil(width);
        if rows > area.height as usize {
            break;
        }
        start -= 1;
    }

    let visible: Vec<Line> = lines.into_iter().skip(start).collect();
    frame.render_widget(
        Paragraph::new(visible).wrap(ratatui::widgets::Wrap { trim: false }),
        area,
    );
}
