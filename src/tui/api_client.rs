//! API client window
//!
//! The Postman-style window: endpoint sidebar, request bar, and a body
//! pane that shows either the literal JSON response or a rendered preview
//! of the portfolio section. Requests resolve after the simulated latency;
//! until then the pane shows the loading spinner.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::api::{Endpoint, BASE_URL};
use crate::content;
use crate::i18n::t;
use crate::ui::animations::{CountUp, PULSE_FRAMES};
use crate::ui::theme::current_theme_id;

use super::app::App;
use super::desktop::centered_rect;
use super::Palette;

pub fn render(app: &App, frame: &mut Frame) {
    let screen = frame.area();
    let area = centered_rect(
        screen,
        screen.width.saturating_sub(8).max(40),
        screen.height.saturating_sub(6).max(16),
    );
    frame.render_widget(Clear, area);

    let window = Block::default()
        .borders(Borders::ALL)
        .border_style(Palette::border_style())
        .title(Span::styled(
            format!(" {} ", current_theme_id().api_window_title()),
            Palette::title_style(),
        ))
        .title_bottom(
            Line::from(Span::styled(
                " ↑↓ endpoint · Enter send · v preview · m minimize · Esc close ",
                Palette::muted_style(),
            ))
            .alignment(Alignment::Right),
        )
        .style(Style::default().bg(Palette::window()));
    let inner = window.inner(area);
    frame.render_widget(window, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(30), Constraint::Min(20)])
        .split(inner);

    render_sidebar(app, frame, columns[0]);
    render_main(app, frame, columns[1]);
}

fn render_sidebar(app: &App, frame: &mut Frame, area: Rect) {
    let lang = app.language();
    let items: Vec<ListItem> = Endpoint::ALL
        .iter()
        .enumerate()
        .map(|(i, endpoint)| {
            let selected = i == app.api.selected;
            let method_style = Palette::prompt_style().add_modifier(Modifier::BOLD);
            let line = Line::from(vec![
                Span::styled(format!("{:<5}", endpoint.method().as_str()), method_style),
                Span::styled(endpoint.path(), Palette::text_style()),
                Span::styled(format!("  {}", endpoint.name(lang)), Palette::muted_style()),
            ]);
            let item = ListItem::new(line);
            if selected {
                item.style(Palette::selected_style())
            } else {
                item
            }
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::RIGHT)
            .border_style(Palette::border_style())
            .title(Span::styled(" API Endpoints ", Palette::title_style()))
            .title_bottom(Span::styled(" Portfolio Backend API v3.0 ", Palette::muted_style())),
    );
    frame.render_widget(list, area);
}

fn render_main(app: &App, frame: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Request bar
            Constraint::Length(1), // Status line
            Constraint::Min(3),    // Body
        ])
        .split(area);

    let endpoint = Endpoint::ALL[app.api.selected];
    let request_bar = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" {} ", endpoint.method().as_str()),
            Palette::selected_style(),
        ),
        Span::styled(
            format!(" {BASE_URL}{}", endpoint.path()),
            Palette::text_style(),
        ),
        Span::styled("  [Enter] Send  [v] Preview", Palette::muted_style()),
    ]));
    frame.render_widget(request_bar, rows[0]);

    let status = match (&app.api.pending, &app.api.response) {
        (Some(_), _) => Line::from(Span::styled(
            format!(
                " {} Sending request...",
                PULSE_FRAMES[(app.tick / 3) as usize % PULSE_FRAMES.len()]
            ),
            Palette::muted_style(),
        )),
        (None, Some((_, response))) => Line::from(vec![
            Span::styled(" Status: ", Palette::muted_style()),
            Span::styled(
                format!("{} {}", response.status, response.status_label()),
                if response.status == 200 {
                    Palette::prompt_style()
                } else {
                    Style::default().fg(ratatui::style::Color::Red)
                },
            ),
            Span::styled(
                format!("   Time: {}ms", response.response_time_ms),
                Palette::muted_style(),
            ),
        ]),
        (None, None) => Line::from(Span::styled(
            " Press Enter to send the request",
            Palette::muted_style(),
        )),
    };
    frame.render_widget(Paragraph::new(status), rows[1]);

    let body_block = Block::default()
        .borders(Borders::TOP)
        .border_style(Palette::border_style());
    let body_area = body_block.inner(rows[2]);
    frame.render_widget(body_block, rows[2]);

    match &app.api.response {
        Some((endpoint, response)) if app.api.pending.is_none() => {
            if app.api.show_preview {
                render_preview(app, *endpoint, frame, body_area);
            } else {
                let json = serde_json::to_string_pretty(&response.body)
                    .unwrap_or_else(|_| response.body.to_string());
                let paragraph = Paragraph::new(json)
                    .style(Palette::prompt_style())
                    .wrap(Wrap { trim: false })
                    .scroll((app.api.scroll, 0));
                frame.render_widget(paragraph, body_area);
            }
        }
        _ => {}
    }
}

/// Rendered preview of a portfolio section, shown in place of the raw
/// JSON body.
fn render_preview(app: &App, endpoint: Endpoint, frame: &mut Frame, area: Rect) {
    let lang = app.language();
    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            format!("▸ {} — {}", endpoint.name(lang), endpoint.key()),
            Palette::title_style(),
        )),
        Line::default(),
    ];

    match endpoint {
        Endpoint::About => {
            let profile = content::profile(lang);
            lines.push(Line::from(Span::styled(profile.name, Palette::text_style())));
            lines.push(Line::from(Span::styled(profile.role, Palette::muted_style())));
            lines.push(Line::from(Span::styled(
                format!("📍 {}", profile.location),
                Palette::text_style(),
            )));
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                t("about.description").to_string(),
                Palette::text_style(),
            )));
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                format!("{}: {}", t("skills.title"), profile.skills.join(", ")),
                Palette::muted_style(),
            )));
        }
        Endpoint::Experience => {
            for entry in content::experience() {
                lines.push(Line::from(Span::styled(
                    format!("{} — {}", entry.position, entry.company),
                    Palette::text_style(),
                )));
                lines.push(Line::from(Span::styled(
                    entry.duration,
                    Palette::muted_style(),
                )));
                for achievement in entry.achievements {
                    lines.push(Line::from(Span::styled(
                        format!("  • {achievement}"),
                        Palette::text_style(),
                    )));
                }
                lines.push(Line::default());
            }
        }
        Endpoint::Education => {
            for entry in content::education() {
                lines.push(Line::from(Span::styled(entry.degree, Palette::text_style())));
                lines.push(Line::from(Span::styled(
                    format!("{} · {} · {}", entry.institution, entry.period, entry.status),
                    Palette::muted_style(),
                )));
                lines.push(Line::default());
            }
        }
        Endpoint::Projects => {
            for project in content::projects(lang) {
                lines.push(Line::from(vec![
                    Span::styled(project.name, Palette::text_style()),
                    Span::styled(format!("  [{}]", project.status), Palette::prompt_style()),
                ]));
                lines.push(Line::from(Span::styled(
                    project.description,
                    Palette::muted_style(),
                )));
                lines.push(Line::from(Span::styled(
                    format!("  {}", project.technologies.join(" · ")),
                    Palette::muted_style(),
                )));
                lines.push(Line::default());
            }
        }
        Endpoint::Certifications => {
            for cert in content::certifications() {
                let mark = if cert.verified { "✔" } else { " " };
                lines.push(Line::from(Span::styled(
                    format!("{mark} {} — {} ({})", cert.name, cert.issuer, cert.level),
                    Palette::text_style(),
                )));
            }
        }
        Endpoint::Blog => {
            for post in content::blog_posts_featured_first() {
                let star = if post.featured { "★ " } else { "  " };
                lines.push(Line::from(Span::styled(
                    format!("{star}{}", post.title),
                    Palette::text_style(),
                )));
                lines.push(Line::from(Span::styled(
                    format!(
                        "  {} · {} min · {} views · {}",
                        post.published_at,
                        post.read_time,
                        post.views,
                        post.tags.join(", ")
                    ),
                    Palette::muted_style(),
                )));
            }
        }
        Endpoint::Testimonials => {
            for testimonial in content::testimonials() {
                lines.push(Line::from(Span::styled(
                    format!(
                        "“{}”",
                        testimonial.content
                    ),
                    Palette::text_style(),
                )));
                lines.push(Line::from(Span::styled(
                    format!(
                        "  — {}, {} @ {}  {}",
                        testimonial.name,
                        testimonial.position,
                        testimonial.company,
                        "★".repeat(testimonial.rating as usize)
                    ),
                    Palette::muted_style(),
                )));
                lines.push(Line::default());
            }
        }
        Endpoint::CaseStudies => {
            for study in content::case_studies() {
                lines.push(Line::from(Span::styled(study.title, Palette::text_style())));
                lines.push(Line::from(Span::styled(study.subtitle, Palette::muted_style())));
                lines.push(Line::from(Span::styled(
                    format!("  Problema: {}", study.problem),
                    Palette::text_style(),
                )));
                lines.push(Line::from(Span::styled(
                    format!("  Solución: {}", study.solution),
                    Palette::text_style(),
                )));
                for result in study.results {
                    lines.push(Line::from(Span::styled(
                        format!("  ✔ {result}"),
                        Palette::prompt_style(),
                    )));
                }
            }
        }
        Endpoint::Analytics => {
            let snapshot = crate::analytics::snapshot();
            // The headline numbers count up from zero after each request.
            let ticks = app.tick.saturating_sub(app.api.resolved_at_tick);
            let views = CountUp::new(snapshot.total_views as u64, 20).value(ticks);
            let visitors = CountUp::new(snapshot.unique_visitors as u64, 20).value(ticks);
            lines.push(Line::from(Span::styled(
                format!(
                    "Views {}   Visitors {}   Avg {}   Bounce {:.1}%",
                    views, visitors, snapshot.average_time, snapshot.bounce_rate
                ),
                Palette::text_style(),
            )));
            lines.push(Line::from(Span::styled(
                format!(
                    "Live: {} users · {} page views · {} sessions",
                    app.real_time.active_users, app.real_time.page_views, app.real_time.new_sessions
                ),
                Palette::prompt_style(),
            )));
            lines.push(Line::default());
            for page in &snapshot.top_pages {
                let filled = (page.percentage as usize * 20) / 100;
                lines.push(Line::from(vec![
                    Span::styled(format!("{:<12}", page.page), Palette::text_style()),
                    Span::styled("█".repeat(filled), Palette::prompt_style()),
                    Span::styled(
                        format!(" {}% ({})", page.percentage, page.views),
                        Palette::muted_style(),
                    ),
                ]));
            }
        }
        Endpoint::Availability => {
            for slot in content::availability_slots() {
                lines.push(Line::from(Span::styled(
                    format!("{} {} · {} · {} min", slot.date, slot.time, slot.kind, slot.duration),
                    Palette::text_style(),
                )));
            }
        }
        Endpoint::Contact => {
            let contact = content::contact();
            lines.push(Line::from(Span::styled(
                t("contact.description").to_string(),
                Palette::text_style(),
            )));
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                format!("Email     {}", contact.email),
                Palette::text_style(),
            )));
            lines.push(Line::from(Span::styled(
                format!("LinkedIn  {}", contact.linkedin),
                Palette::text_style(),
            )));
            lines.push(Line::from(Span::styled(
                format!("GitHub    {}", contact.github),
                Palette::text_style(),
            )));
        }
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.api.scroll, 0));
    frame.render_widget(paragraph, area);
}
