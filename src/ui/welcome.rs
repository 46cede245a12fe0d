use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let categories = app.controller().bank().categories();

    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(9),
        Constraint::Length(categories.len() as u16 + 2),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .split(area);

    render_intro(frame, chunks[1], app);
    render_categories(frame, chunks[2], app);
    super::render_notice(frame, chunks[3], app);
}

fn render_intro(frame: &mut Frame, area: Rect, app: &App) {
    let controller = app.controller();
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "ADWARE SECURITY ASSESSMENT",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(
            format!(
                "{} Questions · {}% required to pass and earn a certificate",
                controller.total_questions(),
                controller.config().pass_threshold
            )
            .fg(Color::DarkGray),
        ),
        Line::from(""),
        Line::from(vec![
            Span::styled("Full name (for certificate): ", Style::default().fg(Color::White)),
            Span::styled(app.name_input(), Style::default().fg(Color::Yellow)),
            Span::styled("_", Style::default().fg(Color::Yellow)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "[Enter] start  ·  [Esc] quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_categories(frame: &mut Frame, area: Rect, app: &App) {
    let lines: Vec<Line> = app
        .controller()
        .bank()
        .categories()
        .into_iter()
        .map(|entry| {
            Line::from(vec![
                Span::styled(format!("{:<24}", entry.category), Style::default().fg(Color::Gray)),
                Span::styled(
                    format!("{} question{}", entry.count, if entry.count == 1 { "" } else { "s" }),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Question Categories ")
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}
