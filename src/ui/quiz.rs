use ratatui::{
    prelude::*,
    widgets::{Gauge, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::Question;

const OPTION_LABELS: [char; 4] = ['A', 'B', 'C', 'D'];

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(question) = app.controller().current_question() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_progress(frame, chunks[0], app);
    render_progress_bar(frame, chunks[1], app);
    render_question_text(frame, chunks[3], question);
    render_options(frame, chunks[4], app, question);
    super::render_notice(frame, chunks[5], app);
    render_controls(frame, chunks[6]);
}

fn render_progress(frame: &mut Frame, area: Rect, app: &App) {
    let controller = app.controller();
    let total = controller.total_questions();
    let cursor = controller.cursor().unwrap_or(0);

    let line = Line::from(vec![
        Span::styled(
            format!("Question {} of {}", cursor + 1, total),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!("  ·  {}/{} Answered", controller.answered_count(), total),
            Style::default().fg(Color::Cyan),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_progress_bar(frame: &mut Frame, area: Rect, app: &App) {
    let percent = app.controller().progress_percent();
    let widget = Gauge::default()
        .gauge_style(Style::default().fg(Color::Blue).bg(Color::Black))
        .label(format!("{}%", percent))
        .percent(u16::from(percent));
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, question: &Question) {
    let lines = vec![
        Line::from(Span::styled(
            format!("[{}]", question.category),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            question.prompt.as_str(),
            Style::default().fg(Color::White).bold(),
        )),
    ];
    let widget = Paragraph::new(lines).wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, app: &App, question: &Question) {
    let highlighted = app.highlighted_option();
    let chosen = app
        .controller()
        .cursor()
        .and_then(|cursor| app.controller().answers()?.get(cursor));

    let mut lines: Vec<Line> = Vec::with_capacity(question.options.len() * 2);
    for (index, option) in question.options.iter().enumerate() {
        let is_highlighted = index == highlighted;
        let style = if is_highlighted {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_highlighted { ">" } else { " " };
        let radio = if chosen == Some(index) { "(•)" } else { "( )" };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} {} ", marker, radio), style),
            Span::styled(format!("{}. ", OPTION_LABELS[index]), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new(
        "j/k choose  ·  enter select  ·  h/l prev/next  ·  s submit  ·  esc quit",
    )
    .alignment(Alignment::Center)
    .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
