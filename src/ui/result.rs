use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::{AssessmentResult, CategoryScore, QuestionReview};

const OPTION_LABELS: [char; 4] = ['A', 'B', 'C', 'D'];

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let controller = app.controller();
    let Some(result) = controller.result() else {
        return;
    };
    let breakdown = controller.category_breakdown().unwrap_or_default();
    let review = controller.review().unwrap_or_default();

    let chunks = Layout::vertical([
        Constraint::Length(7),
        Constraint::Length(breakdown.len() as u16 + 2),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[0], app, result);
    render_category_breakdown(frame, chunks[1], &breakdown);
    render_review(frame, chunks[2], &review, app.result_scroll());
    super::render_notice(frame, chunks[3], app);
    render_controls(frame, chunks[4], result.passed);
}

fn grade_color(result: &AssessmentResult) -> Color {
    if result.passed {
        Color::Green
    } else {
        Color::Red
    }
}

fn render_score_summary(frame: &mut Frame, area: Rect, app: &App, result: &AssessmentResult) {
    let total = app.controller().total_questions();
    let color = grade_color(result);
    let verdict = if result.passed {
        "PASSED"
    } else {
        "NOT PASSED"
    };
    let follow_up = if result.passed {
        "Congratulations! Press d to download your certificate.".to_string()
    } else {
        format!(
            "You need {}% to pass. Review the explanations below and try again.",
            app.controller().config().pass_threshold
        )
    };

    let content = vec![
        Line::from(Span::styled(
            "ASSESSMENT RESULTS",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{}%  ·  {}", result.percentage, verdict),
            Style::default().fg(color).bold(),
        )),
        Line::from(vec![
            Span::styled(
                format!("{}/{} correct", result.correct_count, total),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(
                format!("  ·  {} min", result.elapsed_minutes),
                Style::default().fg(Color::Gray),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(follow_up, Style::default().fg(Color::DarkGray))),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_category_breakdown(frame: &mut Frame, area: Rect, breakdown: &[CategoryScore]) {
    let lines: Vec<Line> = breakdown
        .iter()
        .map(|score| {
            let color = if score.correct == score.total {
                Color::Green
            } else {
                Color::Yellow
            };
            Line::from(vec![
                Span::styled(
                    format!("{:<24}", score.category),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(
                    format!("{}/{} ({}%)", score.correct, score.total, score.percentage()),
                    Style::default().fg(color),
                ),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines).block(
        Block::default()
            .title(" Performance by Category ")
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_review(frame: &mut Frame, area: Rect, review: &[QuestionReview<'_>], scroll: usize) {
    let mut lines: Vec<Line> = Vec::new();
    for entry in review {
        let (symbol, color) = if entry.is_correct {
            ("+", Color::Green)
        } else {
            ("-", Color::Red)
        };
        let question = entry.question;

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", symbol), Style::default().fg(color)),
            Span::styled(
                format!("{:2}. ", entry.index + 1),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(question.prompt.as_str(), Style::default().fg(Color::White)),
        ]));

        let selected = entry
            .selected
            .and_then(|option| Some((option, question.options.get(option)?)))
            .map(|(option, text)| format!("{}. {}", OPTION_LABELS[option], text))
            .unwrap_or_else(|| "no answer".to_string());
        lines.push(Line::from(Span::styled(
            format!("     Your answer: {}", selected),
            Style::default().fg(color),
        )));

        if !entry.is_correct {
            lines.push(Line::from(Span::styled(
                format!(
                    "     Correct answer: {}. {}",
                    OPTION_LABELS[question.correct_answer], question.options[question.correct_answer]
                ),
                Style::default().fg(Color::Green),
            )));
        }
        lines.push(Line::from(Span::styled(
            format!("     {}", question.explanation),
            Style::default().fg(Color::DarkGray).italic(),
        )));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Detailed Review ")
                .borders(Borders::TOP)
                .border_style(Color::DarkGray)
                .padding(Padding::horizontal(1)),
        )
        .scroll((scroll as u16, 0));
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, passed: bool) {
    let text = if passed {
        "j/k scroll  ·  d download certificate  ·  r retake  ·  q quit"
    } else {
        "j/k scroll  ·  r retake  ·  q quit"
    };
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
