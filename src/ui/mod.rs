mod quiz;
mod result;
mod welcome;

use ratatui::{prelude::*, widgets::Block, widgets::Paragraph};

use crate::app::{App, Notice};
use crate::models::Phase;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.phase() {
        Phase::NotStarted => welcome::render(frame, area, app),
        Phase::InProgress => quiz::render(frame, area, app),
        Phase::Completed => result::render(frame, area, app),
    }
}

/// Single centred line for the app's current notice, if any.
fn render_notice(frame: &mut Frame, area: Rect, app: &App) {
    let Some(notice) = app.notice() else {
        return;
    };

    let (text, color) = match notice {
        Notice::Info(text) => (text.as_str(), Color::Green),
        Notice::Error(text) => (text.as_str(), Color::Yellow),
    };
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(color);
    frame.render_widget(widget, area);
}
