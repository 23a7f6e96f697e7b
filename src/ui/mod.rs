mod header;
mod home;
mod outcome;
mod question;

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use crate::view::{Body, Control, View};

pub fn render(frame: &mut Frame, view: &View) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    header::render(frame, chunks[0], &view.header);

    match &view.body {
        Body::Home {
            title,
            rules,
            notice,
        } => home::render(frame, chunks[1], title, rules, notice.as_deref()),
        Body::Question {
            category,
            value,
            prompt,
            input,
        } => question::render(frame, chunks[1], category, *value, prompt, input),
        body => outcome::render(frame, chunks[1], body),
    }

    render_controls(frame, chunks[2], &view.controls);
}

fn render_controls(frame: &mut Frame, area: Rect, controls: &[Control]) {
    let text = controls
        .iter()
        .map(|control| format!("{} {}", control.key, control.label))
        .collect::<Vec<_>>()
        .join("  ·  ");

    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
