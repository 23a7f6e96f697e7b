//! Loading, correct, game-over and connection-problem screens.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::view::Body;

pub fn render(frame: &mut Frame, area: Rect, body: &Body) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(9),
        Constraint::Fill(1),
    ])
    .split(area);

    let content = match body {
        Body::Loading { message } => vec![
            Line::from(""),
            Line::from(""),
            Line::from((*message).fg(Color::Yellow)),
        ],
        Body::Correct { headline, message } => summary(headline, Color::Green, message, None),
        Body::GameOver {
            headline,
            message,
            answer,
        } => summary(headline, Color::Red, message, Some(answer.as_str())),
        Body::FetchFailed { headline, message } => {
            summary(headline, Color::Yellow, message, None)
        }
        Body::Home { .. } | Body::Question { .. } => return,
    };

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray),
        );
    frame.render_widget(widget, chunks[1]);
}

fn summary<'a>(
    headline: &'a str,
    color: Color,
    message: &'a str,
    answer: Option<&'a str>,
) -> Vec<Line<'a>> {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(headline, Style::default().fg(color).bold())),
        Line::from(""),
        Line::from(message.fg(Color::White)),
    ];

    if let Some(answer) = answer {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("The answer was: ", Style::default().fg(Color::DarkGray)),
            Span::styled(answer, Style::default().fg(Color::Cyan).bold()),
        ]));
    }
    lines
}
