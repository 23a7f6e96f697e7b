use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

pub fn render(
    frame: &mut Frame,
    area: Rect,
    category: &str,
    value: Option<u32>,
    prompt: &str,
    input: &str,
) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(5),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Fill(1),
    ])
    .margin(1)
    .split(area);

    render_category(frame, chunks[0], category, value);
    render_prompt(frame, chunks[1], prompt);
    frame.render_widget(Paragraph::new("Answer").fg(Color::DarkGray), chunks[2]);
    render_input(frame, chunks[3], input);
}

fn render_category(frame: &mut Frame, area: Rect, category: &str, value: Option<u32>) {
    let mut spans = vec![Span::styled(
        category.to_string(),
        Style::default().fg(Color::Yellow).bold(),
    )];
    if let Some(value) = value {
        spans.push(Span::styled(
            format!("  ${}", value),
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_prompt(frame: &mut Frame, area: Rect, prompt: &str) {
    let widget = Paragraph::new(prompt)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_input(frame: &mut Frame, area: Rect, input: &str) {
    let line = if input.is_empty() {
        Line::from(Span::styled(
            "Enter your answer here...",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(vec![
            Span::styled(input.to_string(), Style::default().fg(Color::Cyan)),
            Span::styled("_", Style::default().fg(Color::Cyan)),
        ])
    };

    let widget = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}
