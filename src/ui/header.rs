use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::view::{GAME_TITLE, Header};

pub fn render(frame: &mut Frame, area: Rect, header: &Header) {
    let chunks = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Fill(1),
        Constraint::Fill(1),
    ])
    .split(area);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Color::DarkGray);
    frame.render_widget(block, area);

    frame.render_widget(score(" High Score: ", header.best, Alignment::Left), chunks[0]);

    let title = Paragraph::new(GAME_TITLE)
        .alignment(Alignment::Center)
        .fg(Color::Cyan)
        .bold();
    frame.render_widget(title, chunks[1]);

    if let Some(current) = header.current {
        frame.render_widget(score("Total Score: ", current, Alignment::Right), chunks[2]);
    }
}

fn score(label: &str, value: u32, alignment: Alignment) -> Paragraph<'static> {
    Paragraph::new(Line::from(vec![
        Span::styled(label.to_string(), Style::default().fg(Color::DarkGray)),
        Span::styled(value.to_string(), Style::default().fg(Color::White).bold()),
    ]))
    .alignment(alignment)
}
