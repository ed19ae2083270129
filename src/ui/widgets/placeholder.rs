//! Placeholder pane widget

use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Render a bordered pane with a title and body text into `area`.
pub fn render_placeholder(frame: &mut Frame, area: Rect, title: &str, color: Color, body: &str) {
    let title = Line::from(title).bold().fg(color).centered();
    frame.render_widget(
        Paragraph::new(body)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title(title)),
        area,
    );
}
