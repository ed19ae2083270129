//! Status bar widget

use ratatui::{Frame, prelude::*, text::Line, widgets::Paragraph};

use crate::keys::KeyHint;

/// Build a status bar line from key hints
pub fn build_status_bar(hints: &[KeyHint]) -> Line<'static> {
    let mut spans = Vec::new();

    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            format!(" [{}] {} ", hint.key, hint.label),
            Style::default().fg(Color::Black).bg(hint.color),
        ));
    }

    Line::from(spans)
}

/// Calculate status bar area at bottom of `area`
pub fn status_bar_area(area: Rect) -> Option<Rect> {
    if area.height < 2 {
        return None;
    }

    Some(Rect {
        x: area.x,
        y: area.y + area.height - 1,
        width: area.width,
        height: 1,
    })
}

/// Render the key hint status bar on the last row of the frame
pub fn render_status_bar(frame: &mut Frame, hints: &[KeyHint]) {
    let Some(status_area) = status_bar_area(frame.area()) else {
        return;
    };

    frame.render_widget(Paragraph::new(build_status_bar(hints)), status_area);
}
