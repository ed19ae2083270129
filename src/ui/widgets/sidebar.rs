//! Sidebar widget
//!
//! Reads the sidebar's collapsed marker and the toggler icon label from the
//! view tree. Expanded, the sidebar lists the nav entries under the toggler;
//! collapsed, it shrinks to a narrow strip holding only the toggler.

use ratatui::{
    Frame,
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::symbols::{self, glyph_for};
use crate::ui::theme;
use crate::ui::tree::{ElementId, Role, ViewTree};

/// Width of a collapsed sidebar, borders included
pub const COLLAPSED_WIDTH: u16 = 5;

/// Width the sidebar occupies for its current marker
pub fn sidebar_width(tree: &ViewTree, sidebar: ElementId, expanded_width: u16) -> u16 {
    if tree.has_marker(sidebar) {
        COLLAPSED_WIDTH
    } else {
        expanded_width.max(COLLAPSED_WIDTH)
    }
}

/// Render the sidebar into `area`.
///
/// Returns the screen area of the toggler control, if one was drawn, so
/// mouse clicks can be routed to it.
pub fn render_sidebar(frame: &mut Frame, area: Rect, tree: &ViewTree) -> Option<Rect> {
    let sidebar = tree.query(Role::Sidebar)?;
    let collapsed = tree.has_marker(sidebar);

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::sidebar::BORDER));
    if !collapsed {
        block = block.title(Line::from(" Menu ").bold());
    }
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 || inner.width == 0 {
        return None;
    }

    let toggler_area = tree.query_within(sidebar, Role::SidebarToggler).map(|toggler| {
        let row = Rect { height: 1, ..inner };
        render_toggler(frame, row, tree, toggler, collapsed);
        row
    });

    if !collapsed {
        let top = u16::from(toggler_area.is_some());
        let nav_area = Rect {
            y: inner.y + top,
            height: inner.height.saturating_sub(top),
            ..inner
        };
        render_nav(frame, nav_area, tree, sidebar);
    }

    toggler_area
}

fn render_toggler(
    frame: &mut Frame,
    area: Rect,
    tree: &ViewTree,
    toggler: ElementId,
    collapsed: bool,
) {
    let label = tree
        .query_within(toggler, Role::Icon)
        .map_or("", |icon| tree.label(icon));
    let glyph = Span::styled(
        format!(" {} ", glyph_for(label)),
        Style::default().fg(theme::sidebar::TOGGLER).bold(),
    );
    let line = if collapsed {
        Line::from(glyph).centered()
    } else {
        Line::from(glyph).right_aligned()
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_nav(frame: &mut Frame, area: Rect, tree: &ViewTree, sidebar: ElementId) {
    let lines: Vec<Line> = tree
        .children(sidebar)
        .filter(|id| tree.get(*id).is_some_and(|e| e.role == Role::NavItem))
        .map(|id| {
            Line::from(vec![
                Span::styled(
                    format!(" {} ", symbols::NAV_BULLET),
                    Style::default().fg(theme::sidebar::NAV_BULLET),
                ),
                Span::styled(
                    tree.label(id).to_string(),
                    Style::default().fg(theme::sidebar::NAV_ITEM),
                ),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}
