//! Rendering logic for the application

use ratatui::{Frame, prelude::*};

use super::state::App;
use crate::keys;
use crate::ui::theme;
use crate::ui::tree::Role;
use crate::ui::widgets::{
    render_error_banner, render_placeholder, render_sidebar, render_status_bar, sidebar_width,
};

const CONTENT_TITLE: &str = " sidenav ";

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let main_area = Rect {
            height: if area.height >= 2 {
                area.height - 1
            } else {
                area.height
            },
            ..area
        };

        let (sidebar_area, content_area) = self.split_main(main_area);

        self.toggler_area = sidebar_area.and_then(|area| render_sidebar(frame, area, &self.tree));
        if let Some(content) = self.tree.query(Role::Content) {
            render_placeholder(
                frame,
                content_area,
                CONTENT_TITLE,
                theme::content::TITLE,
                self.tree.label(content),
            );
        }

        render_status_bar(frame, keys::current_hints(self.toggler.is_some()));

        if let Some(ref error) = self.bind_error {
            render_error_banner(frame, error);
        }
    }

    /// Split the main area into sidebar and content columns
    fn split_main(&self, area: Rect) -> (Option<Rect>, Rect) {
        let Some(sidebar) = self.tree.query(Role::Sidebar) else {
            return (None, area);
        };

        let width = sidebar_width(&self.tree, sidebar, self.config.sidebar_width).min(area.width);
        let [sidebar_area, content_area] =
            Layout::horizontal([Constraint::Length(width), Constraint::Min(0)]).areas(area);
        (Some(sidebar_area), content_area)
    }
}
