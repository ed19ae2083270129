//! Input handling for the application

use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use super::state::App;
use crate::keys;

impl App {
    /// Handle key events
    pub fn on_key_event(&mut self, key: KeyEvent) {
        if keys::is_interrupt_key(&key) {
            self.quit();
            return;
        }

        if keys::is_toggle_key(&key) {
            self.activate_toggler();
            return;
        }

        match key.code {
            keys::QUIT | keys::ESC => self.quit(),
            _ => {}
        }
    }

    /// Handle mouse events. A left click on the toggler activates it.
    pub fn on_mouse_event(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        let hit = self
            .toggler_area
            .is_some_and(|area| area.contains(Position::new(mouse.column, mouse.row)));
        if hit {
            self.activate_toggler();
        }
    }
}
