//! Rendering tests for the status bar and error banner

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{Terminal, backend::TestBackend};

use sidenav::app::App;
use sidenav::config::Config;
use sidenav::ui::tree::Layout;

fn last_row(app: &mut App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();
    let buffer = terminal.backend().buffer();
    (0..60).map(|x| buffer[(x, 9)].symbol()).collect()
}

#[test]
fn test_status_bar_shows_toggle_hint() {
    let mut app = App::default();
    let status = last_row(&mut app);
    assert!(status.contains("[[] Sidebar"), "{status}");
    assert!(status.contains("[q] Quit"), "{status}");
}

#[test]
fn test_status_bar_without_toggler_hides_toggle_hint() {
    let config = Config {
        layout: Layout::without_toggler(),
        ..Config::default()
    };
    let mut app = App::new(config);
    let status = last_row(&mut app);
    assert!(!status.contains("Sidebar"), "{status}");
    assert!(status.contains("[q] Quit"), "{status}");
}

#[test]
fn test_bind_error_banner() {
    let config = Config {
        layout: Layout {
            toggler: true,
            icon: false,
        },
        ..Config::default()
    };
    let mut app = App::new(config);
    // Unrelated keys do not hide a bind failure
    app.on_key_event(KeyEvent::from(KeyCode::Char('x')));

    let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();
    let buffer = terminal.backend().buffer();
    let banner: String = (0..60).map(|x| buffer[(x, 7)].symbol()).collect();
    assert!(banner.contains("Error:"), "{banner}");
    assert!(banner.contains("toggler icon not found"), "{banner}");
}
