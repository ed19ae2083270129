//! Rendering tests for the sidebar and its toggler

use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use insta::assert_snapshot;
use ratatui::{Terminal, backend::TestBackend};

use sidenav::app::App;
use sidenav::config::Config;
use sidenav::ui::tree::{Layout, Role, ViewTree};

const WIDTH: u16 = 40;
const HEIGHT: u16 = 12;

fn draw(app: &mut App) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();
    terminal
}

/// Text of columns `[from, to)` on row `y`
fn row(terminal: &Terminal<TestBackend>, y: u16, from: u16, to: u16) -> String {
    let buffer = terminal.backend().buffer();
    (from..to).map(|x| buffer[(x, y)].symbol()).collect()
}

fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn test_expanded_sidebar_header() {
    let mut app = App::default();
    let terminal = draw(&mut app);

    assert_snapshot!(row(&terminal, 0, 0, 24), @"┌ Menu ────────────────┐");
    assert_snapshot!(row(&terminal, 1, 0, 24), @"│                    ‹ │");
}

#[test]
fn test_expanded_sidebar_lists_nav_items() {
    let mut app = App::default();
    let terminal = draw(&mut app);

    let body: Vec<String> = (2..7).map(|y| row(&terminal, y, 0, 24)).collect();
    for title in ["Home", "Chat", "Mood", "Resources", "Admin tools"] {
        assert!(
            body.iter().any(|line| line.contains(title)),
            "{title} missing from {body:?}"
        );
    }
}

#[test]
fn test_collapsed_sidebar_shows_only_toggler() {
    let mut app = App::default();
    app.activate_toggler();
    let terminal = draw(&mut app);

    assert_snapshot!(row(&terminal, 1, 0, 5), @"│ › │");
    for y in 2..HEIGHT - 1 {
        assert!(!row(&terminal, y, 0, 5).contains("Home"));
    }
}

#[test]
fn test_click_toggles_rendered_state() {
    let mut app = App::default();
    draw(&mut app);

    // Expanded toggler glyph sits at column 21
    app.on_mouse_event(click(21, 1));
    let terminal = draw(&mut app);
    assert!(app.sidebar_collapsed());
    assert_eq!(row(&terminal, 1, 2, 3), "›");

    app.on_mouse_event(click(2, 1));
    let terminal = draw(&mut app);
    assert!(!app.sidebar_collapsed());
    assert_eq!(row(&terminal, 1, 21, 22), "‹");
}

#[test]
fn test_page_without_toggler_renders_nav_first() {
    let config = Config {
        layout: Layout::without_toggler(),
        ..Config::default()
    };
    let mut app = App::new(config);
    let terminal = draw(&mut app);

    assert!(row(&terminal, 1, 0, 24).contains("• Home"));
    assert!(!row(&terminal, 1, 0, 24).contains('‹'));
}

#[test]
fn test_configured_sidebar_width() {
    let config = Config {
        sidebar_width: 16,
        ..Config::default()
    };
    let mut app = App::new(config);
    let terminal = draw(&mut app);

    assert_eq!(row(&terminal, 0, 15, 16), "┐");
}

#[test]
fn test_content_pane_reads_tree_label() {
    let mut app = App::default();
    let terminal = draw(&mut app);

    let pane: Vec<String> = (0..HEIGHT - 1).map(|y| row(&terminal, y, 24, WIDTH)).collect();
    assert!(pane.iter().any(|line| line.contains("sidenav")), "{pane:?}");
    assert!(pane.iter().any(|line| line.contains("Pick")), "{pane:?}");
}

#[test]
fn test_tree_without_content_leaves_pane_blank() {
    let mut tree = ViewTree::new();
    let sidebar = tree.push(Role::Sidebar, None);
    let toggler = tree.push(Role::SidebarToggler, Some(sidebar));
    tree.push(Role::Icon, Some(toggler));

    let mut app = App::with_tree(Config::default(), tree);
    let terminal = draw(&mut app);

    for y in 0..HEIGHT - 1 {
        assert_eq!(row(&terminal, y, 24, WIDTH).trim(), "", "row {y}");
    }
    assert_snapshot!(row(&terminal, 1, 0, 24), @"│                    ‹ │");
}
