//! sidenav - terminal page with a collapsible sidebar
//!
//! Binary entry point for the TUI application.

use std::io::stdout;
use std::time::Duration;

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::execute;
use ratatui::DefaultTerminal;

use sidenav::app::App;
use sidenav::config::Config;
use sidenav::logging;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    logging::init_from_env()?;

    let config = Config::from_env();
    tracing::info!(?config, "starting");

    let terminal = ratatui::init();
    let result = run(terminal, config);
    ratatui::restore();
    result
}

/// Run the application's main loop.
fn run(mut terminal: DefaultTerminal, config: Config) -> color_eyre::Result<()> {
    execute!(stdout(), EnableMouseCapture)?;
    // Release mouse capture even if the loop bails out
    let _guard = scopeguard::guard((), |_| {
        let _ = execute!(stdout(), DisableMouseCapture);
    });

    let mut app = App::new(config);

    while app.running {
        terminal.draw(|frame| app.render(frame))?;
        handle_events(&mut app)?;
    }

    Ok(())
}

/// Handle crossterm events.
fn handle_events(app: &mut App) -> color_eyre::Result<()> {
    if event::poll(Duration::from_millis(200))? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.on_key_event(key);
            }
            Event::Mouse(mouse) => app.on_mouse_event(mouse),
            _ => {}
        }
    }
    Ok(())
}
