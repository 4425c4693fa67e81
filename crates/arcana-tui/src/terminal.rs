//! Terminal setup, teardown, and main event loop.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;

use crate::app::TuiApp;

/// Launch the TUI application.
pub fn run(mut app: TuiApp) -> Result<(), String> {
    enable_raw_mode().map_err(|e| format!("terminal error: {e}"))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| format!("terminal error: {e}"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| format!("terminal error: {e}"))?;

    let result = run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

/// Main event loop.
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut TuiApp,
) -> Result<(), String> {
    loop {
        terminal
            .draw(|frame| crate::screen::draw(frame, app))
            .map_err(|e| format!("draw error: {e}"))?;

        if app.should_quit {
            return Ok(());
        }

        let event = event::read().map_err(|e| format!("event error: {e}"))?;
        handle_event(app, event);
    }
}

/// Handle a crossterm event.
pub fn handle_event(app: &mut TuiApp, event: Event) {
    if let Event::Key(key) = event
        && key.kind == KeyEventKind::Press
    {
        handle_key(app, key);
    }
}

/// Handle global shortcuts, forwarding everything else to the app.
fn handle_key(app: &mut TuiApp, key: crossterm::event::KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            // Esc closes the popup first
            if app.show_help && key.code == KeyCode::Esc {
                app.show_help = false;
            } else {
                app.should_quit = true;
            }
        }
        KeyCode::Char('?') => app.show_help = !app.show_help,
        _ => app.handle_key(key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcana_core::{FixedCalendar, ReadingConfig, ReadingSession};
    use crossterm::event::KeyEvent;

    fn app() -> TuiApp {
        let cal = FixedCalendar::parse("2024-03-05").unwrap();
        TuiApp::new(ReadingSession::new(ReadingConfig::default(), Box::new(cal)).unwrap())
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn ctrl_c_quits() {
        let mut app = app();
        handle_event(&mut app, key(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn esc_closes_help_before_quitting() {
        let mut app = app();
        handle_event(&mut app, key(KeyCode::Char('?'), KeyModifiers::NONE));
        assert!(app.show_help);
        handle_event(&mut app, key(KeyCode::Esc, KeyModifiers::NONE));
        assert!(!app.show_help);
        assert!(!app.should_quit);
        handle_event(&mut app, key(KeyCode::Esc, KeyModifiers::NONE));
        assert!(app.should_quit);
    }

    #[test]
    fn other_keys_reach_the_session() {
        let mut app = app();
        handle_event(&mut app, key(KeyCode::Char('m'), KeyModifiers::NONE));
        assert_eq!(app.session.mode(), arcana_core::ReadingMode::Spread3);
    }
}
