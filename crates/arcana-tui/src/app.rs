//! Top-level application state wrapping the reading session.

use crossterm::event::{KeyCode, KeyEvent};
use tracing::warn;

use arcana_core::ReadingSession;

/// Main application state for the TUI.
pub struct TuiApp {
    /// The reading session being displayed.
    pub session: ReadingSession,
    /// Whether to show the help popup.
    pub show_help: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Last error, shown in the status bar until the next action.
    pub error: Option<String>,
}

impl TuiApp {
    /// Create a new app around a session.
    pub fn new(session: ReadingSession) -> Self {
        Self {
            session,
            show_help: false,
            should_quit: false,
            error: None,
        }
    }

    /// Handle a key that is not a global shortcut.
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.error = None;
        match key.code {
            KeyCode::Right | KeyCode::Char('l') => self.session.next_sign(),
            KeyCode::Left | KeyCode::Char('h') => self.session.prev_sign(),
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Char('m') => self.session.toggle_mode(),
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('d') => self.draw(),
            _ => {}
        }
    }

    fn draw(&mut self) {
        if let Err(e) = self.session.draw() {
            warn!(error = %e, "draw failed");
            self.error = Some(e.to_string());
        }
    }

    /// Context-sensitive status bar text.
    pub fn status_hint(&self) -> &str {
        match &self.error {
            Some(e) => e.as_str(),
            None => {
                "\u{2190}/\u{2192}:sign  m/Tab:reading type  Enter/Space:draw  ?:help  q:quit"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcana_core::{FixedCalendar, ReadingConfig, ReadingMode, ZodiacSign};
    use crossterm::event::KeyModifiers;

    fn app() -> TuiApp {
        let cal = FixedCalendar::parse("2024-03-05").unwrap();
        let session = ReadingSession::new(ReadingConfig::default().with_seed(3), Box::new(cal))
            .unwrap();
        TuiApp::new(session)
    }

    fn press(app: &mut TuiApp, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn arrows_cycle_sign() {
        let mut app = app();
        press(&mut app, KeyCode::Right);
        assert_eq!(app.session.sign(), ZodiacSign::Sagittarius);
        press(&mut app, KeyCode::Char('h'));
        press(&mut app, KeyCode::Left);
        assert_eq!(app.session.sign(), ZodiacSign::Libra);
    }

    #[test]
    fn mode_toggle_then_draw() {
        let mut app = app();
        press(&mut app, KeyCode::Char('m'));
        assert_eq!(app.session.mode(), ReadingMode::Spread3);
        assert_eq!(app.session.drawn().len(), 1);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.drawn().len(), 3);
        assert!(app.session.is_consistent());

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.session.drawn().len(), 1);
        assert_eq!(app.session.drawn()[0].id, "fool");
    }

    #[test]
    fn status_hint_mentions_draw() {
        let app = app();
        assert!(app.status_hint().contains("draw"));
    }
}
