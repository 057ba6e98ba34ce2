//! Main application state and TUI event loop for the vitals monitor.
//!
//! [`App`] owns the theme and the last received session snapshot, and drives
//! the terminal event loop: keyboard input is translated into session
//! commands, snapshot updates arrive on an async channel.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use tokio::sync::mpsc;

use vitals_runtime::{SessionCommand, SessionSnapshot};

use crate::session_view;
use crate::themes::Theme;

// ── Key handling ──────────────────────────────────────────────────────────────

/// What a key press asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Start a measuring session.
    StartSession,
    /// Stop the current session.
    StopSession,
    /// Stop the session and leave the TUI.
    Quit,
    /// Key is not bound to anything.
    None,
}

/// Map a keyboard event to an application action (extracted for testability).
pub fn key_action(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Char('q') | KeyCode::Char('Q') => KeyAction::Quit,
        KeyCode::Char('s') | KeyCode::Char('S') => KeyAction::StartSession,
        KeyCode::Char('x') | KeyCode::Char('X') => KeyAction::StopSession,
        _ => KeyAction::None,
    }
}

// ── App ───────────────────────────────────────────────────────────────────────

/// Root application state for the vitals TUI.
pub struct App {
    /// Active colour theme.
    pub theme: Theme,
    /// Engine scenario name, shown in the header.
    pub scenario: String,
    /// Polling interval in seconds, shown in the header.
    pub refresh_rate: u32,
    /// Set to `true` to break out of the event loop on the next iteration.
    pub should_quit: bool,
    /// Most recent session snapshot.
    pub snapshot: SessionSnapshot,
}

impl App {
    /// Construct a new application with the given configuration.
    pub fn new(theme_name: &str, scenario: String, refresh_rate: u32) -> Self {
        Self {
            theme: Theme::from_name(theme_name),
            scenario,
            refresh_rate,
            should_quit: false,
            snapshot: SessionSnapshot::default(),
        }
    }

    // ── Event loop ────────────────────────────────────────────────────────────

    /// Run the vitals TUI until the user quits or the session driver goes away.
    ///
    /// Uses `crossterm::event::poll` (synchronous, with a 250 ms timeout) so
    /// the terminal event loop stays on the current thread while snapshot
    /// updates arrive on the async channel via `try_recv`.
    ///
    /// Keys: `s` starts a session, `x` stops it, `q` / `Ctrl+C` quit. Quitting
    /// sends a final `Stop` so the engine is halted before teardown.
    pub async fn run(
        mut self,
        commands: mpsc::Sender<SessionCommand>,
        mut snapshots: mpsc::Receiver<SessionSnapshot>,
    ) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let tick_rate = Duration::from_millis(250);

        let result = loop {
            terminal.draw(|frame| self.render(frame))?;

            // Handle keyboard events with a short timeout so we don't block.
            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    match key_action(key) {
                        KeyAction::Quit => {
                            let _ = commands.send(SessionCommand::Stop).await;
                            break Ok(());
                        }
                        KeyAction::StartSession => {
                            let _ = commands.send(SessionCommand::Start).await;
                        }
                        KeyAction::StopSession => {
                            let _ = commands.send(SessionCommand::Stop).await;
                        }
                        KeyAction::None => {}
                    }
                }
            }

            // Drain any pending snapshots (non-blocking); keep only the latest.
            loop {
                match snapshots.try_recv() {
                    Ok(snapshot) => self.snapshot = snapshot,
                    Err(mpsc::error::TryRecvError::Empty) => break,
                    Err(mpsc::error::TryRecvError::Disconnected) => {
                        self.should_quit = true;
                        break;
                    }
                }
            }

            if self.should_quit {
                break Ok(());
            }
        };

        // Restore terminal state unconditionally.
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    // ── Private helpers ───────────────────────────────────────────────────────

    /// Render the current snapshot into `frame`.
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        session_view::render_session_view(
            frame,
            area,
            &self.snapshot,
            &self.scenario,
            self.refresh_rate,
            &self.theme,
        );
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;
    use vitals_runtime::SessionState;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    // ── key_action ────────────────────────────────────────────────────────

    #[test]
    fn test_quit_keys() {
        assert_eq!(key_action(key(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(key_action(key(KeyCode::Char('Q'))), KeyAction::Quit);
        assert_eq!(
            key_action(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyAction::Quit
        );
    }

    #[test]
    fn test_session_keys() {
        assert_eq!(key_action(key(KeyCode::Char('s'))), KeyAction::StartSession);
        assert_eq!(key_action(key(KeyCode::Char('S'))), KeyAction::StartSession);
        assert_eq!(key_action(key(KeyCode::Char('x'))), KeyAction::StopSession);
        assert_eq!(key_action(key(KeyCode::Char('X'))), KeyAction::StopSession);
    }

    #[test]
    fn test_unbound_keys_do_nothing() {
        assert_eq!(key_action(key(KeyCode::Char('c'))), KeyAction::None);
        assert_eq!(key_action(key(KeyCode::Enter)), KeyAction::None);
        assert_eq!(key_action(key(KeyCode::Esc)), KeyAction::None);
    }

    // ── App::new ──────────────────────────────────────────────────────────

    #[test]
    fn test_app_creation_defaults() {
        let app = App::new("dark", "clean".to_string(), 1);
        assert_eq!(app.scenario, "clean");
        assert_eq!(app.refresh_rate, 1);
        assert!(!app.should_quit);
        assert_eq!(app.snapshot.state, SessionState::Stopped);
    }

    #[test]
    fn test_app_creation_light_theme() {
        let app = App::new("light", "face-loss".to_string(), 2);
        assert_eq!(app.theme.text.fg, Some(Color::Black));
        assert_eq!(app.scenario, "face-loss");
    }

    #[test]
    fn test_app_creation_unknown_theme_falls_back() {
        // Should not panic for unknown theme names.
        let app = App::new("neon", "clean".to_string(), 1);
        assert!(!app.should_quit);
    }
}
