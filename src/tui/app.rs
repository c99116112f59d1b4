//! Front-end state around the session.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pocket_games::{Feedback, GamesConfig, Session, SessionControl};
use tracing::{debug, warn};

use super::input::InputMapper;

/// Session plus what only the terminal needs: the key mapper and a notice
/// line for startup failures.
#[derive(Debug)]
pub struct App {
    session: Session,
    mapper: InputMapper,
    notice: Option<String>,
}

impl App {
    /// Starts on the menu.
    pub fn new(config: GamesConfig) -> Self {
        Self {
            session: Session::new(config),
            mapper: InputMapper::default(),
            notice: None,
        }
    }

    /// The session being driven.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Slot under the Number Challenge cursor.
    pub fn slot_cursor(&self) -> usize {
        self.mapper.slot_cursor()
    }

    /// Message shown in the status line, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Handles one key press.
    pub fn handle_key(&mut self, key: KeyEvent) -> SessionControl {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            debug!("Interrupted");
            return SessionControl::Quit;
        }
        let Some(event) = self.mapper.map(key.code, &self.session.view()) else {
            return SessionControl::Continue;
        };
        let before = self.session.state();
        match self.session.on_input(&event) {
            Ok(control) => {
                if self.session.state() != before {
                    self.notice = None;
                }
                control
            }
            Err(e) => {
                warn!(error = %e, "Game failed to start");
                self.notice = Some(e.to_string());
                SessionControl::Continue
            }
        }
    }

    /// Advances one frame.
    pub fn on_tick(&mut self) {
        if let Feedback::Entered(state) = self.session.on_tick() {
            debug!(%state, "Tick changed state");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pocket_games::MachineState;
    use std::io::Write;

    fn press(app: &mut App, code: KeyCode) -> SessionControl {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_ctrl_c_quits_anywhere() {
        let mut app = App::new(GamesConfig::default());
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(
            app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            SessionControl::Quit
        );
    }

    #[test]
    fn test_startup_failure_sets_notice() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "NOT A WORD").unwrap();
        let text = format!(
            "[wordle]\nanswers = {:?}\n",
            file.path().display().to_string()
        );
        let config = GamesConfig::from_toml_str(&text).unwrap();
        let mut app = App::new(config);

        press(&mut app, KeyCode::Char('2'));
        assert_eq!(press(&mut app, KeyCode::Enter), SessionControl::Continue);
        assert_eq!(app.session().state(), MachineState::Configuring);
        assert!(app.notice().unwrap().contains("answers"));

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.session().state(), MachineState::Menu);
        assert!(app.notice().is_none());
    }

    #[test]
    fn test_snake_moves_after_first_key() {
        let mut app = App::new(GamesConfig::default());
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session().state(), MachineState::Playing);
        press(&mut app, KeyCode::Up);
        for _ in 0..200 {
            app.on_tick();
        }
        assert_eq!(app.session().state(), MachineState::Lost);
    }
}
