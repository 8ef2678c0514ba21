//! TUI application state and logic

use crate::core::Slot;
use crate::game::{GameError, GameSession, Phase};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Maximum messages kept in the log panel
const MESSAGE_LIMIT: usize = 5;

/// Application state
pub struct App {
    pub session: GameSession,
    pub messages: Vec<Message>,
    /// Slot suggested by the last hint, cleared by the next action
    pub hint: Option<Slot>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// A player action decoded from a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Place(Slot),
    Move { from: Slot, to: Slot },
    Undo,
    Hint,
    NewGame,
    Quit,
}

impl Action {
    /// Map a key to an action; `None` for keys with no binding
    #[must_use]
    pub fn from_key(code: KeyCode, modifiers: KeyModifiers) -> Option<Self> {
        match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Self::Quit),
            KeyCode::Char('q') | KeyCode::Esc => Some(Self::Quit),
            KeyCode::Char('1') => Some(Self::Place(Slot::First)),
            KeyCode::Char('2') => Some(Self::Place(Slot::Second)),
            KeyCode::Left => Some(Self::Move {
                from: Slot::Second,
                to: Slot::First,
            }),
            KeyCode::Right => Some(Self::Move {
                from: Slot::First,
                to: Slot::Second,
            }),
            KeyCode::Char('u') | KeyCode::Backspace => Some(Self::Undo),
            KeyCode::Char('h') => Some(Self::Hint),
            KeyCode::Char('n') => Some(Self::NewGame),
            _ => None,
        }
    }
}

impl App {
    #[must_use]
    pub fn new(session: GameSession) -> Self {
        Self {
            session,
            messages: vec![Message {
                text: "Welcome! 1/2 place the top tile, ←/→ move it between words."
                    .to_string(),
                style: MessageStyle::Info,
            }],
            hint: None,
            should_quit: false,
        }
    }

    pub fn new_game(&mut self) {
        self.hint = None;
        match self.session.start() {
            Ok(puzzle) => {
                let scrambled = puzzle.scrambled.to_uppercase();
                self.messages.clear();
                self.add_message("Game started", MessageStyle::Info);
                self.add_message(&scrambled, MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Apply one action to the session, reporting the result in the message log
    pub fn apply(&mut self, action: Action) {
        if action != Action::Hint {
            self.hint = None;
        }

        let result = match action {
            Action::Quit => {
                self.should_quit = true;
                return;
            }
            Action::NewGame => {
                self.new_game();
                return;
            }
            Action::Hint => {
                self.show_hint();
                return;
            }
            Action::Place(slot) => self.session.place_from_stack(slot),
            Action::Move { from, to } => self.session.move_between_slots(from, to),
            Action::Undo => self.session.undo(),
        };

        match result {
            Ok(()) => {
                if self.session.phase() == Phase::Completed {
                    self.announce_outcome();
                }
            }
            Err(GameError::EmptySource) => {
                self.add_message("Nothing to move!", MessageStyle::Info);
            }
            Err(GameError::NoActiveRound) => {
                self.add_message("Press 'n' for a new game", MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn show_hint(&mut self) {
        self.hint = self.session.hint();
        match self.hint {
            Some(slot) => {
                self.add_message(&format!("Hint: top tile goes on {slot}"), MessageStyle::Info);
            }
            None if self.session.phase() == Phase::InProgress => {
                self.add_message("No winning line from here - try undoing", MessageStyle::Error);
            }
            None => {}
        }
    }

    fn announce_outcome(&mut self) {
        if let Some(outcome) = self.session.outcome() {
            let style = if outcome.won {
                MessageStyle::Success
            } else {
                MessageStyle::Error
            };
            let text = outcome.message();
            self.add_message(&text, style);
            self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MESSAGE_LIMIT {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(%err, "TUI exited with error");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    app.new_game();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if let Some(action) = Action::from_key(key.code, key.modifiers) {
                app.apply(action);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;
    use crate::game::WinRule;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn app() -> App {
        let dict = Dictionary::from_strs(&["apple", "beach"], 5).unwrap();
        App::new(GameSession::new(
            dict,
            StdRng::seed_from_u64(8),
            WinRule::AnyDecomposition,
        ))
    }

    #[test]
    fn keys_map_to_actions() {
        let none = KeyModifiers::NONE;
        assert_eq!(
            Action::from_key(KeyCode::Char('1'), none),
            Some(Action::Place(Slot::First))
        );
        assert_eq!(
            Action::from_key(KeyCode::Right, none),
            Some(Action::Move {
                from: Slot::First,
                to: Slot::Second
            })
        );
        assert_eq!(
            Action::from_key(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(Action::Quit)
        );
        assert_eq!(Action::from_key(KeyCode::Char('z'), none), None);
    }

    #[test]
    fn new_game_announces_scramble() {
        let mut app = app();
        app.new_game();
        assert_eq!(app.session.phase(), Phase::InProgress);
        assert_eq!(app.messages[0].text, "Game started");
        assert_eq!(app.messages[1].text.len(), 10);
    }

    #[test]
    fn playing_out_hints_wins() {
        let mut app = app();
        app.new_game();
        loop {
            app.apply(Action::Hint);
            let Some(slot) = app.hint else { break };
            app.apply(Action::Place(slot));
        }

        assert_eq!(app.session.phase(), Phase::Completed);
        assert!(
            app.messages
                .iter()
                .any(|m| m.style == MessageStyle::Success)
        );
    }

    #[test]
    fn empty_undo_is_reported_quietly() {
        let mut app = app();
        app.new_game();
        app.apply(Action::Undo);
        let last = app.messages.last().unwrap();
        assert_eq!(last.text, "Nothing to move!");
        assert_eq!(last.style, MessageStyle::Info);
    }

    #[test]
    fn message_log_is_bounded() {
        let mut app = app();
        for i in 0..20 {
            app.add_message(&i.to_string(), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), MESSAGE_LIMIT);
        assert_eq!(app.messages.last().unwrap().text, "19");
    }

    #[test]
    fn quit_sets_flag() {
        let mut app = app();
        app.apply(Action::Quit);
        assert!(app.should_quit);
    }
}
