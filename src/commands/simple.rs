//! Simple interactive CLI mode
//!
//! Text-based game loop without the TUI

use crate::core::Slot;
use crate::game::{GameError, GameSession, Phase};
use crate::output::print_board;
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};

/// One parsed line of player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place(Slot),
    Move { from: Slot, to: Slot },
    Undo,
    Hint,
    New,
    Quit,
}

impl Command {
    /// Parse a command; `None` for anything unrecognised
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "1" => Some(Self::Place(Slot::First)),
            "2" => Some(Self::Place(Slot::Second)),
            "12" => Some(Self::Move {
                from: Slot::First,
                to: Slot::Second,
            }),
            "21" => Some(Self::Move {
                from: Slot::Second,
                to: Slot::First,
            }),
            "u" | "undo" => Some(Self::Undo),
            "h" | "hint" => Some(Self::Hint),
            "n" | "new" => Some(Self::New),
            "q" | "quit" | "exit" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if the
/// dictionary cannot supply a round.
pub fn run_simple<R: Rng>(session: &mut GameSession<R>) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Wordstack - Interactive Mode                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Two words have been shuffled together into one stack of tiles.");
    println!("Deal the tiles back out so both rows spell real words:\n");
    println!("  - '1' / '2'    place the top tile on word 1 / word 2");
    println!("  - '12' / '21'  move the last tile from one word to the other");
    println!("  - 'u' undo, 'h' hint, 'n' new game, 'q' quit\n");

    session.start().map_err(|e| e.to_string())?;
    println!("Game started");

    loop {
        print_board(session);

        if session.phase() == Phase::Completed {
            if let Some(outcome) = session.outcome() {
                let message = outcome.message();
                if outcome.won {
                    println!("\n{}\n", message.bright_green().bold());
                } else {
                    println!("\n{}\n", message.red().bold());
                }
            }

            match get_user_input("Play again? (yes/no)")?
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => {
                    session.start().map_err(|e| e.to_string())?;
                    println!("\n🔄 New game started!\n");
                    continue;
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }

        let input = get_user_input("Move")?;
        let Some(command) = Command::parse(&input) else {
            println!("❌ Unknown command! Use 1, 2, 12, 21, u, h, n or q\n");
            continue;
        };

        let result = match command {
            Command::Place(slot) => session.place_from_stack(slot),
            Command::Move { from, to } => session.move_between_slots(from, to),
            Command::Undo => session.undo(),
            Command::Hint => {
                match session.hint() {
                    Some(slot) => println!("💡 Put the top tile on {slot}"),
                    None => println!("💡 No winning line from here - try undoing"),
                }
                Ok(())
            }
            Command::New => {
                session.start().map_err(|e| e.to_string())?;
                println!("\n🔄 New game started!\n");
                Ok(())
            }
            Command::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        };

        match result {
            Ok(()) => {}
            Err(GameError::EmptySource) => println!("Nothing to move!\n"),
            Err(e) => println!("❌ {e}\n"),
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_placements() {
        assert_eq!(Command::parse("1"), Some(Command::Place(Slot::First)));
        assert_eq!(Command::parse(" 2 "), Some(Command::Place(Slot::Second)));
    }

    #[test]
    fn parse_moves() {
        assert_eq!(
            Command::parse("21"),
            Some(Command::Move {
                from: Slot::Second,
                to: Slot::First
            })
        );
    }

    #[test]
    fn parse_words_and_aliases() {
        assert_eq!(Command::parse("UNDO"), Some(Command::Undo));
        assert_eq!(Command::parse("h"), Some(Command::Hint));
        assert_eq!(Command::parse("exit"), Some(Command::Quit));
        assert_eq!(Command::parse("n"), Some(Command::New));
        assert_eq!(Command::parse("3"), None);
    }
}
