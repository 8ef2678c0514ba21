//! Wordstack
//!
//! A two-word unscramble puzzle. Two dictionary words are interleaved into
//! one stack of tiles; the player deals the tiles back out onto two slots and
//! wins when both slots spell dictionary words.
//!
//! # Quick Start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use wordstack::dictionary::Dictionary;
//! use wordstack::game::{GameSession, Phase, WinRule};
//!
//! let dict = Dictionary::from_strs(&["apple", "beach"], 5).unwrap();
//! let mut session = GameSession::new(dict, StdRng::seed_from_u64(1), WinRule::default());
//! session.start().unwrap();
//!
//! while let Some(slot) = session.hint() {
//!     session.place_from_stack(slot).unwrap();
//! }
//! assert_eq!(session.phase(), Phase::Completed);
//! assert!(session.outcome().unwrap().won);
//! ```

// Core domain types
pub mod core;

// Word membership and random choice
pub mod dictionary;

// Game-state engine
pub mod game;

// Decomposition search and hints
pub mod solver;

// Word lists
pub mod wordlists;

// Session settings
pub mod config;

// File logging
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
