//! # ludo-engine
//!
//! A deterministic engine for a simplified Ludo with two tokens per player.
//!
//! Players move tokens around a shared 56-space track into private home
//! stretches. Landing on an opponent sends it back to base; a player is
//! completed once both tokens reach the finish. Dice rolls are supplied by
//! the caller as a scripted list of turns, so every run is reproducible.
//!
//! ## Design Principles
//!
//! 1. **Counters are authoritative**: a token's board slot is a pure
//!    function of its step counter and its seat. The engine keeps the board
//!    in agreement with the counters and never lets callers alias it.
//!
//! 2. **Explicit failures**: unknown players, bad rolls and bad layouts are
//!    `LudoError`s, never sentinel values.
//!
//! 3. **Configuration over constants**: board geometry lives in
//!    `GameConfig`; the standard layout reproduces the classic 81-slot board.
//!
//! ## Modules
//!
//! - `core`: seats, players, tokens, configuration, errors
//! - `board`: slots, occupants, text rendering
//! - `engine`: the `GameEngine`, turn decisions, history, reports
//!
//! ## Example
//!
//! ```
//! use ludo_engine::GameEngine;
//!
//! let mut game = GameEngine::new();
//! game.play_game(&["A", "B"], &[("A", 6), ("A", 4), ("A", 5)]).unwrap();
//!
//! let a = game.get_player_by_position("A").unwrap();
//! assert_eq!(a.token_p_steps(), 9);
//! assert!(game.get_player_by_position("C").is_err());
//! ```

pub mod board;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, LudoError, Player, PlayerId, Result, TokenId, TokenStatus, IN_BASE, RELEASED,
};

pub use crate::board::{render_board, render_space, Board, Occupant, SlotPosition, Space, FINISH_SPACE};

pub use crate::engine::{
    decide_turn, GameEngine, MoveOutcome, MoveReason, PlayerReport, TurnDecision, TurnOutcome,
    TurnRecord,
};
