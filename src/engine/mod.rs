//! Turn resolution.
//!
//! `GameEngine` owns the board and the roster. Each scripted turn goes
//! through `decide_turn` (which token the roll moves) and is then executed
//! with the board primitives (`move_token`, `clear_space`, `restart_token`).
//! Every resolved turn is appended to the engine's history.

mod decision;
mod game;
mod history;
mod report;

pub use decision::{decide_turn, MoveReason, TurnDecision};
pub use game::GameEngine;
pub use history::{MoveOutcome, TurnOutcome, TurnRecord};
pub use report::PlayerReport;
