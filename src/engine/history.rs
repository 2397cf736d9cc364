//! Turn history: what every resolved turn did.
//!
//! Used for:
//! - Replay/debugging
//! - Inspecting captures and completions after a run
//! - Deriving the order in which players finished

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::decision::MoveReason;
use crate::board::Occupant;
use crate::core::{PlayerId, TokenId};

/// The result of moving one token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub token: TokenId,

    /// Step counter before the move.
    pub from: i32,

    /// Step counter after the move, bounce-back applied.
    pub to: i32,

    /// Board space the token ended on.
    pub space: usize,

    /// Opponent tokens sent back to base by this move.
    pub captured: SmallVec<[Occupant; 2]>,
}

impl MoveOutcome {
    /// Did this move send anyone back to base?
    #[must_use]
    pub fn is_capture(&self) -> bool {
        !self.captured.is_empty()
    }
}

/// What a turn did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// The player had already completed.
    Skipped,
    /// Both tokens in base and no release roll.
    Forfeited,
    Released(TokenId),
    Moved {
        reason: MoveReason,
        movement: MoveOutcome,
    },
    MovedBoth {
        p: MoveOutcome,
        q: MoveOutcome,
    },
    /// Both tokens were already finished; the player is marked completed.
    ConfirmedCompleted,
}

impl TurnOutcome {
    /// Moves made this turn, in order.
    #[must_use]
    pub fn moves(&self) -> Vec<&MoveOutcome> {
        match self {
            TurnOutcome::Moved { movement, .. } => vec![movement],
            TurnOutcome::MovedBoth { p, q } => vec![p, q],
            _ => Vec::new(),
        }
    }

    /// Opponent tokens captured this turn.
    pub fn captures(&self) -> impl Iterator<Item = Occupant> + '_ {
        self.moves()
            .into_iter()
            .flat_map(|movement| movement.captured.iter().copied())
    }
}

/// A resolved turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Turn number, starting at 1.
    pub turn: usize,

    pub player: PlayerId,

    pub roll: u8,

    pub outcome: TurnOutcome,

    /// Did this turn mark the player completed?
    pub completed_now: bool,
}
