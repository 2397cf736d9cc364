//! Turn decision: which token a roll moves.
//!
//! Rules are checked in priority order; the first match decides:
//!
//! 1. A completed player skips the turn.
//! 2. Both tokens in base: the release roll frees `p`, anything else forfeits.
//! 3. One token in base: the release roll frees it, otherwise the other moves.
//! 4. Both released but unmoved: `p` moves.
//! 5. Both on the same unfinished counter: both move together.
//! 6. Both finished: the player is confirmed completed.
//! 7. One token finished: the other moves.
//! 8. Otherwise prefer, in order: landing exactly on the finish (`p` first),
//!    capturing an opponent on the shared track (`p` first), then the token
//!    that ends up further behind (ties go to `p`).
//!
//! The capture preference only looks at landing counters still on the shared
//! track. Home stretches are private, so nothing can be captured there.

use serde::{Deserialize, Serialize};

use crate::core::{GameConfig, Player, TokenId, IN_BASE, RELEASED};

/// Why a single-token move was chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveReason {
    /// The other token is still in base.
    OnlyReleased,
    /// Both tokens were released and unmoved; `p` goes first.
    FirstMove,
    /// The other token has already finished.
    PartnerFinished,
    /// The roll lands this token exactly on the finish.
    ExactFinish,
    /// The roll lands this token on an opponent.
    Capture,
    /// This token ends up further behind.
    Trailing,
}

/// What a turn will do, before any state changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnDecision {
    Skip,
    Forfeit,
    Release(TokenId),
    Move(TokenId, MoveReason),
    MoveBoth,
    ConfirmCompleted,
}

/// Apply the priority rules to one player's roll.
///
/// `opponent_at` reports whether a board space holds another player's token.
pub fn decide_turn(
    config: &GameConfig,
    player: &Player,
    roll: u8,
    opponent_at: impl Fn(usize) -> bool,
) -> TurnDecision {
    if player.completed() {
        return TurnDecision::Skip;
    }

    let p = player.token_p_steps();
    let q = player.token_q_steps();
    let releases = roll == config.release_roll;

    match (p == IN_BASE, q == IN_BASE) {
        (true, true) if releases => return TurnDecision::Release(TokenId::P),
        (true, true) => return TurnDecision::Forfeit,
        (true, false) if releases => return TurnDecision::Release(TokenId::P),
        (true, false) => return TurnDecision::Move(TokenId::Q, MoveReason::OnlyReleased),
        (false, true) if releases => return TurnDecision::Release(TokenId::Q),
        (false, true) => return TurnDecision::Move(TokenId::P, MoveReason::OnlyReleased),
        (false, false) => {}
    }

    let finish = config.finish_step();
    if p == RELEASED && q == RELEASED {
        return TurnDecision::Move(TokenId::P, MoveReason::FirstMove);
    }
    if p == q {
        return if p == finish {
            TurnDecision::ConfirmCompleted
        } else {
            TurnDecision::MoveBoth
        };
    }
    if p == finish {
        return TurnDecision::Move(TokenId::Q, MoveReason::PartnerFinished);
    }
    if q == finish {
        return TurnDecision::Move(TokenId::P, MoveReason::PartnerFinished);
    }

    let roll = i32::from(roll);
    let (new_p, new_q) = (p + roll, q + roll);
    let captures = |steps: i32| steps <= config.last_track_step() && opponent_at(player.token_space(steps));

    let (token, reason) = if new_p == finish {
        (TokenId::P, MoveReason::ExactFinish)
    } else if new_q == finish {
        (TokenId::Q, MoveReason::ExactFinish)
    } else if captures(new_p) {
        (TokenId::P, MoveReason::Capture)
    } else if captures(new_q) {
        (TokenId::Q, MoveReason::Capture)
    } else if new_p <= new_q {
        (TokenId::P, MoveReason::Trailing)
    } else {
        (TokenId::Q, MoveReason::Trailing)
    };
    TurnDecision::Move(token, reason)
}
