//! Tokens and their progress.
//!
//! Each player owns two tokens, `p` and `q`. Progress is a signed step
//! counter; see [`GameConfig`](super::GameConfig) for the ranges.

use serde::{Deserialize, Serialize};

use super::config::GameConfig;

/// Step counter of a token waiting in base.
pub const IN_BASE: i32 = -1;

/// Step counter of a released token that has not moved yet.
pub const RELEASED: i32 = 0;

/// One of a player's two tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TokenId {
    P,
    Q,
}

impl TokenId {
    pub const BOTH: [TokenId; 2] = [TokenId::P, TokenId::Q];

    /// The player's other token.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            TokenId::P => TokenId::Q,
            TokenId::Q => TokenId::P,
        }
    }

    /// Lowercase label, `p` or `q`.
    #[must_use]
    pub const fn label(self) -> char {
        match self {
            TokenId::P => 'p',
            TokenId::Q => 'q',
        }
    }
}

impl std::fmt::Display for TokenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Where a token is, derived from its step counter.
///
/// Displays as `H` (in base), `R` (released), the board space, or `E`
/// (finished).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenStatus {
    InBase,
    Ready,
    OnTrack(usize),
    HomeStretch(usize),
    Finished,
}

impl TokenStatus {
    /// True for a token on the finish slot.
    #[must_use]
    pub fn is_finished(self) -> bool {
        self == TokenStatus::Finished
    }

    /// Board space the token occupies, if it is on the board.
    #[must_use]
    pub fn space(self) -> Option<usize> {
        match self {
            TokenStatus::OnTrack(space) | TokenStatus::HomeStretch(space) => Some(space),
            TokenStatus::Finished => Some(0),
            TokenStatus::InBase | TokenStatus::Ready => None,
        }
    }

    /// Classify a step counter given the space it maps to.
    pub(crate) fn classify(config: &GameConfig, steps: i32, space: impl FnOnce(i32) -> usize) -> Self {
        match steps {
            s if s < RELEASED => TokenStatus::InBase,
            RELEASED => TokenStatus::Ready,
            s if s >= config.finish_step() => TokenStatus::Finished,
            s if s > config.last_track_step() => TokenStatus::HomeStretch(space(s)),
            s => TokenStatus::OnTrack(space(s)),
        }
    }
}

impl std::fmt::Display for TokenStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenStatus::InBase => write!(f, "H"),
            TokenStatus::Ready => write!(f, "R"),
            TokenStatus::OnTrack(space) | TokenStatus::HomeStretch(space) => write!(f, "{space}"),
            TokenStatus::Finished => write!(f, "E"),
        }
    }
}
