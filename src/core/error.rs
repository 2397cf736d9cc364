//! Error type for the engine.
//!
//! Every operation that takes caller input (identities, rolls, layouts)
//! returns `Result<T, LudoError>`. Internal preconditions, such as asking
//! for the board space of a token that is not on the board, are asserted.

use thiserror::Error;

use super::player::PlayerId;
use super::token::TokenId;

pub type Result<T, E = LudoError> = std::result::Result<T, E>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LudoError {
    /// No registered player carries this identity.
    #[error("player {0:?} not found")]
    PlayerNotFound(String),

    /// Identity is not a single seat letter.
    #[error("invalid player identity {identity:?}: expected a single letter A-{last}")]
    InvalidIdentity { identity: String, last: char },

    #[error("{0} is registered more than once")]
    DuplicatePlayer(PlayerId),

    #[error("a game needs 2 to {max} players, got {count}")]
    PlayerCount { count: usize, max: usize },

    #[error("roll {roll} is outside 1..={faces}")]
    InvalidRoll { roll: u8, faces: u8 },

    /// Only released tokens can be moved.
    #[error("token {token} of {player} is still in base")]
    TokenInBase { player: PlayerId, token: TokenId },

    #[error("invalid board layout: {0}")]
    InvalidConfig(&'static str),
}
