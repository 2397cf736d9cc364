//! Per-player summary of where each token stands.

use serde::{Deserialize, Serialize};

use crate::core::{Player, PlayerId, TokenId, TokenStatus};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerReport {
    pub player: PlayerId,
    pub p: TokenStatus,
    pub q: TokenStatus,
    pub completed: bool,
}

impl PlayerReport {
    /// Snapshot a player's tokens.
    #[must_use]
    pub fn from_player(player: &Player) -> Self {
        Self {
            player: player.id(),
            p: player.token_status(TokenId::P),
            q: player.token_status(TokenId::Q),
            completed: player.completed(),
        }
    }

    /// Status of one token.
    #[must_use]
    pub fn token(&self, token: TokenId) -> TokenStatus {
        match token {
            TokenId::P => self.p,
            TokenId::Q => self.q,
        }
    }
}

impl std::fmt::Display for PlayerReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: p={} q={}", self.player.label(), self.p, self.q)?;
        if self.completed {
            write!(f, " (completed)")?;
        }
        Ok(())
    }
}
