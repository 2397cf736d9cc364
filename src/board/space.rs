//! A single board slot and the tokens occupying it.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{PlayerId, TokenId};

/// A token standing on a space: its owner and which of the owner's tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Occupant {
    pub player: PlayerId,
    pub token: TokenId,
}

impl Occupant {
    /// Create an occupant record.
    #[must_use]
    pub const fn new(player: PlayerId, token: TokenId) -> Self {
        Self { player, token }
    }
}

impl std::fmt::Display for Occupant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.player.label(), self.token)
    }
}

/// Where a new occupant joins the space's list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotPosition {
    Front,
    Back,
}

impl SlotPosition {
    /// Track and stretch placement: `p` joins in front, `q` behind.
    #[must_use]
    pub const fn for_token(token: TokenId) -> Self {
        match token {
            TokenId::P => SlotPosition::Front,
            TokenId::Q => SlotPosition::Back,
        }
    }
}

/// One board slot.
///
/// Track slots hold one player's tokens at a time (up to both of them);
/// the finish slot collects every finished token. SmallVec keeps the
/// common 0-2 occupants inline.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Space {
    occupants: SmallVec<[Occupant; 2]>,
}

impl Space {
    /// Create an empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no token is here.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.occupants.is_empty()
    }

    /// Number of tokens here.
    #[must_use]
    pub fn len(&self) -> usize {
        self.occupants.len()
    }

    /// Occupants in display order.
    #[must_use]
    pub fn occupants(&self) -> &[Occupant] {
        &self.occupants
    }

    /// Is this exact token here?
    #[must_use]
    pub fn contains(&self, occupant: Occupant) -> bool {
        self.occupants.contains(&occupant)
    }

    /// Does any occupant belong to `player`?
    #[must_use]
    pub fn has_owner(&self, player: PlayerId) -> bool {
        self.occupants.iter().any(|o| o.player == player)
    }

    /// Does any occupant belong to someone other than `player`?
    #[must_use]
    pub fn has_opponent_of(&self, player: PlayerId) -> bool {
        self.occupants.iter().any(|o| o.player != player)
    }

    /// Add a token at the front or the back.
    pub fn insert(&mut self, occupant: Occupant, position: SlotPosition) {
        match position {
            SlotPosition::Front => self.occupants.insert(0, occupant),
            SlotPosition::Back => self.occupants.push(occupant),
        }
    }

    /// Remove a specific occupant. Returns false if it was not here.
    pub fn remove(&mut self, occupant: Occupant) -> bool {
        match self.occupants.iter().position(|&o| o == occupant) {
            Some(index) => {
                self.occupants.remove(index);
                true
            }
            None => false,
        }
    }

    /// Empty the space, returning who was on it.
    pub fn take_all(&mut self) -> SmallVec<[Occupant; 2]> {
        std::mem::take(&mut self.occupants)
    }
}
