//! The flattened board: one [`Space`] per slot.
//!
//! The board only stores occupants. It does not know which step counter a
//! token has; the engine maps counters to spaces through
//! [`Player::token_space`](crate::core::Player::token_space) and keeps the
//! two in sync.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::space::{Occupant, SlotPosition, Space};
use crate::core::GameConfig;

/// Slot index of the shared finish.
pub const FINISH_SPACE: usize = 0;

/// All board slots for a layout.
///
/// ## Usage
///
/// ```
/// use ludo_engine::board::{Board, Occupant, SlotPosition};
/// use ludo_engine::core::{GameConfig, PlayerId, TokenId};
///
/// let mut board = Board::new(GameConfig::standard());
/// assert_eq!(board.space_count(), 81);
///
/// let token = Occupant::new(PlayerId::new(0), TokenId::P);
/// board.place(5, token, SlotPosition::Front);
/// assert_eq!(board.locate(token), Some(5));
///
/// assert!(board.remove(5, token));
/// assert!(board.space(5).is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    config: GameConfig,
    spaces: Vec<Space>,
}

impl Board {
    /// Create a board with every slot empty.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            spaces: vec![Space::new(); config.board_size()],
        }
    }

    /// The layout this board was built for.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Number of slots, finish slot included.
    #[must_use]
    pub fn space_count(&self) -> usize {
        self.spaces.len()
    }

    /// True when no slot holds a token.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spaces.iter().all(Space::is_empty)
    }

    /// Get a slot. Panics if `index` is off the board.
    #[must_use]
    pub fn space(&self, index: usize) -> &Space {
        &self.spaces[index]
    }

    /// Iterate over (index, &Space) pairs, finish slot first.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Space)> {
        self.spaces.iter().enumerate()
    }

    /// Iterate over non-empty slots only.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, &Space)> {
        self.iter().filter(|(_, space)| !space.is_empty())
    }

    /// Find the slot a token stands on.
    #[must_use]
    pub fn locate(&self, occupant: Occupant) -> Option<usize> {
        self.spaces.iter().position(|space| space.contains(occupant))
    }

    /// Put a token on a slot, at the front or the back.
    pub fn place(&mut self, index: usize, occupant: Occupant, position: SlotPosition) {
        self.spaces[index].insert(occupant, position);
    }

    /// Remove a token from a slot. Returns false if it was not there.
    pub fn remove(&mut self, index: usize, occupant: Occupant) -> bool {
        self.spaces[index].remove(occupant)
    }

    /// Empty a slot, returning its former occupants.
    pub fn take_all(&mut self, index: usize) -> SmallVec<[Occupant; 2]> {
        self.spaces[index].take_all()
    }

    /// Total tokens on the board, finish slot included.
    #[must_use]
    pub fn token_count(&self) -> usize {
        self.spaces.iter().map(Space::len).sum()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        super::render::write_board(f, self)
    }
}
