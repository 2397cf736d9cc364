//! Board layout and rule configuration.
//!
//! The standard layout is the classic four-seat board flattened into
//! 81 spaces:
//!
//! - `0`: the shared finish slot
//! - `1..=56`: the shared circular track, seat `n` entering at `n * 14 + 1`
//! - `57..=80`: four private home stretches of six slots each
//!
//! A token's progress is a step counter: `-1` in base, `0` released,
//! `1..=50` on the track, `51..=56` in its home stretch, `57` finished.
//! Every derived quantity below is expressed in terms of the five fields,
//! so the standard values reproduce exactly those numbers.

use serde::{Deserialize, Serialize};

use super::error::{LudoError, Result};

/// Geometry and release rule for a game.
///
/// ## Example
///
/// ```
/// use ludo_engine::core::GameConfig;
///
/// let config = GameConfig::standard();
/// assert_eq!(config.board_size(), 81);
/// assert_eq!(config.last_track_step(), 50);
/// assert_eq!(config.finish_step(), 57);
///
/// let small = GameConfig::standard().with_max_players(2);
/// assert!(small.validate().is_ok());
/// assert_eq!(small.start_spacing(), 28);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameConfig {
    /// Spaces on the shared circular track.
    pub track_len: usize,

    /// Private slots between leaving the track and finishing.
    pub stretch_len: usize,

    /// Number of seats around the board (A, B, ...).
    pub max_players: usize,

    /// Roll that releases a token from base.
    pub release_roll: u8,

    /// Rolls are valid in `1..=die_faces`.
    pub die_faces: u8,
}

impl GameConfig {
    /// The four-seat, 56-space board.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            track_len: 56,
            stretch_len: 6,
            max_players: 4,
            release_roll: 6,
            die_faces: 6,
        }
    }

    /// Set the number of shared track slots.
    #[must_use]
    pub fn with_track_len(mut self, len: usize) -> Self {
        self.track_len = len;
        self
    }

    /// Set the number of slots in each home stretch.
    #[must_use]
    pub fn with_stretch_len(mut self, len: usize) -> Self {
        self.stretch_len = len;
        self
    }

    /// Set the number of seats on the board.
    #[must_use]
    pub fn with_max_players(mut self, count: usize) -> Self {
        self.max_players = count;
        self
    }

    /// Set the roll that releases a token from base.
    #[must_use]
    pub fn with_release_roll(mut self, roll: u8) -> Self {
        self.release_roll = roll;
        self
    }

    /// Set the number of faces on the die.
    #[must_use]
    pub fn with_die_faces(mut self, faces: u8) -> Self {
        self.die_faces = faces;
        self
    }

    /// Check that the derived layout is consistent.
    pub fn validate(&self) -> Result<()> {
        if !(2..=26).contains(&self.max_players) {
            return Err(LudoError::InvalidConfig("seat count must be between 2 and 26"));
        }
        if self.track_len == 0 || self.track_len % self.max_players != 0 {
            return Err(LudoError::InvalidConfig(
                "track length must divide evenly between seats",
            ));
        }
        if self.stretch_len == 0 || self.stretch_len >= self.track_len {
            return Err(LudoError::InvalidConfig(
                "home stretch must be non-empty and shorter than the track",
            ));
        }
        if self.die_faces == 0 || self.release_roll == 0 || self.release_roll > self.die_faces {
            return Err(LudoError::InvalidConfig("release roll must be a face of the die"));
        }
        // A token leaving the track must not be able to jump past the finish.
        if usize::from(self.die_faces) > self.stretch_len {
            return Err(LudoError::InvalidConfig(
                "die faces must not exceed the home stretch length",
            ));
        }
        Ok(())
    }

    /// Distance between two consecutive seats' start spaces.
    #[must_use]
    pub fn start_spacing(&self) -> usize {
        self.track_len / self.max_players
    }

    /// Last step counter that is still on the shared track.
    #[must_use]
    pub fn last_track_step(&self) -> i32 {
        (self.track_len - self.stretch_len) as i32
    }

    /// Step counter of a finished token.
    #[must_use]
    pub fn finish_step(&self) -> i32 {
        self.track_len as i32 + 1
    }

    /// Total number of board slots (finish + track + all stretches).
    #[must_use]
    pub fn board_size(&self) -> usize {
        1 + self.track_len + self.stretch_len * self.max_players
    }

    /// Last seat letter for this layout.
    #[must_use]
    pub fn last_seat(&self) -> char {
        char::from(b'A' + (self.max_players - 1) as u8)
    }

    /// Check a roll against the die.
    pub fn check_roll(&self, roll: u8) -> Result<()> {
        if (1..=self.die_faces).contains(&roll) {
            Ok(())
        } else {
            Err(LudoError::InvalidRoll {
                roll,
                faces: self.die_faces,
            })
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::standard()
    }
}
