//! Player identification and per-player token progress.
//!
//! ## PlayerId
//!
//! Seat identifier. Seats are lettered `A`, `B`, `C`, `D`; the letter's
//! distance from `A` is the seat offset, which fixes the player's start
//! space and home stretch.
//!
//! ## Player
//!
//! Two token step counters, the completed flag, and the mapping from a
//! step counter to an absolute board space for this seat.

use serde::{Deserialize, Serialize};

use super::config::GameConfig;
use super::error::{LudoError, Result};
use super::token::{TokenId, TokenStatus, IN_BASE};

/// Seat identifier, 0-based: `PlayerId(0)` is seat `A`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID from a seat offset.
    #[must_use]
    pub const fn new(offset: u8) -> Self {
        Self(offset)
    }

    /// Parse a seat identity such as `"A"`.
    ///
    /// ```
    /// use ludo_engine::core::{GameConfig, PlayerId};
    ///
    /// let config = GameConfig::standard();
    /// assert_eq!(PlayerId::from_identity("C", &config).unwrap(), PlayerId::new(2));
    /// assert!(PlayerId::from_identity("E", &config).is_err());
    /// assert!(PlayerId::from_identity("AB", &config).is_err());
    /// ```
    pub fn from_identity(identity: &str, config: &GameConfig) -> Result<Self> {
        let invalid = || LudoError::InvalidIdentity {
            identity: identity.to_string(),
            last: config.last_seat(),
        };

        let mut chars = identity.chars();
        let (Some(letter), None) = (chars.next(), chars.next()) else {
            return Err(invalid());
        };
        if !('A'..=config.last_seat()).contains(&letter) {
            return Err(invalid());
        }
        Ok(Self(letter as u8 - b'A'))
    }

    /// Seat offset (0-based).
    #[must_use]
    pub const fn offset(self) -> usize {
        self.0 as usize
    }

    /// Seat letter, `A` for offset 0.
    #[must_use]
    pub const fn label(self) -> char {
        (b'A' + self.0) as char
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.label())
    }
}

/// One player's progress.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    config: GameConfig,
    p_steps: i32,
    q_steps: i32,
    start_space: usize,
    end_space: usize,
    completed: bool,
}

impl Player {
    /// Create a player with both tokens in base.
    #[must_use]
    pub fn new(id: PlayerId, config: GameConfig) -> Self {
        let start_space = id.offset() * config.start_spacing() + 1;
        let end_space = (start_space + config.last_track_step() as usize - 1) % config.track_len;

        Self {
            id,
            config,
            p_steps: IN_BASE,
            q_steps: IN_BASE,
            start_space,
            end_space,
            completed: false,
        }
    }

    /// Get the seat.
    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// First track space this player's tokens enter on.
    #[must_use]
    pub fn start_space(&self) -> usize {
        self.start_space
    }

    /// Track space where this player's tokens leave for the home stretch.
    #[must_use]
    pub fn end_space(&self) -> usize {
        self.end_space
    }

    /// Has this player brought both tokens home?
    #[must_use]
    pub fn completed(&self) -> bool {
        self.completed
    }

    /// Set the completed flag.
    pub fn set_completed(&mut self, value: bool) {
        self.completed = value;
    }

    /// Step counter of a token.
    #[must_use]
    pub fn steps(&self, token: TokenId) -> i32 {
        match token {
            TokenId::P => self.p_steps,
            TokenId::Q => self.q_steps,
        }
    }

    /// Set a token's step counter.
    pub fn set_steps(&mut self, token: TokenId, value: i32) {
        match token {
            TokenId::P => self.p_steps = value,
            TokenId::Q => self.q_steps = value,
        }
    }

    /// Step counter of token `p`.
    #[must_use]
    pub fn token_p_steps(&self) -> i32 {
        self.p_steps
    }

    /// Step counter of token `q`.
    #[must_use]
    pub fn token_q_steps(&self) -> i32 {
        self.q_steps
    }

    /// Board space for a step counter.
    ///
    /// - finish step: the shared finish slot `0`
    /// - home stretch: this seat's private block after the track
    /// - otherwise: the track, wrapping past its last space
    ///
    /// Panics if `steps <= 0` (released and based tokens are not on the board)
    /// or if `steps` is past the finish step.
    ///
    /// ```
    /// use ludo_engine::core::{GameConfig, Player, PlayerId};
    ///
    /// let b = Player::new(PlayerId::new(1), GameConfig::standard());
    /// assert_eq!(b.token_space(1), 15);
    /// assert_eq!(b.token_space(50), 8);
    /// assert_eq!(b.token_space(51), 63);
    /// assert_eq!(b.token_space(57), 0);
    /// ```
    #[must_use]
    pub fn token_space(&self, steps: i32) -> usize {
        assert!(steps > 0, "token_space requires a positive step count, got {steps}");
        let config = &self.config;
        assert!(
            steps <= config.finish_step(),
            "token_space step count {steps} is past the finish"
        );

        if steps == config.finish_step() {
            0
        } else if steps > config.last_track_step() {
            let into_stretch = (steps - config.last_track_step()) as usize;
            into_stretch + config.track_len + self.id.offset() * config.stretch_len
        } else {
            let space = steps as usize + self.start_space - 1;
            if space > config.track_len {
                space - config.track_len
            } else {
                space
            }
        }
    }

    /// Where a token currently is.
    #[must_use]
    pub fn token_status(&self, token: TokenId) -> TokenStatus {
        TokenStatus::classify(&self.config, self.steps(token), |s| self.token_space(s))
    }

    /// True when both tokens have reached the finish.
    #[must_use]
    pub fn both_finished(&self) -> bool {
        let finish = self.config.finish_step();
        self.p_steps == finish && self.q_steps == finish
    }
}
