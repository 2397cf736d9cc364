//! Core engine types: players, tokens, layout configuration, errors.
//!
//! Everything here is independent of the board's slot storage; the engine
//! combines these with `board` to resolve turns.

pub mod config;
pub mod error;
pub mod player;
pub mod token;

pub use config::GameConfig;
pub use error::{LudoError, Result};
pub use player::{Player, PlayerId};
pub use token::{TokenId, TokenStatus, IN_BASE, RELEASED};
