//! The game engine: board, roster, and turn resolution.

use im::Vector;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use super::decision::{decide_turn, MoveReason, TurnDecision};
use super::history::{MoveOutcome, TurnOutcome, TurnRecord};
use super::report::PlayerReport;
use crate::board::{Board, Occupant, SlotPosition, FINISH_SPACE};
use crate::core::{GameConfig, LudoError, Player, PlayerId, Result, TokenId, IN_BASE, RELEASED};

/// Owns the board and players and resolves scripted turns.
///
/// The board is only mutated through engine methods, which keep every
/// token's step counter and its board slot in agreement.
///
/// ## Example
///
/// ```
/// use ludo_engine::core::TokenStatus;
/// use ludo_engine::engine::GameEngine;
///
/// let mut game = GameEngine::new();
/// let report = game
///     .play_game(&["A", "B"], &[("A", 6), ("A", 4), ("B", 3)])
///     .unwrap();
///
/// assert_eq!(report[0].p, TokenStatus::OnTrack(4));
/// assert_eq!(report[1].p, TokenStatus::InBase);
/// assert_eq!(game.history().len(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: GameConfig,
    board: Board,
    /// Players in registration order.
    players: Vec<Player>,
    /// Seat -> index into `players`.
    seats: FxHashMap<PlayerId, usize>,
    history: Vector<TurnRecord>,
}

impl GameEngine {
    /// Create an engine for the standard four-seat board.
    #[must_use]
    pub fn new() -> Self {
        Self::from_valid_config(GameConfig::standard())
    }

    /// Create an engine for a custom layout.
    pub fn with_config(config: GameConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: GameConfig) -> Self {
        Self {
            config,
            board: Board::new(config),
            players: Vec::new(),
            seats: FxHashMap::default(),
            history: Vector::new(),
        }
    }

    /// Get the board layout.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Get the board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Players in registration order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Every resolved turn, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    // === Setup ===

    /// Reset the board to empty slots.
    pub fn create_board(&mut self) {
        self.board = Board::new(self.config);
    }

    /// Register the players for a new game, replacing any previous roster.
    ///
    /// Identities are seat letters; the letter (not the list position) fixes
    /// the seat's start space. A new roster starts on an empty board with no
    /// history. Nothing changes if any identity is rejected.
    pub fn create_players<S: AsRef<str>>(&mut self, identities: &[S]) -> Result<()> {
        let max = self.config.max_players;
        if !(2..=max).contains(&identities.len()) {
            return Err(LudoError::PlayerCount {
                count: identities.len(),
                max,
            });
        }

        let mut players = Vec::with_capacity(identities.len());
        let mut seats = FxHashMap::default();
        for identity in identities {
            let id = PlayerId::from_identity(identity.as_ref(), &self.config)?;
            if seats.insert(id, players.len()).is_some() {
                return Err(LudoError::DuplicatePlayer(id));
            }
            players.push(Player::new(id, self.config));
        }

        self.players = players;
        self.seats = seats;
        self.create_board();
        self.history = Vector::new();
        Ok(())
    }

    // === Lookup ===

    /// Find a registered player by identity.
    pub fn get_player_by_position(&self, identity: &str) -> Result<&Player> {
        PlayerId::from_identity(identity, &self.config)
            .ok()
            .and_then(|id| self.seats.get(&id))
            .map(|&index| &self.players[index])
            .ok_or_else(|| LudoError::PlayerNotFound(identity.to_string()))
    }

    /// Find a registered player by seat.
    pub fn player(&self, id: PlayerId) -> Result<&Player> {
        let index = self.seat_index(id)?;
        Ok(&self.players[index])
    }

    fn player_mut(&mut self, id: PlayerId) -> Result<&mut Player> {
        let index = self.seat_index(id)?;
        Ok(&mut self.players[index])
    }

    fn seat_index(&self, id: PlayerId) -> Result<usize> {
        self.seats
            .get(&id)
            .copied()
            .ok_or_else(|| LudoError::PlayerNotFound(id.label().to_string()))
    }

    // === Board primitives ===

    /// Move one released token `steps` forward.
    ///
    /// The token leaves its current slot (a token at counter 0 is not on the
    /// board yet). A token already in its home stretch that overshoots the
    /// finish bounces back by the excess. Landing on the finish never
    /// captures; landing anywhere else first sends opponents on that slot
    /// back to base.
    pub fn move_token(&mut self, id: PlayerId, token: TokenId, steps: u8) -> Result<MoveOutcome> {
        let config = self.config;
        let occupant = Occupant::new(id, token);
        let seat = self.seat_index(id)?;

        let player = &self.players[seat];
        let from = player.steps(token);
        if from == IN_BASE {
            return Err(LudoError::TokenInBase { player: id, token });
        }
        let from_space = (from > RELEASED).then(|| player.token_space(from));

        let finish = config.finish_step();
        let mut to = from + i32::from(steps);
        if from > config.last_track_step() && to > finish {
            to = finish - (to - finish);
        }
        let space = player.token_space(to);

        // Every lookup that can fail happens before the board changes.
        let evictions = if to == finish {
            SmallVec::new()
        } else {
            self.evictions(id, space)?
        };

        if let Some(from_space) = from_space {
            let removed = self.board.remove(from_space, occupant);
            debug_assert!(removed, "{occupant} missing from space {from_space}");
        }
        self.players[seat].set_steps(token, to);

        let captured = if to == finish {
            self.board.place(FINISH_SPACE, occupant, SlotPosition::Back);
            SmallVec::new()
        } else {
            let captured = self.evict(space, &evictions);
            self.board.place(space, occupant, SlotPosition::for_token(token));
            captured
        };

        Ok(MoveOutcome {
            token,
            from,
            to,
            space,
            captured,
        })
    }

    /// Send every opponent on `space` back to base and empty the slot.
    ///
    /// If `owner` already has a token there the slot is left alone. Returns
    /// the tokens that were sent back.
    pub fn clear_space(&mut self, owner: PlayerId, space: usize) -> Result<SmallVec<[Occupant; 2]>> {
        let evictions = self.evictions(owner, space)?;
        Ok(self.evict(space, &evictions))
    }

    /// Opponents `owner` would send back from `space`, with their roster index.
    ///
    /// Fails if an occupant's player is not registered.
    fn evictions(&self, owner: PlayerId, space: usize) -> Result<SmallVec<[(usize, Occupant); 2]>> {
        let slot = self.board.space(space);
        if slot.has_owner(owner) {
            return Ok(SmallVec::new());
        }
        slot.occupants()
            .iter()
            .map(|&occupant| Ok((self.seat_index(occupant.player)?, occupant)))
            .collect()
    }

    fn evict(&mut self, space: usize, evictions: &[(usize, Occupant)]) -> SmallVec<[Occupant; 2]> {
        if evictions.is_empty() {
            return SmallVec::new();
        }
        for &(seat, occupant) in evictions {
            self.players[seat].set_steps(occupant.token, IN_BASE);
        }
        self.board.take_all(space)
    }

    /// Put a token's counter back to base. The board is not touched.
    pub fn restart_token(&mut self, id: PlayerId, token: TokenId) -> Result<()> {
        self.player_mut(id)?.set_steps(token, IN_BASE);
        Ok(())
    }

    /// Does `space` hold a token belonging to anyone but `player`?
    #[must_use]
    pub fn opponent_occupied(&self, player: PlayerId, space: usize) -> bool {
        self.board.space(space).has_opponent_of(player)
    }

    // === Turns ===

    /// Decide what a roll would do for a player, without changing anything.
    pub fn decide(&self, id: PlayerId, roll: u8) -> Result<TurnDecision> {
        self.config.check_roll(roll)?;
        let player = self.player(id)?;
        Ok(decide_turn(&self.config, player, roll, |space| {
            self.opponent_occupied(id, space)
        }))
    }

    /// Resolve a single turn and record it.
    pub fn play_turn(&mut self, identity: &str, roll: u8) -> Result<TurnRecord> {
        self.config.check_roll(roll)?;
        let id = self.get_player_by_position(identity)?.id();
        self.resolve_turn(id, roll)
    }

    /// Play a whole scripted game from a fresh board.
    ///
    /// Every turn is validated before the first one is played. Returns the
    /// final report for each player in registration order.
    pub fn play_game<S, T>(&mut self, identities: &[S], turns: &[(T, u8)]) -> Result<Vec<PlayerReport>>
    where
        S: AsRef<str>,
        T: AsRef<str>,
    {
        self.create_players(identities)?;

        let turns = turns
            .iter()
            .map(|(identity, roll)| {
                self.config.check_roll(*roll)?;
                Ok((self.get_player_by_position(identity.as_ref())?.id(), *roll))
            })
            .collect::<Result<Vec<_>>>()?;

        for (id, roll) in turns {
            self.resolve_turn(id, roll)?;
        }
        Ok(self.report())
    }

    fn resolve_turn(&mut self, id: PlayerId, roll: u8) -> Result<TurnRecord> {
        let decision = self.decide(id, roll)?;

        let outcome = match decision {
            TurnDecision::Skip => TurnOutcome::Skipped,
            TurnDecision::Forfeit => TurnOutcome::Forfeited,
            TurnDecision::Release(token) => {
                self.player_mut(id)?.set_steps(token, RELEASED);
                TurnOutcome::Released(token)
            }
            TurnDecision::Move(token, reason) => TurnOutcome::Moved {
                reason,
                movement: self.move_token(id, token, roll)?,
            },
            TurnDecision::MoveBoth => {
                let p = self.move_token(id, TokenId::P, roll)?;
                let q = self.move_token(id, TokenId::Q, roll)?;
                TurnOutcome::MovedBoth { p, q }
            }
            TurnDecision::ConfirmCompleted => TurnOutcome::ConfirmedCompleted,
        };

        let may_complete = matches!(
            decision,
            TurnDecision::MoveBoth
                | TurnDecision::ConfirmCompleted
                | TurnDecision::Move(_, MoveReason::PartnerFinished)
        );
        let player = self.player_mut(id)?;
        let completed_now = may_complete && !player.completed() && player.both_finished();
        if completed_now {
            player.set_completed(true);
        }

        let record = TurnRecord {
            turn: self.history.len() + 1,
            player: id,
            roll,
            outcome,
            completed_now,
        };
        self.history.push_back(record.clone());
        Ok(record)
    }

    // === Results ===

    /// Token status for every player, in registration order.
    #[must_use]
    pub fn report(&self) -> Vec<PlayerReport> {
        self.players.iter().map(PlayerReport::from_player).collect()
    }

    /// Players in the order they completed.
    #[must_use]
    pub fn finish_order(&self) -> Vec<PlayerId> {
        self.history
            .iter()
            .filter(|record| record.completed_now)
            .map(|record| record.player)
            .collect()
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
