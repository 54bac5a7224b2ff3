//! The turn controller.
//!
//! One `LudoEngine` drives one game: it owns the piece store, the turn
//! state, the dice, the history, and the event queue. Everything a
//! consumer does goes through four calls:
//!
//! 1. `roll_dice` - rolls, computes eligibility, and either passes the
//!    turn (nothing eligible), starts the move (one eligible piece), or
//!    waits for a selection (several).
//! 2. `choose_piece` - answers a pending selection.
//! 3. `step_move` / `resolve_move` - drive an in-flight move one cell at
//!    a time (for animation) or to completion (for everything else).
//! 4. `snapshot` / `take_events` - read the results.
//!
//! Actions that make no sense in the current phase are rejected with an
//! `ActionRejected` and leave state untouched; a UI can route taps here
//! unfiltered.

use crate::board::BoardTopology;
use crate::core::{Color, ConfigError, DiceRng, DiceRoller, GameConfig, DICE_FACES};
use crate::engine::event::GameEvent;
use crate::engine::turn::{MoveInFlight, TurnAction, TurnPhase, TurnRecord, TurnState};
use crate::pieces::{PieceIndex, PieceLocation, PieceStore};
use crate::rules::{eligible_pieces, is_win, resolve_captures, step_location, steps_for_roll};
use im::Vector;
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

/// Why an action was ignored.
///
/// Every rejection leaves the game exactly as it was; callers may retry
/// or simply drop the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionRejected {
    /// A selection or an in-flight move is already underway.
    #[error("a move or selection is already underway")]
    Busy,
    /// The game has a winner; nothing moves anymore.
    #[error("the game is over")]
    GameOver,
    /// The selected piece is not in the eligible set, or no selection is
    /// pending.
    #[error("that piece cannot move with this roll")]
    InvalidChoice,
}

/// What a roll produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOutcome {
    /// The dice value.
    pub dice: u8,
    /// Pieces that may use the roll, ascending piece index.
    pub eligible: SmallVec<[PieceIndex; 4]>,
    /// Whether the engine now waits for `choose_piece`.
    pub requires_choice: bool,
}

/// Progress of an in-flight move after one `step_move`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveProgress {
    /// No move is in flight.
    Idle,
    /// The piece advanced one cell; more steps remain.
    Stepped {
        location: PieceLocation,
        steps_remaining: u8,
    },
    /// The move finished resolving.
    Completed(MoveSummary),
}

/// Everything that happened when a move finished resolving.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveSummary {
    /// Color that moved.
    pub color: Color,
    /// Piece that moved.
    pub piece: PieceIndex,
    /// The roll that produced the move.
    pub dice: u8,
    /// Where the piece ended up.
    pub final_location: PieceLocation,
    /// Opponent pieces sent home by the landing.
    pub captures: SmallVec<[(Color, PieceIndex); 4]>,
    /// Whether the piece reached the goal.
    pub finished_piece: bool,
    /// Set when this move won the game.
    pub winner: Option<Color>,
    /// Whether the mover keeps the turn.
    pub turn_retained: bool,
}

/// A point-in-time view of the whole game.
///
/// Cloning is cheap: the history is a persistent vector and the stores
/// are small. Renderers work entirely from snapshots (or shared borrows)
/// and can never mutate the live game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Piece locations, keyed by color.
    pub pieces: PieceStore,
    /// Whose turn it is and where the cycle stands.
    pub turn: TurnState,
    /// Every completed roll cycle so far.
    pub history: Vector<TurnRecord>,
}

/// The engine driving one game.
pub struct LudoEngine {
    config: GameConfig,
    store: PieceStore,
    turn: TurnState,
    dice: Box<dyn DiceRoller>,
    history: Vector<TurnRecord>,
    events: Vec<GameEvent>,
}

impl LudoEngine {
    /// Create a game with deterministic seeded dice.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_roller(config, Box::new(DiceRng::new(seed)))
    }

    /// Create a game with a custom dice source.
    pub fn with_roller(
        config: GameConfig,
        dice: Box<dyn DiceRoller>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let store = PieceStore::new(&config.colors, config.pieces_per_color);
        let turn = TurnState::new(config.colors[0]);
        Ok(Self {
            config,
            store,
            turn,
            dice,
            history: Vector::new(),
            events: Vec::new(),
        })
    }

    /// The configuration this game runs under.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The board this game is played on.
    #[must_use]
    pub fn topology(&self) -> &BoardTopology {
        &self.config.topology
    }

    /// Piece locations (read-only; mutation goes through moves).
    #[must_use]
    pub fn pieces(&self) -> &PieceStore {
        &self.store
    }

    /// The live turn state.
    #[must_use]
    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    /// Color whose turn it is.
    #[must_use]
    pub fn current_color(&self) -> Color {
        self.turn.current
    }

    /// The most recent roll, if any.
    #[must_use]
    pub fn last_dice(&self) -> Option<u8> {
        self.turn.last_dice
    }

    /// Completed roll cycles so far plus one.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn.turn_number
    }

    /// The winning color, once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        self.turn.winner()
    }

    /// Whether a move is currently in flight.
    #[must_use]
    pub fn is_resolving(&self) -> bool {
        self.turn.is_resolving()
    }

    /// The pending roll and its eligible pieces, while a selection is
    /// awaited.
    #[must_use]
    pub fn pending_choice(&self) -> Option<(u8, &[PieceIndex])> {
        self.turn.pending_choice()
    }

    /// Every completed roll cycle so far.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    /// A point-in-time view of the whole game.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            pieces: self.store.clone(),
            turn: self.turn.clone(),
            history: self.history.clone(),
        }
    }

    /// Drain the queued events, oldest first.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Roll the dice for the current color.
    ///
    /// Depending on eligibility the roll either passes the turn (nothing
    /// can move), starts an in-flight move (exactly one piece can), or
    /// parks the game in a pending selection (several can). Rejected with
    /// `Busy` while a selection or move is underway and `GameOver` after
    /// a win.
    pub fn roll_dice(&mut self) -> Result<RollOutcome, ActionRejected> {
        match self.turn.phase {
            TurnPhase::GameOver { .. } => return Err(ActionRejected::GameOver),
            TurnPhase::AwaitingChoice { .. } | TurnPhase::Resolving(_) => {
                return Err(ActionRejected::Busy)
            }
            TurnPhase::AwaitingRoll => {}
        }

        let dice = self.dice.roll();
        debug_assert!(
            (1..=DICE_FACES).contains(&dice),
            "dice roller returned {dice}"
        );
        let color = self.turn.current;
        self.turn.last_dice = Some(dice);

        let eligible = eligible_pieces(&self.store, &self.config.topology, color, dice);
        trace!("{color} rolled {dice}, {} piece(s) eligible", eligible.len());

        if eligible.is_empty() {
            self.record(color, dice, TurnAction::NoEligibleMoves);
            let retained = self.advance_or_retain(color, dice);
            debug!(
                "{color} rolled {dice} with no eligible pieces; turn {}",
                if retained { "retained" } else { "passed" }
            );
            return Ok(RollOutcome {
                dice,
                eligible,
                requires_choice: false,
            });
        }

        if eligible.len() == 1 {
            self.begin_move(color, eligible[0], dice);
            return Ok(RollOutcome {
                dice,
                eligible,
                requires_choice: false,
            });
        }

        self.turn.phase = TurnPhase::AwaitingChoice {
            dice,
            eligible: eligible.clone(),
        };
        Ok(RollOutcome {
            dice,
            eligible,
            requires_choice: true,
        })
    }

    /// Answer a pending selection with one of the eligible pieces.
    ///
    /// Rejected with `InvalidChoice` when no selection is pending or the
    /// piece is not in the eligible set; the pending selection survives an
    /// invalid answer unchanged.
    pub fn choose_piece(&mut self, piece: PieceIndex) -> Result<(), ActionRejected> {
        let dice = match &self.turn.phase {
            TurnPhase::GameOver { .. } => return Err(ActionRejected::GameOver),
            TurnPhase::Resolving(_) => return Err(ActionRejected::Busy),
            TurnPhase::AwaitingRoll => return Err(ActionRejected::InvalidChoice),
            TurnPhase::AwaitingChoice { dice, eligible } => {
                if !eligible.contains(&piece) {
                    return Err(ActionRejected::InvalidChoice);
                }
                *dice
            }
        };
        let color = self.turn.current;
        self.begin_move(color, piece, dice);
        Ok(())
    }

    /// Advance the in-flight move by one cell.
    ///
    /// A UI calls this from its animation timer, reading the board
    /// between calls for the intermediate positions. Outside `Resolving`
    /// this is a silent no-op returning `MoveProgress::Idle`.
    pub fn step_move(&mut self) -> MoveProgress {
        let flight = match self.turn.phase {
            TurnPhase::Resolving(flight) => flight,
            _ => return MoveProgress::Idle,
        };

        let next = step_location(&self.config.topology, flight.color, flight.location);
        self.store.set_location(flight.color, flight.piece, next);
        let steps_remaining = flight.steps_remaining - 1;

        if steps_remaining > 0 {
            trace!(
                "{} stepped {} to {:?}, {} step(s) left",
                flight.color,
                flight.piece,
                next,
                steps_remaining
            );
            self.turn.phase = TurnPhase::Resolving(MoveInFlight {
                location: next,
                steps_remaining,
                ..flight
            });
            return MoveProgress::Stepped {
                location: next,
                steps_remaining,
            };
        }

        MoveProgress::Completed(self.complete_move(flight, next))
    }

    /// Drive the in-flight move to completion.
    ///
    /// Returns `None` when no move is in flight.
    pub fn resolve_move(&mut self) -> Option<MoveSummary> {
        loop {
            match self.step_move() {
                MoveProgress::Idle => return None,
                MoveProgress::Stepped { .. } => {}
                MoveProgress::Completed(summary) => return Some(summary),
            }
        }
    }

    fn begin_move(&mut self, color: Color, piece: PieceIndex, dice: u8) {
        let from = self.store.locations(color)[piece.index()];
        let steps = steps_for_roll(dice, from);
        debug!("{color} moves {piece} from {from:?}, {steps} step(s)");
        self.turn.phase = TurnPhase::Resolving(MoveInFlight {
            color,
            piece,
            dice,
            from,
            location: from,
            steps_remaining: steps,
        });
    }

    fn complete_move(&mut self, flight: MoveInFlight, landed: PieceLocation) -> MoveSummary {
        let color = flight.color;

        let mut final_location = landed;
        let mut finished_piece = false;
        if let PieceLocation::InnerPath { index } = landed {
            if index == self.config.topology.inner_len(color) - 1 {
                final_location = PieceLocation::Finished;
                finished_piece = true;
                self.store
                    .set_location(color, flight.piece, PieceLocation::Finished);
                self.events.push(GameEvent::PieceFinished {
                    color,
                    piece: flight.piece,
                });
                debug!("{color} brought {} to the goal", flight.piece);
            }
        }

        let captures = resolve_captures(&mut self.store, &self.config.topology, color, final_location);
        if let Some(cell) = final_location.track_cell() {
            for &(victim, piece) in &captures {
                self.events.push(GameEvent::PieceCaptured {
                    victim,
                    piece,
                    by: color,
                    cell,
                });
                debug!("{color} captured {victim} {piece} on cell {cell}");
            }
        }

        let action = if flight.from.is_home() {
            TurnAction::EnteredPlay {
                piece: flight.piece,
            }
        } else {
            TurnAction::Moved {
                piece: flight.piece,
                to: final_location,
            }
        };
        self.record(color, flight.dice, action);

        if is_win(&self.store, color) {
            self.turn.phase = TurnPhase::GameOver { winner: color };
            self.events.push(GameEvent::ColorWon { color });
            debug!("{color} wins");
            return MoveSummary {
                color,
                piece: flight.piece,
                dice: flight.dice,
                final_location,
                captures,
                finished_piece,
                winner: Some(color),
                turn_retained: false,
            };
        }

        let turn_retained = self.advance_or_retain(color, flight.dice);
        MoveSummary {
            color,
            piece: flight.piece,
            dice: flight.dice,
            final_location,
            captures,
            finished_piece,
            winner: None,
            turn_retained,
        }
    }

    fn record(&mut self, color: Color, dice: u8, action: TurnAction) {
        self.history.push_back(TurnRecord {
            turn: self.turn.turn_number,
            color,
            dice,
            action,
        });
        self.turn.turn_number += 1;
    }

    fn advance_or_retain(&mut self, color: Color, dice: u8) -> bool {
        self.turn.phase = TurnPhase::AwaitingRoll;
        if self.config.retain_turn_on_six && dice == DICE_FACES {
            trace!("{color} retains the turn");
            true
        } else {
            self.turn.current = self.config.next_color(color);
            false
        }
    }

    #[cfg(test)]
    pub(crate) fn place_for_test(
        &mut self,
        color: Color,
        piece: PieceIndex,
        location: PieceLocation,
    ) {
        self.store.set_location(color, piece, location);
    }
}

/// Builder for `LudoEngine` games.
///
/// Starts from the two-player classic configuration; every setting can be
/// overridden before `build`.
///
/// ## Example
///
/// ```
/// use ludo_engine::engine::LudoGameBuilder;
/// use ludo_engine::core::Color;
///
/// let engine = LudoGameBuilder::new()
///     .colors(&[Color::Red, Color::Blue, Color::Green])
///     .pieces_per_color(4)
///     .retain_turn_on_six(true)
///     .build(42)
///     .unwrap();
/// assert_eq!(engine.current_color(), Color::Red);
/// ```
#[derive(Clone, Debug)]
pub struct LudoGameBuilder {
    config: GameConfig,
}

impl LudoGameBuilder {
    /// Start from the two-player classic configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: GameConfig::two_player_classic(),
        }
    }

    /// Start from an existing configuration.
    #[must_use]
    pub fn from_config(config: GameConfig) -> Self {
        Self { config }
    }

    /// Set the active colors, in turn order.
    #[must_use]
    pub fn colors(mut self, colors: &[Color]) -> Self {
        self.config.colors = colors.iter().copied().collect();
        self
    }

    /// Set how many pieces each color fields.
    #[must_use]
    pub fn pieces_per_color(mut self, count: u8) -> Self {
        self.config.pieces_per_color = count;
        self
    }

    /// Set whether rolling the highest face keeps the turn.
    #[must_use]
    pub fn retain_turn_on_six(mut self, retain: bool) -> Self {
        self.config.retain_turn_on_six = retain;
        self
    }

    /// Play on a custom board.
    #[must_use]
    pub fn topology(mut self, topology: BoardTopology) -> Self {
        self.config.topology = topology;
        self
    }

    /// Build with deterministic seeded dice.
    pub fn build(self, seed: u64) -> Result<LudoEngine, ConfigError> {
        LudoEngine::new(self.config, seed)
    }

    /// Build with a custom dice source.
    pub fn build_with_roller(self, dice: Box<dyn DiceRoller>) -> Result<LudoEngine, ConfigError> {
        LudoEngine::with_roller(self.config, dice)
    }
}

impl Default for LudoGameBuilder {
    fn default() -> Self {
        Self::new()
    }
}
