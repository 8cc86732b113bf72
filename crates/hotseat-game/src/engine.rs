//! Turn sequencing, selection, move execution and game-end detection.

use tracing::{debug, info, warn};

use hotseat_core::{
    Board, Color, Piece, PieceKind, Square, has_moves, is_attacked, moves_for,
};

use crate::clock::Clock;
use crate::error::GameError;
use crate::record::MoveRecord;
use crate::settings::Settings;
use crate::snapshot::Snapshot;
use crate::status::{GameOutcome, GameResult, GameStatus};

/// Notifications emitted as the game changes, drained by front ends.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    NewGame,
    Moved(MoveRecord),
    Undone(MoveRecord),
    StatusChanged(GameStatus),
    GameOver(GameOutcome),
    Paused(bool),
    SettingsApplied(Settings),
}

/// What a square activation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Selected,
    Reselected,
    Moved(MoveRecord),
    Deselected,
    /// Nothing changed: wrong piece, empty square, paused or finished game.
    Ignored,
}

/// A two-player game on one board.
///
/// The engine owns the board, history, captured pieces and clocks. Front ends
/// read [`Snapshot`]s and [`GameEvent`]s and never mutate state directly.
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    current_player: Color,
    selection: Option<Square>,
    legal_targets: Vec<Square>,
    history: Vec<MoveRecord>,
    /// Kinds captured by each side, indexed by the capturing color.
    captured: [Vec<PieceKind>; Color::COUNT],
    status: GameStatus,
    outcome: Option<GameOutcome>,
    paused: bool,
    clock: Clock,
    settings: Settings,
    events: Vec<GameEvent>,
}

impl GameEngine {
    /// Start a game from the standard position.
    pub fn new(settings: Settings) -> GameEngine {
        GameEngine {
            board: Board::starting_position(),
            current_player: Color::White,
            selection: None,
            legal_targets: Vec::new(),
            history: Vec::new(),
            captured: [Vec::new(), Vec::new()],
            status: GameStatus::Playing,
            outcome: None,
            paused: false,
            clock: Clock::new(settings.time_control_minutes, settings.increment_seconds),
            settings,
            events: Vec::new(),
        }
    }

    /// Start a game from an arbitrary position with `side_to_move` to play.
    ///
    /// The board must have exactly one king per side. The initial status is
    /// evaluated immediately, so a position can start in check or already be
    /// finished.
    pub fn from_position(
        board: Board,
        side_to_move: Color,
        settings: Settings,
    ) -> Result<GameEngine, GameError> {
        board.validate()?;
        let mut engine = GameEngine::new(settings);
        engine.board = board;
        engine.current_player = side_to_move;
        engine.update_game_state()?;
        engine.check_game_end()?;
        engine.events.clear();
        Ok(engine)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn current_player(&self) -> Color {
        self.current_player
    }

    #[inline]
    pub fn selection(&self) -> Option<Square> {
        self.selection
    }

    #[inline]
    pub fn legal_targets(&self) -> &[Square] {
        &self.legal_targets
    }

    #[inline]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Pieces captured by `color`, in capture order.
    #[inline]
    pub fn captured_by(&self, color: Color) -> &[PieceKind] {
        &self.captured[color.index()]
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The final result once the game is over.
    #[inline]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[inline]
    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    /// Mutable access to the clocks, for adjusting remaining time directly.
    #[inline]
    pub fn clock_mut(&mut self) -> &mut Clock {
        &mut self.clock
    }

    #[inline]
    pub fn settings(&self) -> Settings {
        self.settings
    }

    /// Return `true` if square activations are currently accepted.
    #[inline]
    pub fn is_interactive(&self) -> bool {
        self.status.is_active() && !self.paused
    }

    /// Take all events emitted since the previous call.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Build a read-only view of the whole game.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board,
            current_player: self.current_player,
            selection: self.selection,
            legal_targets: self.legal_targets.clone(),
            status: self.status,
            paused: self.paused,
            captured: self.captured.clone(),
            history: self.history.clone(),
            clock: self.clock.display(),
            outcome: self.outcome,
        }
    }

    /// Route a clicked square: select, move, reselect or deselect.
    ///
    /// - no selection + own piece: select it
    /// - selection + legal target: move there
    /// - selection + another own piece: select that instead
    /// - selection + anything else: deselect
    pub fn on_square_activated(&mut self, sq: Square) -> Result<Activation, GameError> {
        if !self.is_interactive() {
            debug!(square = %sq, status = %self.status, paused = self.paused, "activation ignored");
            return Ok(Activation::Ignored);
        }

        let own_piece = self.board.color_on(sq) == Some(self.current_player);
        match self.selection {
            None if own_piece => {
                self.select_square(sq)?;
                Ok(Activation::Selected)
            }
            None => Ok(Activation::Ignored),
            Some(_) if self.legal_targets.contains(&sq) => match self.attempt_move(sq)? {
                Some(record) => Ok(Activation::Moved(record)),
                None => Ok(Activation::Ignored),
            },
            Some(_) if own_piece => {
                self.select_square(sq)?;
                Ok(Activation::Reselected)
            }
            Some(_) => {
                self.clear_selection();
                Ok(Activation::Deselected)
            }
        }
    }

    /// Select the piece on `sq` and compute its destinations.
    ///
    /// Returns `false` (leaving state unchanged) unless the game is active,
    /// not paused, and `sq` holds a piece of the side to move.
    pub fn select_square(&mut self, sq: Square) -> Result<bool, GameError> {
        if !self.is_interactive() || self.board.color_on(sq) != Some(self.current_player) {
            debug!(square = %sq, "selection rejected");
            return Ok(false);
        }

        let targets = moves_for(&self.board, sq, self.settings.legality())?;
        self.selection = Some(sq);
        self.legal_targets = targets.as_slice().to_vec();
        debug!(square = %sq, targets = self.legal_targets.len(), "square selected");
        Ok(true)
    }

    /// Drop the current selection and its targets.
    pub fn clear_selection(&mut self) {
        self.selection = None;
        self.legal_targets.clear();
    }

    /// Move the selected piece to `to` if it is one of the legal targets.
    ///
    /// Returns the executed move, or `None` if nothing happened.
    pub fn attempt_move(&mut self, to: Square) -> Result<Option<MoveRecord>, GameError> {
        let Some(from) = self.selection else {
            return Ok(None);
        };
        if !self.is_interactive() || !self.legal_targets.contains(&to) {
            debug!(from = %from, to = %to, "move rejected");
            return Ok(None);
        }

        let mover = self.current_player;
        let applied = self
            .board
            .apply_move(from, to)
            .ok_or(GameError::EmptySelection { square: from })?;

        if let Some(victim) = applied.captured {
            self.captured[mover.index()].push(victim.kind());
        }

        let record = MoveRecord {
            from,
            to,
            piece: applied.placed.kind(),
            captured: applied.captured.map(Piece::kind),
            color: mover,
        };
        self.history.push(record);
        self.clock.credit_increment(mover);
        self.current_player = mover.flip();
        self.clear_selection();

        info!(
            color = mover.name(),
            mv = %record,
            captured = ?record.captured,
            promoted = applied.promoted,
            "move played"
        );
        self.events.push(GameEvent::Moved(record));

        self.update_game_state()?;
        self.check_game_end()?;
        Ok(Some(record))
    }

    /// Recompute Check/Playing for the side to move.
    ///
    /// Fails if the side to move has no king on the board.
    pub fn update_game_state(&mut self) -> Result<GameStatus, GameError> {
        let king_sq = self.board.find_king(self.current_player)?;
        let status = if is_attacked(&self.board, king_sq, self.current_player) {
            GameStatus::Check
        } else {
            GameStatus::Playing
        };
        self.outcome = None;
        self.set_status(status);
        Ok(status)
    }

    /// End the game if the side to move has no moves: Checkmate when in
    /// check, Stalemate otherwise.
    pub fn check_game_end(&mut self) -> Result<GameStatus, GameError> {
        if self.status.is_terminal() {
            return Ok(self.status);
        }
        if has_moves(&self.board, self.current_player, self.settings.legality())? {
            return Ok(self.status);
        }

        let outcome = match self.status {
            GameStatus::Check => GameOutcome {
                result: GameResult::Checkmate,
                winner: Some(self.current_player.flip()),
            },
            _ => GameOutcome {
                result: GameResult::Stalemate,
                winner: None,
            },
        };
        self.finish(outcome);
        Ok(self.status)
    }

    /// Take back the last move. Does nothing on an empty history.
    ///
    /// The recorded piece kind is put back, so a promoted pawn returns as a
    /// Queen.
    pub fn undo(&mut self) -> Result<Option<MoveRecord>, GameError> {
        let Some(record) = self.history.pop() else {
            debug!("undo with empty history");
            return Ok(None);
        };

        self.board
            .set(record.from, Some(Piece::new(record.piece, record.color)));
        match record.captured {
            Some(kind) => {
                self.board
                    .set(record.to, Some(Piece::new(kind, record.color.flip())));
                let captured = &mut self.captured[record.color.index()];
                if let Some(pos) = captured.iter().position(|&k| k == kind) {
                    captured.remove(pos);
                }
            }
            None => self.board.set(record.to, None),
        }

        self.current_player = record.color;
        self.clear_selection();
        info!(color = record.color.name(), mv = %record, "move undone");
        self.events.push(GameEvent::Undone(record));

        self.update_game_state()?;
        Ok(Some(record))
    }

    /// Reset to the starting position with fresh clocks.
    pub fn new_game(&mut self) {
        let settings = self.settings;
        let events = std::mem::take(&mut self.events);
        *self = GameEngine::new(settings);
        self.events = events;
        info!(
            minutes = settings.time_control_minutes,
            increment = settings.increment_seconds,
            "new game"
        );
        self.events.push(GameEvent::NewGame);
    }

    /// Replace the time control and rule settings.
    ///
    /// Both clocks reset to the new time control immediately; the board is
    /// left as it is.
    pub fn apply_settings(&mut self, settings: Settings) {
        self.settings = settings;
        self.clock
            .apply_settings(settings.time_control_minutes, settings.increment_seconds);
        self.clear_selection();
        info!(
            minutes = settings.time_control_minutes,
            increment = settings.increment_seconds,
            strict = settings.strict_legality,
            "settings applied"
        );
        self.events.push(GameEvent::SettingsApplied(settings));
    }

    /// Pause or resume. Pausing freezes the clocks and ignores activations.
    pub fn set_paused(&mut self, paused: bool) {
        if self.paused == paused {
            return;
        }
        self.paused = paused;
        self.clock.resync();
        debug!(paused, "pause toggled");
        self.events.push(GameEvent::Paused(paused));
    }

    /// Flip the pause flag and return the new value.
    pub fn toggle_pause(&mut self) -> bool {
        self.set_paused(!self.paused);
        self.paused
    }

    /// Charge `elapsed` seconds to the side to move.
    ///
    /// Ignored while paused or after the game has ended. Returns the outcome
    /// if a player ran out of time.
    pub fn tick(&mut self, elapsed: f64) -> Option<GameOutcome> {
        if !self.is_interactive() {
            return None;
        }
        let flagged = self.clock.tick(self.current_player, elapsed)?;
        Some(self.flag(flagged))
    }

    /// Like [`GameEngine::tick`], measuring elapsed time from the timestamp of
    /// the previous call (seconds on any monotonic scale).
    pub fn tick_at(&mut self, now: f64) -> Option<GameOutcome> {
        if !self.is_interactive() {
            self.clock.resync();
            return None;
        }
        let flagged = self.clock.tick_at(self.current_player, now)?;
        Some(self.flag(flagged))
    }

    fn flag(&mut self, flagged: Color) -> GameOutcome {
        warn!(color = flagged.name(), "flag fell");
        let outcome = GameOutcome {
            result: GameResult::Timeout,
            winner: Some(flagged.flip()),
        };
        self.finish(outcome);
        outcome
    }

    fn finish(&mut self, outcome: GameOutcome) {
        self.clear_selection();
        self.outcome = Some(outcome);
        self.set_status(outcome.result.status());
        info!(result = %outcome, "game over");
        self.events.push(GameEvent::GameOver(outcome));
    }

    fn set_status(&mut self, status: GameStatus) {
        if self.status != status {
            self.status = status;
            self.events.push(GameEvent::StatusChanged(status));
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
