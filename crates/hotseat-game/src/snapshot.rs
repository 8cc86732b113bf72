//! Read-only view of the game handed to renderers.

use hotseat_core::{Board, Color, PieceKind, Square};

use crate::clock::ClockDisplay;
use crate::record::MoveRecord;
use crate::status::{GameOutcome, GameStatus};

/// Everything needed to redraw the game without querying the engine again.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub board: Board,
    pub current_player: Color,
    pub selection: Option<Square>,
    pub legal_targets: Vec<Square>,
    pub status: GameStatus,
    pub paused: bool,
    /// Kinds captured by each side, indexed by the capturing [`Color::index()`].
    pub captured: [Vec<PieceKind>; Color::COUNT],
    pub history: Vec<MoveRecord>,
    pub clock: ClockDisplay,
    pub outcome: Option<GameOutcome>,
}

impl Snapshot {
    /// Pieces captured by `color`, in capture order.
    pub fn captured_by(&self, color: Color) -> &[PieceKind] {
        &self.captured[color.index()]
    }

    /// Return `true` if `sq` is a destination of the current selection.
    pub fn is_target(&self, sq: Square) -> bool {
        self.legal_targets.contains(&sq)
    }

    /// Return `true` if `sq` is a destination holding a piece to capture.
    pub fn is_capture_target(&self, sq: Square) -> bool {
        self.is_target(sq) && self.board.is_occupied(sq)
    }
}
