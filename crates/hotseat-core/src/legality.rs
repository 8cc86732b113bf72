//! Move filtering on top of the pseudo-legal generator.
//!
//! [`Legality::Pseudo`] keeps the generator's output as-is, so a side may move
//! into or stay in check. [`Legality::Strict`] additionally drops any move that
//! leaves the mover's own king attacked.

use crate::attacks::is_attacked;
use crate::board::Board;
use crate::color::Color;
use crate::error::BoardError;
use crate::movegen::{TargetList, has_pseudo_legal_moves, pseudo_legal_moves};
use crate::square::Square;

/// Which candidate moves count as playable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Legality {
    /// Raw pseudo-legal moves.
    #[default]
    Pseudo,
    /// Pseudo-legal moves that do not leave the mover's king attacked.
    Strict,
}

impl Legality {
    /// Map the `strict` configuration flag to a legality mode.
    pub const fn from_strict(strict: bool) -> Legality {
        if strict { Legality::Strict } else { Legality::Pseudo }
    }
}

/// Return `true` if playing `from -> to` leaves the mover's king attacked.
///
/// An empty `from` square never exposes anything. Errors with
/// [`BoardError::KingNotFound`] if the mover has no king.
pub fn leaves_king_attacked(board: &Board, from: Square, to: Square) -> Result<bool, BoardError> {
    let Some(us) = board.color_on(from) else {
        return Ok(false);
    };
    let child = board.with_move(from, to);
    let king_sq = child.find_king(us)?;
    Ok(is_attacked(&child, king_sq, us))
}

/// Generate the playable destinations of the piece on `sq` under `legality`.
pub fn moves_for(board: &Board, sq: Square, legality: Legality) -> Result<TargetList, BoardError> {
    let mut targets = pseudo_legal_moves(board, sq);
    if legality == Legality::Strict {
        targets.try_retain(|to| leaves_king_attacked(board, sq, to).map(|exposed| !exposed))?;
    }
    Ok(targets)
}

/// Return `true` if `color` has at least one playable move under `legality`.
pub fn has_moves(board: &Board, color: Color, legality: Legality) -> Result<bool, BoardError> {
    match legality {
        Legality::Pseudo => Ok(has_pseudo_legal_moves(board, color)),
        Legality::Strict => {
            for (from, _) in board.pieces_of(color) {
                if !moves_for(board, from, legality)?.is_empty() {
                    return Ok(true);
                }
            }
            Ok(false)
        }
    }
}
