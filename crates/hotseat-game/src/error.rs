//! Game engine errors.

use hotseat_core::{BoardError, Square};

/// Errors that signal a broken engine invariant.
///
/// Invalid interactions (clicking an empty square, moving out of turn) are
/// not errors; they are ignored and leave the state unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// The board is corrupt, e.g. a side has no king.
    #[error("corrupt board: {source}")]
    Board {
        /// The underlying board error.
        #[from]
        source: BoardError,
    },

    /// The selected square held no piece when the move was executed.
    #[error("selected square {square} is empty")]
    EmptySelection {
        /// The selected square.
        square: Square,
    },
}
