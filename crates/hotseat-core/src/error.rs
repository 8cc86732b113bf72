//! Error types for FEN parsing and board validation.

use std::fmt;

use crate::color::Color;

/// Errors that occur when parsing a FEN position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// The string has no fields at all.
    Empty,
    /// The piece placement section does not have exactly 8 ranks.
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank in the piece placement describes more or fewer than 8 squares.
    BadRankLength {
        /// Zero-based rank index (0 = row 0, Black's home rank).
        rank_index: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the piece placement.
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// The active color field is not "w" or "b".
    InvalidColor {
        /// The invalid color string.
        found: String,
    },
    /// The parsed board fails structural validation.
    InvalidBoard {
        /// The underlying board validation error.
        source: BoardError,
    },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::Empty => write!(f, "empty FEN string"),
            FenError::WrongRankCount { found } => {
                write!(f, "expected 8 ranks in piece placement, found {found}")
            }
            FenError::BadRankLength { rank_index, length } => {
                write!(f, "rank {rank_index} describes {length} squares, expected 8")
            }
            FenError::InvalidPieceChar { character } => {
                write!(f, "invalid piece character: '{character}'")
            }
            FenError::InvalidColor { found } => {
                write!(f, "invalid active color: \"{found}\"")
            }
            FenError::InvalidBoard { source } => {
                write!(f, "invalid board: {source}")
            }
        }
    }
}

impl std::error::Error for FenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FenError::InvalidBoard { source } => Some(source),
            _ => None,
        }
    }
}

impl From<BoardError> for FenError {
    fn from(source: BoardError) -> Self {
        FenError::InvalidBoard { source }
    }
}

/// Errors from board lookups and structural validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A side has no king on the board. The engine cannot evaluate check
    /// without one, so this is an invariant breach rather than a user error.
    #[error("no {color} king on the board")]
    KingNotFound {
        /// Side whose king is missing.
        color: Color,
    },
    /// A side does not have exactly one king.
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount {
        /// Which side has the wrong king count.
        color: Color,
        /// Number of kings found.
        count: u32,
    },
    /// Pawns occupy a back rank.
    #[error("pawns found on back rank")]
    PawnsOnBackRank,
}
