//! The board: an 8x8 grid of optional pieces.

use std::fmt;

use crate::color::Color;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Back-rank layout from column 0 to column 7.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Piece placement. Holds no turn or legality state.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; Square::COUNT],
}

impl Board {
    /// Return a board with no pieces.
    pub const fn empty() -> Board {
        Board {
            squares: [None; Square::COUNT],
        }
    }

    /// Return the standard starting position.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            let col = col as u8;
            board.set(Square::at(0, col), Some(Piece::new(kind, Color::Black)));
            board.set(Square::at(1, col), Some(Piece::BLACK_PAWN));
            board.set(Square::at(6, col), Some(Piece::WHITE_PAWN));
            board.set(Square::at(7, col), Some(Piece::new(kind, Color::White)));
        }
        board
    }

    /// Return the piece on the given square, if any.
    #[inline]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    /// Place a piece on (or clear) the given square.
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.index()] = piece;
    }

    /// Remove and return the piece on the given square.
    #[inline]
    pub fn take(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()].take()
    }

    /// Return the color of the piece on the given square, if any.
    #[inline]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.get(sq).map(Piece::color)
    }

    /// Return `true` if the given square is occupied.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.get(sq).is_some()
    }

    /// Iterate over every occupied square.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.get(sq).map(|piece| (sq, piece)))
    }

    /// Iterate over the squares held by one side.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color() == color)
    }

    /// Return the number of occupied squares.
    pub fn count(&self) -> usize {
        self.squares.iter().filter(|sq| sq.is_some()).count()
    }

    /// Return the square of the king for the given side.
    ///
    /// A missing king means the position is corrupt; callers should treat the
    /// error as fatal.
    pub fn find_king(&self, color: Color) -> Result<Square, BoardError> {
        let king = Piece::new(PieceKind::King, color);
        Square::all()
            .find(|&sq| self.get(sq) == Some(king))
            .ok_or(BoardError::KingNotFound { color })
    }

    /// Validate the structural integrity of the board.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in Color::ALL {
            let king_count = self
                .pieces_of(color)
                .filter(|(_, piece)| piece.kind() == PieceKind::King)
                .count() as u32;
            if king_count != 1 {
                return Err(BoardError::InvalidKingCount {
                    color,
                    count: king_count,
                });
            }
        }

        let pawn_on_back_rank = self
            .pieces()
            .any(|(sq, piece)| piece.kind() == PieceKind::Pawn && (sq.row() == 0 || sq.row() == 7));
        if pawn_on_back_rank {
            return Err(BoardError::PawnsOnBackRank);
        }

        Ok(())
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}

/// Wrapper for printing a board as an 8x8 grid of FEN letters, row 0 on top.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for row in 0u8..8 {
            write!(f, "{}  ", 8 - row)?;
            for col in 0u8..8 {
                let c = board.get(Square::at(row, col)).map_or('.', Piece::fen_char);
                if col < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
