//! Piece relocation with queen promotion.

use crate::board::Board;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// What happened when a piece was relocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Applied {
    /// The piece now standing on the destination (a Queen after promotion).
    pub placed: Piece,
    /// The piece that previously stood on the destination, if any.
    pub captured: Option<Piece>,
    /// `true` if a pawn reached the farthest rank and became a Queen.
    pub promoted: bool,
}

impl Board {
    /// Move the piece on `from` to `to`, replacing whatever stood there.
    ///
    /// A pawn arriving on its promotion row always becomes a Queen. No
    /// legality checks are performed; returns `None` if `from` is empty.
    pub fn apply_move(&mut self, from: Square, to: Square) -> Option<Applied> {
        let mover = self.take(from)?;
        let captured = self.take(to);

        let promoted =
            mover.kind() == PieceKind::Pawn && to.row() == mover.color().promotion_row();
        let placed = if promoted {
            Piece::new(PieceKind::Queen, mover.color())
        } else {
            mover
        };

        self.set(to, Some(placed));
        Some(Applied {
            placed,
            captured,
            promoted,
        })
    }

    /// Return a copy of the board with the move applied.
    pub fn with_move(&self, from: Square, to: Square) -> Board {
        let mut child = *self;
        child.apply_move(from, to);
        child
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::piece::Piece;
    use crate::square::Square;

    #[test]
    fn quiet_move() {
        let mut board = Board::starting_position();
        let applied = board.apply_move(Square::at(6, 4), Square::at(4, 4)).unwrap();
        assert_eq!(applied.placed, Piece::WHITE_PAWN);
        assert_eq!(applied.captured, None);
        assert!(!applied.promoted);
        assert_eq!(board.get(Square::at(6, 4)), None);
        assert_eq!(board.get(Square::at(4, 4)), Some(Piece::WHITE_PAWN));
    }

    #[test]
    fn capture_returns_victim() {
        let mut board: Board = "4k3/8/8/3p4/4N3/8/8/4K3".parse().unwrap();
        let applied = board.apply_move(Square::at(4, 4), Square::at(3, 3)).unwrap();
        assert_eq!(applied.captured, Some(Piece::BLACK_PAWN));
        assert_eq!(board.get(Square::at(3, 3)), Some(Piece::WHITE_KNIGHT));
    }

    #[test]
    fn white_pawn_promotes_to_queen() {
        let mut board: Board = "4k3/P7/8/8/8/8/8/4K3".parse().unwrap();
        let applied = board.apply_move(Square::at(1, 0), Square::at(0, 0)).unwrap();
        assert!(applied.promoted);
        assert_eq!(board.get(Square::at(0, 0)), Some(Piece::WHITE_QUEEN));
    }

    #[test]
    fn black_pawn_promotes_to_black_queen() {
        let mut board: Board = "4k3/8/8/8/8/8/p7/4K3".parse().unwrap();
        let applied = board.apply_move(Square::at(6, 0), Square::at(7, 0)).unwrap();
        assert!(applied.promoted);
        assert_eq!(board.get(Square::at(7, 0)), Some(Piece::BLACK_QUEEN));
    }

    #[test]
    fn empty_source_is_none() {
        let mut board = Board::starting_position();
        assert_eq!(board.apply_move(Square::at(4, 4), Square::at(3, 4)), None);
        assert_eq!(board, Board::starting_position());
    }

    #[test]
    fn with_move_leaves_original() {
        let board = Board::starting_position();
        let child = board.with_move(Square::at(7, 6), Square::at(5, 5));
        assert_eq!(board, Board::starting_position());
        assert_eq!(child.get(Square::at(5, 5)), Some(Piece::WHITE_KNIGHT));
    }
}
