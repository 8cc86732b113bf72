//! Square attack detection.

use crate::board::Board;
use crate::color::Color;
use crate::movegen::pseudo_legal_moves;
use crate::square::Square;

/// Return `true` if any piece not of `defender` has `sq` among its
/// pseudo-legal targets.
///
/// Runs the move generator for every enemy piece, so a call costs up to 64
/// generations. That is bounded by the fixed board size; this does not scale
/// to larger boards.
pub fn is_attacked(board: &Board, sq: Square, defender: Color) -> bool {
    board
        .pieces_of(defender.flip())
        .any(|(from, _)| pseudo_legal_moves(board, from).contains(sq))
}

#[cfg(test)]
mod tests {
    use super::is_attacked;
    use crate::board::Board;
    use crate::color::Color;
    use crate::piece::Piece;
    use crate::square::Square;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    #[test]
    fn queen_on_open_file_attacks_king() {
        let mut board = Board::empty();
        board.set(sq("e8"), Some(Piece::BLACK_QUEEN));
        board.set(sq("e1"), Some(Piece::WHITE_KING));
        assert!(is_attacked(&board, sq("e1"), Color::White));
        assert!(!is_attacked(&board, sq("d1"), Color::White));
        assert!(!is_attacked(&board, sq("e8"), Color::Black));
    }

    #[test]
    fn blocked_file_is_not_attacked() {
        let board: Board = "4k3/4r3/8/8/8/8/4P3/4K3".parse().unwrap();
        assert!(!is_attacked(&board, sq("e1"), Color::White));
        assert!(is_attacked(&board, sq("e2"), Color::White));
    }

    #[test]
    fn pawn_push_squares_count_as_attacked() {
        // Attack detection reuses the move generator, so a pawn's forward
        // push square reports as attacked and its empty diagonals do not.
        let board: Board = "4k3/8/8/8/3p4/8/8/4K3".parse().unwrap();
        assert!(is_attacked(&board, sq("d3"), Color::White));
        assert!(!is_attacked(&board, sq("c3"), Color::White));
        assert!(!is_attacked(&board, sq("e3"), Color::White));
    }

    #[test]
    fn pawn_attacks_occupied_diagonal() {
        let board: Board = "4k3/8/8/8/3p4/4N3/8/4K3".parse().unwrap();
        assert!(is_attacked(&board, sq("e3"), Color::White));
    }

    #[test]
    fn own_pieces_do_not_attack() {
        let board = Board::starting_position();
        assert!(!is_attacked(&board, sq("e1"), Color::White));
        assert!(!is_attacked(&board, sq("e4"), Color::Black));
        assert!(is_attacked(&board, sq("f3"), Color::Black));
    }
}
