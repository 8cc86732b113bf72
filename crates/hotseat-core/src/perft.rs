//! Perft (performance test) for move generation correctness verification.

use crate::board::Board;
use crate::color::Color;
use crate::error::BoardError;
use crate::legality::{Legality, moves_for};

/// Count the number of leaf nodes at the given depth with `side` to move.
///
/// Depth 0 returns 1 (the current position). Depth 1 returns the number
/// of moves without making them.
pub fn perft(
    board: &Board,
    side: Color,
    depth: usize,
    legality: Legality,
) -> Result<u64, BoardError> {
    if depth == 0 {
        return Ok(1);
    }

    let mut nodes = 0u64;
    for (from, _) in board.pieces_of(side) {
        let targets = moves_for(board, from, legality)?;
        if depth == 1 {
            nodes += targets.len() as u64;
            continue;
        }
        for &to in &targets {
            let child = board.with_move(from, to);
            nodes += perft(&child, side.flip(), depth - 1, legality)?;
        }
    }
    Ok(nodes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perft_startpos_depth_1() {
        let board = Board::starting_position();
        assert_eq!(perft(&board, Color::White, 1, Legality::Pseudo), Ok(20));
    }

    #[test]
    fn perft_startpos_depth_2() {
        let board = Board::starting_position();
        assert_eq!(perft(&board, Color::White, 2, Legality::Pseudo), Ok(400));
    }

    #[test]
    fn perft_startpos_depth_3() {
        let board = Board::starting_position();
        assert_eq!(perft(&board, Color::White, 3, Legality::Pseudo), Ok(8_902));
        assert_eq!(perft(&board, Color::White, 3, Legality::Strict), Ok(8_902));
    }

    #[test]
    fn perft_startpos_depth_4_strict() {
        // No castling, en passant or promotion can occur within four plies.
        let board = Board::starting_position();
        assert_eq!(perft(&board, Color::White, 4, Legality::Strict), Ok(197_281));
    }

    #[test]
    fn black_to_move_mirrors_white() {
        let board = Board::starting_position();
        assert_eq!(
            perft(&board, Color::Black, 2, Legality::Pseudo),
            perft(&board, Color::White, 2, Legality::Pseudo)
        );
    }
}
