//! Pawn move generation: single and double pushes, diagonal captures.

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;

use super::TargetList;

/// Generate pawn targets. No en passant.
pub(super) fn gen_pawn(board: &Board, from: Square, us: Color, list: &mut TargetList) {
    let forward = us.forward();
    let Some(one) = from.offset(forward, 0) else {
        return;
    };

    if !board.is_occupied(one) {
        list.push(one);

        if from.row() == us.pawn_row() {
            if let Some(two) = one.offset(forward, 0) {
                if !board.is_occupied(two) {
                    list.push(two);
                }
            }
        }
    }

    for d_col in [-1, 1] {
        if let Some(target) = from.offset(forward, d_col) {
            if board.color_on(target) == Some(us.flip()) {
                list.push(target);
            }
        }
    }
}
