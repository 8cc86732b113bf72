//! Sliding piece (bishop, rook, queen) move generation.

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;

use super::TargetList;

pub(super) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

pub(super) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub(super) const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Cast a ray along each direction until the edge or the first occupied square.
///
/// The blocking square is included only if it holds an enemy piece.
pub(super) fn gen_slider(
    board: &Board,
    from: Square,
    us: Color,
    directions: &[(i8, i8)],
    list: &mut TargetList,
) {
    for &(d_row, d_col) in directions {
        let mut cursor = from;
        while let Some(to) = cursor.offset(d_row, d_col) {
            match board.color_on(to) {
                None => list.push(to),
                Some(color) => {
                    if color != us {
                        list.push(to);
                    }
                    break;
                }
            }
            cursor = to;
        }
    }
}
