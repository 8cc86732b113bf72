//! Knight move generation.

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;

use super::{TargetList, push_if_enterable};

/// Knight jumps as (row, col) deltas.
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Generate knight targets.
pub(super) fn gen_knight(board: &Board, from: Square, us: Color, list: &mut TargetList) {
    for (d_row, d_col) in KNIGHT_OFFSETS {
        if let Some(to) = from.offset(d_row, d_col) {
            push_if_enterable(board, us, to, list);
        }
    }
}
