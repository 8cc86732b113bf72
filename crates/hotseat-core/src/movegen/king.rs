//! King move generation.
//!
//! King targets are not filtered for safety: the same list is used to decide
//! what squares a king attacks.

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;

use super::{TargetList, push_if_enterable};

const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Generate king targets. No castling.
pub(super) fn gen_king(board: &Board, from: Square, us: Color, list: &mut TargetList) {
    for (d_row, d_col) in KING_OFFSETS {
        if let Some(to) = from.offset(d_row, d_col) {
            push_if_enterable(board, us, to, list);
        }
    }
}
