//! Pseudo-legal move generation.
//!
//! Targets follow each piece's movement pattern and occupancy rules only.
//! Whether a move leaves the mover's own king attacked is not considered
//! here, which lets the same generator answer attack queries.

mod king;
mod knights;
mod pawns;
mod sliders;

use crate::board::Board;
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use self::king::gen_king;
use self::knights::gen_knight;
use self::pawns::gen_pawn;
use self::sliders::{BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS, gen_slider};

/// Capacity of a [`TargetList`]. A centralized queen reaches at most 27 squares.
const MAX_TARGETS: usize = 32;

/// Stack-allocated, ordered list of destination squares for one piece.
#[derive(Clone, Copy)]
pub struct TargetList {
    squares: [Square; MAX_TARGETS],
    len: u8,
}

impl TargetList {
    /// Create an empty target list.
    pub const fn new() -> TargetList {
        TargetList {
            squares: [Square::at(0, 0); MAX_TARGETS],
            len: 0,
        }
    }

    /// Push a square onto the list.
    #[inline]
    pub fn push(&mut self, sq: Square) {
        debug_assert!((self.len as usize) < MAX_TARGETS);
        self.squares[self.len as usize] = sq;
        self.len += 1;
    }

    /// Return the number of targets in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Return `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Return `true` if `sq` is one of the targets.
    #[inline]
    pub fn contains(&self, sq: Square) -> bool {
        self.as_slice().contains(&sq)
    }

    /// Return a slice of the targets.
    #[inline]
    pub fn as_slice(&self) -> &[Square] {
        &self.squares[..self.len as usize]
    }

    /// Keep only the targets for which `keep` returns `Ok(true)`, preserving
    /// order. Stops at the first error, leaving only the targets kept so far.
    pub fn try_retain<E>(
        &mut self,
        mut keep: impl FnMut(Square) -> Result<bool, E>,
    ) -> Result<(), E> {
        let mut write = 0usize;
        for read in 0..self.len as usize {
            let sq = self.squares[read];
            match keep(sq) {
                Ok(true) => {
                    self.squares[write] = sq;
                    write += 1;
                }
                Ok(false) => {}
                Err(err) => {
                    self.len = write as u8;
                    return Err(err);
                }
            }
        }
        self.len = write as u8;
        Ok(())
    }
}

impl Default for TargetList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TargetList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<'a> IntoIterator for &'a TargetList {
    type Item = &'a Square;
    type IntoIter = std::slice::Iter<'a, Square>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

/// Push `to` if it is empty or held by the other side.
#[inline]
fn push_if_enterable(board: &Board, us: Color, to: Square, list: &mut TargetList) {
    if board.color_on(to) != Some(us) {
        list.push(to);
    }
}

/// Generate the pseudo-legal destinations of the piece standing on `sq`.
///
/// An empty square yields an empty list.
pub fn pseudo_legal_moves(board: &Board, sq: Square) -> TargetList {
    let mut list = TargetList::new();
    let Some(piece) = board.get(sq) else {
        return list;
    };
    let us = piece.color();

    match piece.kind() {
        PieceKind::Pawn => gen_pawn(board, sq, us, &mut list),
        PieceKind::Knight => gen_knight(board, sq, us, &mut list),
        PieceKind::Bishop => gen_slider(board, sq, us, &BISHOP_DIRECTIONS, &mut list),
        PieceKind::Rook => gen_slider(board, sq, us, &ROOK_DIRECTIONS, &mut list),
        PieceKind::Queen => gen_slider(board, sq, us, &QUEEN_DIRECTIONS, &mut list),
        PieceKind::King => gen_king(board, sq, us, &mut list),
    }

    list
}

/// Return `true` if any piece of `color` has at least one pseudo-legal move.
pub fn has_pseudo_legal_moves(board: &Board, color: Color) -> bool {
    board
        .pieces_of(color)
        .any(|(sq, _)| !pseudo_legal_moves(board, sq).is_empty())
}
