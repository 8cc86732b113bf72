//! Core chess types: board representation, move generation, and attack detection.

mod attacks;
mod board;
mod color;
mod error;
mod fen;
mod legality;
mod make_move;
pub mod movegen;
pub mod perft;
mod piece;
mod piece_kind;
mod square;

pub use attacks::is_attacked;
pub use board::{Board, PrettyBoard};
pub use color::Color;
pub use error::{BoardError, FenError};
pub use fen::{STARTING_FEN, parse_fen};
pub use legality::{Legality, has_moves, leaves_king_attacked, moves_for};
pub use make_move::Applied;
pub use movegen::{TargetList, has_pseudo_legal_moves, pseudo_legal_moves};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use square::Square;
