//! FEN piece placement parsing and serialization for [`Board`].
//!
//! Only the placement and active-color fields carry meaning here. Castling,
//! en passant and move counters are accepted and ignored since the rule set
//! does not track them.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::color::Color;
use crate::error::FenError;
use crate::piece::Piece;
use crate::square::Square;

/// The FEN string for the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1";

/// Parse a FEN string into a validated board and the side to move.
///
/// A missing active-color field means White to move.
pub fn parse_fen(fen: &str) -> Result<(Board, Color), FenError> {
    let mut fields = fen.split_whitespace();
    let placement = fields.next().ok_or(FenError::Empty)?;

    let board = parse_placement(placement)?;
    board.validate()?;

    let side_to_move = match fields.next() {
        None | Some("w") => Color::White,
        Some("b") => Color::Black,
        Some(other) => {
            return Err(FenError::InvalidColor {
                found: other.to_string(),
            });
        }
    };

    Ok((board, side_to_move))
}

fn parse_placement(placement: &str) -> Result<Board, FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    let mut board = Board::empty();

    // FEN lists rank 8 first, which is row 0.
    for (rank_index, rank_str) in ranks.iter().enumerate() {
        let row = rank_index as u8;
        let mut col: u8 = 0;

        for c in rank_str.chars() {
            if let Some(digit) = c.to_digit(10) {
                if !(1..=8).contains(&digit) {
                    return Err(FenError::InvalidPieceChar { character: c });
                }
                let next = col as usize + digit as usize;
                if next > 8 {
                    return Err(FenError::BadRankLength {
                        rank_index,
                        length: next,
                    });
                }
                col = next as u8;
            } else {
                let piece =
                    Piece::from_fen_char(c).ok_or(FenError::InvalidPieceChar { character: c })?;
                let sq = Square::new(row, col).ok_or(FenError::BadRankLength {
                    rank_index,
                    length: col as usize + 1,
                })?;
                board.set(sq, Some(piece));
                col += 1;
            }
        }

        if col != 8 {
            return Err(FenError::BadRankLength {
                rank_index,
                length: col as usize,
            });
        }
    }

    Ok(board)
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(fen: &str) -> Result<Board, FenError> {
        parse_fen(fen).map(|(board, _)| board)
    }
}

/// Writes the piece placement field only.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0u8..8 {
            let mut empty_count = 0u8;
            for col in 0u8..8 {
                match self.get(Square::at(row, col)) {
                    Some(piece) => {
                        if empty_count > 0 {
                            write!(f, "{empty_count}")?;
                            empty_count = 0;
                        }
                        write!(f, "{}", piece.fen_char())?;
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                write!(f, "{empty_count}")?;
            }
            if row < 7 {
                write!(f, "/")?;
            }
        }
        Ok(())
    }
}
