//! Executed-move records.

use std::fmt;

use hotseat_core::{Color, PieceKind, Square};

/// One executed move, as kept in the game history.
///
/// `piece` is the kind standing on `to` after the move, so a promoted pawn is
/// recorded as a Queen. `color` is the mover's color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub piece: PieceKind,
    pub captured: Option<PieceKind>,
    pub color: Color,
}

/// Coordinate notation, e.g. `e2-e4`.
impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

/// Group a history into numbered full moves: `(1, white, Some(black))`, ...
pub fn full_moves(
    history: &[MoveRecord],
) -> impl Iterator<Item = (usize, &MoveRecord, Option<&MoveRecord>)> {
    history
        .chunks(2)
        .enumerate()
        .map(|(i, pair)| (i + 1, &pair[0], pair.get(1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(from: &str, to: &str, color: Color) -> MoveRecord {
        MoveRecord {
            from: Square::from_algebraic(from).unwrap(),
            to: Square::from_algebraic(to).unwrap(),
            piece: PieceKind::Pawn,
            captured: None,
            color,
        }
    }

    #[test]
    fn display_coordinates() {
        assert_eq!(record("e2", "e4", Color::White).to_string(), "e2-e4");
    }

    #[test]
    fn full_moves_pairs_plies() {
        let history = [
            record("e2", "e4", Color::White),
            record("e7", "e5", Color::Black),
            record("d2", "d4", Color::White),
        ];
        let rows: Vec<_> = full_moves(&history).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].0, 1);
        assert_eq!(rows[0].2.map(ToString::to_string).as_deref(), Some("e7-e5"));
        assert_eq!(rows[1].0, 2);
        assert_eq!(rows[1].1.to_string(), "d2-d4");
        assert!(rows[1].2.is_none());
    }
}
