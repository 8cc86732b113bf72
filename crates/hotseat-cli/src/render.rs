//! Terminal rendering of a [`Snapshot`] with Unicode glyphs.

use std::fmt;

use hotseat_core::{Color, Piece, PieceKind, Square};
use hotseat_game::{GameStatus, Snapshot, full_moves};

/// Marker printed after a clock at or below the low-time threshold.
const LOW_TIME_MARKER: &str = " !";

/// Display orientation. The board itself is never mutated by flipping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Orientation {
    /// `true` shows Black's side at the bottom.
    pub flipped: bool,
}

impl Orientation {
    pub fn toggle(&mut self) {
        self.flipped = !self.flipped;
    }

    /// Rows top to bottom.
    fn rows(self) -> [u8; 8] {
        let mut rows = [0, 1, 2, 3, 4, 5, 6, 7];
        if self.flipped {
            rows.reverse();
        }
        rows
    }

    /// Columns left to right.
    fn cols(self) -> [u8; 8] {
        self.rows()
    }

    /// Player whose side is drawn at the top.
    fn top(self) -> Color {
        if self.flipped { Color::White } else { Color::Black }
    }
}

/// A full screen: clocks, captured pieces, board, status and move list.
pub struct GameView<'a> {
    snapshot: &'a Snapshot,
    orientation: Orientation,
}

impl<'a> GameView<'a> {
    pub fn new(snapshot: &'a Snapshot, orientation: Orientation) -> GameView<'a> {
        GameView {
            snapshot,
            orientation,
        }
    }

    fn player_line(&self, f: &mut fmt::Formatter<'_>, color: Color) -> fmt::Result {
        let clock = &self.snapshot.clock;
        let marker = if clock.is_low(color) { LOW_TIME_MARKER } else { "" };
        let captured: String = self
            .snapshot
            .captured_by(color)
            .iter()
            .map(|&kind| captured_glyph(kind, color))
            .collect();
        let to_move = if self.snapshot.current_player == color { "*" } else { " " };
        writeln!(
            f,
            "{to_move} {:<5} {:>6}{marker:<2}  {captured}",
            color.to_string(),
            clock.time(color),
        )
    }

    fn cell(&self, sq: Square) -> String {
        let snapshot = self.snapshot;
        let piece = snapshot.board.get(sq);
        let glyph = piece.map_or('.', Piece::glyph);
        if snapshot.selection == Some(sq) {
            format!("[{glyph}]")
        } else if snapshot.is_capture_target(sq) {
            format!("({glyph})")
        } else if snapshot.is_target(sq) {
            " * ".to_string()
        } else {
            format!(" {glyph} ")
        }
    }

    fn file_labels(&self) -> String {
        self.orientation
            .cols()
            .iter()
            .map(|&col| format!(" {} ", char::from(b'a' + col)))
            .collect()
    }
}

impl fmt::Display for GameView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let top = self.orientation.top();
        self.player_line(f, top)?;

        writeln!(f, "   {}", self.file_labels())?;
        for row in self.orientation.rows() {
            let rank = 8 - row;
            write!(f, "{rank} |")?;
            for col in self.orientation.cols() {
                f.write_str(&self.cell(Square::at(row, col)))?;
            }
            writeln!(f, "| {rank}")?;
        }
        writeln!(f, "   {}", self.file_labels())?;

        self.player_line(f, !top)?;
        writeln!(f, "{}", status_line(self.snapshot))?;

        let moves: Vec<String> = full_moves(&self.snapshot.history)
            .map(|(n, white, black)| match black {
                Some(black) => format!("{n}. {white} {black}"),
                None => format!("{n}. {white}"),
            })
            .collect();
        if moves.is_empty() {
            write!(f, "moves: -")
        } else {
            write!(f, "moves: {}", moves.join("  "))
        }
    }
}

/// Glyph of a piece captured by `capturer`.
fn captured_glyph(kind: PieceKind, capturer: Color) -> char {
    Piece::new(kind, !capturer).glyph()
}

/// One-line summary of whose turn it is or how the game ended.
pub fn status_line(snapshot: &Snapshot) -> String {
    if let Some(outcome) = snapshot.outcome {
        return format!("game over: {outcome}");
    }
    if snapshot.paused {
        return "paused".to_string();
    }
    match snapshot.status {
        GameStatus::Check => format!("{} to move, check!", snapshot.current_player),
        status if status.is_active() => format!("{} to move", snapshot.current_player),
        status => status.to_string(),
    }
}
