//! Game status and final outcomes.

use std::fmt;

use hotseat_core::Color;

/// Where the game stands for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Playing,
    Check,
    Checkmate,
    Stalemate,
    Timeout,
}

impl GameStatus {
    /// Return `true` while moves and clock ticks are accepted.
    #[inline]
    pub const fn is_active(self) -> bool {
        matches!(self, GameStatus::Playing | GameStatus::Check)
    }

    /// Return `true` once the game has ended.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        !self.is_active()
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameStatus::Playing => "playing",
            GameStatus::Check => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
            GameStatus::Timeout => "timeout",
        };
        f.write_str(name)
    }
}

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameResult {
    Checkmate,
    Stalemate,
    Timeout,
}

impl GameResult {
    /// The terminal status this result leaves the game in.
    pub const fn status(self) -> GameStatus {
        match self {
            GameResult::Checkmate => GameStatus::Checkmate,
            GameResult::Stalemate => GameStatus::Stalemate,
            GameResult::Timeout => GameStatus::Timeout,
        }
    }
}

/// End-of-game report handed to whoever presents the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOutcome {
    pub result: GameResult,
    /// `None` for a draw.
    pub winner: Option<Color>,
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.result, self.winner) {
            (GameResult::Checkmate, Some(winner)) => write!(f, "checkmate, {winner} wins"),
            (GameResult::Timeout, Some(winner)) => write!(f, "{winner} wins on time"),
            (GameResult::Stalemate, _) => write!(f, "stalemate, the game is a draw"),
            (result, None) => write!(f, "{}", result.status()),
        }
    }
}
