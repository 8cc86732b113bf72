//! Terminal session errors.

use hotseat_core::FenError;
use hotseat_game::GameError;

/// Errors raised while reading or executing player commands.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// A square was neither algebraic (`e2`) nor a row/column pair in range.
    #[error("invalid square: {input}")]
    InvalidSquare {
        /// The text that failed to parse.
        input: String,
    },

    /// A numeric argument could not be parsed.
    #[error("invalid {param}: {value}")]
    InvalidNumber {
        /// Which argument was being read.
        param: &'static str,
        /// The text that failed to parse.
        value: String,
    },

    /// A command was given too few arguments.
    #[error("`{command}` needs {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },

    /// The `position` command carried a malformed or invalid placement.
    #[error("invalid position: {source}")]
    InvalidPosition {
        #[from]
        source: FenError,
    },

    /// The game state is corrupt.
    #[error(transparent)]
    Game {
        #[from]
        source: GameError,
    },

    /// Reading input or writing output failed.
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl CliError {
    /// Return `true` if the session cannot continue after this error.
    pub fn is_fatal(&self) -> bool {
        matches!(self, CliError::Game { .. } | CliError::Io { .. })
    }
}
