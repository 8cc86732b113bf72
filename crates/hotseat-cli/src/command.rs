//! Player command parsing.

use hotseat_core::{Board, Color, Square, parse_fen};
use hotseat_game::Settings;

use crate::error::CliError;

/// A parsed line of player input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `e2`, `click e2` or `click 6 4`: activate one square.
    Activate(Square),
    /// `move e2 e4`: activate the origin, then the destination.
    Move { from: Square, to: Square },
    /// `undo`: take back the last move.
    Undo,
    /// `new`: restart from the standard position.
    NewGame,
    /// `pause`: toggle the pause flag.
    Pause,
    /// `flip`: turn the board around on screen.
    Flip,
    /// `settings <minutes> <increment> [strict]`: apply a time control.
    Settings(Settings),
    /// `position <placement> [w|b]`: play on from an arbitrary position.
    Position { board: Board, side: Color },
    /// `show`: print the board again.
    Show,
    /// `help`: list commands.
    Help,
    /// `quit`: leave the session.
    Quit,
    /// Anything else.
    Unknown(String),
}

/// One line per command, printed by `help`.
pub const HELP: &str = "\
commands:
  e2 | click e2 | click <row> <col>   select a piece or a destination
  move e2 e4                          play a move
  undo                                take back the last move
  new                                 start a new game
  pause                               pause or resume the clocks
  flip                                turn the board around
  settings <min> <inc> [strict]       set the time control
  position <fen placement> [w|b]      play on from a position
  show                                print the board
  help                                show this list
  quit                                leave";

/// Parse a single line of player input into a [`Command`].
///
/// Keywords are case-insensitive. An empty line parses as `Unknown("")`.
pub fn parse_command(line: &str) -> Result<Command, CliError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(first) = tokens.first() else {
        return Ok(Command::Unknown(String::new()));
    };

    match first.to_ascii_lowercase().as_str() {
        "click" => parse_click(&tokens[1..]),
        "move" => parse_move(&tokens[1..]),
        "undo" => Ok(Command::Undo),
        "new" => Ok(Command::NewGame),
        "pause" => Ok(Command::Pause),
        "flip" => Ok(Command::Flip),
        "settings" => parse_settings(&tokens[1..]),
        "position" => parse_position(&tokens[1..]),
        "show" => Ok(Command::Show),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        _ => match Square::from_algebraic(first) {
            Some(sq) if tokens.len() == 1 => Ok(Command::Activate(sq)),
            _ => Ok(Command::Unknown(first.to_string())),
        },
    }
}

/// `click e2` or `click <row> <col>`.
fn parse_click(tokens: &[&str]) -> Result<Command, CliError> {
    match tokens {
        [name] => parse_square(name).map(Command::Activate),
        [row, col] => {
            let row: u8 = parse_number(row, "row")?;
            let col: u8 = parse_number(col, "column")?;
            Square::new(row, col)
                .map(Command::Activate)
                .ok_or_else(|| CliError::InvalidSquare {
                    input: format!("{row} {col}"),
                })
        }
        _ => Err(CliError::MissingArgument {
            command: "click",
            what: "a square or a row and column",
        }),
    }
}

fn parse_move(tokens: &[&str]) -> Result<Command, CliError> {
    match tokens {
        [from, to, ..] => Ok(Command::Move {
            from: parse_square(from)?,
            to: parse_square(to)?,
        }),
        _ => Err(CliError::MissingArgument {
            command: "move",
            what: "two squares",
        }),
    }
}

fn parse_settings(tokens: &[&str]) -> Result<Command, CliError> {
    let [minutes, increment, rest @ ..] = tokens else {
        return Err(CliError::MissingArgument {
            command: "settings",
            what: "minutes and increment",
        });
    };
    Ok(Command::Settings(Settings {
        time_control_minutes: parse_number(minutes, "minutes")?,
        increment_seconds: parse_number(increment, "increment")?,
        strict_legality: rest.iter().any(|t| t.eq_ignore_ascii_case("strict")),
    }))
}

fn parse_position(tokens: &[&str]) -> Result<Command, CliError> {
    if tokens.is_empty() {
        return Err(CliError::MissingArgument {
            command: "position",
            what: "a piece placement",
        });
    }
    let (board, side) = parse_fen(&tokens.join(" "))?;
    Ok(Command::Position { board, side })
}

fn parse_square(token: &str) -> Result<Square, CliError> {
    Square::from_algebraic(token).ok_or_else(|| CliError::InvalidSquare {
        input: token.to_string(),
    })
}

fn parse_number<T: std::str::FromStr>(token: &str, param: &'static str) -> Result<T, CliError> {
    token.parse().map_err(|_| CliError::InvalidNumber {
        param,
        value: token.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use hotseat_core::{FenError, Piece};

    use super::*;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    #[test]
    fn bare_square_activates() {
        assert_eq!(parse_command("e2").unwrap(), Command::Activate(sq("e2")));
        assert_eq!(parse_command("  E2  ").unwrap(), Command::Activate(sq("e2")));
    }

    #[test]
    fn click_by_name_or_coordinates() {
        assert_eq!(parse_command("click e2").unwrap(), Command::Activate(sq("e2")));
        assert_eq!(parse_command("CLICK 6 4").unwrap(), Command::Activate(sq("e2")));
        assert_eq!(parse_command("click 0 0").unwrap(), Command::Activate(sq("a8")));
    }

    #[test]
    fn click_out_of_range() {
        assert!(matches!(
            parse_command("click 8 0"),
            Err(CliError::InvalidSquare { .. })
        ));
        assert!(matches!(
            parse_command("click -1 0"),
            Err(CliError::InvalidNumber { param: "row", .. })
        ));
        assert!(matches!(
            parse_command("click"),
            Err(CliError::MissingArgument { command: "click", .. })
        ));
    }

    #[test]
    fn move_needs_two_squares() {
        assert_eq!(
            parse_command("move e2 e4").unwrap(),
            Command::Move {
                from: sq("e2"),
                to: sq("e4"),
            }
        );
        assert!(matches!(
            parse_command("move e2"),
            Err(CliError::MissingArgument { command: "move", .. })
        ));
        assert!(matches!(
            parse_command("move e2 e9"),
            Err(CliError::InvalidSquare { .. })
        ));
    }

    #[test]
    fn simple_keywords() {
        assert_eq!(parse_command("undo").unwrap(), Command::Undo);
        assert_eq!(parse_command("new").unwrap(), Command::NewGame);
        assert_eq!(parse_command("Pause").unwrap(), Command::Pause);
        assert_eq!(parse_command("flip").unwrap(), Command::Flip);
        assert_eq!(parse_command("show").unwrap(), Command::Show);
        assert_eq!(parse_command("help").unwrap(), Command::Help);
        assert_eq!(parse_command("quit").unwrap(), Command::Quit);
    }

    #[test]
    fn settings_with_and_without_strict() {
        assert_eq!(
            parse_command("settings 5 3").unwrap(),
            Command::Settings(Settings {
                time_control_minutes: 5,
                increment_seconds: 3,
                strict_legality: false,
            })
        );
        assert_eq!(
            parse_command("settings 1 0 strict").unwrap(),
            Command::Settings(Settings {
                time_control_minutes: 1,
                increment_seconds: 0,
                strict_legality: true,
            })
        );
        assert!(matches!(
            parse_command("settings 5"),
            Err(CliError::MissingArgument { .. })
        ));
        assert!(matches!(
            parse_command("settings five 0"),
            Err(CliError::InvalidNumber { param: "minutes", .. })
        ));
    }

    #[test]
    fn position_with_side() {
        let cmd = parse_command("position 4k3/8/8/8/8/8/8/4K3 b").unwrap();
        match cmd {
            Command::Position { board, side } => {
                assert_eq!(side, Color::Black);
                assert_eq!(board.get(sq("e1")), Some(Piece::WHITE_KING));
            }
            other => panic!("expected Position, got {other:?}"),
        }
    }

    #[test]
    fn position_rejects_bad_placement() {
        assert!(matches!(
            parse_command("position 8/8/8/8/8/8/8/8"),
            Err(CliError::InvalidPosition { .. })
        ));
        assert!(matches!(
            parse_command("position"),
            Err(CliError::MissingArgument { .. })
        ));
    }

    #[test]
    fn position_with_overlong_rank_is_an_error() {
        let line = format!("position {}/8/8/8/8/8/8/4K3", "8".repeat(40));
        assert!(matches!(
            parse_command(&line),
            Err(CliError::InvalidPosition {
                source: FenError::BadRankLength { rank_index: 0, .. }
            })
        ));
    }

    #[test]
    fn unknown_input() {
        assert_eq!(
            parse_command("castle").unwrap(),
            Command::Unknown("castle".to_string())
        );
        assert_eq!(parse_command("").unwrap(), Command::Unknown(String::new()));
        assert_eq!(
            parse_command("e2 e4").unwrap(),
            Command::Unknown("e2".to_string())
        );
    }
}
