//! Terminal front end for hotseat: command parsing, rendering and the session loop.

pub mod command;
pub mod error;
pub mod render;
pub mod session;

pub use command::{Command, parse_command};
pub use error::CliError;
pub use render::{GameView, Orientation};
pub use session::{Flow, Session};
