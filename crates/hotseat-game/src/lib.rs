//! Game state for hotseat: turns, history, game-end detection and clocks.

pub mod clock;
mod engine;
mod error;
mod record;
mod settings;
mod snapshot;
mod status;

pub use clock::{Clock, ClockDisplay, LOW_TIME_SECONDS, format_time};
pub use engine::{Activation, GameEngine, GameEvent};
pub use error::GameError;
pub use record::{MoveRecord, full_moves};
pub use settings::Settings;
pub use snapshot::Snapshot;
pub use status::{GameOutcome, GameResult, GameStatus};
