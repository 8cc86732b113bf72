//! Time control and rule configuration.

use hotseat_core::Legality;

/// Settings applied on `new_game` and by `apply_settings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Starting time per player in minutes. Zero flags on the first tick.
    pub time_control_minutes: u32,
    /// Seconds credited to a player after each completed move.
    pub increment_seconds: u32,
    /// Reject moves that leave the mover's own king attacked.
    pub strict_legality: bool,
}

impl Settings {
    /// Return the move filter these settings select.
    pub const fn legality(&self) -> Legality {
        Legality::from_strict(self.strict_legality)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            time_control_minutes: 10,
            increment_seconds: 0,
            strict_legality: false,
        }
    }
}
