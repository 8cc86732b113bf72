//! Per-player countdown clocks.
//!
//! The clock never reads wall time. Callers pass elapsed seconds to
//! [`Clock::tick`] or a monotonic timestamp to [`Clock::tick_at`], which keeps
//! every transition replayable in tests.

use hotseat_core::Color;

/// Remaining time at or below which a player is shown as low on time.
pub const LOW_TIME_SECONDS: f64 = 60.0;

/// Both players' clocks plus the time control they were reset from.
#[derive(Debug, Clone, PartialEq)]
pub struct Clock {
    /// Seconds left, indexed by [`Color::index()`].
    remaining: [f64; Color::COUNT],
    increment_seconds: u32,
    initial_minutes: u32,
    /// Timestamp passed to the previous [`Clock::tick_at`] call.
    last_tick: Option<f64>,
}

impl Clock {
    /// Create a clock with both players at `initial_minutes`.
    pub fn new(initial_minutes: u32, increment_seconds: u32) -> Clock {
        let start = f64::from(initial_minutes) * 60.0;
        Clock {
            remaining: [start; Color::COUNT],
            increment_seconds,
            initial_minutes,
            last_tick: None,
        }
    }

    /// Seconds left for `color`. May be negative after a flag.
    #[inline]
    pub fn remaining(&self, color: Color) -> f64 {
        self.remaining[color.index()]
    }

    /// Overwrite the seconds left for `color`.
    pub fn set_remaining(&mut self, color: Color, seconds: f64) {
        self.remaining[color.index()] = seconds;
    }

    #[inline]
    pub fn increment_seconds(&self) -> u32 {
        self.increment_seconds
    }

    #[inline]
    pub fn initial_minutes(&self) -> u32 {
        self.initial_minutes
    }

    /// Replace the time control and reset both players to it.
    pub fn apply_settings(&mut self, minutes: u32, increment_seconds: u32) {
        *self = Clock::new(minutes, increment_seconds);
    }

    /// Charge `elapsed` seconds to `side`.
    ///
    /// Returns the color that has run out of time, if any. `side` is checked
    /// first since it is the only clock that moved.
    pub fn tick(&mut self, side: Color, elapsed: f64) -> Option<Color> {
        self.remaining[side.index()] -= elapsed.max(0.0);
        [side, side.flip()]
            .into_iter()
            .find(|&color| self.remaining(color) <= 0.0)
    }

    /// Charge `side` for the time since the previous `tick_at` call.
    ///
    /// The first call after construction or [`Clock::resync`] only records
    /// the timestamp.
    pub fn tick_at(&mut self, side: Color, now: f64) -> Option<Color> {
        let elapsed = self.last_tick.map_or(0.0, |last| now - last);
        self.last_tick = Some(now);
        self.tick(side, elapsed)
    }

    /// Forget the previous timestamp so time spent paused is not charged.
    pub fn resync(&mut self) {
        self.last_tick = None;
    }

    /// Credit one increment to `color` after it completes a move.
    pub fn credit_increment(&mut self, color: Color) {
        self.remaining[color.index()] += f64::from(self.increment_seconds);
    }

    /// Return `true` if `color` is at or below [`LOW_TIME_SECONDS`].
    pub fn is_low(&self, color: Color) -> bool {
        self.remaining(color) <= LOW_TIME_SECONDS
    }

    /// Format both clocks for display.
    pub fn display(&self) -> ClockDisplay {
        ClockDisplay {
            white: format_time(self.remaining(Color::White)),
            black: format_time(self.remaining(Color::Black)),
            white_low: self.is_low(Color::White),
            black_low: self.is_low(Color::Black),
        }
    }
}

/// Clock state as shown to the players.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockDisplay {
    pub white: String,
    pub black: String,
    pub white_low: bool,
    pub black_low: bool,
}

impl ClockDisplay {
    /// Return the formatted time for `color`.
    pub fn time(&self, color: Color) -> &str {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    /// Return the low-time flag for `color`.
    pub fn is_low(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_low,
            Color::Black => self.black_low,
        }
    }
}

/// Format seconds as `m:ss`, truncating fractions. Negative values show as `0:00`.
pub fn format_time(seconds: f64) -> String {
    let whole = seconds.max(0.0).floor() as u64;
    format!("{}:{:02}", whole / 60, whole % 60)
}
