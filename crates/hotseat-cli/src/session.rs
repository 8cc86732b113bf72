//! Event-driven terminal session for two players sharing one keyboard.

use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use hotseat_core::Square;
use hotseat_game::{Activation, GameEngine, GameEvent, Settings};

use crate::command::{Command, HELP, parse_command};
use crate::error::CliError;
use crate::render::{GameView, Orientation};

/// How often the ticker thread charges the clock.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Events processed by the main session loop.
enum SessionEvent {
    Input(Result<Command, CliError>),
    /// Seconds since the ticker started.
    Tick(f64),
    InputClosed,
}

/// Whether the loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A game in progress plus its display state and output sink.
///
/// Only the main loop touches the engine; helper threads send
/// [`SessionEvent`]s over a channel.
pub struct Session<W> {
    engine: GameEngine,
    orientation: Orientation,
    clock_enabled: bool,
    out: W,
}

impl<W: Write> Session<W> {
    pub fn new(settings: Settings, clock_enabled: bool, out: W) -> Session<W> {
        Session {
            engine: GameEngine::new(settings),
            orientation: Orientation::default(),
            clock_enabled,
            out,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Run until `quit`, end of input, or a fatal error.
    pub fn run(mut self) -> Result<(), CliError> {
        let (tx, rx) = mpsc::channel::<SessionEvent>();

        let stdin_tx = tx.clone();
        std::thread::spawn(move || {
            for line in io::stdin().lock().lines() {
                let Ok(line) = line else {
                    break;
                };
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                debug!(cmd = %trimmed, "received command");
                if stdin_tx.send(SessionEvent::Input(parse_command(trimmed))).is_err() {
                    return;
                }
            }
            let _ = stdin_tx.send(SessionEvent::InputClosed);
        });

        if self.clock_enabled {
            let tick_tx = tx.clone();
            std::thread::spawn(move || {
                let start = Instant::now();
                loop {
                    std::thread::sleep(TICK_INTERVAL);
                    let now = start.elapsed().as_secs_f64();
                    if tick_tx.send(SessionEvent::Tick(now)).is_err() {
                        break;
                    }
                }
            });
        }
        drop(tx);

        self.render()?;
        writeln!(self.out, "type `help` for commands")?;

        for event in &rx {
            match event {
                SessionEvent::Input(Ok(cmd)) => {
                    if self.handle_command(cmd)? == Flow::Quit {
                        break;
                    }
                }
                SessionEvent::Input(Err(e)) if e.is_fatal() => return Err(e),
                SessionEvent::Input(Err(e)) => {
                    warn!(error = %e, "command rejected");
                    writeln!(self.out, "{e}")?;
                }
                SessionEvent::Tick(now) => self.handle_tick(now)?,
                SessionEvent::InputClosed => break,
            }
        }

        info!("hotseat shutting down");
        Ok(())
    }

    /// Execute one command and print the result.
    ///
    /// Errors returned here are fatal: the engine found a corrupt board or
    /// output could not be written.
    pub fn handle_command(&mut self, cmd: Command) -> Result<Flow, CliError> {
        match cmd {
            Command::Activate(sq) => {
                let activation = self.engine.on_square_activated(sq)?;
                debug!(square = %sq, ?activation, "square activated");
                if activation == Activation::Ignored {
                    writeln!(self.out, "nothing to do on {sq}")?;
                    return Ok(Flow::Continue);
                }
            }
            Command::Move { from, to } => {
                if !self.play(from, to)? {
                    writeln!(self.out, "{from}-{to} is not a legal move")?;
                    return Ok(Flow::Continue);
                }
            }
            Command::Undo => {
                if self.engine.undo()?.is_none() {
                    writeln!(self.out, "nothing to undo")?;
                    return Ok(Flow::Continue);
                }
            }
            Command::NewGame => self.engine.new_game(),
            Command::Pause => {
                self.engine.toggle_pause();
            }
            Command::Flip => self.orientation.toggle(),
            Command::Settings(settings) => self.engine.apply_settings(settings),
            Command::Position { board, side } => {
                self.engine = GameEngine::from_position(board, side, self.engine.settings())?;
                info!(position = %board, side = side.name(), "position loaded");
            }
            Command::Show => {}
            Command::Help => {
                writeln!(self.out, "{HELP}")?;
                return Ok(Flow::Continue);
            }
            Command::Quit => return Ok(Flow::Quit),
            Command::Unknown(word) => {
                if !word.is_empty() {
                    writeln!(self.out, "unknown command `{word}`, type `help`")?;
                }
                return Ok(Flow::Continue);
            }
        }

        self.report_events()?;
        self.render()?;
        Ok(Flow::Continue)
    }

    /// Activate `from` then `to`. Returns `false` (with the selection
    /// cleared) if that did not play a move.
    fn play(&mut self, from: Square, to: Square) -> Result<bool, CliError> {
        if self.engine.selection() != Some(from) {
            let picked = self.engine.on_square_activated(from)?;
            if !matches!(picked, Activation::Selected | Activation::Reselected) {
                self.engine.clear_selection();
                return Ok(false);
            }
        }
        match self.engine.on_square_activated(to)? {
            Activation::Moved(_) => Ok(true),
            _ => {
                self.engine.clear_selection();
                Ok(false)
            }
        }
    }

    /// Charge the side to move and announce a flag fall.
    pub fn handle_tick(&mut self, now: f64) -> Result<(), CliError> {
        if self.engine.tick_at(now).is_some() {
            self.report_events()?;
            self.render()?;
        }
        Ok(())
    }

    fn report_events(&mut self) -> Result<(), CliError> {
        for event in self.engine.drain_events() {
            match event {
                GameEvent::GameOver(outcome) => {
                    writeln!(self.out, "*** game over: {outcome} ***")?;
                }
                GameEvent::Undone(record) => writeln!(self.out, "took back {record}")?,
                GameEvent::NewGame => writeln!(self.out, "new game")?,
                GameEvent::Paused(true) => writeln!(self.out, "paused")?,
                GameEvent::Paused(false) => writeln!(self.out, "resumed")?,
                GameEvent::SettingsApplied(settings) => writeln!(
                    self.out,
                    "time control {}+{}{}",
                    settings.time_control_minutes,
                    settings.increment_seconds,
                    if settings.strict_legality { ", strict" } else { "" }
                )?,
                GameEvent::Moved(_) | GameEvent::StatusChanged(_) => {}
            }
        }
        Ok(())
    }

    fn render(&mut self) -> Result<(), CliError> {
        let snapshot = self.engine.snapshot();
        writeln!(self.out, "{}", GameView::new(&snapshot, self.orientation))?;
        self.out.flush()?;
        Ok(())
    }
}
