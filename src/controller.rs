use log::info;

use crate::error::GameError;
use crate::game::{GameSession, Snapshot, TickEvent};
use crate::input::Command;

/// Draws one frame from a read-only snapshot.
pub trait Renderer {
    fn draw(&mut self, snapshot: &Snapshot<'_>) -> Result<(), GameError>;
}

/// Non-blocking command source, drained once per cycle.
pub trait InputSource {
    /// Returns every command received since the last call, oldest first.
    fn poll_commands(&mut self) -> Result<Vec<Command>, GameError>;
}

/// Paces the loop to a target tick rate.
pub trait FrameClock {
    /// Blocks until the next tick boundary at `ticks_per_second`.
    fn wait_for_next_tick(&mut self, ticks_per_second: u32);
}

/// Whether the loop should keep going after a cycle.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum LoopControl {
    Continue,
    Quit,
}

/// Totals reported when the loop ends.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct RunSummary {
    pub ticks: u64,
    pub rounds: u32,
    pub best_score: u32,
    pub last_score: u32,
}

/// Owns the session and drives input, simulation, rendering and pacing.
pub struct Controller<I, R, C> {
    session: GameSession,
    input: I,
    renderer: R,
    clock: C,
    summary: RunSummary,
}

impl<I, R, C> Controller<I, R, C>
where
    I: InputSource,
    R: Renderer,
    C: FrameClock,
{
    #[must_use]
    pub fn new(session: GameSession, input: I, renderer: R, clock: C) -> Self {
        Self {
            session,
            input,
            renderer,
            clock,
            summary: RunSummary {
                rounds: 1,
                ..RunSummary::default()
            },
        }
    }

    /// Runs cycles until a quit command arrives.
    pub fn run(&mut self) -> Result<RunSummary, GameError> {
        while self.step()? == LoopControl::Continue {}

        info!(
            "quit after {} ticks over {} round(s), best score {}",
            self.summary.ticks, self.summary.rounds, self.summary.best_score
        );
        Ok(self.summary)
    }

    /// Runs one full cycle: drain input, tick, render, wait.
    pub fn step(&mut self) -> Result<LoopControl, GameError> {
        for command in self.input.poll_commands()? {
            if command == Command::Quit {
                return Ok(LoopControl::Quit);
            }

            let was_over = self.session.is_game_over();
            self.session.apply_command(command)?;
            if was_over && !self.session.is_game_over() {
                self.summary.rounds += 1;
            }
        }

        let event = self.session.tick();
        if event != TickEvent::Idle {
            self.summary.ticks += 1;
        }
        self.record_score();

        self.renderer.draw(&self.session.snapshot())?;
        self.clock.wait_for_next_tick(self.session.speed);

        Ok(LoopControl::Continue)
    }

    fn record_score(&mut self) {
        let score = self.session.score();
        self.summary.last_score = score;
        self.summary.best_score = self.summary.best_score.max(score);
    }

    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Mutable access for scripted scenarios.
    pub fn session_mut(&mut self) -> &mut GameSession {
        &mut self.session
    }

    /// Gives back the collaborators, mainly so callers can inspect them.
    #[must_use]
    pub fn into_parts(self) -> (GameSession, I, R, C) {
        (self.session, self.input, self.renderer, self.clock)
    }
}
