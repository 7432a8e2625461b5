use anyhow::{Context, Result};
use journal::ProgressLog;
use shared::{
    domain::{parse_target, SessionFlags, Status, TargetBounds},
    error::TargetInputError,
    protocol::{self, MenuChoice, PlayDecision},
};
use tracing::{debug, info, warn};

pub mod console;
pub mod targets;

pub use console::{Console, StreamConsole};
pub use targets::{RandomTargets, TargetSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskOutcome {
    InProgress,
    TargetReached,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    UserRequested,
    EndOfInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit(ExitReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub tasks_completed: u32,
    pub rewards_granted: u32,
    pub exit_reason: ExitReason,
}

/// Counter and target for one process lifetime.
///
/// `tasks_completed` only grows until [`Session::grant_reward`] sets it back
/// to zero, which always draws a fresh target at the same time.
#[derive(Debug)]
pub struct Session<T> {
    bounds: TargetBounds,
    targets: T,
    current_target: u32,
    tasks_completed: u32,
}

impl<T: TargetSource> Session<T> {
    pub fn new(bounds: TargetBounds, mut targets: T) -> Self {
        let current_target = draw_target(&mut targets, bounds);
        Self {
            bounds,
            targets,
            current_target,
            tasks_completed: 0,
        }
    }

    pub fn complete_task(&mut self) -> TaskOutcome {
        self.tasks_completed = self.tasks_completed.saturating_add(1);
        if self.tasks_completed >= self.current_target {
            TaskOutcome::TargetReached
        } else {
            TaskOutcome::InProgress
        }
    }

    /// Resets progress and returns the newly drawn target.
    pub fn grant_reward(&mut self) -> u32 {
        self.tasks_completed = 0;
        self.current_target = draw_target(&mut self.targets, self.bounds);
        self.current_target
    }

    /// Manual override. Accepts any digit-only value, even outside the
    /// bounds used for random draws.
    pub fn set_target(&mut self, raw: &str) -> Result<u32, TargetInputError> {
        let target = parse_target(raw)?;
        self.current_target = target;
        Ok(target)
    }

    pub fn status(&self) -> Status {
        Status {
            tasks_completed: self.tasks_completed,
            current_target: self.current_target,
        }
    }

    pub fn current_target(&self) -> u32 {
        self.current_target
    }

    pub fn tasks_completed(&self) -> u32 {
        self.tasks_completed
    }

    pub fn bounds(&self) -> TargetBounds {
        self.bounds
    }
}

fn draw_target<T: TargetSource>(targets: &mut T, bounds: TargetBounds) -> u32 {
    let drawn = targets.sample(bounds.min(), bounds.max());
    if bounds.contains(drawn) {
        return drawn;
    }
    let clamped = drawn.clamp(bounds.min(), bounds.max());
    warn!(
        drawn,
        clamped,
        min = bounds.min(),
        max = bounds.max(),
        "target source returned a value outside the configured bounds"
    );
    clamped
}

/// Drives the four-choice menu loop over a console, a progress log and a
/// session.
pub struct SessionController<C, L, T> {
    console: C,
    journal: L,
    session: Session<T>,
    flags: SessionFlags,
    total_completed: u32,
    rewards_granted: u32,
}

impl<C, L, T> SessionController<C, L, T>
where
    C: Console,
    L: ProgressLog,
    T: TargetSource,
{
    pub fn new(console: C, journal: L, session: Session<T>, flags: SessionFlags) -> Self {
        Self {
            console,
            journal,
            session,
            flags,
            total_completed: 0,
            rewards_granted: 0,
        }
    }

    pub fn run(&mut self) -> Result<SessionSummary> {
        self.say(protocol::WELCOME)?;
        let opening = protocol::initial_target_line(self.session.current_target());
        self.say(&opening)?;
        info!(
            current_target = self.session.current_target(),
            show_status = self.flags.show_status,
            target_changeable = self.flags.target_changeable,
            "session started"
        );

        loop {
            for line in protocol::MENU {
                self.say(line)?;
            }
            let Some(input) = self.ask(protocol::CHOICE_PROMPT)? else {
                return Ok(self.finish(ExitReason::EndOfInput));
            };

            let flow = match MenuChoice::parse(&input) {
                Some(choice) => self.step(choice)?,
                None => {
                    debug!(input = %input.trim(), "unrecognized menu choice");
                    self.say(protocol::INVALID_CHOICE)?;
                    Flow::Continue
                }
            };

            if let Flow::Exit(reason) = flow {
                return Ok(self.finish(reason));
            }
        }
    }

    /// Executes a single menu action.
    pub fn step(&mut self, choice: MenuChoice) -> Result<Flow> {
        match choice {
            MenuChoice::CompleteTask => self.complete_task(),
            MenuChoice::CheckStatus => {
                self.check_status()?;
                Ok(Flow::Continue)
            }
            MenuChoice::ResetTarget => self.reset_target(),
            MenuChoice::Exit => {
                self.say(protocol::FAREWELL)?;
                Ok(Flow::Exit(ExitReason::UserRequested))
            }
        }
    }

    pub fn session(&self) -> &Session<T> {
        &self.session
    }

    pub fn journal(&self) -> &L {
        &self.journal
    }

    pub fn into_parts(self) -> (C, L, Session<T>) {
        (self.console, self.journal, self.session)
    }

    fn complete_task(&mut self) -> Result<Flow> {
        let outcome = self.session.complete_task();
        self.total_completed = self.total_completed.saturating_add(1);
        self.log(protocol::LOG_TASK_COMPLETED);

        if self.flags.show_status {
            let status = self.session.status().to_string();
            self.say(&status)?;
        }

        if outcome == TaskOutcome::InProgress {
            return Ok(Flow::Continue);
        }

        self.say(protocol::REWARD_ANNOUNCEMENT)?;
        self.log(protocol::LOG_REWARD_GRANTED);
        self.rewards_granted = self.rewards_granted.saturating_add(1);

        // The redraw happens even when input closes at the prompt.
        let answer = self.ask(protocol::PLAY_PROMPT)?;
        match answer.as_deref().map(PlayDecision::from_input) {
            Some(PlayDecision::Play) => {
                for line in protocol::PLAY_ACKNOWLEDGMENT {
                    self.say(line)?;
                }
            }
            Some(PlayDecision::Skip) => self.say(protocol::SKIP_ACKNOWLEDGMENT)?,
            None => {}
        }

        let target = self.session.grant_reward();
        info!(new_target = target, "reward granted");
        self.say(&protocol::new_target_line(target))?;
        self.log(&protocol::log_new_target(target));

        if answer.is_none() {
            return Ok(Flow::Exit(ExitReason::EndOfInput));
        }
        Ok(Flow::Continue)
    }

    fn check_status(&mut self) -> Result<()> {
        if self.flags.show_status {
            let status = self.session.status().to_string();
            self.say(&status)
        } else {
            self.say(protocol::STATUS_DISABLED)
        }
    }

    fn reset_target(&mut self) -> Result<Flow> {
        if !self.flags.target_changeable {
            self.say(protocol::TARGET_LOCKED)?;
            return Ok(Flow::Continue);
        }

        let prompt = protocol::target_prompt(self.session.current_target());
        let Some(raw) = self.ask(&prompt)? else {
            return Ok(Flow::Exit(ExitReason::EndOfInput));
        };

        match self.session.set_target(&raw) {
            Ok(target) => {
                info!(new_target = target, "target manually reset");
                self.log(&protocol::log_manual_target(target));
                self.say(&protocol::target_updated_line(target))?;
            }
            Err(err) => {
                debug!(error = %err, "rejected manual target");
                self.say(protocol::INVALID_TARGET)?;
            }
        }
        Ok(Flow::Continue)
    }

    fn finish(&self, exit_reason: ExitReason) -> SessionSummary {
        if exit_reason == ExitReason::EndOfInput {
            warn!("input closed, ending session");
        }
        let summary = SessionSummary {
            tasks_completed: self.total_completed,
            rewards_granted: self.rewards_granted,
            exit_reason,
        };
        info!(
            tasks_completed = summary.tasks_completed,
            rewards_granted = summary.rewards_granted,
            "session ended"
        );
        summary
    }

    fn log(&mut self, message: &str) {
        if let Err(err) = self.journal.record(message) {
            warn!(error = %err, "failed to record progress");
        }
    }

    fn say(&mut self, line: &str) -> Result<()> {
        self.console
            .write_line(line)
            .context("failed to write to console")
    }

    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        self.console
            .prompt(prompt)
            .context("failed to read from console")
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
