//! Menu commands driving a single light.

use crate::core::CyclicState;
use crate::machine::{MachineError, StartOutcome, StopOutcome, TimedStateMachine};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

pub const MENU: &str = "\n==== Traffic Light Simulation ====\n\
1. Start Simulation\n\
2. Stop Simulation\n\
3. Exit\n\
Choose: ";

/// A user command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Start,
    Stop,
    Exit,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid option.")]
pub struct InvalidCommand(pub String);

impl FromStr for Command {
    type Err = InvalidCommand;

    /// Accepts the menu numbers or the command words, ignoring case.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().as_str() {
            "1" | "start" => Ok(Self::Start),
            "2" | "stop" => Ok(Self::Stop),
            "3" | "exit" => Ok(Self::Exit),
            _ => Err(InvalidCommand(input.trim().to_string())),
        }
    }
}

/// What the controller did with a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reply {
    Started,
    AlreadyRunning,
    Stopped,
    NotRunning,
    Exit,
}

impl Reply {
    /// Informational text for the user, if any.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::AlreadyRunning => Some("Simulation already running."),
            Self::NotRunning => Some("Simulation not running."),
            Self::Started | Self::Stopped | Self::Exit => None,
        }
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message().unwrap_or_default())
    }
}

/// Drives one machine from user commands.
///
/// The controller keeps its own view of whether the light runs and answers
/// misuse (double start, stop while stopped) itself before reaching the
/// machine.
pub struct Controller<S: CyclicState> {
    machine: TimedStateMachine<S>,
    running: bool,
}

impl<S: CyclicState> Controller<S> {
    /// Wrap a stopped machine.
    pub fn new(machine: TimedStateMachine<S>) -> Self {
        Self {
            machine,
            running: false,
        }
    }

    /// The driven machine.
    pub fn machine(&self) -> &TimedStateMachine<S> {
        &self.machine
    }

    /// The controller's own view of whether the light runs.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Apply `command`, answering misuse with an informational reply.
    pub fn handle(&mut self, command: Command) -> Result<Reply, MachineError> {
        debug!(?command, light = self.machine.name(), "handling command");
        match command {
            Command::Start if self.running => Ok(Reply::AlreadyRunning),
            Command::Start => {
                let reply = match self.machine.start()? {
                    StartOutcome::Started => Reply::Started,
                    StartOutcome::AlreadyRunning => Reply::AlreadyRunning,
                };
                self.running = true;
                Ok(reply)
            }
            Command::Stop if !self.running => Ok(Reply::NotRunning),
            Command::Stop => {
                self.running = false;
                Ok(match self.machine.stop() {
                    StopOutcome::Stopped => Reply::Stopped,
                    StopOutcome::NotRunning => Reply::NotRunning,
                })
            }
            Command::Exit => {
                self.machine.stop();
                self.running = false;
                Ok(Reply::Exit)
            }
        }
    }
}
