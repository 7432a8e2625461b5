use std::fmt;

use serde::Deserialize;

use crate::error::{ConfigError, TargetInputError};

pub const MIN_TASKS: u32 = 2;
pub const MAX_TASKS: u32 = 6;
pub const DEFAULT_LOG_FILE: &str = "task_log.txt";

/// Inclusive range new targets are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetBounds {
    min: u32,
    max: u32,
}

impl TargetBounds {
    pub fn new(min: u32, max: u32) -> Result<Self, ConfigError> {
        if min == 0 {
            return Err(ConfigError::ZeroMinimum);
        }
        if min > max {
            return Err(ConfigError::InvertedBounds { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl Default for TargetBounds {
    fn default() -> Self {
        Self {
            min: MIN_TASKS,
            max: MAX_TASKS,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SessionFlags {
    pub show_status: bool,
    pub target_changeable: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    pub tasks_completed: u32,
    pub current_target: u32,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Tasks Completed: {} / {}",
            self.tasks_completed, self.current_target
        )
    }
}

/// Parses a manually entered target. Only ASCII digits are accepted, after
/// trimming surrounding whitespace.
pub fn parse_target(raw: &str) -> Result<u32, TargetInputError> {
    let raw = raw.trim();
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TargetInputError::NotANumber(raw.to_string()));
    }
    raw.parse::<u32>()
        .map_err(|_| TargetInputError::OutOfRange(raw.to_string()))
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
