//! Menu choices and the fixed text of the interactive stdin/stdout protocol.

pub const WELCOME: &str = "Welcome to the Task-Reward Tracker!";
pub const MENU: [&str; 5] = [
    "Choose an option:",
    "1) Mark a task as completed",
    "2) Check current status",
    "3) Reset the target manually (if needed)",
    "4) Exit\n",
];
pub const CHOICE_PROMPT: &str = "Enter your choice (1-4): ";
pub const PLAY_PROMPT: &str =
    "Type 'play' to confirm you're going to play now, or press Enter to skip: ";

pub const REWARD_ANNOUNCEMENT: &str =
    "\n*** Congratulations! You've earned a League of Legends match! ***";
pub const PLAY_ACKNOWLEDGMENT: [&str; 2] = [
    "Launching League of Legends is up to you, this tracker won't do it automatically.",
    "Enjoy your break, then come back and continue your tasks!\n",
];
pub const SKIP_ACKNOWLEDGMENT: &str =
    "You chose not to play right now. You can still consider the reward 'banked.'\n";

pub const STATUS_DISABLED: &str =
    "Display status is not enabled. Please enable it with --show-status.\n";
pub const TARGET_LOCKED: &str =
    "Target is not changeable. Please enable it with --target-changeable.\n";
pub const INVALID_TARGET: &str = "Invalid input. Target not changed.\n";
pub const INVALID_CHOICE: &str = "Invalid choice. Please try again.\n";
pub const FAREWELL: &str = "Exiting the program. Keep up the good work!";

pub const LOG_TASK_COMPLETED: &str = "Task completed.";
pub const LOG_REWARD_GRANTED: &str = "Target reached. League match reward granted.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CompleteTask,
    CheckStatus,
    ResetTarget,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::CompleteTask),
            "2" => Some(Self::CheckStatus),
            "3" => Some(Self::ResetTarget),
            "4" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Answer to the post-reward prompt. Only changes the acknowledgment text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayDecision {
    Play,
    Skip,
}

impl PlayDecision {
    pub fn from_input(input: &str) -> Self {
        if input.trim().eq_ignore_ascii_case("play") {
            Self::Play
        } else {
            Self::Skip
        }
    }
}

pub fn initial_target_line(target: u32) -> String {
    format!("Your current target is {target} tasks before you can play a League match.\n")
}

pub fn new_target_line(target: u32) -> String {
    format!("Your new target is: {target} tasks.\n")
}

pub fn target_prompt(current: u32) -> String {
    format!("Enter a new target number (current is {current}): ")
}

pub fn target_updated_line(target: u32) -> String {
    format!("Target updated to {target} tasks.\n")
}

pub fn log_new_target(target: u32) -> String {
    format!("New target set to {target} tasks.")
}

pub fn log_manual_target(target: u32) -> String {
    format!("Target manually reset to {target} tasks.")
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
