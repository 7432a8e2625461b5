use std::{
    fs::{self, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
};

use chrono::{Local, NaiveDateTime};
use thiserror::Error;
use tracing::{debug, info};

pub const LOG_HEADER: &str = "=== Task Completion Log ===\n\n";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Error)]
pub enum JournalError {
    #[error("failed to create log directory '{}': {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to initialize log file '{}': {source}", path.display())]
    Init {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to append to log file '{}': {source}", path.display())]
    Append {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Sink for session progress events. Each call appends exactly one entry.
pub trait ProgressLog {
    fn record(&mut self, message: &str) -> Result<(), JournalError>;
}

/// Append-only text log. The file is opened and closed on every write.
#[derive(Debug, Clone)]
pub struct FileJournal {
    path: PathBuf,
}

impl FileJournal {
    /// Prepares the log file, writing the header only when the file does not
    /// exist yet. Existing content is never touched.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, JournalError> {
        let path = path.into();
        ensure_parent_dir_exists(&path)?;

        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(mut file) => {
                file.write_all(LOG_HEADER.as_bytes())
                    .map_err(|source| JournalError::Init {
                        path: path.clone(),
                        source,
                    })?;
                info!(path = %path.display(), "created progress log");
            }
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
                debug!(path = %path.display(), "appending to existing progress log");
            }
            Err(source) => return Err(JournalError::Init { path, source }),
        }

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProgressLog for FileJournal {
    fn record(&mut self, message: &str) -> Result<(), JournalError> {
        let line = format_entry(Local::now().naive_local(), message);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| JournalError::Append {
                path: self.path.clone(),
                source,
            })?;
        file.write_all(line.as_bytes())
            .map_err(|source| JournalError::Append {
                path: self.path.clone(),
                source,
            })
    }
}

/// Renders one log line, newline included: `[YYYY-MM-DD HH:MM:SS] message`.
pub fn format_entry(at: NaiveDateTime, message: &str) -> String {
    format!("[{}] {message}\n", at.format(TIMESTAMP_FORMAT))
}

fn ensure_parent_dir_exists(path: &Path) -> Result<(), JournalError> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_os_str().is_empty() {
        return Ok(());
    }

    fs::create_dir_all(parent).map_err(|source| JournalError::CreateDir {
        path: parent.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
