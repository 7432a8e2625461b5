use std::{io, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use journal::FileJournal;
use session::{RandomTargets, Session, SessionController, StreamConsole};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;

use config::{load_settings, Overrides};

/// Mark tasks done and earn a League of Legends match once the target is hit.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Show completed / target counts after each task and on request.
    #[arg(long)]
    show_status: bool,
    /// Allow the target to be replaced from the menu.
    #[arg(long)]
    target_changeable: bool,
    /// Progress log path, `task_log.txt` when omitted.
    #[arg(long)]
    log_file: Option<PathBuf>,
    /// Smallest target that can be drawn.
    #[arg(long)]
    min_tasks: Option<u32>,
    /// Largest target that can be drawn.
    #[arg(long)]
    max_tasks: Option<u32>,
    /// Seed for reproducible target draws.
    #[arg(long)]
    seed: Option<u64>,
    /// Settings file, `tracker.toml` when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            config: self.config.clone(),
            log_file: self.log_file.clone(),
            min_tasks: self.min_tasks,
            max_tasks: self.max_tasks,
            seed: self.seed,
            show_status: self.show_status,
            target_changeable: self.target_changeable,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let settings = load_settings(&args.overrides())?;

    let journal = FileJournal::open(&settings.log_file).with_context(|| {
        format!(
            "failed to prepare progress log '{}'",
            settings.log_file.display()
        )
    })?;
    let targets = match settings.seed {
        Some(seed) => RandomTargets::seeded(seed),
        None => RandomTargets::from_entropy(),
    };
    let session = Session::new(settings.bounds, targets);
    let console = StreamConsole::new(io::stdin().lock(), io::stdout());

    let mut controller = SessionController::new(console, journal, session, settings.flags);
    let summary = controller.run()?;
    info!(?summary, "tracker finished");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn every_flag_has_help_text() {
        let command = Args::command();
        for arg in command.get_arguments() {
            let id = arg.get_id().as_str();
            if id == "help" || id == "version" {
                continue;
            }
            assert!(arg.get_help().is_some(), "--{id} has no help text");
        }
    }

    #[test]
    fn feature_switches_default_off() {
        let args = Args::try_parse_from(["tracker"]).expect("parse");
        let overrides = args.overrides();
        assert!(!overrides.show_status);
        assert!(!overrides.target_changeable);
        assert!(overrides.config.is_none());
    }

    #[test]
    fn parses_all_flags() {
        let args = Args::try_parse_from([
            "tracker",
            "--show-status",
            "--target-changeable",
            "--log-file",
            "logs/progress.txt",
            "--min-tasks",
            "3",
            "--max-tasks",
            "8",
            "--seed",
            "99",
        ])
        .expect("parse");
        let overrides = args.overrides();
        assert!(overrides.show_status);
        assert!(overrides.target_changeable);
        assert_eq!(overrides.log_file, Some(PathBuf::from("logs/progress.txt")));
        assert_eq!(overrides.min_tasks, Some(3));
        assert_eq!(overrides.max_tasks, Some(8));
        assert_eq!(overrides.seed, Some(99));
    }

    #[test]
    fn rejects_negative_task_counts() {
        assert!(Args::try_parse_from(["tracker", "--min-tasks", "-1"]).is_err());
    }
}
