//! CLI argument parsing and the polling loop

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use log::{info, warn, LevelFilter};

use git_mirrors::config::Config;
use git_mirrors::defaults::{default_config_path, DEFAULT_PERIOD_MINUTES};
use git_mirrors::logging;
use git_mirrors::mirror::MirrorStore;

static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// Keep local mirrors of remote git repositories up to date
#[derive(Parser, Debug)]
#[command(name = "git-mirrors")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file [default: ~/git_mirrors.ini]
    #[arg(short, long, value_name = "FILE", env = "GIT_MIRRORS_CONFIG")]
    config: Option<PathBuf>,

    /// Synchronization period in minutes (default: once per day)
    #[arg(
        short,
        long,
        value_name = "MINUTES",
        default_value_t = DEFAULT_PERIOD_MINUTES,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    period: u64,

    /// Run a single synchronization pass and exit
    #[arg(long)]
    once: bool,

    /// Generate extensive debugging output (same as `--log-level debug`)
    #[arg(short, long)]
    debug: bool,

    /// Set log level (off, error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    log_level: LevelFilter,
}

/// Whether the process received an interrupt signal.
pub fn interrupted() -> bool {
    INTERRUPTED.load(Ordering::SeqCst)
}

impl Cli {
    /// Load the configuration and mirror it until interrupted
    pub fn execute(self) -> Result<()> {
        logging::init(if self.debug {
            LevelFilter::Debug
        } else {
            self.log_level
        });

        ctrlc::set_handler(|| {
            INTERRUPTED.store(true, Ordering::SeqCst);
            info!("Interrupted, stopping.");
            std::process::exit(0);
        })?;

        let config_path = self.config.unwrap_or_else(default_config_path);
        let configuration = Config::load(&config_path)?;
        info!("{}", configuration);
        if configuration.repositories().is_empty() {
            warn!("No repositories listed in {}.", config_path.display());
        }

        let store = MirrorStore::new();
        loop {
            let summary = store.synchronize(&configuration)?;
            info!(
                "Pass complete: {} created, {} updated, {} skipped.",
                summary.created, summary.updated, summary.skipped
            );
            if self.once {
                return Ok(());
            }

            info!("Next attempt: {} minute(s).", self.period);
            thread::sleep(Duration::from_secs(self.period.saturating_mul(60)));
        }
    }
}
