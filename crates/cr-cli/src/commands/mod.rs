pub mod history;
pub mod play;
pub mod roll;

use std::path::PathBuf;

use clap::Args;
use colored::Colorize;

use cr_engine::journal::file::{DEBUG_LOG_FILE, LOG_FILE};
use cr_engine::{
    ErrorKind, LocationCatalog, Party, RecordSink, RouletteConfig, RouletteError, RunLog, Session,
};

/// Options shared by every command that opens a session.
#[derive(Debug, Args)]
pub struct SessionArgs {
    /// Party members, space separated (e.g. "shin figgy nari jing")
    #[arg(short, long)]
    pub members: Option<String>,

    /// RNG seed for reproducible runs
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// JSON file with the location catalog
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,

    /// Run log file (default: db.json, or debug.db.json with --debug)
    #[arg(short, long)]
    pub log: Option<PathBuf>,

    /// Use the sample party and the debug log file
    #[arg(long)]
    pub debug: bool,
}

impl SessionArgs {
    /// Build the session configuration from the flags.
    pub fn config(&self) -> Result<RouletteConfig, String> {
        let mut config = RouletteConfig::default();
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(path) = &self.catalog {
            let catalog = LocationCatalog::load(path).map_err(|e| {
                format!("cannot load catalog {}: {}", path.display(), describe(&e))
            })?;
            config = config.with_catalog(catalog);
        }
        Ok(config)
    }

    /// The run log to append to.
    pub fn run_log(&self) -> RunLog {
        match &self.log {
            Some(path) => RunLog::new(path),
            None if self.debug => RunLog::new(DEBUG_LOG_FILE),
            None => RunLog::new(LOG_FILE),
        }
    }

    /// Members given on the command line, or the sample party in debug mode.
    pub fn preset_party(&self, size: usize) -> Result<Option<Party>, String> {
        if self.debug {
            return Ok(Some(Party::sample()));
        }
        self.members
            .as_deref()
            .map(|line| Party::parse(line, size).map_err(|e| describe(&e)))
            .transpose()
    }
}

/// Engine error text, prefixed by its category.
fn describe(e: &RouletteError) -> String {
    let what = match e.kind() {
        ErrorKind::Configuration => "invalid configuration",
        ErrorKind::Validation => "invalid party",
        ErrorKind::NotFound => "not found",
        ErrorKind::State => "session error",
        ErrorKind::Journal => "log failure",
    };
    format!("{what}: {e}")
}

/// Open a session for an already validated party.
fn open_session(party: &Party, config: RouletteConfig) -> Result<Session, String> {
    Session::new(party.members().to_vec(), config)
        .map_err(|e| format!("failed to start session: {}", describe(&e)))
}

/// Generate one run, journal it and return the current-run report.
///
/// A failed log write is reported but the run stays in the session.
fn roll_and_log(session: &mut Session, run_log: &mut RunLog) -> Result<String, String> {
    let run = session
        .start_new_run()
        .cloned()
        .map_err(|e| describe(&e))?;
    let record = session.log_record(&run);
    if let Err(e) = run_log.write_record(&record) {
        log::warn!("could not write {}: {e}", run_log.path().display());
        println!(
            "{}",
            format!("warning: run {} not logged: {e}", run.id()).yellow()
        );
    }
    Ok(session.current_run())
}
