//! Session lifecycle and statistics.
//!
//! A `Session` owns the party, the configuration and every run generated
//! while it is active. Reports are plain strings so any driver can print
//! them as-is.

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;

use crate::config::RouletteConfig;
use crate::error::{RouletteError, RouletteResult};
use crate::journal::RunRecord;
use crate::party::Party;
use crate::random::{RandomSource, session_rng};
use crate::report::{self, INDENT, NO_RUNS};
use crate::role::Role;
use crate::run::Run;
use crate::stats::{self, LocationCounts};

/// Lifecycle state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Runs can be generated.
    Active,
    /// Ended for good; no more runs.
    Ended,
}

/// One sitting of runs for a fixed party.
pub struct Session<R: RandomSource = StdRng> {
    id: i64,
    started_at: DateTime<Utc>,
    party: Party,
    config: RouletteConfig,
    runs: Vec<Run>,
    rarity_mode: bool,
    state: SessionState,
    rng: R,
}

impl Session<StdRng> {
    /// Start a session, seeding the RNG from `config.seed`.
    pub fn new<S: Into<String>>(
        members: impl IntoIterator<Item = S>,
        config: RouletteConfig,
    ) -> RouletteResult<Self> {
        let rng = session_rng(config.seed);
        Self::with_rng(members, config, rng)
    }
}

impl<R: RandomSource> Session<R> {
    /// Start a session with an explicit random source.
    pub fn with_rng<S: Into<String>>(
        members: impl IntoIterator<Item = S>,
        config: RouletteConfig,
        rng: R,
    ) -> RouletteResult<Self> {
        config.validate()?;
        let party = Party::new(members, config.party_size)?;
        let started_at = Utc::now();
        let id = started_at.timestamp();
        log::info!("session {id} started for {party}");

        Ok(Self {
            id,
            started_at,
            party,
            config,
            runs: Vec::new(),
            rarity_mode: false,
            state: SessionState::Active,
            rng,
        })
    }

    /// Session id (Unix seconds at start).
    pub fn id(&self) -> i64 {
        self.id
    }

    /// When the session started.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// The party.
    pub fn party(&self) -> &Party {
        &self.party
    }

    /// The configuration in use.
    pub fn config(&self) -> &RouletteConfig {
        &self.config
    }

    /// All runs so far, oldest first.
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Number of runs so far.
    pub fn run_count(&self) -> usize {
        self.runs.len()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Whether runs can still be generated.
    pub fn is_active(&self) -> bool {
        self.state == SessionState::Active
    }

    /// Whether rarity mode is on.
    pub fn rarity_mode(&self) -> bool {
        self.rarity_mode
    }

    /// Generate the next run and add it to the session.
    ///
    /// With rarity mode on, one draw per run decides whether a rarity event
    /// replaces a member's role.
    pub fn start_new_run(&mut self) -> RouletteResult<&Run> {
        if self.state == SessionState::Ended {
            log::warn!("session {}: run requested after end", self.id);
            return Err(RouletteError::SessionEnded);
        }

        let id = next_run_id(self.runs.len())?;
        let mut run = Run::create(
            id,
            &self.config.catalog,
            self.party.members(),
            &self.config.roles,
            &mut self.rng,
        )?;

        if self.rarity_mode
            && let Some(replacement) = self.roll_rarity()
            && run.trigger_rarity_event(&replacement, &self.config.protected_roles)
        {
            log::info!(
                "session {}: rarity event on run {id}, {replacement} handed out",
                self.id
            );
        }

        log::debug!("session {}: run {id} -> {}", self.id, run.location());
        self.runs.push(run);
        Ok(&self.runs[self.runs.len() - 1])
    }

    /// Flip rarity mode. Returns the new setting.
    pub fn toggle_rarity_mode(&mut self) -> bool {
        self.rarity_mode = !self.rarity_mode;
        log::debug!("session {}: rarity mode {}", self.id, self.rarity_mode);
        self.rarity_mode
    }

    /// End the session.
    ///
    /// The first call returns the final summary (`None` if no runs were made);
    /// later calls do nothing and return `None`.
    pub fn end(&mut self) -> Option<String> {
        if self.state == SessionState::Ended {
            return None;
        }
        self.state = SessionState::Ended;
        log::info!("session {} ended after {} runs", self.id, self.runs.len());
        self.summary()
    }

    /// Run count per catalog location.
    pub fn location_counts(&self) -> LocationCounts {
        LocationCounts::tally(&self.runs, &self.config.catalog)
    }

    /// How often `member` held each configured role.
    pub fn role_counts_for(&self, member: &str) -> RouletteResult<Vec<(Role, usize)>> {
        if !self.party.contains(member) {
            return Err(RouletteError::UnknownMember(member.to_string()));
        }
        Ok(stats::role_counts(&self.runs, member, &self.config.roles))
    }

    /// Scoreboard digest, or `None` when there is no data yet.
    pub fn scoreboard_line(&self) -> Option<String> {
        report::scoreboard_line(&self.runs, &self.location_counts())
    }

    /// Report for one run.
    pub fn render_run(&self, run: &Run) -> String {
        report::render_run(run, &self.config.catalog)
    }

    /// Report for the latest run.
    pub fn current_run(&self) -> String {
        match self.runs.last() {
            Some(run) => format!("Current Run\n------------\n{}", self.render_run(run)),
            None => NO_RUNS.to_string(),
        }
    }

    /// Report for the run before the latest.
    pub fn previous_run(&self) -> String {
        match self.runs.len() {
            0 => NO_RUNS.to_string(),
            1 => "Only one run recorded this session!".to_string(),
            n => format!(
                "Previous Run\n------------\n{}",
                self.render_run(&self.runs[n - 2])
            ),
        }
    }

    /// Raw listing of every run.
    pub fn run_dump(&self) -> String {
        report::run_dump(&self.runs)
    }

    /// Full session summary: location totals, role table and scoreboard
    /// entry. `None` when there are no runs.
    pub fn summary(&self) -> Option<String> {
        let scoreboard = self.scoreboard_line()?;
        let counts = self.location_counts();

        let mut out = String::from("Session Totals:\n\n");
        out.push_str(&report::location_totals(&counts, &self.config.catalog));

        out.push_str("\n\nRole Assignments:\n\n");
        out.push_str(&report::role_table_header(&self.config.roles));
        out.push('\n');
        for member in self.party.members() {
            let counts = stats::role_counts(&self.runs, member, &self.config.roles);
            out.push_str(&format!(
                "{:INDENT$}{}\n",
                "",
                report::member_row(member, &counts)
            ));
        }

        out.push_str("\n\nScoreboard Entry:\n\n");
        out.push_str(&format!("{:INDENT$}{scoreboard}\n", ""));
        Some(out)
    }

    /// Log record for a run of this session.
    pub fn log_record(&self, run: &Run) -> RunRecord {
        RunRecord {
            timestamp: Utc::now(),
            session_id: self.id,
            members: self.party.members().to_vec(),
            run_id: run.id(),
            location: run.location().to_string(),
            assignment: run.assignment().clone(),
            rarity_count: run.rarity_count(),
        }
    }

    fn roll_rarity(&mut self) -> Option<Role> {
        if self.rng.unit() >= self.config.rarity_chance {
            return None;
        }
        let pool = &self.config.rarity_roles;
        Some(pool[self.rng.below(pool.len())].clone())
    }
}

/// Id for the run after `count` existing ones.
fn next_run_id(count: usize) -> RouletteResult<u32> {
    u32::try_from(count)
        .ok()
        .and_then(|n| n.checked_add(1))
        .ok_or(RouletteError::RunLimit)
}
