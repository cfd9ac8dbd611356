//! Run generation and session statistics for Criterion Roulette.
//!
//! Deals roles to a fixed-size party, draws a location for each run, applies
//! the optional rarity event, and aggregates a session's runs into counts,
//! role tables and a one-line scoreboard entry. Runs are journaled as
//! JSON lines.

pub mod assign;
pub mod config;
pub mod error;
pub mod journal;
pub mod location;
pub mod party;
pub mod random;
pub mod report;
pub mod role;
pub mod run;
pub mod session;
pub mod stats;

pub use assign::{Assignment, deal_roles, pick_location};
pub use config::RouletteConfig;
pub use error::{ErrorKind, RouletteError, RouletteResult};
pub use journal::{RecordSink, RunLog, RunRecord};
pub use location::{Location, LocationCatalog};
pub use party::Party;
pub use random::RandomSource;
pub use role::Role;
pub use run::Run;
pub use session::{Session, SessionState};
pub use stats::LocationCounts;
