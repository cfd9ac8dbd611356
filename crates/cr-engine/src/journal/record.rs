//! The log record written for every run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::assign::Assignment;
use crate::error::RouletteResult;

/// One line of the run log.
///
/// Older logs used `id`, `dungeon`, `party` and `secrets_triggered`; those
/// names are still accepted when reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    /// When the record was written.
    pub timestamp: DateTime<Utc>,
    /// Session the run belongs to.
    pub session_id: i64,
    /// Party members in order.
    pub members: Vec<String>,
    /// Run id within the session.
    #[serde(alias = "id")]
    pub run_id: u32,
    /// Location id.
    #[serde(alias = "dungeon")]
    pub location: String,
    /// Member to role mapping.
    #[serde(alias = "party")]
    pub assignment: Assignment,
    /// Rarity events on this run.
    #[serde(alias = "secrets_triggered", default)]
    pub rarity_count: u32,
}

impl RunRecord {
    /// Encode as a single JSON line (no trailing newline).
    pub fn to_json_line(&self) -> RouletteResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode one JSON line.
    pub fn from_json_line(line: &str) -> RouletteResult<Self> {
        Ok(serde_json::from_str(line)?)
    }
}
