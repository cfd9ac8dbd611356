//! Append-only JSON-lines storage for run records.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::RouletteResult;

use super::record::RunRecord;

/// Default log file.
pub const LOG_FILE: &str = "db.json";

/// Log file used in debug sessions.
pub const DEBUG_LOG_FILE: &str = "debug.db.json";

/// Something that accepts pre-serialized log lines.
pub trait RecordSink {
    /// Append one line. The sink adds the line terminator.
    fn append_line(&mut self, line: &str) -> RouletteResult<()>;

    /// Serialize and append a record, returning the written line.
    fn write_record(&mut self, record: &RunRecord) -> RouletteResult<String> {
        let line = record.to_json_line()?;
        self.append_line(&line)?;
        Ok(line)
    }
}

impl RecordSink for Vec<String> {
    fn append_line(&mut self, line: &str) -> RouletteResult<()> {
        self.push(line.to_string());
        Ok(())
    }
}

/// A run log file on disk.
#[derive(Debug, Clone)]
pub struct RunLog {
    path: PathBuf,
}

impl RunLog {
    /// Point at a log file. Nothing is created until the first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every record. Blank lines are ignored; lines that do not parse
    /// are skipped with a warning.
    pub fn read(&self) -> RouletteResult<Vec<RunRecord>> {
        let text = std::fs::read_to_string(&self.path)?;
        let mut records = Vec::new();
        for (n, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match RunRecord::from_json_line(line) {
                Ok(record) => records.push(record),
                Err(e) => {
                    log::warn!("{}:{}: skipping record: {e}", self.path.display(), n + 1)
                }
            }
        }
        Ok(records)
    }
}

impl RecordSink for RunLog {
    fn append_line(&mut self, line: &str) -> RouletteResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assign::Assignment;
    use chrono::Utc;
    use tempfile::TempDir;

    fn record(run_id: u32) -> RunRecord {
        RunRecord {
            timestamp: Utc::now(),
            session_id: 42,
            members: vec!["Shin".into()],
            run_id,
            location: "ASS".into(),
            assignment: Assignment::default(),
            rarity_count: 0,
        }
    }

    #[test]
    fn append_then_read() {
        let dir = TempDir::new().unwrap();
        let mut log = RunLog::new(dir.path().join("db.json"));
        log.write_record(&record(1)).unwrap();
        log.write_record(&record(2)).unwrap();

        let records = log.read().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].run_id, 2);

        let text = std::fs::read_to_string(log.path()).unwrap();
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn read_skips_bad_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("db.json");
        let good = record(5).to_json_line().unwrap();
        std::fs::write(&path, format!("{good}\n\nnot json\n{good}\n")).unwrap();

        let records = RunLog::new(&path).read().unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn read_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        assert!(RunLog::new(dir.path().join("nope.json")).read().is_err());
    }

    #[test]
    fn append_to_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let mut log = RunLog::new(dir.path().join("missing").join("db.json"));
        assert!(log.write_record(&record(1)).is_err());
    }

    #[test]
    fn vec_sink_collects_lines() {
        let mut sink: Vec<String> = Vec::new();
        let line = sink.write_record(&record(1)).unwrap();
        assert_eq!(sink, vec![line]);
    }
}
