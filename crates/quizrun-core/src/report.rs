//! Session report type with JSON persistence.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The outcome of one completed (non-aborted) session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionReport {
    /// Unique session identifier.
    pub session_id: Uuid,
    /// When the session started.
    pub started_at: DateTime<Utc>,
    /// Correct answers accumulated.
    pub score: usize,
    /// Problems in the set.
    pub total: usize,
    /// Whether the countdown ended the session before the set was exhausted.
    pub timed_out: bool,
    /// Wall-clock duration of the session in milliseconds.
    pub duration_ms: u64,
}

impl SessionReport {
    /// Save the report as pretty-printed JSON.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> SessionReport {
        SessionReport {
            session_id: Uuid::nil(),
            started_at: Utc::now(),
            score: 1,
            total: 2,
            timed_out: true,
            duration_ms: 1234,
        }
    }

    #[test]
    fn report_serde_roundtrip() {
        let report = sample_report();
        let json = serde_json::to_string(&report).unwrap();
        let deserialized: SessionReport = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.score, 1);
        assert_eq!(deserialized.total, 2);
        assert!(deserialized.timed_out);
    }

    #[test]
    fn save_json_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports").join("session.json");
        sample_report().save_json(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"score\": 1"));
    }
}
