//! Error types for problem loading and answer collection.
//!
//! Defined in `quizrun-core` so the session engine can return structured
//! errors without string matching. Timer expiry is not an error anywhere in
//! this taxonomy; it is a normal terminal transition of the session.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a problem set.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The problem file could not be read (missing or unreadable).
    #[error("failed to read problem file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The problem file is not valid YAML of the expected shape.
    #[error("failed to parse problem file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Errors that can occur when reading an answer from a respondent.
#[derive(Debug, Error)]
pub enum RespondentError {
    /// The input stream ended (closed stdin, exhausted script).
    #[error("input stream closed")]
    Eof,

    /// Reading the answer failed with an I/O error.
    #[error("failed to read answer: {0}")]
    Io(#[from] std::io::Error),

    /// The background answer task died before producing a result.
    #[error("answer task failed: {0}")]
    TaskFailed(String),
}

/// A session aborted by a respondent failure.
///
/// Carries the score accumulated before the abort together with the 1-based
/// number of the problem whose answer collection failed.
#[derive(Debug, Error)]
#[error("answer input failed on problem {problem}: {source}")]
pub struct SessionError {
    /// Correct answers accumulated before the failure.
    pub score: usize,
    /// 1-based number of the problem being presented when the read failed.
    pub problem: usize,
    #[source]
    pub source: RespondentError,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_error_display_includes_problem_and_cause() {
        let err = SessionError {
            score: 3,
            problem: 4,
            source: RespondentError::Eof,
        };
        let msg = err.to_string();
        assert!(msg.contains("problem 4"), "got: {msg}");
        assert!(msg.contains("input stream closed"), "got: {msg}");
    }

    #[test]
    fn load_error_display_includes_path() {
        let err = LoadError::Io {
            path: PathBuf::from("missing.yaml"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.to_string().contains("missing.yaml"));
    }
}
