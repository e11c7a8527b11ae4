//! YAML problem file parser.
//!
//! Loads problem sets from YAML files and directories, and validates them.
//!
//! The file format is a single `problems` list:
//!
//! ```yaml
//! problems:
//!   - question: What is the capital of UK
//!     answer: London
//! ```

use std::path::{Path, PathBuf};

use crate::error::LoadError;
use crate::model::ProblemSet;

/// Parse a YAML string into a [`ProblemSet`].
pub fn parse_problems_str(content: &str) -> Result<ProblemSet, serde_yaml::Error> {
    serde_yaml::from_str(content)
}

/// Load a single YAML problem file.
pub fn parse_problem_file(path: &Path) -> Result<ProblemSet, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_problems_str(&content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Recursively load all `.yaml`/`.yml` problem files from a directory.
///
/// Unparseable files are skipped with a warning rather than failing the whole
/// load, matching how a directory of mixed sets is expected to behave.
pub fn load_problem_directory(dir: &Path) -> Result<Vec<(PathBuf, ProblemSet)>, LoadError> {
    let mut sets = Vec::new();

    let entries = std::fs::read_dir(dir).map_err(|source| LoadError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    for entry in entries {
        let entry = entry.map_err(|source| LoadError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();

        if path.is_dir() {
            sets.extend(load_problem_directory(&path)?);
        } else if path
            .extension()
            .is_some_and(|ext| ext == "yaml" || ext == "yml")
        {
            match parse_problem_file(&path) {
                Ok(set) => sets.push((path, set)),
                Err(e) => {
                    tracing::warn!("skipping {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(sets)
}

/// A warning from problem set validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// 1-based problem number (if applicable).
    pub problem: Option<usize>,
    /// Warning message.
    pub message: String,
}

/// Validate a problem set for issues that would make a session pointless.
pub fn validate_problem_set(set: &ProblemSet) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if set.is_empty() {
        warnings.push(ValidationWarning {
            problem: None,
            message: "problem set is empty".into(),
        });
    }

    let mut seen_questions = std::collections::HashSet::new();
    for (index, problem) in set.iter().enumerate() {
        let number = index + 1;

        if problem.question.trim().is_empty() {
            warnings.push(ValidationWarning {
                problem: Some(number),
                message: "question is empty".into(),
            });
        }

        if problem.answer.is_empty() {
            warnings.push(ValidationWarning {
                problem: Some(number),
                message: "answer is empty".into(),
            });
        } else if problem.answer.trim() != problem.answer {
            // Submitted answers are trimmed before comparison, so a stored
            // answer with surrounding whitespace can never match.
            warnings.push(ValidationWarning {
                problem: Some(number),
                message: "answer has surrounding whitespace and can never be matched".into(),
            });
        }

        if !seen_questions.insert(problem.question.as_str()) {
            warnings.push(ValidationWarning {
                problem: Some(number),
                message: format!("duplicate question: {}", problem.question),
            });
        }
    }

    warnings
}
