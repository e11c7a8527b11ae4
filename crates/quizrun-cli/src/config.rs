//! CLI configuration.
//!
//! Defaults for the `run` command, loadable from `quizrun.toml`. Command-line
//! flags always win over the file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level quizrun configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizrunConfig {
    /// Default problem file for `run`.
    #[serde(default = "default_problems")]
    pub problems: PathBuf,
    /// Default session time limit in seconds.
    #[serde(default = "default_limit_secs")]
    pub limit_secs: u64,
}

fn default_problems() -> PathBuf {
    PathBuf::from("problems.yaml")
}

fn default_limit_secs() -> u64 {
    10
}

impl Default for QuizrunConfig {
    fn default() -> Self {
        Self {
            problems: default_problems(),
            limit_secs: default_limit_secs(),
        }
    }
}

/// Load config from an explicit path, or `quizrun.toml` in the current
/// directory when present, or fall back to defaults.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizrunConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizrun.toml");
        local.exists().then_some(local)
    };

    match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))
        }
        None => Ok(QuizrunConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = QuizrunConfig::default();
        assert_eq!(config.problems, PathBuf::from("problems.yaml"));
        assert_eq!(config.limit_secs, 10);
    }

    #[test]
    fn parse_config_toml() {
        let toml_str = r#"
problems = "sets/capitals.yaml"
limit_secs = 30
"#;
        let config: QuizrunConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.problems, PathBuf::from("sets/capitals.yaml"));
        assert_eq!(config.limit_secs, 30);
    }

    #[test]
    fn partial_config_uses_defaults() {
        let config: QuizrunConfig = toml::from_str("limit_secs = 5").unwrap();
        assert_eq!(config.problems, PathBuf::from("problems.yaml"));
        assert_eq!(config.limit_secs, 5);
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let result = load_config_from(Some(Path::new("no-such-config.toml")));
        assert!(result.is_err());
    }
}
