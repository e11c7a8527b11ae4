//! The `quizrun run` command.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};

use quizrun_core::engine::QuizSession;
use quizrun_core::parser;
use quizrun_core::traits::Respondent;
use quizrun_respondents::{ConsoleRespondent, ScriptedRespondent};

use crate::config::load_config_from;

pub async fn execute(
    problems: Option<PathBuf>,
    limit: Option<u64>,
    answers: Option<String>,
    report: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let problems_path = problems.unwrap_or(config.problems);
    let limit_secs = limit.unwrap_or(config.limit_secs);

    let set = parser::parse_problem_file(&problems_path)?;
    tracing::info!(
        problems = set.len(),
        limit_secs,
        file = %problems_path.display(),
        "starting quiz"
    );

    // The caller picks the respondent implementation; the engine only sees
    // the capability.
    let respondent: Arc<dyn Respondent> = match &answers {
        Some(list) => Arc::new(
            ScriptedRespondent::new(list.split(',').map(str::trim).map(String::from)).echoing(),
        ),
        None => Arc::new(ConsoleRespondent::new()),
    };

    let session = QuizSession::new(Duration::from_secs(limit_secs), &set, respondent);
    let summary = session.run().await.context("quiz session failed")?;

    if let Some(path) = report {
        summary.save_json(&path)?;
        println!("Report written to {}", path.display());
    }

    Ok(())
}
