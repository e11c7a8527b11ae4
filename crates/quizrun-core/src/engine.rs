//! The quiz session engine.
//!
//! Drives one session: presents problems in order, races a single
//! session-wide countdown against the collection of each answer, and
//! accumulates the score.

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use uuid::Uuid;

use crate::error::{RespondentError, SessionError};
use crate::model::ProblemSet;
use crate::report::SessionReport;
use crate::traits::Respondent;

/// Resolution of one answer attempt. Consumed immediately by the session
/// loop; never persisted.
#[derive(Debug)]
pub enum AnswerOutcome {
    Correct,
    Incorrect,
    TimedOut,
    IoFailure(RespondentError),
}

/// One quiz session: a time limit, a borrowed problem set, and a respondent.
///
/// Construction is pure; all I/O happens in [`QuizSession::run`]. The session
/// is consumed by `run` and the problem set outlives it.
pub struct QuizSession<'a> {
    time_limit: Duration,
    problems: &'a ProblemSet,
    respondent: Arc<dyn Respondent>,
    score: usize,
}

impl<'a> QuizSession<'a> {
    pub fn new(
        time_limit: Duration,
        problems: &'a ProblemSet,
        respondent: Arc<dyn Respondent>,
    ) -> Self {
        Self {
            time_limit,
            problems,
            respondent,
            score: 0,
        }
    }

    /// Run the session to completion and return the final report.
    ///
    /// Ends when the problem set is exhausted, the countdown fires, or the
    /// respondent's read fails. Timer expiry is a normal terminal transition;
    /// only a failed read is an error, returned with the score accumulated so
    /// far. The end-of-session summary is displayed on the first two paths
    /// and skipped on abort.
    pub async fn run(mut self) -> Result<SessionReport, SessionError> {
        let started_at = Utc::now();
        let start = Instant::now();
        let total = self.problems.len();

        tracing::debug!(
            respondent = self.respondent.name(),
            problems = total,
            limit_secs = self.time_limit.as_secs_f64(),
            "session started"
        );

        // One countdown for the whole session. Armed here, polled across
        // every question, never re-armed.
        let countdown = tokio::time::sleep(self.time_limit);
        tokio::pin!(countdown);

        let mut timed_out = false;

        for (index, problem) in self.problems.iter().enumerate() {
            let number = index + 1;
            self.respondent
                .display(&format!("Problem {number}: {} ?", problem.question));

            // The read blocks until the respondent produces a line, so it
            // runs on its own task where the countdown can preempt it.
            // Surrounding whitespace is stripped as part of collection.
            let respondent = Arc::clone(&self.respondent);
            let mut answer = tokio::spawn(async move {
                respondent
                    .read_answer()
                    .await
                    .map(|raw| raw.trim().to_string())
            });

            let outcome = tokio::select! {
                // Polled first: an expired budget beats a simultaneously
                // ready answer, so a zero limit scores nothing.
                biased;
                () = &mut countdown => AnswerOutcome::TimedOut,
                joined = &mut answer => match joined {
                    Ok(Ok(text)) if text == problem.answer => AnswerOutcome::Correct,
                    Ok(Ok(_)) => AnswerOutcome::Incorrect,
                    Ok(Err(source)) => AnswerOutcome::IoFailure(source),
                    Err(join_err) => {
                        AnswerOutcome::IoFailure(RespondentError::TaskFailed(join_err.to_string()))
                    }
                },
            };

            match outcome {
                AnswerOutcome::Correct => {
                    self.respondent.display("Correct");
                    self.score += 1;
                }
                AnswerOutcome::Incorrect => {
                    self.respondent.display("Wrong");
                }
                AnswerOutcome::TimedOut => {
                    // The in-flight read is abandoned, not cancelled: the
                    // dropped JoinHandle detaches the task, which runs to
                    // completion in the background and has its result
                    // discarded.
                    tracing::debug!(problem = number, score = self.score, "time limit reached");
                    timed_out = true;
                    break;
                }
                AnswerOutcome::IoFailure(source) => {
                    tracing::error!(problem = number, error = %source, "answer read failed");
                    return Err(SessionError {
                        score: self.score,
                        problem: number,
                        source,
                    });
                }
            }
        }

        self.respondent.display(&format!(
            "Game over! Your score is {} from {total}",
            self.score
        ));

        Ok(SessionReport {
            session_id: Uuid::new_v4(),
            started_at,
            score: self.score,
            total,
            timed_out,
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }
}
