//! The respondent capability trait.
//!
//! The session engine depends only on this trait; concrete implementations
//! (interactive console, scripted) live in the `quizrun-respondents` crate
//! and are selected by the caller, never by the engine.

use async_trait::async_trait;

use crate::error::RespondentError;

/// An actor that can be shown text and asked for answers.
#[async_trait]
pub trait Respondent: Send + Sync {
    /// Short implementation name used in logs (e.g. "console").
    fn name(&self) -> &str;

    /// Show one line of text to the respondent. No failure contract is
    /// assumed by the engine.
    fn display(&self, text: &str);

    /// Produce the next answer. Blocks until the respondent supplies a line;
    /// the engine confines that block to a background task so the session
    /// countdown can preempt it.
    async fn read_answer(&self) -> Result<String, RespondentError>;
}
