//! Scripted respondent for deterministic sessions.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use quizrun_core::error::RespondentError;
use quizrun_core::traits::Respondent;

/// A respondent that serves a fixed list of answers in order.
///
/// Records every displayed line so tests can assert on the session
/// transcript. With echo enabled it also prints the transcript to stdout,
/// which is what the CLI's `run --answers` mode uses.
pub struct ScriptedRespondent {
    answers: Vec<String>,
    cursor: AtomicUsize,
    displayed: Mutex<Vec<String>>,
    echo: bool,
}

impl ScriptedRespondent {
    /// Create a scripted respondent from an ordered answer list.
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            cursor: AtomicUsize::new(0),
            displayed: Mutex::new(Vec::new()),
            echo: false,
        }
    }

    /// Also print displayed lines to stdout.
    pub fn echoing(mut self) -> Self {
        self.echo = true;
        self
    }

    /// Every line displayed so far, in order.
    pub fn displayed(&self) -> Vec<String> {
        self.displayed.lock().unwrap().clone()
    }

    /// Number of answers handed out (or attempted past the end of the list).
    pub fn reads(&self) -> usize {
        self.cursor.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl Respondent for ScriptedRespondent {
    fn name(&self) -> &str {
        "scripted"
    }

    fn display(&self, text: &str) {
        if self.echo {
            println!("{text}");
        }
        self.displayed.lock().unwrap().push(text.to_string());
    }

    async fn read_answer(&self) -> Result<String, RespondentError> {
        let index = self.cursor.fetch_add(1, Ordering::Relaxed);
        match self.answers.get(index) {
            Some(answer) => Ok(answer.clone()),
            // Script exhausted: the input stream is over.
            None => Err(RespondentError::Eof),
        }
    }
}
