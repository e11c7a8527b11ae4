//! Interactive console respondent.

use async_trait::async_trait;

use quizrun_core::error::RespondentError;
use quizrun_core::traits::Respondent;

/// A respondent backed by stdout/stdin: the human at the terminal.
#[derive(Debug, Default)]
pub struct ConsoleRespondent;

impl ConsoleRespondent {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Respondent for ConsoleRespondent {
    fn name(&self) -> &str {
        "console"
    }

    fn display(&self, text: &str) {
        println!("{text}");
    }

    async fn read_answer(&self) -> Result<String, RespondentError> {
        // The blocking stdin read runs off the async runtime. If the session
        // countdown wins the race first, the abandoned task keeps waiting on
        // stdin until process exit.
        let (bytes, line) = tokio::task::spawn_blocking(|| {
            let mut line = String::new();
            let bytes = std::io::stdin().read_line(&mut line)?;
            Ok::<_, std::io::Error>((bytes, line))
        })
        .await
        .map_err(|e| RespondentError::TaskFailed(e.to_string()))??;

        if bytes == 0 {
            tracing::debug!("stdin closed");
            return Err(RespondentError::Eof);
        }

        Ok(line)
    }
}
