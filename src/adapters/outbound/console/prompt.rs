use crate::ports::outbound::DescriptionPrompt;
use crate::shared::Result;
use anyhow::Context;
use std::io::{self, BufRead, Write};

/// StdinPrompt adapter reading one line of operator input from stdin
///
/// The stdout and stdin locks are acquired inside `ask` and dropped before
/// it returns, so the console is released on every exit path.
pub struct StdinPrompt;

impl StdinPrompt {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdinPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl DescriptionPrompt for StdinPrompt {
    fn ask(&self, question: &str) -> Result<String> {
        {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(question.as_bytes())
                .context("Failed to write prompt")?;
            stdout.flush().context("Failed to flush prompt")?;
        }

        let mut line = String::new();
        io::stdin()
            .lock()
            .read_line(&mut line)
            .context("Failed to read description from stdin")?;

        // Strip the line terminator; a closed stream yields an empty answer.
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        Ok(line)
    }
}
