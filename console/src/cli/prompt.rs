//! Interactive prompts on stdin.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines, Stdin};

use crate::core::error::{AppError, Result};

/// Line-oriented prompt. Generic over the reader so tests can script answers.
pub struct Prompt<R> {
    lines: Lines<R>,
}

impl Prompt<BufReader<Stdin>> {
    pub fn stdin() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()))
    }
}

impl<R: AsyncBufRead + Unpin> Prompt<R> {
    pub fn new(reader: R) -> Self {
        Self { lines: reader.lines() }
    }

    /// Print `question` and read one trimmed line. End of input is an error.
    pub async fn ask(&mut self, question: &str) -> Result<String> {
        eprint!("{} ", question);
        match self.lines.next_line().await? {
            Some(line) => Ok(line.trim().to_string()),
            None => Err(AppError::Validation("No input available".to_string())),
        }
    }

    /// Yes/no question; anything other than `y`/`yes` is a no.
    pub async fn confirm(&mut self, question: &str) -> Result<bool> {
        let answer = self.ask(&format!("{} [y/N]", question)).await?;
        Ok(matches!(answer.to_lowercase().as_str(), "y" | "yes"))
    }
}
