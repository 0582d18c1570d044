//! Line-oriented prompting with re-prompt loops.
//!
//! The inventory only ever sees typed, validated values; everything that can be
//! malformed is dealt with here.

use std::io::{BufRead, Write};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromptError {
    /// Input reached end-of-file.
    #[error("input closed")]
    Closed,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `prompt` (no newline) and return the next input line, trimmed.
    pub fn ask(&mut self, prompt: &str) -> Result<String, PromptError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::Closed);
        }
        Ok(line.trim().to_string())
    }

    /// Ask until a non-blank answer arrives, then cut it to `max_chars` characters.
    pub fn ask_text(&mut self, prompt: &str, max_chars: usize) -> Result<String, PromptError> {
        loop {
            let answer = self.ask(prompt)?;
            if answer.is_empty() {
                writeln!(self.output, "A value is required.")?;
                continue;
            }

            let kept = truncate_chars(&answer, max_chars).trim_end();
            if kept.len() < answer.len() {
                tracing::debug!(
                    original = %answer,
                    kept = %kept,
                    max_chars,
                    "input truncated"
                );
            }
            return Ok(kept.to_string());
        }
    }

    /// Ask until the answer parses as an `i32`, switching to `retry_prompt` after a miss.
    pub fn ask_int(&mut self, prompt: &str, retry_prompt: &str) -> Result<i32, PromptError> {
        let mut current = prompt;
        loop {
            let answer = self.ask(current)?;
            match answer.parse::<i32>() {
                Ok(value) => return Ok(value),
                Err(_) => current = retry_prompt,
            }
        }
    }
}

/// Longest prefix of `s` holding at most `max_chars` characters.
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &s[..byte_index],
        None => s,
    }
}
