//! Line-oriented prompting over any reader/writer pair

use crate::error::PromptError;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Asks questions on `output` and reads answers from `input`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write `prompt`, then read one trimmed line
    ///
    /// # Errors
    ///
    /// Returns `PromptError::Closed` at end of input, or `PromptError::Io` if reading or
    /// writing fails.
    pub fn ask(&mut self, prompt: &str) -> Result<String, PromptError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::Closed);
        }

        Ok(line.trim().to_string())
    }

    /// Write one line of output
    ///
    /// # Errors
    ///
    /// Returns `PromptError::Io` if writing fails.
    pub fn say(&mut self, line: &str) -> Result<(), PromptError> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Give back the writer, e.g. to inspect captured output
    pub fn into_output(self) -> W {
        self.output
    }
}

impl Prompter<StdinLock<'static>, Stdout> {
    /// Prompter bound to the process's stdin and stdout
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}
