//! Line-oriented prompting over any reader/writer pair.

use crate::Result;
use std::io::{BufRead, Write};

/// Prompt/answer channel used by the collector and session driver
pub trait Console {
    /// Show `prompt` (no trailing newline) and read one line of input
    ///
    /// The line terminator is stripped; end of input yields an empty answer.
    fn ask(&mut self, prompt: &str) -> Result<String>;

    /// Print one line of output
    fn say(&mut self, line: &str) -> Result<()>;

    /// Ask a yes/no question; only "yes" in any case is affirmative
    ///
    /// The answer is not trimmed, so " yes" counts as no.
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        let answer = self.ask(prompt)?;
        Ok(answer.eq_ignore_ascii_case("yes"))
    }
}

/// Console backed by a buffered reader and a writer (stdin/stdout in the binary)
pub struct TerminalConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;

        let trimmed = line.strip_suffix('\n').unwrap_or(&line);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        Ok(trimmed.to_string())
    }

    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }
}
