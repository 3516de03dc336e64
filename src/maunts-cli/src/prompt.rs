//! Console prompts

use maunts::{MauntsError, Prompt};
use std::io::{self, BufRead, Write};

/// Reads answers from any line source, writes questions to any sink
pub struct ConsolePrompt<R, W> {
    input: R,
    output: W,
    pause_enabled: bool,
}

impl ConsolePrompt<io::StdinLock<'static>, io::Stdout> {
    /// Prompt on the terminal
    pub fn stdio(pause_enabled: bool) -> Self {
        ConsolePrompt::new(io::stdin().lock(), io::stdout(), pause_enabled)
    }
}

impl<R: BufRead, W: Write> ConsolePrompt<R, W> {
    pub fn new(input: R, output: W, pause_enabled: bool) -> Self {
        ConsolePrompt {
            input,
            output,
            pause_enabled,
        }
    }

    fn read_answer(&mut self, question: &str) -> io::Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut answer = String::new();
        self.input.read_line(&mut answer)?;
        Ok(answer.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl<R: BufRead, W: Write> Prompt for ConsolePrompt<R, W> {
    fn ask(&mut self, question: &str) -> Result<String, MauntsError> {
        self.read_answer(question)
            .map_err(|e| MauntsError::Prompt(e.to_string()))
    }

    fn warn(&mut self, message: &str) -> Result<(), MauntsError> {
        writeln!(self.output, "{}", message)
            .and_then(|_| self.output.flush())
            .map_err(|e| MauntsError::Prompt(e.to_string()))
    }

    fn pause(&mut self) -> Result<(), MauntsError> {
        if !self.pause_enabled {
            return Ok(());
        }
        self.read_answer("Press Enter to continue...")
            .map(|_| ())
            .map_err(|e| MauntsError::Prompt(e.to_string()))
    }
}
