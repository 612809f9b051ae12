//! Line-oriented prompting
//!
//! [`Prompter`] asks a question, reads one line and hands it to a parser. On
//! a parse failure it prints the parser's message and asks again, with no
//! retry limit. It works over any `BufRead`/`Write` pair so the interactive
//! flows can be driven from in-memory buffers.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::debug;

use crate::input::InputError;

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// End of input reached while waiting for an answer
    #[error("Input closed before an answer was given")]
    Closed,
}

pub struct Prompter<R, W> {
    input: R,
    output: W,
    line: String,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            line: String::new(),
        }
    }

    /// Ask `question` until `parse` accepts the answer
    pub fn ask<T, F>(&mut self, question: &str, parse: F) -> Result<T, PromptError>
    where
        F: Fn(&str) -> Result<T, InputError>,
    {
        loop {
            write!(self.output, "{}", question)?;
            self.output.flush()?;

            self.line.clear();
            if self.input.read_line(&mut self.line)? == 0 {
                return Err(PromptError::Closed);
            }

            match parse(&self.line) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    debug!(input = self.line.trim(), error = ?err, "Rejected input");
                    writeln!(self.output, "{}", err)?;
                }
            }
        }
    }

    /// Print one line of output
    pub fn say(&mut self, line: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", line)
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}
