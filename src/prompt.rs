#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{
    fmt::Display,
    io::{self, BufRead, StdinLock, StdoutLock, Write},
};

use crate::error::{InputError, RecordError};

/// A value that can be read from one line of text.
///
/// Parsing and validation are separate steps: `parse` only rejects text of
/// the wrong shape, `validate` only rejects well-formed values that fall
/// outside their domain.
pub trait Record: Sized {
    /// Parses one line of input.
    fn parse(line: &str) -> Result<Self, RecordError>;

    /// Checks semantic constraints on a parsed value.
    fn validate(&self) -> Result<(), RecordError> {
        Ok(())
    }

    /// Parses and validates in one step.
    fn read(line: &str) -> Result<Self, RecordError> {
        let record = Self::parse(line)?;
        record.validate()?;
        Ok(record)
    }
}

/// What the user sees when a line is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    /// Re-prompt without printing anything.
    Silent,
    /// Print the rejection message on its own line before re-prompting.
    Explain {
        /// Prefix printed before the message.
        indent: &'static str,
    },
}

/// Line-oriented console over any reader and writer.
pub struct Console<R, W> {
    /// Source of input lines.
    reader: R,
    /// Sink for prompts and output.
    writer: W,
}

/// Returns a console over the locked process stdin and stdout.
pub fn stdio() -> Console<StdinLock<'static>, StdoutLock<'static>> {
    Console::new(io::stdin().lock(), io::stdout().lock())
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console from a reader and a writer.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Writes `prompt`, then reads one line.
    ///
    /// Only the line terminator is stripped. Returns `None` once the input is
    /// exhausted.
    pub fn read_line(&mut self, prompt: &str) -> Result<Option<String>, InputError> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            tracing::debug!("end of input at prompt {prompt:?}");
            return Ok(None);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    /// Like [`Console::read_line`], but end of input is an error.
    pub fn prompt(&mut self, prompt: &str) -> Result<String, InputError> {
        self.read_line(prompt)?.ok_or(InputError::EndOfInput)
    }

    /// Prompts until `parse` accepts a line.
    ///
    /// Rejected lines are reported according to `feedback`. End of input is
    /// returned as [`InputError::EndOfInput`] rather than retried.
    pub fn prompt_until<T>(
        &mut self,
        prompt: &str,
        feedback: Feedback,
        mut parse: impl FnMut(&str) -> Result<T, RecordError>,
    ) -> Result<T, InputError> {
        loop {
            let line = self.prompt(prompt)?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    tracing::debug!("rejected {line:?}: {e:?}");
                    if let Feedback::Explain { indent } = feedback {
                        writeln!(self.writer, "{indent}{e}")?;
                    }
                }
            }
        }
    }

    /// Prompts until a line reads as a valid `T`.
    pub fn prompt_record<T: Record>(
        &mut self,
        prompt: &str,
        feedback: Feedback,
    ) -> Result<T, InputError> {
        self.prompt_until(prompt, feedback, T::read)
    }

    /// Writes `line` followed by a newline.
    pub fn say(&mut self, line: impl Display) -> Result<(), InputError> {
        writeln!(self.writer, "{line}")?;
        Ok(())
    }

    /// Flushes pending output.
    pub fn flush(&mut self) -> Result<(), InputError> {
        self.writer.flush()?;
        Ok(())
    }

    /// Mutable access to the underlying writer.
    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the console and returns the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}
