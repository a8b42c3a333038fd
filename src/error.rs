#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Why a single line of input was rejected.
///
/// The message is what a user sees when the prompt explains rejections, so
/// it is phrased for them rather than for a log.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// The text does not have the expected shape (wrong field count,
    /// non-numeric field, division by zero).
    #[error("{0}")]
    Format(String),
    /// The text parsed, but a value falls outside its allowed domain.
    #[error("{0}")]
    Range(String),
}

impl RecordError {
    /// Creates a [`RecordError::Format`] with the given message.
    pub fn format(msg: impl Into<String>) -> Self {
        Self::Format(msg.into())
    }

    /// Creates a [`RecordError::Range`] with the given message.
    pub fn range(msg: impl Into<String>) -> Self {
        Self::Range(msg.into())
    }

    /// Returns true if the value parsed but was out of range.
    pub fn is_range(&self) -> bool {
        matches!(self, Self::Range(_))
    }
}

/// Errors raised while talking to the console.
#[derive(thiserror::Error, Debug)]
pub enum InputError {
    /// The input stream closed before a line could be read.
    #[error("input ended before a valid answer was given")]
    EndOfInput,
    /// Reading from or writing to the console failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl InputError {
    /// Returns true if this is the end-of-input signal.
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, Self::EndOfInput)
    }
}
