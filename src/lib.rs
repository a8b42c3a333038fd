//! # drills
//!
//! Small interactive command-line exercises that read loosely structured
//! text, validate it, and print a derived result: a fuel gauge, a date
//! reformatter, a grocery tally, a grade roster and a taqueria order total.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Runtime configuration read from the environment
pub mod config;
/// A module defining a bunch of constant values to be used throughout
pub mod constants;
/// `M/D/Y` and `Month D, Y` date reformatting
pub mod date;
/// Error types for rejected input and console failures
pub mod error;
/// Fuel gauge classification
pub mod fuel;
/// Grocery list tally
pub mod grocery;
/// Taqueria menu and running order total
pub mod order;
/// For all parsers used
pub mod parsers;
/// The validated-input loop shared by every exercise
pub mod prompt;
/// Student roster, grades and class statistics
pub mod roster;

pub use error::{InputError, RecordError};
pub use prompt::{Console, Feedback, Record};
