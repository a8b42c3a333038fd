#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{
    fmt::Display,
    io::{BufRead, Write},
};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{ToPrimitive, Zero};

use crate::{
    constants::{FUEL_EMPTY_PERCENT, FUEL_FULL_PERCENT},
    error::{InputError, RecordError},
    parsers::parser,
    prompt::{Console, Feedback, Record},
};

/// A fuel reading given as `numerator/denominator`, of any width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuelRatio {
    /// Fuel remaining.
    numerator:   BigInt,
    /// Tank capacity, never zero.
    denominator: BigInt,
}

impl FuelRatio {
    /// Numerator of the ratio.
    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    /// Denominator of the ratio.
    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    /// Fill level as a percentage, `(n / d) * 100`.
    ///
    /// The quotient is taken exactly and only then converted to `f64`, so
    /// fields wider than 64 bits still give the right reading.
    pub fn percentage(&self) -> f64 {
        let ratio = BigRational::new(self.numerator.clone(), self.denominator.clone());
        ratio.to_f64().unwrap_or(f64::NAN) * 100.0
    }

    /// What the gauge shows for this reading.
    pub fn gauge(&self) -> Gauge {
        Gauge::from_percentage(self.percentage())
    }
}

impl Record for FuelRatio {
    fn parse(line: &str) -> Result<Self, RecordError> {
        let (numerator, denominator) = parser::fraction(line)
            .map_err(|e| RecordError::format(format!("expected X/Y, got {line:?} ({e})")))?;

        if denominator.is_zero() {
            return Err(RecordError::format("denominator cannot be zero"));
        }

        Ok(Self {
            numerator,
            denominator,
        })
    }

    fn validate(&self) -> Result<(), RecordError> {
        if self.numerator > self.denominator {
            return Err(RecordError::range(format!(
                "{} is more than a full tank of {}",
                self.numerator, self.denominator
            )));
        }
        Ok(())
    }
}

/// Gauge reading derived from a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gauge {
    /// At or below 1%.
    Empty,
    /// At or above 99%.
    Full,
    /// Anything in between, rounded half to even.
    Percent(i64),
}

impl Gauge {
    /// Buckets a percentage. Both boundaries are inclusive.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= FUEL_FULL_PERCENT {
            Gauge::Full
        } else if percentage <= FUEL_EMPTY_PERCENT {
            Gauge::Empty
        } else {
            Gauge::Percent(percentage.round_ties_even() as i64)
        }
    }
}

impl Display for Gauge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gauge::Empty => write!(f, "E"),
            Gauge::Full => write!(f, "F"),
            Gauge::Percent(p) => write!(f, "{p}%"),
        }
    }
}

/// Asks for a fraction until a valid one is given, then prints the gauge.
pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Gauge, InputError> {
    let ratio: FuelRatio = console.prompt_record("Fraction: ", Feedback::Silent)?;
    let gauge = ratio.gauge();
    tracing::info!(
        "{}/{} reads as {gauge}",
        ratio.numerator(),
        ratio.denominator()
    );
    console.say(gauge)?;
    Ok(gauge)
}
