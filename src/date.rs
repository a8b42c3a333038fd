#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{
    fmt::Display,
    io::{BufRead, Write},
};

use num_bigint::BigInt;
use num_traits::ToPrimitive;

use crate::{
    constants::MONTHS,
    error::InputError,
    parsers::parser,
    prompt::Console,
};

/// A calendar date with loosely checked bounds (`1..=12`, `1..=31`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDate {
    /// Year of any width, printed without padding.
    year:  BigInt,
    /// Month, `1..=12`.
    month: u32,
    /// Day of month, `1..=31`.
    day:   u32,
}

impl CalendarDate {
    /// Builds a date, returning `None` when month or day is out of range.
    pub fn new(year: impl Into<BigInt>, month: &BigInt, day: &BigInt) -> Option<Self> {
        let year = year.into();
        let in_range = |value: &BigInt, max: u32| value.to_u32().filter(|v| (1..=max).contains(v));
        let (Some(month), Some(day)) = (in_range(month, 12), in_range(day, 31)) else {
            tracing::debug!("{year}-{month}-{day} is out of range");
            return None;
        };
        Some(Self { year, month, day })
    }

    /// Year component.
    pub fn year(&self) -> &BigInt {
        &self.year
    }

    /// Month component, `1..=12`.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Day component, `1..=31`.
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Reads `M/D/Y`. Lines without a `/` are not numeric dates at all.
    pub fn from_numeric(line: &str) -> Option<Self> {
        if !line.contains('/') {
            return None;
        }
        let (month, day, year) = parser::slash_date(line)
            .inspect_err(|e| tracing::debug!("{line:?} is not M/D/Y: {e}"))
            .ok()?;
        Self::new(year, &month, &day)
    }

    /// Reads `Month D, Y`.
    ///
    /// The first month name contained anywhere in the line picks the month.
    /// The line is then split on single spaces: the second token (commas
    /// removed) is the day and the third is the year.
    ///
    /// A line containing `/` never reads as a textual date. Its month check is
    /// made against the whole `/`-separated fields, and even an exact match
    /// yields nothing.
    pub fn from_textual(line: &str) -> Option<Self> {
        if line.contains('/') {
            if let Some(name) = MONTHS
                .iter()
                .find(|name| line.split('/').any(|field| field == **name))
            {
                tracing::debug!("{line:?} names {name} as a field of a numeric date");
            }
            return None;
        }

        let month = MONTHS.iter().position(|name| line.contains(name))? + 1;

        let mut parts = line.split(' ').skip(1);
        let day = parser::int(&parts.next()?.replace(',', "")).ok()?;
        let year = parser::int(parts.next()?).ok()?;

        Self::new(year, &BigInt::from(month), &day)
    }
}

impl Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Tries both date syntaxes on `line`, numeric first.
///
/// Both readings are always attempted and collected independently. Since
/// only lines with a `/` read as numeric and only lines without one read as
/// textual, at most one date comes back in practice.
pub fn reformat(line: &str) -> Vec<CalendarDate> {
    [CalendarDate::from_numeric(line), CalendarDate::from_textual(line)]
        .into_iter()
        .flatten()
        .collect()
}

/// Reads one line and prints every date it yields.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<Vec<CalendarDate>, InputError> {
    let line = console.prompt("Date: ")?;
    let dates = reformat(&line);
    if dates.is_empty() {
        tracing::info!("no date recognised in {line:?}");
    }
    for date in &dates {
        console.say(date)?;
    }
    Ok(dates)
}
