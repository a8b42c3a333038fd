#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Percentage at or below which the fuel gauge reads `E`.
pub const FUEL_EMPTY_PERCENT: f64 = 1.0;

/// Percentage at or above which the fuel gauge reads `F`.
pub const FUEL_FULL_PERCENT: f64 = 99.0;

/// Month names in calendar order; index + 1 is the month number.
pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Taqueria menu: item name (title case) and unit price in dollars.
pub const MENU: &[(&str, f64)] = &[
    ("Baja Taco", 4.25),
    ("Burrito", 7.50),
    ("Bowl", 8.50),
    ("Nachos", 11.00),
    ("Quesadilla", 8.50),
    ("Super Burrito", 8.50),
    ("Super Quesadilla", 9.50),
    ("Taco", 3.00),
    ("Tortilla Salad", 8.00),
];

/// Smallest class the roster accepts.
pub const MIN_STUDENTS: i64 = 1;

/// Largest class the roster accepts.
pub const MAX_STUDENTS: i64 = 10;

/// Number of test scores recorded per student.
pub const SCORES_PER_STUDENT: usize = 3;

/// Lowest valid test score.
pub const MIN_SCORE: i64 = 0;

/// Highest valid test score.
pub const MAX_SCORE: i64 = 100;

/// Width of the `=` and `-` rules in the roster output.
pub const RULE_WIDTH: usize = 50;

/// Default pause after the grocery list title, in milliseconds.
pub const GROCERY_INTRO_PAUSE_MS: u64 = 1000;

/// Default pause after the grocery list instructions, in milliseconds.
pub const GROCERY_LIST_PAUSE_MS: u64 = 2000;
