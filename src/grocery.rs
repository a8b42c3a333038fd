#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{
    collections::BTreeMap,
    fmt::Display,
    io::{BufRead, Write},
    time::Duration,
};

use typed_builder::TypedBuilder;

use crate::{
    config::ConfigState,
    constants::{GROCERY_INTRO_PAUSE_MS, GROCERY_LIST_PAUSE_MS},
    error::InputError,
    prompt::Console,
};

/// Item counts keyed by lower-cased name, kept in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroceryList {
    /// Count per normalized item.
    counts: BTreeMap<String, usize>,
}

impl GroceryList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one more of `item` and returns its new count.
    pub fn add(&mut self, item: &str) -> usize {
        let count = self.counts.entry(item.to_lowercase()).or_insert(0);
        *count += 1;
        *count
    }

    /// How many times `item` was entered, ignoring case.
    pub fn count(&self, item: &str) -> usize {
        self.counts
            .get(&item.to_lowercase())
            .copied()
            .unwrap_or(0)
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns true if nothing was entered.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Items and counts in sorted order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(item, count)| (item.as_str(), *count))
    }

    /// Display lines, `count NAME`, in sorted order.
    pub fn lines(&self) -> Vec<String> {
        self.entries()
            .map(|(item, count)| format!("{count} {}", item.to_uppercase()))
            .collect()
    }
}

impl Display for GroceryList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Pauses shown while introducing the list.
#[derive(Debug, Clone, Copy, TypedBuilder)]
pub struct IntroPauses {
    /// After `Grocery list`.
    #[builder(default = Duration::from_millis(GROCERY_INTRO_PAUSE_MS))]
    title:        Duration,
    /// After `Please enter your list.`.
    #[builder(default = Duration::from_millis(GROCERY_LIST_PAUSE_MS))]
    instructions: Duration,
}

impl IntroPauses {
    /// No pauses at all.
    pub fn none() -> Self {
        Self {
            title:        Duration::ZERO,
            instructions: Duration::ZERO,
        }
    }
}

impl Default for IntroPauses {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl From<&ConfigState> for IntroPauses {
    fn from(cfg: &ConfigState) -> Self {
        Self::builder()
            .title(cfg.grocery_intro_pause())
            .instructions(cfg.grocery_list_pause())
            .build()
    }
}

/// Sleeps for `pause` unless it is zero.
fn pause(pause: Duration) {
    if !pause.is_zero() {
        std::thread::sleep(pause);
    }
}

/// Collects items until end of input, then prints the tally.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    pauses: IntroPauses,
) -> Result<GroceryList, InputError> {
    console.say("Grocery list")?;
    console.flush()?;
    pause(pauses.title);
    console.say("Please enter your list.")?;
    console.flush()?;
    pause(pauses.instructions);

    let mut list = GroceryList::new();
    let mut counter = 1;
    while let Some(item) = console.read_line(&format!("Item {counter}: "))? {
        let count = list.add(&item);
        tracing::debug!("{item:?} now counted {count} time(s)");
        counter += 1;
    }

    console.say("")?;
    tracing::info!("{} distinct item(s) entered", list.len());
    write!(console.writer(), "{list}")?;
    Ok(list)
}
