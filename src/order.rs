#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::io::{BufRead, Write};

use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Panel, Style, object::Columns},
};

use crate::{constants::MENU, error::InputError, prompt::Console};

/// Upper-cases the first letter of every run of letters and lower-cases the
/// rest, so `super BURRITO` becomes `Super Burrito`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_is_letter = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if previous_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            out.push(c);
            previous_is_letter = false;
        }
    }
    out
}

/// A fixed price list.
#[derive(Debug, Clone, Copy)]
pub struct Menu {
    /// Item names in title case, with unit prices.
    items: &'static [(&'static str, f64)],
}

impl Default for Menu {
    fn default() -> Self {
        Self { items: MENU }
    }
}

/// One row of the printed menu.
#[derive(Tabled)]
struct MenuRow {
    /// Item name.
    #[tabled(rename = "Item")]
    item:  &'static str,
    /// Formatted price.
    #[tabled(rename = "Price")]
    price: String,
}

impl Menu {
    /// Looks up the price of an item, matching case-insensitively.
    pub fn price(&self, item: &str) -> Option<f64> {
        let wanted = title_case(item);
        self.items
            .iter()
            .find(|(name, _)| *name == wanted)
            .map(|(_, price)| *price)
    }

    /// Items and prices in menu order.
    pub fn items(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.items.iter().copied()
    }

    /// Renders the menu as a table.
    pub fn table(&self) -> String {
        let rows: Vec<MenuRow> = self
            .items()
            .map(|(item, price)| MenuRow {
                item,
                price: format!("${price:.2}"),
            })
            .collect();

        Table::new(&rows)
            .with(Panel::header("Menu"))
            .with(Modify::new(Columns::last()).with(Alignment::right()))
            .with(Style::modern())
            .to_string()
    }
}

/// A running order total.
#[derive(Debug, Clone, Default)]
pub struct Order {
    /// Prices to charge.
    menu:  Menu,
    /// Sum of everything ordered so far.
    total: f64,
}

impl Order {
    /// Starts an empty order against `menu`.
    pub fn new(menu: Menu) -> Self {
        Self { menu, total: 0.0 }
    }

    /// Adds `item` to the order and returns the new total, or `None` if the
    /// item is not on the menu (the total is unchanged).
    pub fn add(&mut self, item: &str) -> Option<f64> {
        let price = self.menu.price(item)?;
        self.total += price;
        Some(self.total)
    }

    /// Total so far.
    pub fn total(&self) -> f64 {
        self.total
    }
}

/// Takes orders until end of input, printing the total after each hit.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    show_menu: bool,
) -> Result<Order, InputError> {
    let mut order = Order::default();
    if show_menu {
        console.say(order.menu.table())?;
    }

    while let Some(line) = console.read_line("What would you like to order? ")? {
        match order.add(&line) {
            Some(total) => console.say(format!("${total:.2}"))?,
            None => tracing::debug!("{line:?} is not on the menu"),
        }
    }

    console.say("\nThank you for your order :)")?;
    tracing::info!("order closed at ${:.2}", order.total());
    Ok(order)
}
