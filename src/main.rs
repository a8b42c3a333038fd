#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # drills
//! ## Introduction
//!
//! Five small interactive exercises behind one command. Each subcommand reads
//! from standard input and writes to standard output:
//!
//! - `drills fuel`: classify a fraction of a tank as `E`, `F` or a percentage.
//! - `drills date`: reformat `9/8/1636` or `September 8, 1636` as `1636-09-08`.
//! - `drills grocery`: count items until end of input (Ctrl-D).
//! - `drills roster`: enter students and scores, then print a grade report.
//! - `drills order`: order from a taqueria menu until end of input.

use anyhow::{Context, Result};
use bpaf::*;
use dotenvy::dotenv;
use drills::{config, date, fuel, grocery, order, prompt, roster};
use tracing::metadata::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// Top-level CLI commands.
#[derive(Debug, Clone)]
enum Cmd {
    /// Fuel gauge
    Fuel,
    /// Date reformatter
    Date,
    /// Grocery list
    Grocery,
    /// Grade roster, with the report format
    Roster(roster::ReportFormat),
    /// Taqueria order, optionally printing the menu first
    Order(bool),
}

/// Parse the command line arguments and return a `Cmd` enum
fn options() -> Cmd {
    /// parses the roster report format
    fn format() -> impl Parser<roster::ReportFormat> {
        long("format")
            .short('f')
            .help("Report format: text, table or json")
            .argument::<roster::ReportFormat>("FORMAT")
            .fallback(roster::ReportFormat::Text)
    }

    /// parses the flag that prints the menu before ordering
    fn show_menu() -> impl Parser<bool> {
        long("show-menu")
            .short('m')
            .help("Print the menu before taking the order")
            .switch()
    }

    let fuel = pure(Cmd::Fuel)
        .to_options()
        .command("fuel")
        .help("Read a fraction like 3/4 and show the fuel gauge");

    let date = pure(Cmd::Date)
        .to_options()
        .command("date")
        .help("Reformat a M/D/Y or `Month D, Y` date as YYYY-MM-DD");

    let grocery = pure(Cmd::Grocery)
        .to_options()
        .command("grocery")
        .help("Tally grocery items until end of input");

    let roster = construct!(Cmd::Roster(format()))
        .to_options()
        .command("roster")
        .help("Enter student scores and print a grade report");

    let order = construct!(Cmd::Order(show_menu()))
        .to_options()
        .command("order")
        .help("Order from the taqueria menu until end of input");

    let cmd = construct!([fuel, date, grocery, roster, order]);

    cmd.to_options()
        .descr("Small interactive command-line exercises")
        .version(env!("CARGO_PKG_VERSION"))
        .run()
}

fn main() -> Result<()> {
    dotenv().ok();

    let cfg = config::get();
    let fmt = fmt::layer()
        .without_time()
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);
    let filter_layer = LevelFilter::from_level(cfg.log_level());
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();

    let cmd = options();
    tracing::debug!("running {cmd:?}");

    let mut console = prompt::stdio();
    match cmd {
        Cmd::Fuel => {
            fuel::run(&mut console).context("fuel gauge did not get a valid fraction")?;
        }
        Cmd::Date => {
            date::run(&mut console).context("date reformatter did not get a date")?;
        }
        Cmd::Grocery => {
            grocery::run(&mut console, grocery::IntroPauses::from(&*cfg))
                .context("grocery list failed")?;
        }
        Cmd::Roster(format) => {
            roster::run(&mut console, format).context("roster entry was not completed")?;
        }
        Cmd::Order(show_menu) => {
            order::run(&mut console, show_menu).context("order failed")?;
        }
    };

    Ok(())
}
